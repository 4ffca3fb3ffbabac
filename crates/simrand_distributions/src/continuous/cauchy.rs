//! Cauchy sampler.

use std::f64::consts::PI;

use simrand_core::{Result, UniformSource};

use crate::validate;

/// Draws from a Cauchy distribution: `median + scale * tan(π (u - 0.5))`.
///
/// # Errors
///
/// Returns `RandomError::InvalidParameter` if `median` is not finite or `scale` is
/// not a finite positive number.
pub fn cauchy<R: UniformSource + ?Sized>(rng: &mut R, median: f64, scale: f64) -> Result<f64> {
    validate::finite("median", median)?;
    validate::positive("scale", scale, "Scale must be positive")?;
    Ok(median + scale * (PI * (rng.uniform() - 0.5)).tan())
}
