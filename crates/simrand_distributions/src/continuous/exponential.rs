//! Exponential sampler.

use simrand_core::{Result, UniformSource};

use crate::validate;

/// Draws from an exponential distribution with the given mean.
///
/// Inverse CDF: `-mean * ln(u)`.
///
/// # Errors
///
/// Returns `RandomError::InvalidParameter` if `mean <= 0`.
///
/// # Examples
///
/// ```rust
/// use simrand_core::MwcEngine;
/// use simrand_distributions::continuous::exponential;
///
/// let mut engine = MwcEngine::new();
/// assert!(exponential(&mut engine, 1.0).unwrap() > 0.0);
/// ```
pub fn exponential<R: UniformSource + ?Sized>(rng: &mut R, mean: f64) -> Result<f64> {
    validate::positive("mean", mean, "Mean must be strictly positive")?;
    Ok(-mean * rng.uniform().ln())
}
