//! Laplace sampler.

use simrand_core::{Result, UniformSource};

use crate::validate;

/// Draws from a Laplace distribution centred on `mean`.
///
/// A sign is taken from `u1 ~ U(-0.5, 0.5)` and a magnitude from
/// `u2 ~ U(0, 1)`: `mean + sign(u1) * scale * ln(1 - u2)`. A zero `u1`
/// counts as positive.
///
/// # Errors
///
/// Returns `RandomError::InvalidParameter` if `mean` is not finite or `scale` is
/// not a finite positive number.
pub fn laplace<R: UniformSource + ?Sized>(rng: &mut R, mean: f64, scale: f64) -> Result<f64> {
    validate::finite("mean", mean)?;
    validate::positive("scale", scale, "Scale must be positive")?;

    let u1 = rng.uniform_between(-0.5, 0.5)?;
    let u2 = rng.uniform();
    Ok(mean + u1.signum() * scale * (1.0 - u2).ln())
}
