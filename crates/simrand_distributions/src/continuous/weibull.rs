//! Weibull sampler.

use simrand_core::{Result, UniformSource};

use crate::validate;

/// Draws from a Weibull distribution: `scale * (-ln u)^(1 / shape)`.
///
/// # Errors
///
/// Returns `RandomError::InvalidParameter` unless both `shape` and `scale`
/// are strictly positive.
///
/// # Examples
///
/// ```rust
/// use simrand_core::MwcEngine;
/// use simrand_distributions::continuous::weibull;
///
/// let mut engine = MwcEngine::new();
/// let x = weibull(&mut engine, 5.0, 2.3).unwrap();
/// assert!(x.is_finite() && x > 0.0);
/// ```
pub fn weibull<R: UniformSource + ?Sized>(rng: &mut R, shape: f64, scale: f64) -> Result<f64> {
    validate::positive("shape", shape, "Shape and scale must be positive")?;
    validate::positive("scale", scale, "Shape and scale must be positive")?;
    Ok(scale * (-rng.uniform().ln()).powf(1.0 / shape))
}
