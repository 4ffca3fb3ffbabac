//! Normal and log-normal samplers.

use std::f64::consts::PI;

use simrand_core::{Result, UniformSource};

use crate::validate;

/// Draws a standard normal variate via the Box–Muller transform.
///
/// Two uniforms `u1, u2` are consumed per call and only the sine branch
/// `sqrt(-2 ln u1) * sin(2π u2)` is returned; the cosine companion is
/// discarded rather than cached.
///
/// # Examples
///
/// ```rust
/// use simrand_core::MwcEngine;
/// use simrand_distributions::continuous::standard_normal;
///
/// let mut engine = MwcEngine::new();
/// assert!(standard_normal(&mut engine).is_finite());
/// ```
#[inline]
pub fn standard_normal<R: UniformSource + ?Sized>(rng: &mut R) -> f64 {
    let u1 = rng.uniform();
    let u2 = rng.uniform();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).sin()
}

/// Draws from a normal distribution with the given mean and standard deviation.
///
/// # Errors
///
/// Returns `RandomError::InvalidParameter` if `mean` is not finite or `sd` is
/// not a finite positive number.
///
/// # Examples
///
/// ```rust
/// use simrand_core::MwcEngine;
/// use simrand_distributions::continuous::normal;
///
/// let mut engine = MwcEngine::new();
/// let x = normal(&mut engine, 10.0, 2.0).unwrap();
/// assert!(x.is_finite());
///
/// assert!(normal(&mut engine, 0.0, 0.0).is_err());
/// ```
pub fn normal<R: UniformSource + ?Sized>(rng: &mut R, mean: f64, sd: f64) -> Result<f64> {
    validate::finite("mean", mean)?;
    validate::positive("sd", sd, "Standard deviation must be strictly positive")?;
    Ok(mean + sd * standard_normal(rng))
}

/// Draws from a log-normal distribution: `exp(normal(mu, sigma))`.
///
/// # Errors
///
/// Returns `RandomError::InvalidParameter` if `mu` is not finite or `sigma` is
/// not a finite positive number.
pub fn log_normal<R: UniformSource + ?Sized>(rng: &mut R, mu: f64, sigma: f64) -> Result<f64> {
    validate::finite("mu", mu)?;
    validate::positive("sigma", sigma, "Sigma must be strictly positive")?;
    Ok((mu + sigma * standard_normal(rng)).exp())
}
