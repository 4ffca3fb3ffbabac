//! Triangular sampler.

use simrand_core::{RandomError, Result, UniformSource};

use crate::validate;

/// Draws from a triangular distribution on `[lower, upper]` peaking at `mode`.
///
/// Inverse CDF with branch point `f_c = (mode - lower) / (upper - lower)`.
///
/// # Errors
///
/// Returns `RandomError::InvalidParameter` unless `lower < upper` and
/// `lower <= mode <= upper`.
///
/// # Examples
///
/// ```rust
/// use simrand_core::MwcEngine;
/// use simrand_distributions::continuous::triangular;
///
/// let mut engine = MwcEngine::new();
/// let x = triangular(&mut engine, 0.0, 1.0, 1.0).unwrap();
/// assert!(x > 0.0 && x < 1.0);
///
/// assert!(triangular(&mut engine, 0.0, 2.0, 1.0).is_err());
/// ```
pub fn triangular<R: UniformSource + ?Sized>(
    rng: &mut R,
    lower: f64,
    mode: f64,
    upper: f64,
) -> Result<f64> {
    validate_triangular(lower, mode, upper)?;

    let width = upper - lower;
    let f_c = (mode - lower) / width;
    let p = rng.uniform();

    if p < f_c {
        Ok(lower + (p * width * (mode - lower)).sqrt())
    } else {
        Ok(upper - ((1.0 - p) * width * (upper - mode)).sqrt())
    }
}

pub(crate) fn validate_triangular(lower: f64, mode: f64, upper: f64) -> Result<()> {
    validate::ordered(lower, upper)?;
    if !(lower <= mode && mode <= upper) {
        return Err(RandomError::invalid_parameter(
            "mode",
            "Mode must lie between the upper and lower limits",
        ));
    }
    Ok(())
}
