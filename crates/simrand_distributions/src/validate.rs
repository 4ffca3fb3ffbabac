//! Parameter checks shared by the samplers.
//!
//! Every check also rejects NaN and infinities: an infinite shape would
//! stall the gamma squeeze, and infinite locations or bounds only produce
//! non-finite variates.

use simrand_core::{RandomError, Result};

/// Requires `0 < value < inf`.
#[inline]
pub(crate) fn positive(name: &'static str, value: f64, reason: &str) -> Result<()> {
    finite(name, value)?;
    if value <= 0.0 {
        return Err(RandomError::invalid_parameter(name, reason));
    }
    Ok(())
}

/// Requires a finite value.
#[inline]
pub(crate) fn finite(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(RandomError::invalid_parameter(
            name,
            format!("Must be a finite number, got {}", value),
        ));
    }
    Ok(())
}

/// Requires finite bounds with `lower < upper`.
#[inline]
pub(crate) fn ordered(lower: f64, upper: f64) -> Result<()> {
    finite("lower", lower)?;
    finite("upper", upper)?;
    if lower >= upper {
        return Err(RandomError::invalid_parameter(
            "upper",
            "Upper bound must be greater than lower bound.",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        assert!(positive("scale", 0.1, "must be positive").is_ok());
        assert!(positive("scale", 0.0, "must be positive").is_err());
        assert!(positive("scale", -1.0, "must be positive").is_err());
        assert!(positive("scale", f64::NAN, "must be positive").is_err());
        assert!(positive("scale", f64::INFINITY, "must be positive").is_err());
        assert!(positive("scale", f64::MAX, "must be positive").is_ok());
    }

    #[test]
    fn test_finite() {
        assert!(finite("mean", -1e300).is_ok());
        assert!(finite("mean", f64::NEG_INFINITY).is_err());

        let err = finite("mean", f64::NAN).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'mean': Must be a finite number, got NaN"
        );
    }

    #[test]
    fn test_ordered() {
        assert!(ordered(0.0, 1.0).is_ok());
        assert!(ordered(1.0, 1.0).is_err());
        assert!(ordered(f64::NAN, 1.0).is_err());
        assert!(ordered(f64::NEG_INFINITY, 1.0).is_err());
        assert!(ordered(0.0, f64::INFINITY).is_err());
    }
}
