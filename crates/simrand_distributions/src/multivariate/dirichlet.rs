//! Dirichlet sampler.
//!
//! One unit-scale gamma variate is drawn per concentration parameter and the
//! vector is normalised by its sum. The draws are kept as logs and shifted by
//! their maximum before exponentiating, so tiny concentrations cannot turn
//! the normalisation into `0 / 0`.

use simrand_core::{RandomError, Result, UniformSource};

use crate::continuous::ln_standard_gamma;
use crate::validate;

/// Draws a Dirichlet sample with concentration parameters `alpha`.
///
/// The result has the same length as `alpha`, every component lies in
/// `[0, 1]`, and the components sum to one up to rounding.
///
/// # Errors
///
/// Returns `RandomError::InvalidParameter` if `alpha` is empty or any
/// component is not strictly positive. All components are checked before the
/// first draw.
///
/// # Examples
///
/// ```rust
/// use simrand_core::MwcEngine;
/// use simrand_distributions::multivariate::dirichlet;
///
/// let mut engine = MwcEngine::new();
/// let p = dirichlet(&mut engine, &[1.0, 1.0, 1.0]).unwrap();
///
/// assert_eq!(p.len(), 3);
/// assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-12);
/// ```
pub fn dirichlet<R: UniformSource + ?Sized>(rng: &mut R, alpha: &[f64]) -> Result<Vec<f64>> {
    validate_alpha(alpha)?;

    let mut sample: Vec<f64> = alpha.iter().map(|&a| ln_standard_gamma(rng, a)).collect();
    let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    for g in sample.iter_mut() {
        *g = (*g - max).exp();
    }
    let sum: f64 = sample.iter().sum();
    for g in sample.iter_mut() {
        *g /= sum;
    }
    Ok(sample)
}

pub(crate) fn validate_alpha(alpha: &[f64]) -> Result<()> {
    if alpha.is_empty() {
        return Err(RandomError::invalid_parameter(
            "alpha",
            "At least one concentration parameter is required",
        ));
    }
    for &a in alpha {
        validate::positive("alpha", a, "Concentration parameters must be strictly positive")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use simrand_core::MwcEngine;

    #[test]
    fn test_dirichlet_sums_to_one() {
        let mut engine = MwcEngine::new();
        for _ in 0..1000 {
            let p = dirichlet(&mut engine, &[1.0, 1.0, 1.0]).unwrap();
            assert_eq!(p.len(), 3);
            assert_abs_diff_eq!(p.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
            assert!(p.iter().all(|&x| x > 0.0 && x < 1.0));
        }
    }

    #[test]
    fn test_dirichlet_single_component() {
        let mut engine = MwcEngine::new();
        let p = dirichlet(&mut engine, &[2.5]).unwrap();
        assert_eq!(p, vec![1.0]);
    }

    #[test]
    fn test_dirichlet_small_concentrations() {
        let mut engine = MwcEngine::new();
        for _ in 0..1000 {
            let p = dirichlet(&mut engine, &[0.3, 0.7]).unwrap();
            assert_abs_diff_eq!(p.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_dirichlet_tiny_concentrations_not_nan() {
        let mut engine = MwcEngine::new();
        for _ in 0..10_000 {
            let p = dirichlet(&mut engine, &[0.001, 0.001]).unwrap();
            assert!(p.iter().all(|x| !x.is_nan()), "dirichlet drew {:?}", p);
            assert!(p.iter().all(|&x| (0.0..=1.0).contains(&x)));
            assert_abs_diff_eq!(p.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_dirichlet_validates_before_drawing() {
        let mut engine = MwcEngine::new();
        assert!(dirichlet(&mut engine, &[]).is_err());
        assert!(dirichlet(&mut engine, &[1.0, 0.0, 1.0]).is_err());
        assert!(dirichlet(&mut engine, &[1.0, 1.0, -2.0]).is_err());
        assert_eq!(engine, MwcEngine::new());
    }
}
