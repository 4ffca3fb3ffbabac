//! The Γ function.
//!
//! Evaluated via the 24-term Taylor series of `1 / Γ(z)` about zero (Zhang &
//! Jin, "Computation of Special Functions", 1996), applied to the fractional
//! part and lifted with the recurrence `Γ(x) = (x - 1)(x - 2)…(x - m) Γ(z)`.
//! Negative arguments use the reflection formula.

use std::f64::consts::PI;

/// Returned for arguments whose Γ value overflows `f64`.
pub const GAMMA_OVERFLOW: f64 = 1e308;

/// Largest argument evaluated before saturating at [`GAMMA_OVERFLOW`].
const MAX_ARGUMENT: f64 = 171.0;

/// Leading (highest-degree) series coefficient.
const SERIES_LEADING: f64 = 0.14e-14;

/// Remaining coefficients of `1 / Γ(z)`, highest degree first.
const SERIES: [f64; 24] = [
    -5.4e-15,
    -2.06e-14,
    5.1e-13,
    -3.6968e-12,
    7.7823e-12,
    1.043427e-10,
    -1.1812746e-09,
    5.0020075e-09,
    6.116095e-09,
    -2.056338417e-07,
    1.133027232e-06,
    -1.2504934821e-06,
    -2.01348547807e-05,
    0.0001280502823882,
    -0.0002152416741149,
    -0.0011651675918591,
    0.007218943246663,
    -0.009621971527877,
    -0.0421977345555443,
    0.1665386113822915,
    -0.0420026350340952,
    -0.6558780715202538,
    0.5772156649015329,
    1.0,
];

/// Evaluates Γ(`x`).
///
/// - Positive integers return `(x - 1)!` exactly.
/// - Zero and negative integers are poles and return `None`, as does NaN.
/// - Arguments above 171 saturate at [`GAMMA_OVERFLOW`].
///
/// # Examples
/// ```
/// use simrand_core::math::gamma_function;
///
/// assert_eq!(gamma_function(5.0), Some(24.0));
/// assert!((gamma_function(0.5).unwrap() - std::f64::consts::PI.sqrt()).abs() < 1e-14);
/// assert_eq!(gamma_function(-2.0), None);
/// ```
pub fn gamma_function(x: f64) -> Option<f64> {
    if x.is_nan() {
        return None;
    }
    if x > MAX_ARGUMENT {
        return Some(GAMMA_OVERFLOW);
    }

    if x == x.trunc() {
        if x <= 0.0 {
            return None;
        }
        let n = x as u32;
        return Some((1..n).fold(1.0, |acc, k| acc * f64::from(k)));
    }

    let ax = x.abs();
    let whole = ax.trunc() as u32;
    let z = if ax > 1.0 { ax - ax.trunc() } else { x };

    let gr = SERIES.iter().fold(SERIES_LEADING, |sum, &g| sum * z + g);
    let r = if ax > 1.0 {
        (1..=whole).fold(1.0, |prod, i| prod * (ax - f64::from(i)))
    } else {
        1.0
    };

    if x < 0.0 && ax > 1.0 {
        Some(-PI * gr * z / (x * r * (PI * x).sin()))
    } else {
        Some(r / (gr * z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_integer_factorials() {
        assert_eq!(gamma_function(1.0), Some(1.0));
        assert_eq!(gamma_function(2.0), Some(1.0));
        assert_eq!(gamma_function(6.0), Some(120.0));
        assert_eq!(gamma_function(11.0), Some(3_628_800.0));
    }

    #[test]
    fn test_poles() {
        assert_eq!(gamma_function(0.0), None);
        assert_eq!(gamma_function(-1.0), None);
        assert_eq!(gamma_function(-7.0), None);
        assert_eq!(gamma_function(f64::NAN), None);
    }

    #[test]
    fn test_half_integers() {
        let sqrt_pi = PI.sqrt();
        assert_relative_eq!(gamma_function(0.5).unwrap(), sqrt_pi, max_relative = 1e-13);
        assert_relative_eq!(gamma_function(1.5).unwrap(), sqrt_pi / 2.0, max_relative = 1e-13);
        assert_relative_eq!(
            gamma_function(2.5).unwrap(),
            0.75 * sqrt_pi,
            max_relative = 1e-13
        );
    }

    #[test]
    fn test_negative_arguments() {
        let sqrt_pi = PI.sqrt();
        assert_relative_eq!(
            gamma_function(-0.5).unwrap(),
            -2.0 * sqrt_pi,
            max_relative = 1e-13
        );
        assert_relative_eq!(
            gamma_function(-1.5).unwrap(),
            4.0 * sqrt_pi / 3.0,
            max_relative = 1e-13
        );
    }

    #[test]
    fn test_fractional_values() {
        assert_relative_eq!(
            gamma_function(1.2).unwrap(),
            0.918_168_742_399_760_4,
            max_relative = 1e-13
        );
        assert_relative_eq!(
            gamma_function(0.1).unwrap(),
            9.513_507_698_668_732,
            max_relative = 1e-13
        );
    }

    #[test]
    fn test_overflow_saturates() {
        assert_eq!(gamma_function(171.5), Some(GAMMA_OVERFLOW));
        assert_eq!(gamma_function(f64::INFINITY), Some(GAMMA_OVERFLOW));
    }
}
