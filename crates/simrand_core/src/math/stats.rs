//! Sample moments over slices.
//!
//! All functions are generic over `T: Float` so they serve both `f32` and
//! `f64` sample buffers.

use num_traits::Float;

/// Arithmetic mean of `samples`.
///
/// Returns `None` for an empty slice.
///
/// # Examples
/// ```
/// use simrand_core::math::mean;
///
/// assert_eq!(mean(&[1.0_f64, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean::<f64>(&[]), None);
/// ```
pub fn mean<T: Float>(samples: &[T]) -> Option<T> {
    if samples.is_empty() {
        return None;
    }
    let n = T::from(samples.len())?;
    let sum = samples.iter().fold(T::zero(), |acc, &x| acc + x);
    Some(sum / n)
}

/// Sample standard deviation of `samples` (`n - 1` denominator).
///
/// Returns `None` for fewer than two samples.
///
/// # Examples
/// ```
/// use simrand_core::math::standard_deviation;
///
/// let sd = standard_deviation(&[2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert!((sd - 2.138_089_935).abs() < 1e-9);
/// assert_eq!(standard_deviation(&[1.0_f64]), None);
/// ```
pub fn standard_deviation<T: Float>(samples: &[T]) -> Option<T> {
    if samples.len() < 2 {
        return None;
    }
    let m = mean(samples)?;
    let dof = T::from(samples.len() - 1)?;
    let sum_sq = samples
        .iter()
        .fold(T::zero(), |acc, &x| acc + (x - m) * (x - m));
    Some((sum_sq / dof).sqrt())
}
