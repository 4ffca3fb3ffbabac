//! Trait seam between the uniform engine and the distribution samplers.
//!
//! Every sampler in `simrand_distributions` is generic over [`UniformSource`],
//! so the engine can be swapped for a scripted source in tests.

use tracing::trace;

use crate::types::error::{RandomError, Result};

/// Divisor mapping `draw + 1` onto `(0, 1]`. Dividing by exactly 2^32 (not
/// 2^32 - 1) keeps the lower bound unreachable.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// A source of uniformly distributed 32-bit words.
///
/// Implementors supply [`draw_u32`](UniformSource::draw_u32); the open-interval
/// variates are derived from it.
///
/// # Examples
///
/// ```rust
/// use simrand_core::traits::UniformSource;
///
/// /// Replays a fixed script of words.
/// struct Scripted(Vec<u32>);
///
/// impl UniformSource for Scripted {
///     fn draw_u32(&mut self) -> u32 {
///         self.0.remove(0)
///     }
/// }
///
/// let mut source = Scripted(vec![0, u32::MAX / 2]);
/// assert_eq!(source.uniform(), 1.0 / 4_294_967_296.0);
/// assert_eq!(source.uniform(), 0.5);
/// ```
pub trait UniformSource {
    /// Advances the source and returns the next 32-bit word.
    fn draw_u32(&mut self) -> u32;

    /// Draws a uniform variate on the open interval (0, 1).
    #[inline]
    fn uniform(&mut self) -> f64 {
        draw_open(self, 0.0, 1.0)
    }

    /// Draws a uniform variate on the open interval `(lower, upper)`.
    ///
    /// The result is `((draw + 1) * (upper - lower) / 2^32) + lower`. In the
    /// rare case that rounding (or the top draw `2^32 - 1`) lands exactly on a
    /// bound, the variate is redrawn, so the result is never equal to either
    /// endpoint.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidParameter` if `upper <= lower`, if the
    /// interval width is not finite, or if no `f64` lies strictly between the
    /// bounds. No draw is made in that case.
    fn uniform_between(&mut self, lower: f64, upper: f64) -> Result<f64> {
        validate_interval(lower, upper)?;
        Ok(draw_open(self, lower, upper))
    }
}

/// Checks that `(lower, upper)` is a non-empty, finite open interval.
pub fn validate_interval(lower: f64, upper: f64) -> Result<()> {
    if !(lower < upper) {
        return Err(RandomError::invalid_parameter(
            "upper",
            "Upper bound must be greater than lower bound.",
        ));
    }
    if !(upper - lower).is_finite() {
        return Err(RandomError::invalid_parameter(
            "upper",
            "Interval width must be finite",
        ));
    }
    let midpoint = lower + (upper - lower) / 2.0;
    if !(midpoint > lower && midpoint < upper) {
        return Err(RandomError::invalid_parameter(
            "upper",
            "Interval contains no representable interior point",
        ));
    }
    Ok(())
}

fn draw_open<S: UniformSource + ?Sized>(source: &mut S, lower: f64, upper: f64) -> f64 {
    let width = upper - lower;
    loop {
        let word = source.draw_u32();
        let value = ((f64::from(word) + 1.0) * width / TWO_POW_32) + lower;
        if value > lower && value < upper {
            return value;
        }
        trace!(word, lower, upper, "uniform draw landed on a bound; redrawing");
    }
}
