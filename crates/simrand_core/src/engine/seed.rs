//! Seed input variants and their resolution into state words.
//!
//! | Variant        | `w` word                  | `z` word            |
//! |----------------|---------------------------|---------------------|
//! | `TwoValues`    | first value               | second value        |
//! | `SingleValue`  | unchanged                 | the value           |
//! | `Timestamp`    | `micros >> 16`            | `micros mod 2^32`   |
//! | `Now`          | as `Timestamp` at the current instant          |
//!
//! Numeric values are truncated towards zero and reduced modulo 2^32 with a
//! non-negative remainder.

use chrono::{DateTime, Utc};
use tracing::warn;

use super::mwc::{GeneratorState, DEFAULT_W, DEFAULT_Z};
use crate::types::error::{RandomError, Result};

const WORD_MODULUS: i128 = 1 << 32;

/// Seed input accepted by [`MwcEngine::set_seed`](super::MwcEngine::set_seed).
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use simrand_core::engine::SeedInput;
///
/// let pair: SeedInput = (12.0, 34.0).into();
/// assert_eq!(pair, SeedInput::TwoValues(12.0, 34.0));
///
/// let single: SeedInput = 99.0.into();
/// assert_eq!(single, SeedInput::SingleValue(99.0));
///
/// let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// assert_eq!(SeedInput::from(at), SeedInput::Timestamp(at));
///
/// assert_eq!(SeedInput::default(), SeedInput::Now);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SeedInput {
    /// Assigns `w` and `z` directly.
    TwoValues(f64, f64),
    /// Replaces only the `z` word; `w` keeps its prior value.
    SingleValue(f64),
    /// Derives both words from a microsecond-resolution timestamp.
    Timestamp(DateTime<Utc>),
    /// Derives both words from the current time.
    #[default]
    Now,
}

impl SeedInput {
    /// Short variant label used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            SeedInput::TwoValues(..) => "two_values",
            SeedInput::SingleValue(_) => "single_value",
            SeedInput::Timestamp(_) => "timestamp",
            SeedInput::Now => "now",
        }
    }

    /// Builds a seed from zero, one or two numeric values.
    ///
    /// An empty slice maps to [`SeedInput::Now`].
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidSeedArgument` for more than two values.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        match *values {
            [] => Ok(SeedInput::Now),
            [z] => Ok(SeedInput::SingleValue(z)),
            [w, z] => Ok(SeedInput::TwoValues(w, z)),
            _ => Err(RandomError::invalid_seed(format!(
                "Expected at most two seed values, got {}",
                values.len()
            ))),
        }
    }
}

impl From<(f64, f64)> for SeedInput {
    fn from((w, z): (f64, f64)) -> Self {
        SeedInput::TwoValues(w, z)
    }
}

impl From<(u32, u32)> for SeedInput {
    fn from((w, z): (u32, u32)) -> Self {
        SeedInput::TwoValues(f64::from(w), f64::from(z))
    }
}

impl From<f64> for SeedInput {
    fn from(z: f64) -> Self {
        SeedInput::SingleValue(z)
    }
}

impl From<DateTime<Utc>> for SeedInput {
    fn from(at: DateTime<Utc>) -> Self {
        SeedInput::Timestamp(at)
    }
}

/// Resolves a seed into the state words it produces from `current`.
pub(crate) fn resolve(seed: SeedInput, current: GeneratorState) -> Result<GeneratorState> {
    match seed {
        SeedInput::TwoValues(w, z) => {
            let w = seed_word(w)?;
            let z = seed_word(z)?;
            Ok(GeneratorState { w, z })
        }
        SeedInput::SingleValue(z) => Ok(GeneratorState {
            w: current.w,
            z: seed_word(z)?,
        }),
        SeedInput::Timestamp(at) => Ok(temporal_state(at)),
        SeedInput::Now => Ok(temporal_state(Utc::now())),
    }
}

/// Validates a numeric seed value and reduces it to a state word.
fn seed_word(value: f64) -> Result<u32> {
    if !value.is_finite() {
        return Err(RandomError::invalid_seed(format!(
            "Seeds must be finite numbers, got {}",
            value
        )));
    }
    if value == 0.0 {
        return Err(RandomError::invalid_seed("Seeds must be non-zero"));
    }

    let word = reduce(value.trunc() as i128);
    if word == 0 {
        return Err(RandomError::invalid_seed(format!(
            "Seed {} reduces to a zero state word",
            value
        )));
    }
    Ok(word)
}

fn temporal_state(at: DateTime<Utc>) -> GeneratorState {
    let micros = i128::from(at.timestamp_micros());

    let mut w = reduce(micros >> 16);
    let mut z = reduce(micros);

    if w == 0 {
        warn!(timestamp = %at, "timestamp seed produced a zero w word; using default");
        w = DEFAULT_W;
    }
    if z == 0 {
        warn!(timestamp = %at, "timestamp seed produced a zero z word; using default");
        z = DEFAULT_Z;
    }

    GeneratorState { w, z }
}

#[inline]
fn reduce(value: i128) -> u32 {
    value.rem_euclid(WORD_MODULUS) as u32
}
