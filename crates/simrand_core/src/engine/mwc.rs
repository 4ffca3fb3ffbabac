//! Multiply-with-carry generator with two 32-bit state words.
//!
//! The recurrence is George Marsaglia's two-lag MWC construction:
//!
//! ```text
//! z <- 36969 * (z & 0xFFFF) + (z >> 16)
//! w <- 18000 * (w & 0xFFFF) + (w >> 16)
//! x  = ((z << 16) + (w & 0xFFFF)) mod 2^32
//! ```

use rand::RngCore;
use tracing::debug;

use super::seed::{self, SeedInput};
use crate::traits::UniformSource;
use crate::types::error::{RandomError, Result};

/// Default `w` state word applied at construction.
pub const DEFAULT_W: u32 = 521_288_629;

/// Default `z` state word applied at construction.
pub const DEFAULT_Z: u32 = 362_436_069;

const LOW_16: u64 = 0xFFFF;
const WORD_MODULUS: u64 = 1 << 32;

/// The two state words of an [`MwcEngine`].
///
/// This is the only state the generator persists. Neither word may be zero:
/// a zero word is a fixed point of its recurrence.
///
/// # Examples
///
/// ```rust
/// use simrand_core::engine::{GeneratorState, MwcEngine};
///
/// let engine = MwcEngine::new();
/// let state: GeneratorState = engine.state();
///
/// let restored = MwcEngine::from_state(state).unwrap();
/// assert_eq!(restored.state(), state);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorState {
    /// The `w` word (multiplier 18000).
    pub w: u32,
    /// The `z` word (multiplier 36969).
    pub z: u32,
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self {
            w: DEFAULT_W,
            z: DEFAULT_Z,
        }
    }
}

/// Multiply-with-carry uniform engine.
///
/// Owns a [`GeneratorState`] and advances it on every draw. Instances are
/// cheap to clone; a clone continues the same stream independently.
///
/// # Examples
///
/// ```rust
/// use simrand_core::engine::MwcEngine;
/// use simrand_core::traits::UniformSource;
///
/// let mut engine = MwcEngine::new();
/// let u = engine.uniform();
/// assert!(u > 0.0 && u < 1.0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MwcEngine {
    w: u32,
    z: u32,
}

impl MwcEngine {
    /// Creates an engine initialised with the default state words.
    #[inline]
    pub fn new() -> Self {
        Self {
            w: DEFAULT_W,
            z: DEFAULT_Z,
        }
    }

    /// Restores an engine from previously captured state words.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidSeedArgument` if either word is zero.
    pub fn from_state(state: GeneratorState) -> Result<Self> {
        if state.w == 0 || state.z == 0 {
            return Err(RandomError::invalid_seed(
                "State words must be non-zero",
            ));
        }
        Ok(Self {
            w: state.w,
            z: state.z,
        })
    }

    /// Returns the current state words.
    #[inline]
    pub fn state(&self) -> GeneratorState {
        GeneratorState {
            w: self.w,
            z: self.z,
        }
    }

    /// Reseeds the engine.
    ///
    /// See [`SeedInput`] for the accepted shapes. Validation happens before
    /// either word is written, so a rejected seed leaves the state untouched.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidSeedArgument` for zero, non-finite, or
    /// degenerate seed values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simrand_core::engine::{MwcEngine, SeedInput};
    ///
    /// let mut engine = MwcEngine::new();
    /// engine.set_seed(SeedInput::TwoValues(11.0, 22.0)).unwrap();
    /// assert_eq!(engine.state().w, 11);
    /// assert_eq!(engine.state().z, 22);
    ///
    /// assert!(engine.set_seed(SeedInput::SingleValue(0.0)).is_err());
    /// assert_eq!(engine.state().z, 22);
    /// ```
    pub fn set_seed(&mut self, seed: SeedInput) -> Result<()> {
        let state = seed::resolve(seed, self.state())?;
        self.w = state.w;
        self.z = state.z;
        debug!(
            seed = seed.kind(),
            w = state.w,
            z = state.z,
            "generator reseeded"
        );
        Ok(())
    }

    /// Advances both state words and extracts the next 32-bit draw.
    ///
    /// Intermediate products are formed in 64 bits. After each step both
    /// words are below `36969 * 0xFFFF + 0xFFFF < 2^32`, so narrowing back
    /// to `u32` is lossless.
    #[inline]
    pub fn next_word(&mut self) -> u32 {
        let z = u64::from(self.z);
        let w = u64::from(self.w);

        let z = 36969 * (z & LOW_16) + (z >> 16);
        let w = 18000 * (w & LOW_16) + (w >> 16);

        self.z = z as u32;
        self.w = w as u32;

        (((z << 16) + (w & LOW_16)) % WORD_MODULUS) as u32
    }
}

impl Default for MwcEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformSource for MwcEngine {
    #[inline]
    fn draw_u32(&mut self) -> u32 {
        self.next_word()
    }
}

impl RngCore for MwcEngine {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    /// Two consecutive draws, high word first.
    #[inline]
    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_word());
        let low = u64::from(self.next_word());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
