//! # Uniform Engine
//!
//! This module provides the multiply-with-carry (MWC) generator that every
//! sampler in the workspace draws from, together with its seeding protocol.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: Two engines seeded with the same `SeedInput::TwoValues`
//!   produce identical streams
//! - **Exclusive ownership**: One engine owns exactly one pair of state words;
//!   there is no global instance and no internal locking
//! - **Fail before mutate**: Seed validation completes before either state word
//!   is written
//!
//! ## Module Structure
//!
//! - [`mwc`]: The `MwcEngine` generator and its persisted `GeneratorState`
//! - [`seed`]: The `SeedInput` variant type and its resolution into state words
//!
//! ## Usage Example
//!
//! ```rust
//! use simrand_core::engine::{MwcEngine, SeedInput};
//!
//! let mut a = MwcEngine::new();
//! let mut b = MwcEngine::new();
//! a.set_seed(SeedInput::TwoValues(1234.0, 5678.0)).unwrap();
//! b.set_seed(SeedInput::TwoValues(1234.0, 5678.0)).unwrap();
//!
//! assert_eq!(a.next_word(), b.next_word());
//! ```

pub mod mwc;
pub mod seed;

// Public re-exports
pub use mwc::{GeneratorState, MwcEngine, DEFAULT_W, DEFAULT_Z};
pub use seed::SeedInput;

#[cfg(test)]
mod tests;
