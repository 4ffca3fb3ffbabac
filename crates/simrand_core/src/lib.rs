//! # simrand_core: Uniform Engine for the simrand Workspace
//!
//! ## Layer 1 (Foundation) Role
//!
//! simrand_core is the bottom layer of the workspace, providing:
//! - The multiply-with-carry uniform engine (`engine::MwcEngine`)
//! - Seed input variants and clock-derived seeding (`engine::SeedInput`)
//! - The `UniformSource` trait consumed by every distribution sampler (`traits`)
//! - Error types: `RandomError` (`types::error`)
//! - Auxiliary numerics: sample moments and the Γ function (`math`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other simrand_* crates, with minimal external dependencies:
//! - num-traits: Generic floating-point helpers
//! - chrono: Timestamp-derived seeding
//! - rand: `RngCore` interoperability for the engine
//! - serde: Serialisation of `GeneratorState` (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use simrand_core::engine::{MwcEngine, SeedInput};
//! use simrand_core::traits::UniformSource;
//!
//! let mut engine = MwcEngine::new();
//! engine.set_seed(SeedInput::TwoValues(42.0, 7.0)).unwrap();
//!
//! let u = engine.uniform();
//! assert!(u > 0.0 && u < 1.0);
//!
//! let x = engine.uniform_between(-2.0, 3.0).unwrap();
//! assert!(x > -2.0 && x < 3.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `GeneratorState`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod engine;
pub mod math;
pub mod traits;
pub mod types;

pub use engine::{GeneratorState, MwcEngine, SeedInput};
pub use traits::UniformSource;
pub use types::error::{RandomError, Result};
