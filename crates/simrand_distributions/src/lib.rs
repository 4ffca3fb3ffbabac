//! # simrand_distributions: Distribution Samplers
//!
//! ## Layer 2 Role
//!
//! simrand_distributions turns the uniform words of `simrand_core` into
//! variates from the common continuous distributions:
//! - Univariate samplers as free functions over `UniformSource` (`continuous`)
//! - The Dirichlet sampler (`multivariate`)
//! - Run-time selection through the `Distribution` enum (`distribution`)
//! - The owning `SimpleRandom` generator (`generator`)
//! - A per-thread default generator (`thread_local`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use simrand_core::{MwcEngine, SeedInput};
//! use simrand_distributions::continuous::{beta, normal};
//! use simrand_distributions::SimpleRandom;
//!
//! // Free functions over any uniform source
//! let mut engine = MwcEngine::new();
//! let x = normal(&mut engine, 0.0, 1.0).unwrap();
//! let p = beta(&mut engine, 5.0, 2.3).unwrap();
//! assert!(x.is_finite());
//! assert!(p > 0.0 && p < 1.0);
//!
//! // Or through the owning generator
//! let mut rng = SimpleRandom::with_seed(SeedInput::TwoValues(1.0, 2.0)).unwrap();
//! let v = rng.dirichlet(&[1.0, 1.0, 1.0]).unwrap();
//! assert!((v.iter().sum::<f64>() - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for `Distribution`, `Sample` and `GeneratorState`

pub mod continuous;
pub mod distribution;
pub mod generator;
pub mod multivariate;
pub mod thread_local;

mod validate;

pub use distribution::{Distribution, Sample, DISTRIBUTION_NAMES};
pub use generator::SimpleRandom;
pub use thread_local::{reseed_thread_generator, thread_generator_state, with_thread_generator};
