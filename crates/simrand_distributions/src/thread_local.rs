//! Per-thread default generator registry.
//!
//! Each thread lazily owns one [`SimpleRandom`], initialised with the default
//! state words. There is no process-wide shared generator: reseeding or
//! drawing on one thread never affects another.
//!
//! # Example
//!
//! ```rust
//! use simrand_core::SeedInput;
//! use simrand_distributions::thread_local::{reseed_thread_generator, with_thread_generator};
//!
//! reseed_thread_generator(SeedInput::TwoValues(3.0, 4.0)).unwrap();
//! let x = with_thread_generator(|rng| rng.exponential(2.0)).unwrap();
//! assert!(x > 0.0);
//! ```

use std::cell::RefCell;

use simrand_core::{GeneratorState, Result, SeedInput};

use crate::generator::SimpleRandom;

thread_local! {
    static GENERATOR: RefCell<SimpleRandom> = RefCell::new(SimpleRandom::new());
}

/// Runs `f` with exclusive access to the calling thread's generator.
///
/// # Panics
///
/// Panics if called re-entrantly from inside `f` on the same thread, since
/// the generator is already mutably borrowed.
pub fn with_thread_generator<F, T>(f: F) -> T
where
    F: FnOnce(&mut SimpleRandom) -> T,
{
    GENERATOR.with(|cell| f(&mut cell.borrow_mut()))
}

/// Reseeds the calling thread's generator only.
///
/// # Errors
///
/// Returns `RandomError::InvalidSeedArgument` for a rejected seed; the
/// thread's state is left unchanged.
pub fn reseed_thread_generator(seed: impl Into<SeedInput>) -> Result<()> {
    let seed = seed.into();
    with_thread_generator(|rng| rng.set_seed(seed))
}

/// Returns the state words of the calling thread's generator.
pub fn thread_generator_state() -> GeneratorState {
    with_thread_generator(|rng| rng.state())
}
