//! Shared types for the uniform engine.
//!
//! - `error`: The `RandomError` taxonomy shared by every layer

pub mod error;

pub use error::{RandomError, Result};
