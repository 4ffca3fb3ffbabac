//! Error types for seeding and sampling.
//!
//! Two failure modes exist and both are raised before any engine draw, so a
//! failed call leaves the generator state untouched:
//! - `InvalidSeedArgument`: zero, non-finite or degenerate seed input
//! - `InvalidParameter`: out-of-domain distribution parameters

use thiserror::Error;

/// Result alias for fallible seeding and sampling operations.
pub type Result<T> = std::result::Result<T, RandomError>;

/// Categorised generator errors.
///
/// # Examples
/// ```
/// use simrand_core::types::RandomError;
///
/// let err = RandomError::invalid_parameter("scale", "Scale must be positive");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'scale': Scale must be positive"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// Seed value is zero, not a finite number, or degenerates to a zero state word.
    #[error("Invalid seed argument: {0}")]
    InvalidSeedArgument(String),

    /// Distribution parameter outside its domain.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the violated constraint.
        reason: String,
    },
}

impl RandomError {
    /// Create an invalid seed error
    pub fn invalid_seed(msg: impl Into<String>) -> Self {
        Self::InvalidSeedArgument(msg.into())
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns `true` for seed validation failures.
    pub fn is_seed_error(&self) -> bool {
        matches!(self, Self::InvalidSeedArgument(_))
    }
}
