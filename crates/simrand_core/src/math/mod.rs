//! Auxiliary numerical helpers.
//!
//! - [`stats`]: Sample mean and standard deviation
//! - [`special`]: The Γ function, used for analytic distribution moments

pub mod special;
pub mod stats;

pub use special::gamma_function;
pub use stats::{mean, standard_deviation};
