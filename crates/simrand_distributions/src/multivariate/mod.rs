//! Multivariate samplers.

mod dirichlet;

pub use dirichlet::dirichlet;

pub(crate) use dirichlet::validate_alpha;
