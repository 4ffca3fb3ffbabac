//! Univariate continuous samplers.
//!
//! Every sampler is a free function generic over [`UniformSource`], takes the
//! source by `&mut` and validates its parameters before the first draw. A
//! rejected call therefore never advances the source.
//!
//! | Function          | Method                                   |
//! |-------------------|------------------------------------------|
//! | `normal`          | Box–Muller (sine branch only)            |
//! | `log_normal`      | `exp` of a normal variate                |
//! | `exponential`     | Inverse CDF                              |
//! | `triangular`      | Inverse CDF                              |
//! | `gamma`           | Marsaglia–Tsang squeeze, boosted below 1 |
//! | `chi_square`      | Gamma(df / 2, 2)                         |
//! | `inverse_gamma`   | Reciprocal of a gamma variate            |
//! | `beta`            | Ratio of two gamma variates              |
//! | `student_t`       | Normal over scaled chi-square            |
//! | `weibull`         | Inverse CDF                              |
//! | `cauchy`          | Inverse CDF                              |
//! | `laplace`         | Signed exponential                       |
//!
//! [`UniformSource`]: simrand_core::UniformSource

mod cauchy;
mod exponential;
mod gamma;
mod laplace;
mod normal;
mod triangular;
mod weibull;

pub use cauchy::cauchy;
pub use exponential::exponential;
pub use gamma::{beta, chi_square, gamma, inverse_gamma, student_t};
pub use laplace::laplace;
pub use normal::{log_normal, normal, standard_normal};
pub use triangular::triangular;
pub use weibull::weibull;

pub(crate) use gamma::ln_standard_gamma;
pub(crate) use triangular::validate_triangular;
