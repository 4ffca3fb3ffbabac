//! Owning generator façade.
//!
//! [`SimpleRandom`] owns one [`MwcEngine`] and exposes every sampler as a
//! method, so a caller that wants one independent stream only needs one
//! value. Two instances never share state; give each thread or logical
//! stream its own instance with its own seed.

use simrand_core::{GeneratorState, MwcEngine, Result, SeedInput, UniformSource};

use crate::continuous;
use crate::distribution::{Distribution, Sample};
use crate::multivariate;

/// A seedable random number generator with distribution samplers.
///
/// # Examples
///
/// ```
/// use simrand_core::SeedInput;
/// use simrand_distributions::SimpleRandom;
///
/// let mut a = SimpleRandom::with_seed(SeedInput::TwoValues(12.0, 34.0)).unwrap();
/// let mut b = SimpleRandom::with_seed(SeedInput::TwoValues(12.0, 34.0)).unwrap();
///
/// assert_eq!(a.gamma(2.0, 1.5).unwrap(), b.gamma(2.0, 1.5).unwrap());
/// assert!(a.uniform_between(1.0, 0.0).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimpleRandom {
    engine: MwcEngine,
}

impl SimpleRandom {
    /// Creates a generator with the default state words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator and applies `seed` to it.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidSeedArgument` for a rejected seed.
    pub fn with_seed(seed: impl Into<SeedInput>) -> Result<Self> {
        let mut generator = Self::new();
        generator.set_seed(seed)?;
        Ok(generator)
    }

    /// Restores a generator from previously captured state words.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidSeedArgument` if either word is zero.
    pub fn from_state(state: GeneratorState) -> Result<Self> {
        Ok(Self {
            engine: MwcEngine::from_state(state)?,
        })
    }

    /// Returns the current state words.
    pub fn state(&self) -> GeneratorState {
        self.engine.state()
    }

    /// Reseeds the generator; see [`SeedInput`] for the accepted forms.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidSeedArgument` and leaves the state
    /// unchanged if the seed is rejected.
    pub fn set_seed(&mut self, seed: impl Into<SeedInput>) -> Result<()> {
        self.engine.set_seed(seed.into())
    }

    /// Mutable access to the underlying engine, e.g. for `rand` interop.
    pub fn engine_mut(&mut self) -> &mut MwcEngine {
        &mut self.engine
    }

    /// Uniform variate on (0, 1).
    pub fn uniform(&mut self) -> f64 {
        self.engine.uniform()
    }

    /// Uniform variate on the open interval `(lower, upper)`.
    pub fn uniform_between(&mut self, lower: f64, upper: f64) -> Result<f64> {
        self.engine.uniform_between(lower, upper)
    }

    /// Standard normal variate.
    pub fn standard_normal(&mut self) -> f64 {
        continuous::standard_normal(&mut self.engine)
    }

    /// Normal variate with the given mean and standard deviation.
    pub fn normal(&mut self, mean: f64, sd: f64) -> Result<f64> {
        continuous::normal(&mut self.engine, mean, sd)
    }

    /// Exponential variate with the given mean.
    pub fn exponential(&mut self, mean: f64) -> Result<f64> {
        continuous::exponential(&mut self.engine, mean)
    }

    /// Triangular variate on `[lower, upper]` with peak at `mode`.
    pub fn triangular(&mut self, lower: f64, mode: f64, upper: f64) -> Result<f64> {
        continuous::triangular(&mut self.engine, lower, mode, upper)
    }

    /// Gamma variate.
    pub fn gamma(&mut self, shape: f64, scale: f64) -> Result<f64> {
        continuous::gamma(&mut self.engine, shape, scale)
    }

    /// Chi-square variate.
    pub fn chi_square(&mut self, df: f64) -> Result<f64> {
        continuous::chi_square(&mut self.engine, df)
    }

    /// Inverse gamma variate.
    pub fn inverse_gamma(&mut self, shape: f64, scale: f64) -> Result<f64> {
        continuous::inverse_gamma(&mut self.engine, shape, scale)
    }

    /// Beta variate.
    pub fn beta(&mut self, a: f64, b: f64) -> Result<f64> {
        continuous::beta(&mut self.engine, a, b)
    }

    /// Weibull variate.
    pub fn weibull(&mut self, shape: f64, scale: f64) -> Result<f64> {
        continuous::weibull(&mut self.engine, shape, scale)
    }

    /// Cauchy variate.
    pub fn cauchy(&mut self, median: f64, scale: f64) -> Result<f64> {
        continuous::cauchy(&mut self.engine, median, scale)
    }

    /// Student-t variate.
    pub fn student_t(&mut self, df: f64) -> Result<f64> {
        continuous::student_t(&mut self.engine, df)
    }

    /// Laplace variate.
    pub fn laplace(&mut self, mean: f64, scale: f64) -> Result<f64> {
        continuous::laplace(&mut self.engine, mean, scale)
    }

    /// Log-normal variate.
    pub fn log_normal(&mut self, mu: f64, sigma: f64) -> Result<f64> {
        continuous::log_normal(&mut self.engine, mu, sigma)
    }

    /// Dirichlet draw; the result has one component per element of `alpha`.
    pub fn dirichlet(&mut self, alpha: &[f64]) -> Result<Vec<f64>> {
        multivariate::dirichlet(&mut self.engine, alpha)
    }

    /// Draws one sample from a run-time selected distribution.
    pub fn sample(&mut self, distribution: &Distribution) -> Result<Sample> {
        distribution.sample(&mut self.engine)
    }
}

impl From<MwcEngine> for SimpleRandom {
    fn from(engine: MwcEngine) -> Self {
        Self { engine }
    }
}
