//! Static dispatch enum over every supported distribution.
//!
//! `Distribution` pairs a distribution with its parameters so callers that
//! pick a distribution at run time (the CLI, configuration files) can sample
//! through a single `match` instead of trait objects.
//!
//! ## Example
//!
//! ```
//! use simrand_core::MwcEngine;
//! use simrand_distributions::{Distribution, Sample};
//!
//! let dist = Distribution::from_name("normal", &[10.0, 2.0]).unwrap();
//! assert_eq!(dist.name(), "normal");
//! assert_eq!(dist.mean(), Some(10.0));
//!
//! let mut engine = MwcEngine::new();
//! match dist.sample(&mut engine).unwrap() {
//!     Sample::Scalar(x) => assert!(x.is_finite()),
//!     Sample::Vector(_) => unreachable!(),
//! }
//! ```

use simrand_core::math::gamma_function;
use simrand_core::traits::validate_interval;
use simrand_core::{RandomError, Result, UniformSource};

use crate::continuous;
use crate::multivariate::{self, validate_alpha};
use crate::validate;

/// Canonical names of all supported distributions, in listing order.
pub const DISTRIBUTION_NAMES: [&str; 14] = [
    "uniform",
    "normal",
    "exponential",
    "triangular",
    "gamma",
    "chi_square",
    "inverse_gamma",
    "beta",
    "weibull",
    "cauchy",
    "student_t",
    "laplace",
    "log_normal",
    "dirichlet",
];

/// A single draw: scalar for univariate distributions, vector for Dirichlet.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Sample {
    /// Univariate draw.
    Scalar(f64),
    /// Multivariate draw.
    Vector(Vec<f64>),
}

impl Sample {
    /// Returns the scalar value, if this is a univariate draw.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Sample::Scalar(x) => Some(*x),
            Sample::Vector(_) => None,
        }
    }

    /// Returns the components as a slice (length one for scalars).
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Sample::Scalar(x) => std::slice::from_ref(x),
            Sample::Vector(v) => v,
        }
    }
}

/// A distribution together with its parameters.
///
/// # Supported Distributions
///
/// | Variant        | Parameters              | Defaults      |
/// |----------------|-------------------------|---------------|
/// | `Uniform`      | lower, upper            | 0, 1          |
/// | `Normal`       | mean, sd                | 0, 1          |
/// | `Exponential`  | mean                    | 1             |
/// | `Triangular`   | lower, mode, upper      |               |
/// | `Gamma`        | shape, scale            |               |
/// | `ChiSquare`    | df                      |               |
/// | `InverseGamma` | shape, scale            |               |
/// | `Beta`         | a, b                    |               |
/// | `Weibull`      | shape, scale            |               |
/// | `Cauchy`       | median, scale           |               |
/// | `StudentT`     | df                      |               |
/// | `Laplace`      | mean, scale             |               |
/// | `LogNormal`    | mu, sigma               |               |
/// | `Dirichlet`    | alpha...                |               |
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "distribution", rename_all = "snake_case")
)]
pub enum Distribution {
    /// Uniform on the open interval `(lower, upper)`.
    Uniform { lower: f64, upper: f64 },
    /// Normal (Gaussian).
    Normal { mean: f64, sd: f64 },
    /// Exponential parameterised by its mean.
    Exponential { mean: f64 },
    /// Triangular on `[lower, upper]` with peak at `mode`.
    Triangular { lower: f64, mode: f64, upper: f64 },
    /// Gamma with shape and scale.
    Gamma { shape: f64, scale: f64 },
    /// Chi-square with `df` degrees of freedom.
    ChiSquare { df: f64 },
    /// Inverse gamma with shape and scale.
    InverseGamma { shape: f64, scale: f64 },
    /// Beta on the unit interval.
    Beta { a: f64, b: f64 },
    /// Weibull with shape and scale.
    Weibull { shape: f64, scale: f64 },
    /// Cauchy with location and scale.
    Cauchy { median: f64, scale: f64 },
    /// Student-t with `df` degrees of freedom.
    StudentT { df: f64 },
    /// Laplace (double exponential).
    Laplace { mean: f64, scale: f64 },
    /// Log-normal; `mu` and `sigma` are the moments of the underlying normal.
    LogNormal { mu: f64, sigma: f64 },
    /// Dirichlet with concentration parameters `alpha`.
    Dirichlet { alpha: Vec<f64> },
}

impl Distribution {
    /// Parses a distribution name and its positional parameters.
    ///
    /// Names are case-insensitive and accept `-` in place of `_`. A few
    /// aliases are recognised (`gaussian`, `exp`, `chisq`, `t`, `lognormal`,
    /// ...). The resulting distribution is validated.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidParameter` for an unknown name, a wrong
    /// number of parameters, or out-of-domain parameter values.
    ///
    /// # Examples
    ///
    /// ```
    /// use simrand_distributions::Distribution;
    ///
    /// assert_eq!(
    ///     Distribution::from_name("Chi-Square", &[10.0]).unwrap(),
    ///     Distribution::ChiSquare { df: 10.0 }
    /// );
    /// assert_eq!(
    ///     Distribution::from_name("uniform", &[]).unwrap(),
    ///     Distribution::Uniform { lower: 0.0, upper: 1.0 }
    /// );
    /// assert!(Distribution::from_name("poisson", &[1.0]).is_err());
    /// assert!(Distribution::from_name("beta", &[1.0]).is_err());
    /// ```
    pub fn from_name(name: &str, params: &[f64]) -> Result<Self> {
        let canonical = canonical_name(name).ok_or_else(|| {
            RandomError::invalid_parameter(
                "distribution",
                format!("Unknown distribution '{}'", name),
            )
        })?;

        let dist = match (canonical, params) {
            ("uniform", []) => Distribution::Uniform {
                lower: 0.0,
                upper: 1.0,
            },
            ("uniform", &[lower]) => Distribution::Uniform { lower, upper: 1.0 },
            ("uniform", &[lower, upper]) => Distribution::Uniform { lower, upper },
            ("normal", []) => Distribution::Normal { mean: 0.0, sd: 1.0 },
            ("normal", &[mean]) => Distribution::Normal { mean, sd: 1.0 },
            ("normal", &[mean, sd]) => Distribution::Normal { mean, sd },
            ("exponential", []) => Distribution::Exponential { mean: 1.0 },
            ("exponential", &[mean]) => Distribution::Exponential { mean },
            ("triangular", &[lower, mode, upper]) => Distribution::Triangular {
                lower,
                mode,
                upper,
            },
            ("gamma", &[shape, scale]) => Distribution::Gamma { shape, scale },
            ("chi_square", &[df]) => Distribution::ChiSquare { df },
            ("inverse_gamma", &[shape, scale]) => Distribution::InverseGamma { shape, scale },
            ("beta", &[a, b]) => Distribution::Beta { a, b },
            ("weibull", &[shape, scale]) => Distribution::Weibull { shape, scale },
            ("cauchy", &[median, scale]) => Distribution::Cauchy { median, scale },
            ("student_t", &[df]) => Distribution::StudentT { df },
            ("laplace", &[mean, scale]) => Distribution::Laplace { mean, scale },
            ("log_normal", &[mu, sigma]) => Distribution::LogNormal { mu, sigma },
            ("dirichlet", alpha) if !alpha.is_empty() => Distribution::Dirichlet {
                alpha: alpha.to_vec(),
            },
            (canonical, params) => {
                return Err(RandomError::invalid_parameter(
                    "params",
                    format!(
                        "{} expects parameters ({}), got {}",
                        canonical,
                        parameter_names_of(canonical).join(", "),
                        params.len()
                    ),
                ))
            }
        };

        dist.validate()?;
        Ok(dist)
    }

    /// Canonical snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Uniform { .. } => "uniform",
            Distribution::Normal { .. } => "normal",
            Distribution::Exponential { .. } => "exponential",
            Distribution::Triangular { .. } => "triangular",
            Distribution::Gamma { .. } => "gamma",
            Distribution::ChiSquare { .. } => "chi_square",
            Distribution::InverseGamma { .. } => "inverse_gamma",
            Distribution::Beta { .. } => "beta",
            Distribution::Weibull { .. } => "weibull",
            Distribution::Cauchy { .. } => "cauchy",
            Distribution::StudentT { .. } => "student_t",
            Distribution::Laplace { .. } => "laplace",
            Distribution::LogNormal { .. } => "log_normal",
            Distribution::Dirichlet { .. } => "dirichlet",
        }
    }

    /// Positional parameter names, in `from_name` order.
    pub fn parameter_names(&self) -> &'static [&'static str] {
        parameter_names_of(self.name())
    }

    /// Parameter values, in `from_name` order.
    pub fn parameters(&self) -> Vec<f64> {
        match self {
            Distribution::Uniform { lower, upper } => vec![*lower, *upper],
            Distribution::Normal { mean, sd } => vec![*mean, *sd],
            Distribution::Exponential { mean } => vec![*mean],
            Distribution::Triangular { lower, mode, upper } => vec![*lower, *mode, *upper],
            Distribution::Gamma { shape, scale }
            | Distribution::InverseGamma { shape, scale }
            | Distribution::Weibull { shape, scale } => vec![*shape, *scale],
            Distribution::ChiSquare { df } | Distribution::StudentT { df } => vec![*df],
            Distribution::Beta { a, b } => vec![*a, *b],
            Distribution::Cauchy { median, scale } => vec![*median, *scale],
            Distribution::Laplace { mean, scale } => vec![*mean, *scale],
            Distribution::LogNormal { mu, sigma } => vec![*mu, *sigma],
            Distribution::Dirichlet { alpha } => alpha.clone(),
        }
    }

    /// Checks the parameters against the sampler preconditions.
    ///
    /// # Errors
    ///
    /// Returns the same `RandomError::InvalidParameter` the sampler would.
    pub fn validate(&self) -> Result<()> {
        const SHAPE: &str = "Shape must be strictly positive";
        const SCALE: &str = "Scale must be strictly positive";
        const DF: &str = "Degrees of freedom must be strictly positive";

        match self {
            Distribution::Uniform { lower, upper } => validate_interval(*lower, *upper),
            Distribution::Normal { mean, sd } => {
                validate::finite("mean", *mean)?;
                validate::positive("sd", *sd, "Standard deviation must be strictly positive")
            }
            Distribution::Exponential { mean } => {
                validate::positive("mean", *mean, "Mean must be strictly positive")
            }
            Distribution::Triangular { lower, mode, upper } => {
                continuous::validate_triangular(*lower, *mode, *upper)
            }
            Distribution::Gamma { shape, scale } | Distribution::InverseGamma { shape, scale } => {
                validate::positive("shape", *shape, SHAPE)?;
                validate::positive("scale", *scale, SCALE)
            }
            Distribution::ChiSquare { df } | Distribution::StudentT { df } => {
                validate::positive("df", *df, DF)
            }
            Distribution::Beta { a, b } => {
                validate::positive("a", *a, "Parameters must be strictly positive")?;
                validate::positive("b", *b, "Parameters must be strictly positive")
            }
            Distribution::Weibull { shape, scale } => {
                validate::positive("shape", *shape, "Shape and scale must be positive")?;
                validate::positive("scale", *scale, "Shape and scale must be positive")
            }
            Distribution::Cauchy { median, scale } => {
                validate::finite("median", *median)?;
                validate::positive("scale", *scale, "Scale must be positive")
            }
            Distribution::Laplace { mean, scale } => {
                validate::finite("mean", *mean)?;
                validate::positive("scale", *scale, "Scale must be positive")
            }
            Distribution::LogNormal { mu, sigma } => {
                validate::finite("mu", *mu)?;
                validate::positive("sigma", *sigma, "Sigma must be strictly positive")
            }
            Distribution::Dirichlet { alpha } => validate_alpha(alpha),
        }
    }

    /// Draws one sample from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::InvalidParameter` for out-of-domain parameters;
    /// no draw is made in that case.
    pub fn sample<R: UniformSource + ?Sized>(&self, rng: &mut R) -> Result<Sample> {
        let x = match self {
            Distribution::Uniform { lower, upper } => rng.uniform_between(*lower, *upper)?,
            Distribution::Normal { mean, sd } => continuous::normal(rng, *mean, *sd)?,
            Distribution::Exponential { mean } => continuous::exponential(rng, *mean)?,
            Distribution::Triangular { lower, mode, upper } => {
                continuous::triangular(rng, *lower, *mode, *upper)?
            }
            Distribution::Gamma { shape, scale } => continuous::gamma(rng, *shape, *scale)?,
            Distribution::ChiSquare { df } => continuous::chi_square(rng, *df)?,
            Distribution::InverseGamma { shape, scale } => {
                continuous::inverse_gamma(rng, *shape, *scale)?
            }
            Distribution::Beta { a, b } => continuous::beta(rng, *a, *b)?,
            Distribution::Weibull { shape, scale } => continuous::weibull(rng, *shape, *scale)?,
            Distribution::Cauchy { median, scale } => continuous::cauchy(rng, *median, *scale)?,
            Distribution::StudentT { df } => continuous::student_t(rng, *df)?,
            Distribution::Laplace { mean, scale } => continuous::laplace(rng, *mean, *scale)?,
            Distribution::LogNormal { mu, sigma } => continuous::log_normal(rng, *mu, *sigma)?,
            Distribution::Dirichlet { alpha } => {
                return Ok(Sample::Vector(multivariate::dirichlet(rng, alpha)?))
            }
        };
        Ok(Sample::Scalar(x))
    }

    /// Analytic mean, where it exists.
    ///
    /// `None` for Cauchy, Dirichlet, Student-t with `df <= 1`, and
    /// inverse gamma with `shape <= 1`.
    pub fn mean(&self) -> Option<f64> {
        match self {
            Distribution::Uniform { lower, upper } => Some(0.5 * (lower + upper)),
            Distribution::Normal { mean, .. } => Some(*mean),
            Distribution::Exponential { mean } => Some(*mean),
            Distribution::Triangular { lower, mode, upper } => Some((lower + mode + upper) / 3.0),
            Distribution::Gamma { shape, scale } => Some(shape * scale),
            Distribution::ChiSquare { df } => Some(*df),
            Distribution::InverseGamma { shape, scale } => {
                (*shape > 1.0).then(|| scale / (shape - 1.0))
            }
            Distribution::Beta { a, b } => Some(a / (a + b)),
            Distribution::Weibull { shape, scale } => {
                gamma_function(1.0 + 1.0 / shape).map(|g| scale * g)
            }
            Distribution::Cauchy { .. } => None,
            Distribution::StudentT { df } => (*df > 1.0).then_some(0.0),
            Distribution::Laplace { mean, .. } => Some(*mean),
            Distribution::LogNormal { mu, sigma } => Some((mu + 0.5 * sigma * sigma).exp()),
            Distribution::Dirichlet { .. } => None,
        }
    }

    /// Analytic standard deviation, where it exists.
    ///
    /// `None` for Cauchy, Dirichlet, Student-t with `df <= 2`, and
    /// inverse gamma with `shape <= 2`.
    pub fn std_dev(&self) -> Option<f64> {
        match self {
            Distribution::Uniform { lower, upper } => Some((upper - lower) / 12.0_f64.sqrt()),
            Distribution::Normal { sd, .. } => Some(*sd),
            Distribution::Exponential { mean } => Some(*mean),
            Distribution::Triangular { lower, mode, upper } => {
                let (a, c, b) = (*lower, *mode, *upper);
                Some(((a * a + b * b + c * c - a * b - a * c - b * c) / 18.0).sqrt())
            }
            Distribution::Gamma { shape, scale } => Some(shape.sqrt() * scale),
            Distribution::ChiSquare { df } => Some((2.0 * df).sqrt()),
            Distribution::InverseGamma { shape, scale } => {
                (*shape > 2.0).then(|| scale / ((shape - 1.0) * (shape - 2.0).sqrt()))
            }
            Distribution::Beta { a, b } => {
                let total = a + b;
                Some((a * b / (total * total * (total + 1.0))).sqrt())
            }
            Distribution::Weibull { shape, scale } => {
                let g1 = gamma_function(1.0 + 1.0 / shape)?;
                let g2 = gamma_function(1.0 + 2.0 / shape)?;
                Some(scale * (g2 - g1 * g1).sqrt())
            }
            Distribution::Cauchy { .. } => None,
            Distribution::StudentT { df } => (*df > 2.0).then(|| (df / (df - 2.0)).sqrt()),
            Distribution::Laplace { scale, .. } => Some(std::f64::consts::SQRT_2 * scale),
            Distribution::LogNormal { mu, sigma } => {
                let s2 = sigma * sigma;
                Some(((s2.exp() - 1.0) * (2.0 * mu + s2).exp()).sqrt())
            }
            Distribution::Dirichlet { .. } => None,
        }
    }
}

/// Positional parameter names for a distribution name or alias.
///
/// ```
/// use simrand_distributions::distribution::parameter_names_for;
///
/// assert_eq!(parameter_names_for("gaussian"), Some(&["mean", "sd"][..]));
/// assert_eq!(parameter_names_for("poisson"), None);
/// ```
pub fn parameter_names_for(name: &str) -> Option<&'static [&'static str]> {
    canonical_name(name).map(parameter_names_of)
}

/// Maps a user-supplied name or alias onto its canonical name.
pub fn canonical_name(name: &str) -> Option<&'static str> {
    let normalised = name.trim().to_ascii_lowercase().replace('-', "_");
    let canonical = match normalised.as_str() {
        "uniform" => "uniform",
        "normal" | "gaussian" => "normal",
        "exponential" | "exp" => "exponential",
        "triangular" => "triangular",
        "gamma" => "gamma",
        "chi_square" | "chi_squared" | "chisq" | "chi2" => "chi_square",
        "inverse_gamma" | "inv_gamma" => "inverse_gamma",
        "beta" => "beta",
        "weibull" => "weibull",
        "cauchy" => "cauchy",
        "student_t" | "student" | "t" => "student_t",
        "laplace" => "laplace",
        "log_normal" | "lognormal" => "log_normal",
        "dirichlet" => "dirichlet",
        _ => return None,
    };
    Some(canonical)
}

fn parameter_names_of(canonical: &str) -> &'static [&'static str] {
    match canonical {
        "uniform" => &["lower", "upper"],
        "normal" => &["mean", "sd"],
        "exponential" => &["mean"],
        "triangular" => &["lower", "mode", "upper"],
        "gamma" | "inverse_gamma" | "weibull" => &["shape", "scale"],
        "chi_square" | "student_t" => &["df"],
        "beta" => &["a", "b"],
        "cauchy" => &["median", "scale"],
        "laplace" => &["mean", "scale"],
        "log_normal" => &["mu", "sigma"],
        "dirichlet" => &["alpha..."],
        _ => &[],
    }
}
