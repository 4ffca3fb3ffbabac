//! Check command implementation
//!
//! Runs the statistical self-check of the generator and its samplers and
//! reports each property against the configured tolerance.

use std::io::Write;

use serde::Serialize;
use simrand_core::math::{mean, standard_deviation};
use simrand_core::{GeneratorState, SeedInput};
use simrand_distributions::SimpleRandom;
use tracing::{info, warn};

use crate::config::{OutputFormat, SimrandConfig};
use crate::{CliError, Result};

/// Outcome of a single property
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub property: &'static str,
    pub expected: Option<f64>,
    pub observed: Option<f64>,
    pub passed: bool,
}

impl CheckOutcome {
    fn moment(property: &'static str, expected: f64, observed: Option<f64>, tolerance: f64) -> Self {
        let passed = observed.is_some_and(|x| (x - expected).abs() <= tolerance);
        Self {
            property,
            expected: Some(expected),
            observed,
            passed,
        }
    }

    fn holds(property: &'static str, passed: bool) -> Self {
        Self {
            property,
            expected: None,
            observed: None,
            passed,
        }
    }
}

/// Run the check command
pub fn run(count: Option<usize>, format: Option<&str>, config: &SimrandConfig) -> Result<()> {
    let count = count.unwrap_or(config.sample_count);
    if count < 2 {
        return Err(CliError::invalid_argument(
            "Self-check needs at least 2 samples per property",
        ));
    }
    let format = match format {
        Some(f) => f.parse::<OutputFormat>()?,
        None => config.format,
    };
    let start = match &config.seed {
        Some(values) => SimpleRandom::with_seed(SeedInput::from_values(values)?)?.state(),
        None => GeneratorState::default(),
    };

    info!("Running self-check");
    info!("  Samples per property: {}", count);
    info!("  Tolerance: {}", config.tolerance);

    let outcomes = run_checks(start, count, config.tolerance)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&outcomes, format, &mut out)?;
    out.flush()?;

    let failed = outcomes.iter().filter(|o| !o.passed).count();
    if failed > 0 {
        warn!("{} of {} properties failed", failed, outcomes.len());
        return Err(CliError::CheckFailed {
            failed,
            total: outcomes.len(),
        });
    }

    info!("All {} properties passed", outcomes.len());
    Ok(())
}

/// Evaluates every property, each from a fresh generator at `start`.
pub fn run_checks(start: GeneratorState, count: usize, tolerance: f64) -> Result<Vec<CheckOutcome>> {
    let fresh = || SimpleRandom::from_state(start);
    let mut outcomes = Vec::new();

    let mut rng = fresh()?;
    let inside = (0..count).all(|_| {
        rng.uniform_between(-2.5, 7.5)
            .is_ok_and(|x| x > -2.5 && x < 7.5)
    });
    outcomes.push(CheckOutcome::holds("uniform(-2.5, 7.5) stays inside bounds", inside));

    let mut rng = fresh()?;
    let xs: Vec<f64> = (0..count).map(|_| rng.uniform()).collect();
    outcomes.push(CheckOutcome::moment("uniform() mean", 0.5, mean(&xs), tolerance));

    let mut rng = fresh()?;
    let xs: Vec<f64> = (0..count).map(|_| rng.standard_normal()).collect();
    outcomes.push(CheckOutcome::moment("normal() mean", 0.0, mean(&xs), tolerance));
    outcomes.push(CheckOutcome::moment(
        "normal() std dev",
        1.0,
        standard_deviation(&xs),
        tolerance,
    ));

    let mut rng = fresh()?;
    let xs = (0..count)
        .map(|_| rng.exponential(1.0))
        .collect::<simrand_core::Result<Vec<f64>>>()?;
    outcomes.push(CheckOutcome::moment("exponential(1) mean", 1.0, mean(&xs), tolerance));

    let mut rng = fresh()?;
    let xs = (0..count)
        .map(|_| rng.triangular(0.0, 1.0, 1.0))
        .collect::<simrand_core::Result<Vec<f64>>>()?;
    outcomes.push(CheckOutcome::moment(
        "triangular(0, 1, 1) mean",
        2.0 / 3.0,
        mean(&xs),
        tolerance,
    ));
    outcomes.push(CheckOutcome::moment(
        "triangular(0, 1, 1) std dev",
        (1.0_f64 / 18.0).sqrt(),
        standard_deviation(&xs),
        tolerance,
    ));

    let mut rng = fresh()?;
    let mut finite = true;
    for _ in 0..count {
        let draws = [
            rng.gamma(5.0, 2.3)?,
            rng.inverse_gamma(5.0, 2.3)?,
            rng.beta(5.0, 2.3)?,
            rng.chi_square(10.0)?,
            rng.weibull(5.0, 2.3)?,
        ];
        finite &= draws.iter().all(|x| x.is_finite());
    }
    outcomes.push(CheckOutcome::holds("gamma family draws are finite", finite));

    let mut a = fresh()?;
    let mut b = fresh()?;
    a.set_seed(SeedInput::TwoValues(1234.0, 5678.0))?;
    b.set_seed(SeedInput::TwoValues(1234.0, 5678.0))?;
    let mut identical = true;
    for _ in 0..count {
        identical &= a.uniform() == b.uniform();
        identical &= a.gamma(0.5, 1.0)? == b.gamma(0.5, 1.0)?;
    }
    outcomes.push(CheckOutcome::holds("identical seeds give identical streams", identical));

    let mut perturbed = fresh()?;
    let mut clean = fresh()?;
    let rejected = perturbed.uniform_between(1.0, 0.0).is_err();
    let unperturbed = (0..count).all(|_| perturbed.uniform() == clean.uniform());
    outcomes.push(CheckOutcome::holds(
        "invalid arguments leave state untouched",
        rejected && unperturbed,
    ));

    let mut rng = fresh()?;
    let mut simplex = true;
    for _ in 0..count {
        let v = rng.dirichlet(&[1.0, 1.0, 1.0])?;
        let sum: f64 = v.iter().sum();
        simplex &= v.len() == 3 && (sum - 1.0).abs() < 1e-12 && v.iter().all(|&x| x > 0.0 && x < 1.0);
    }
    outcomes.push(CheckOutcome::holds("dirichlet(1, 1, 1) lies on the simplex", simplex));

    Ok(outcomes)
}

/// Writes the outcomes in the requested format.
pub fn render<W: Write>(outcomes: &[CheckOutcome], format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, outcomes)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for outcome in outcomes {
                writer.serialize(outcome)?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            writeln!(out, "┌──────────────────────────────────────────┬────────────┬────────────┬────────┐")?;
            writeln!(out, "│ Property                                 │ Expected   │ Observed   │ Result │")?;
            writeln!(out, "├──────────────────────────────────────────┼────────────┼────────────┼────────┤")?;
            for o in outcomes {
                writeln!(
                    out,
                    "│ {:<40} │ {:>10} │ {:>10} │ {:<6} │",
                    o.property,
                    cell(o.expected),
                    cell(o.observed),
                    if o.passed { "ok" } else { "FAIL" }
                )?;
            }
            writeln!(out, "└──────────────────────────────────────────┴────────────┴────────────┴────────┘")?;
        }
    }
    Ok(())
}

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.5}", v))
}
