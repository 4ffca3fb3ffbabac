//! Sample command implementation
//!
//! Draws samples from a named distribution and prints them with summary
//! statistics and the final generator state.

use std::io::Write;

use serde::Serialize;
use simrand_core::math::{mean, standard_deviation};
use simrand_core::{GeneratorState, SeedInput};
use simrand_distributions::{Distribution, Sample, SimpleRandom};
use tracing::info;

use crate::config::{OutputFormat, SimrandConfig};
use crate::{CliError, Result};

/// Options collected from the command line
#[derive(Debug, Clone, Default)]
pub struct SampleArgs {
    pub distribution: String,
    pub params: Vec<f64>,
    pub count: Option<usize>,
    pub seed: Vec<f64>,
    pub format: Option<String>,
}

/// Summary statistics over the drawn samples
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub sample_mean: Option<f64>,
    pub sample_std_dev: Option<f64>,
    pub analytic_mean: Option<f64>,
    pub analytic_std_dev: Option<f64>,
    /// Per-component sample means for vector draws
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_means: Option<Vec<f64>>,
}

/// Everything the sample command reports
#[derive(Debug, Clone, Serialize)]
pub struct SampleReport {
    pub distribution: Distribution,
    pub count: usize,
    pub samples: Vec<Sample>,
    pub summary: Summary,
    pub final_state: GeneratorState,
}

/// Run the sample command
pub fn run(args: &SampleArgs, config: &SimrandConfig) -> Result<()> {
    let distribution = Distribution::from_name(&args.distribution, &args.params)?;
    let count = args.count.unwrap_or(config.sample_count);
    if count == 0 {
        return Err(CliError::invalid_argument("Sample count must be at least 1"));
    }
    let format = match &args.format {
        Some(f) => f.parse::<OutputFormat>()?,
        None => config.format,
    };
    let seed = resolve_seed(&args.seed, config)?;

    info!("Sampling {} draws from {}", count, distribution.name());
    info!("  Seed: {}", seed.kind());
    info!("  Output format: {}", format);

    let mut rng = SimpleRandom::with_seed(seed)?;
    let report = draw(&mut rng, distribution, count)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&report, format, &mut out)?;
    out.flush()?;

    info!("Sampling complete");
    Ok(())
}

/// Picks the seed: command line first, then configuration, then the clock.
pub fn resolve_seed(cli_seed: &[f64], config: &SimrandConfig) -> Result<SeedInput> {
    let values = if !cli_seed.is_empty() {
        cli_seed
    } else {
        config.seed.as_deref().unwrap_or(&[])
    };
    Ok(SeedInput::from_values(values)?)
}

/// Draws `count` samples and summarises them.
pub fn draw(rng: &mut SimpleRandom, distribution: Distribution, count: usize) -> Result<SampleReport> {
    let samples = (0..count)
        .map(|_| rng.sample(&distribution))
        .collect::<simrand_core::Result<Vec<_>>>()?;

    let summary = summarise(&distribution, &samples);
    Ok(SampleReport {
        distribution,
        count,
        samples,
        summary,
        final_state: rng.state(),
    })
}

fn summarise(distribution: &Distribution, samples: &[Sample]) -> Summary {
    let scalars: Option<Vec<f64>> = samples.iter().map(Sample::as_scalar).collect();

    let (sample_mean, sample_std_dev, component_means) = match scalars {
        Some(xs) => (mean(&xs), standard_deviation(&xs), None),
        None => {
            let width = samples.first().map_or(0, |s| s.as_slice().len());
            let means = (0..width)
                .map(|i| {
                    let column: Vec<f64> = samples.iter().map(|s| s.as_slice()[i]).collect();
                    mean(&column).unwrap_or(f64::NAN)
                })
                .collect();
            (None, None, Some(means))
        }
    };

    Summary {
        sample_mean,
        sample_std_dev,
        analytic_mean: distribution.mean(),
        analytic_std_dev: distribution.std_dev(),
        component_means,
    }
}

/// Writes the report in the requested format.
pub fn render<W: Write>(report: &SampleReport, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            let width = report.samples.first().map_or(1, |s| s.as_slice().len());
            let mut header = vec!["index".to_string()];
            if width == 1 {
                header.push("value".to_string());
            } else {
                header.extend((0..width).map(|i| format!("x{}", i)));
            }
            writer.write_record(&header)?;
            for (i, sample) in report.samples.iter().enumerate() {
                let mut record = vec![i.to_string()];
                record.extend(sample.as_slice().iter().map(|x| x.to_string()));
                writer.write_record(&record)?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => render_table(report, out)?,
    }
    Ok(())
}

fn render_table<W: Write>(report: &SampleReport, out: &mut W) -> Result<()> {
    let params = report
        .distribution
        .parameter_names()
        .iter()
        .zip(report.distribution.parameters())
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join(", ");

    writeln!(out, "{}({})", report.distribution.name(), params)?;
    writeln!(out, "┌──────────┬──────────────────────────┐")?;
    writeln!(out, "│ Index    │ Value                    │")?;
    writeln!(out, "├──────────┼──────────────────────────┤")?;
    for (i, sample) in report.samples.iter().enumerate() {
        let value = match sample {
            Sample::Scalar(x) => format!("{:.12}", x),
            Sample::Vector(v) => v
                .iter()
                .map(|x| format!("{:.6}", x))
                .collect::<Vec<_>>()
                .join(" "),
        };
        writeln!(out, "│ {:<8} │ {:<24} │", i, value)?;
    }
    writeln!(out, "└──────────┴──────────────────────────┘")?;

    let summary = &report.summary;
    writeln!(out, "count            {}", report.count)?;
    writeln!(out, "sample mean      {}", optional(summary.sample_mean))?;
    writeln!(out, "sample std dev   {}", optional(summary.sample_std_dev))?;
    writeln!(out, "analytic mean    {}", optional(summary.analytic_mean))?;
    writeln!(out, "analytic std dev {}", optional(summary.analytic_std_dev))?;
    if let Some(means) = &summary.component_means {
        let joined = means
            .iter()
            .map(|m| format!("{:.6}", m))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "component means  {}", joined)?;
    }
    writeln!(
        out,
        "final state      w={} z={}",
        report.final_state.w, report.final_state.z
    )?;
    Ok(())
}

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.6}", v))
}
