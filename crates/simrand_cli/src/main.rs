//! simrand CLI - Command Line Sampling and Self-Check
//!
//! This is the operational entry point for the simrand generators.
//!
//! # Commands
//!
//! - `simrand sample <distribution> [params...]` - Draw samples and summarise them
//! - `simrand check` - Run the statistical self-check
//! - `simrand list` - List supported distributions
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate wires configuration,
//! logging and output formats around `simrand_distributions`.

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// simrand random variate generator CLI
#[derive(Parser)]
#[command(name = "simrand")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "simrand.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw samples from a distribution
    Sample {
        /// Distribution name (see `simrand list`)
        distribution: String,

        /// Positional distribution parameters
        #[arg(allow_negative_numbers = true)]
        params: Vec<f64>,

        /// Number of samples (defaults to the configured count)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed value; once for the z word, twice for both words
        #[arg(short, long, allow_negative_numbers = true)]
        seed: Vec<f64>,

        /// Output format (table, json, csv)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Run the statistical self-check
    Check {
        /// Samples per property (defaults to the configured count)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Output format (table, json, csv)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// List supported distributions and their parameters
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::build_config(Path::new(&cli.config))?;

    let default_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };

    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Sample {
            distribution,
            params,
            count,
            seed,
            format,
        } => commands::sample::run(
            &commands::sample::SampleArgs {
                distribution,
                params,
                count,
                seed,
                format,
            },
            &config,
        ),
        Commands::Check { count, format } => {
            commands::check::run(count, format.as_deref(), &config)
        }
        Commands::List => commands::list::run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sample_with_negative_parameters() {
        let cli = Cli::try_parse_from([
            "simrand", "sample", "cauchy", "-3.5", "2", "-n", "5", "--seed", "7", "--seed", "9",
        ])
        .unwrap();

        match cli.command {
            Commands::Sample {
                distribution,
                params,
                count,
                seed,
                format,
            } => {
                assert_eq!(distribution, "cauchy");
                assert_eq!(params, vec![-3.5, 2.0]);
                assert_eq!(count, Some(5));
                assert_eq!(seed, vec![7.0, 9.0]);
                assert_eq!(format, None);
            }
            _ => panic!("expected sample"),
        }
        assert_eq!(cli.config, "simrand.toml");
    }

    #[test]
    fn test_parse_check_and_list() {
        let cli = Cli::try_parse_from(["simrand", "-v", "check", "-n", "20000"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Check { count: Some(20000), .. }));

        let cli = Cli::try_parse_from(["simrand", "list", "--config", "other.toml"]).unwrap();
        assert!(matches!(cli.command, Commands::List));
        assert_eq!(cli.config, "other.toml");
    }
}
