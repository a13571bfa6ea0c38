//! Super Sobol CLI - Command Line Sensitivity Studies
//!
//! This is the operational entry point for Super Sobol sensitivity analysis.
//!
//! # Commands
//!
//! - `supersobol analyze --study <file>` - Estimate lower and total indices
//! - `supersobol models` - List reference models and distribution families
//! - `supersobol check --study <file>` - Validate a study without running it
//!
//! # Architecture
//!
//! As the **S**ervice layer of the workspace, this crate reads study files,
//! applies environment and command-line overrides, and drives `sobol_engine`.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{CliArgs, LogLevel};

/// Super Sobol sensitivity analysis CLI
#[derive(Parser)]
#[command(name = "supersobol")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging unless a level is given)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate Super Sobol indices for a study
    Analyze {
        /// Study file (TOML); defaults apply when omitted
        #[arg(short, long)]
        study: Option<PathBuf>,

        /// Monte Carlo iterations per estimation
        #[arg(short, long)]
        n_mc: Option<usize>,

        /// Randomisation seed
        #[arg(long)]
        seed: Option<u64>,

        /// Independent randomised replications per index set
        #[arg(short, long)]
        replications: Option<usize>,

        /// Additional index set, e.g. 1,3 (repeatable)
        #[arg(short = 'i', long = "index-set")]
        index_sets: Vec<String>,

        /// Disable random start and random permutation
        #[arg(long)]
        deterministic: bool,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// List reference models and distribution families
    Models,

    /// Validate a study file without running it
    Check {
        /// Study file (TOML)
        #[arg(short, long)]
        study: PathBuf,
    },
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Log level for commands that do not read a study file
fn standalone_log_level(cli_level: Option<&str>, verbose: bool) -> anyhow::Result<LogLevel> {
    let from_env = std::env::var(config::ENV_LOG_LEVEL).ok();
    match cli_level.or(from_env.as_deref()) {
        Some(level) => Ok(level.parse()?),
        None if verbose => Ok(LogLevel::Debug),
        None => Ok(LogLevel::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            study,
            n_mc,
            seed,
            replications,
            index_sets,
            deterministic,
            format,
        } => {
            let args = CliArgs {
                study_file: study,
                n_mc,
                seed,
                replications,
                deterministic,
                format,
                log_level: cli.log_level.or_else(|| cli.verbose.then(|| "debug".to_string())),
                index_sets,
            };
            let study = commands::load_study(&args).context("failed to load study")?;
            init_tracing(study.log_level.as_filter_str());
            debug!(?study, "Study configuration loaded");
            commands::analyze::run(&study).context("analysis failed")?;
        }
        Commands::Models => {
            let level = standalone_log_level(cli.log_level.as_deref(), cli.verbose)?;
            init_tracing(level.as_filter_str());
            commands::models::run();
        }
        Commands::Check { study } => {
            let args = CliArgs {
                study_file: Some(study),
                log_level: cli.log_level,
                ..Default::default()
            };
            let level = standalone_log_level(args.log_level.as_deref(), cli.verbose)?;
            init_tracing(level.as_filter_str());
            if cli.verbose {
                info!("Verbose mode enabled");
            }
            commands::check::run(&args).context("study check failed")?;
        }
    }

    Ok(())
}
