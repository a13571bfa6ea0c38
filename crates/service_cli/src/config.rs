//! Study configuration management
//!
//! Handles loading a study from a TOML file, environment variables and CLI
//! arguments.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (`SUPERSOBOL_*`)
//! 3. Study file
//! 4. Default values

use serde::{Deserialize, Serialize};
use sobol_core::math::UncertaintyDistribution;
use sobol_core::models::ReferenceModel;
use sobol_engine::sensitivity::{IndexSet, SamplingOptions, SuperSobolConfig};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "SUPERSOBOL_LOG_LEVEL";
/// Environment variable overriding the Monte Carlo iteration count.
pub const ENV_N_MC: &str = "SUPERSOBOL_N_MC";
/// Environment variable overriding the randomisation seed.
pub const ENV_SEED: &str = "SUPERSOBOL_SEED";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidFormat(String),

    #[error("Invalid index set '{0}': expected comma-separated 1-based indices such as 1,3")]
    InvalidIndexSet(String),

    #[error("Study file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),

    #[error("Invalid study: {0}")]
    InvalidStudy(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Result output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Sequence randomisation section of a study file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SamplingSection {
    /// Start each dimension at a random offset
    pub random_start: bool,
    /// Scramble digits per dimension
    pub random_permute: bool,
    /// Randomisation seed
    pub seed: u64,
}

impl Default for SamplingSection {
    fn default() -> Self {
        let options = SamplingOptions::default();
        Self {
            random_start: options.random_start,
            random_permute: options.random_permute,
            seed: options.seed,
        }
    }
}

impl From<SamplingSection> for SamplingOptions {
    fn from(section: SamplingSection) -> Self {
        SamplingOptions {
            random_start: section.random_start,
            random_permute: section.random_permute,
            seed: section.seed,
        }
    }
}

/// A sensitivity study as read from a TOML file
///
/// ```toml
/// model = "ishigami"
/// n_mc = 20000
/// index_set = [1]
/// additional_index_sets = [[2], [1, 3]]
/// constants = [7.0, 0.1]
/// uncertainties = [
///     { family = "uniform", params = [-3.14159, 3.14159] },
///     { family = "uniform", params = [-3.14159, 3.14159] },
///     { family = "uniform", params = [-3.14159, 3.14159] },
/// ]
///
/// [sampling]
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StudyConfig {
    /// Reference model to analyse
    pub model: ReferenceModel,
    /// Monte Carlo iterations per estimation
    pub n_mc: usize,
    /// Primary index set (1-based)
    pub index_set: Vec<usize>,
    /// Further index sets estimated alongside the primary one
    pub additional_index_sets: Vec<Vec<usize>>,
    /// Model constants
    pub constants: Vec<f64>,
    /// One distribution per model parameter
    pub uncertainties: Vec<UncertaintyDistribution>,
    /// Independent randomised replications per index set
    pub replications: usize,
    /// Sequence randomisation
    pub sampling: SamplingSection,
    /// Result output format
    pub output: OutputFormat,
    /// Log level
    pub log_level: LogLevel,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            model: ReferenceModel::Additive,
            n_mc: 10_000,
            index_set: vec![1],
            additional_index_sets: Vec::new(),
            constants: Vec::new(),
            uncertainties: vec![UncertaintyDistribution::uniform(0.0, 1.0); 2],
            replications: 1,
            sampling: SamplingSection::default(),
            output: OutputFormat::Table,
            log_level: LogLevel::Info,
        }
    }
}

impl StudyConfig {
    /// Load a study from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read study file: {}", e)))?;

        let config: StudyConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        Ok(config)
    }

    /// Apply `SUPERSOBOL_*` overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply `SUPERSOBOL_*` overrides from an arbitrary lookup
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(n_mc) = lookup(ENV_N_MC) {
            self.n_mc = n_mc
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("{}={} is not a count", ENV_N_MC, n_mc)))?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            self.sampling.seed = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("{}={} is not a seed", ENV_SEED, seed)))?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(n_mc) = cli.n_mc {
            self.n_mc = n_mc;
        }
        if let Some(seed) = cli.seed {
            self.sampling.seed = seed;
        }
        if let Some(replications) = cli.replications {
            self.replications = replications;
        }
        if cli.deterministic {
            self.sampling.random_start = false;
            self.sampling.random_permute = false;
        }
        if let Some(format) = &cli.format {
            self.output = OutputFormat::from_str(format)?;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        for set in &cli.index_sets {
            self.additional_index_sets.push(parse_index_set(set)?);
        }
        Ok(())
    }

    /// Validate the study beyond what the estimator checks itself
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dim) = self.model.fixed_dimension() {
            if self.uncertainties.len() != dim {
                return Err(ConfigError::InvalidStudy(format!(
                    "model '{}' takes {} parameters but {} uncertainties are given",
                    self.model,
                    dim,
                    self.uncertainties.len()
                )));
            }
        }
        if self.replications == 0 {
            return Err(ConfigError::InvalidStudy(
                "replications must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Estimator configuration for the primary index set
    pub fn estimator_config(
        &self,
    ) -> Result<SuperSobolConfig, sobol_engine::sensitivity::ConfigError> {
        SuperSobolConfig::builder()
            .dim(self.uncertainties.len())
            .n_mc(self.n_mc)
            .index_set(self.index_set.iter().copied())
            .uncertainties(self.uncertainties.clone())
            .constants(self.constants.clone())
            .sampling(self.sampling.into())
            .build()
    }

    /// Primary index set followed by the additional ones
    pub fn index_sets(&self) -> Result<Vec<IndexSet>, sobol_engine::sensitivity::ConfigError> {
        std::iter::once(&self.index_set)
            .chain(&self.additional_index_sets)
            .map(|set| IndexSet::try_from_indices(set.iter().copied()))
            .collect()
    }
}

/// Parse a comma-separated index set such as `1,3`; `{}` or an empty string is the empty set
pub fn parse_index_set(s: &str) -> Result<Vec<usize>, ConfigError> {
    let trimmed = s.trim().trim_start_matches('{').trim_end_matches('}').trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    trimmed
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidIndexSet(s.to_string()))
        })
        .collect()
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Study file path
    pub study_file: Option<PathBuf>,
    /// Monte Carlo iteration override
    pub n_mc: Option<usize>,
    /// Seed override
    pub seed: Option<u64>,
    /// Replication count override
    pub replications: Option<usize>,
    /// Disable sequence randomisation
    pub deterministic: bool,
    /// Output format override
    pub format: Option<String>,
    /// Log level override
    pub log_level: Option<String>,
    /// Extra index sets, comma-separated
    pub index_sets: Vec<String>,
}

/// Build the study from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Study file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<StudyConfig, ConfigError> {
    let mut config = if let Some(path) = &cli.study_file {
        StudyConfig::from_file(path)?
    } else {
        StudyConfig::default()
    };

    config.apply_env()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
