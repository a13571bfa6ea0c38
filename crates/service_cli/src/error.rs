//! CLI error types

use thiserror::Error;

use crate::config::ConfigError;

/// Errors reported by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid estimator configuration: {0}")]
    Study(#[from] sobol_engine::sensitivity::ConfigError),

    #[error("Estimation failed: {0}")]
    Estimation(#[from] sobol_engine::sensitivity::EstimationError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use sobol_engine::sensitivity::EstimationError;

    #[test]
    fn test_cli_error_display() {
        let err = CliError::FileNotFound("study.toml".to_string());
        assert_eq!(err.to_string(), "File not found: study.toml");

        let err: CliError = EstimationError::NotComputed.into();
        assert!(err.to_string().starts_with("Estimation failed"));

        let err: CliError = ConfigError::InvalidFormat("csv".to_string()).into();
        assert!(err.to_string().contains("csv"));
    }
}
