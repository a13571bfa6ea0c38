//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod analyze;
pub mod check;
pub mod models;

use crate::config::{build_config, CliArgs, StudyConfig};
use crate::{CliError, Result};

/// Resolve the study from file, environment and arguments
pub fn load_study(args: &CliArgs) -> Result<StudyConfig> {
    if let Some(path) = &args.study_file {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
    }
    Ok(build_config(args)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_load_study_missing_file() {
        let args = CliArgs {
            study_file: Some(PathBuf::from("/nonexistent/study.toml")),
            ..Default::default()
        };
        assert!(matches!(load_study(&args), Err(CliError::FileNotFound(_))));
    }

    #[test]
    fn test_load_study_invalid_override() {
        let args = CliArgs {
            format: Some("xml".to_string()),
            ..Default::default()
        };
        assert!(matches!(load_study(&args), Err(CliError::Config(_))));
    }
}
