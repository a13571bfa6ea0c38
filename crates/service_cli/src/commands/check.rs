//! Check command implementation
//!
//! Validates a study file and its overrides without running an estimation.

use tracing::info;

use super::load_study;
use crate::config::{CliArgs, StudyConfig};
use crate::Result;

/// Validate everything the analyze command would check before estimating
pub fn check(study: &StudyConfig) -> Result<()> {
    let config = study.estimator_config()?;
    for set in study.index_sets()? {
        config.with_index_set(set)?;
    }
    Ok(())
}

/// Run the check command
pub fn run(args: &CliArgs) -> Result<()> {
    let study = load_study(args)?;
    check(&study)?;

    info!(model = %study.model, "Study is valid");
    println!(
        "OK: model {} with {} parameters, {} index set(s), n_mc {}",
        study.model,
        study.uncertainties.len(),
        1 + study.additional_index_sets.len(),
        study.n_mc
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use std::io::Write;

    fn write_study(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_check_valid_study_file() {
        let file = write_study(
            r#"
            model = "ishigami"
            index_set = [1, 3]
            additional_index_sets = [[2]]
            uncertainties = [
                { params = [-3.14159, 3.14159] },
                { params = [-3.14159, 3.14159] },
                { params = [-3.14159, 3.14159] },
            ]
            "#,
        );
        let args = CliArgs {
            study_file: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(run(&args).is_ok());
    }

    #[test]
    fn test_check_rejects_wrong_arity() {
        let file = write_study(
            r#"
            uncertainties = [
                { family = "triangular", params = [0.0, 1.0] },
                { params = [0.0, 1.0] },
            ]
            "#,
        );
        let args = CliArgs {
            study_file: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(run(&args), Err(CliError::Study(_))));
    }

    #[test]
    fn test_check_rejects_additional_set_out_of_range() {
        let study = StudyConfig {
            additional_index_sets: vec![vec![0]],
            ..Default::default()
        };
        assert!(matches!(check(&study), Err(CliError::Study(_))));
    }

    #[test]
    fn test_check_rejects_malformed_toml() {
        let file = write_study("n_mc = \"many\"");
        let args = CliArgs {
            study_file: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(run(&args), Err(CliError::Config(_))));
    }
}
