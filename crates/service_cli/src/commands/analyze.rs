//! Analyze command implementation
//!
//! Estimates lower and total Super Sobol indices for every index set of a
//! study using the sobol_engine crate.

use serde::Serialize;
use sobol_core::models::ReferenceModel;
use sobol_engine::sensitivity::{
    analyze_index_sets, replicate, IndexSet, ReplicatedIndices, SuperSobolIndices,
};
use tracing::info;

use crate::config::{OutputFormat, StudyConfig};
use crate::Result;

/// Indices of one index set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexRow {
    pub index_set: IndexSet,
    pub lower: f64,
    pub total: f64,
    /// Present when the study runs more than one replication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_std_error: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_std_error: Option<f64>,
    pub mean: f64,
    pub variance: f64,
}

impl IndexRow {
    fn single(index_set: IndexSet, indices: SuperSobolIndices) -> Self {
        Self {
            index_set,
            lower: indices.lower,
            total: indices.total,
            lower_std_error: None,
            total_std_error: None,
            mean: indices.mean,
            variance: indices.variance,
        }
    }

    fn replicated(index_set: IndexSet, summary: &ReplicatedIndices) -> Self {
        let n = summary.len().max(1) as f64;
        Self {
            index_set,
            lower: summary.lower_mean,
            total: summary.total_mean,
            lower_std_error: Some(summary.lower_std_error),
            total_std_error: Some(summary.total_std_error),
            mean: summary.replications.iter().map(|r| r.mean).sum::<f64>() / n,
            variance: summary.replications.iter().map(|r| r.variance).sum::<f64>() / n,
        }
    }
}

/// Result of a study
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub model: ReferenceModel,
    pub dim: usize,
    pub n_mc: usize,
    pub seed: u64,
    pub replications: usize,
    pub rows: Vec<IndexRow>,
}

/// Estimate every index set of the study
pub fn analyze(study: &StudyConfig) -> Result<AnalysisReport> {
    let config = study.estimator_config()?;
    let index_sets = study.index_sets()?;

    info!(
        model = %study.model,
        dim = config.dim(),
        n_mc = config.n_mc(),
        index_sets = index_sets.len(),
        replications = study.replications,
        "Running sensitivity study"
    );

    let rows = if study.replications > 1 {
        let mut rows = Vec::with_capacity(index_sets.len());
        for set in index_sets {
            let set_config = config.with_index_set(set.clone())?;
            let summary = replicate(&study.model, &set_config, study.replications)?;
            rows.push(IndexRow::replicated(set, &summary));
        }
        rows
    } else {
        let results = analyze_index_sets(&study.model, &config, &index_sets)?;
        index_sets
            .into_iter()
            .zip(results)
            .map(|(set, indices)| IndexRow::single(set, indices))
            .collect()
    };

    Ok(AnalysisReport {
        model: study.model,
        dim: config.dim(),
        n_mc: config.n_mc(),
        seed: config.seed(),
        replications: study.replications,
        rows,
    })
}

/// Render a report as a text table
pub fn render_table(report: &AnalysisReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Model: {}  dim: {}  n_mc: {}  seed: {}  replications: {}\n",
        report.model, report.dim, report.n_mc, report.seed, report.replications
    ));
    out.push_str(&"-".repeat(64));
    out.push('\n');
    out.push_str(&format!(
        "{:<16} {:>10} {:>10} {:>12} {:>12}\n",
        "Index set", "Lower", "Total", "Lower s.e.", "Total s.e."
    ));
    out.push_str(&"-".repeat(64));
    out.push('\n');

    for row in &report.rows {
        let se = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |x| format!("{:.6}", x));
        out.push_str(&format!(
            "{:<16} {:>10.6} {:>10.6} {:>12} {:>12}\n",
            row.index_set.to_string(),
            row.lower,
            row.total,
            se(row.lower_std_error),
            se(row.total_std_error)
        ));
    }
    out.push_str(&"-".repeat(64));
    out.push('\n');
    out
}

/// Run the analyze command
pub fn run(study: &StudyConfig) -> Result<()> {
    let report = analyze(study)?;
    match study.output {
        OutputFormat::Table => print!("{}", render_table(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    info!("Analysis complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SamplingSection;
    use crate::CliError;
    use approx::assert_abs_diff_eq;
    use sobol_core::math::UncertaintyDistribution;
    use sobol_engine::sensitivity::EstimationError;

    fn additive_study() -> StudyConfig {
        StudyConfig {
            n_mc: 20_000,
            index_set: vec![1],
            additional_index_sets: vec![vec![2], vec![1, 2]],
            sampling: SamplingSection {
                seed: 7,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_analyze_additive_study() {
        let report = analyze(&additive_study()).unwrap();
        assert_eq!(report.dim, 2);
        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.rows[0].index_set.to_string(), "{1}");
        assert_abs_diff_eq!(report.rows[0].lower, 0.5, epsilon = 0.05);
        assert_abs_diff_eq!(report.rows[1].total, 0.5, epsilon = 0.05);
        assert_abs_diff_eq!(report.rows[2].lower, 1.0, epsilon = 0.05);
        assert!(report.rows[0].lower_std_error.is_none());
    }

    #[test]
    fn test_analyze_with_replications() {
        let study = StudyConfig {
            n_mc: 2_000,
            replications: 3,
            ..Default::default()
        };
        let report = analyze(&study).unwrap();
        assert_eq!(report.rows.len(), 1);
        assert!(report.rows[0].lower_std_error.unwrap() >= 0.0);
        assert!(report.rows[0].total_std_error.is_some());
    }

    #[test]
    fn test_analyze_reports_degenerate_variance() {
        let study = StudyConfig {
            n_mc: 100,
            uncertainties: vec![UncertaintyDistribution::point_mass(1.0); 2],
            ..Default::default()
        };
        assert!(matches!(
            analyze(&study),
            Err(CliError::Estimation(EstimationError::DegenerateVariance { .. }))
        ));
    }

    #[test]
    fn test_analyze_rejects_out_of_range_set() {
        let study = StudyConfig {
            additional_index_sets: vec![vec![3]],
            ..Default::default()
        };
        assert!(matches!(
            analyze(&study),
            Err(CliError::Estimation(EstimationError::Config(_)))
        ));
    }

    #[test]
    fn test_render_table_and_json() {
        let study = StudyConfig {
            n_mc: 1_000,
            ..Default::default()
        };
        let report = analyze(&study).unwrap();

        let table = render_table(&report);
        assert!(table.starts_with("Model: additive"));
        assert!(table.contains("{1}"));
        assert!(table.contains("Lower s.e."));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["model"], "additive");
        assert_eq!(json["rows"][0]["index_set"], serde_json::json!([1]));
        assert!(json["rows"][0].get("lower_std_error").is_none());
    }
}
