//! Models command implementation
//!
//! Lists the reference models and uncertainty distribution families a study
//! file can name.

use sobol_core::math::DistributionFamily;
use sobol_core::models::ReferenceModel;

/// Listing of models and distribution families
pub fn listing() -> String {
    let mut out = String::new();
    out.push_str("Reference models:\n");
    out.push_str(&format!("{:<20} {:<6} {}\n", "Name", "Dim", "Description"));
    for model in ReferenceModel::ALL {
        let dim = model
            .fixed_dimension()
            .map_or_else(|| "any".to_string(), |d| d.to_string());
        out.push_str(&format!(
            "{:<20} {:<6} {}\n",
            model.name(),
            dim,
            model.description()
        ));
    }

    out.push('\n');
    out.push_str("Distribution families:\n");
    out.push_str(&format!("{:<20} {}\n", "Family", "Parameters"));
    for family in DistributionFamily::ALL {
        out.push_str(&format!("{:<20} {}\n", family.name(), family.arity()));
    }
    out
}

/// Run the models command
pub fn run() {
    print!("{}", listing());
}
