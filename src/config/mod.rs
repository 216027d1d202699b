pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::intake::PatientForm;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// Single-patient command line. Stage and grade stay text here so that a
/// non-numeric value is reported as a parse problem, not a domain error.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "treatment-navigator")]
#[command(about = "Staged breast cancer treatment recommendations from tumor and biomarker data")]
pub struct CliConfig {
    /// Invasive or In-situ
    #[arg(long)]
    pub tumor_type: String,

    /// Ductal, Lobular, or Other
    #[arg(long)]
    pub tumor_subtype: String,

    /// 0-4
    #[arg(long, allow_hyphen_values = true)]
    pub tumor_stage: String,

    /// 1-3
    #[arg(long, allow_hyphen_values = true)]
    pub tumor_grade: String,

    /// Positive/Negative, or + / -
    #[arg(long, allow_hyphen_values = true)]
    pub er_status: String,

    #[arg(long, allow_hyphen_values = true)]
    pub pr_status: String,

    #[arg(long, allow_hyphen_values = true)]
    pub her2_status: String,

    /// cN0-cN3 or pN0-pN3
    #[arg(long)]
    pub lymph_node_status: String,

    /// Low, High, or None
    #[arg(long)]
    pub genetic_risk: Option<String>,

    #[arg(long, help = "Also list expected side effects")]
    pub side_effects: bool,

    #[arg(long, help = "Print the plan as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn to_form(&self) -> PatientForm {
        PatientForm {
            tumor_type: self.tumor_type.clone(),
            tumor_subtype: self.tumor_subtype.clone(),
            tumor_stage: self.tumor_stage.clone(),
            tumor_grade: self.tumor_grade.clone(),
            er_status: self.er_status.clone(),
            pr_status: self.pr_status.clone(),
            her2_status: self.her2_status.clone(),
            lymph_node_status: self.lymph_node_status.clone(),
            genetic_risk: self.genetic_risk.clone(),
        }
    }
}
