//! Canonical text forms for patient inputs.
//!
//! Every text field is trimmed and lowercased. Receptor statuses are then
//! mapped through [`RECEPTOR_ALIASES`]; only a whole-token match is rewritten,
//! so a `-` inside some unrelated value is never turned into "negative".

use crate::domain::model::RawPatientInputs;

/// Accepted receptor-status spellings and their canonical form.
pub const RECEPTOR_ALIASES: &[(&str, &str)] = &[
    ("+", "positive"),
    ("pos", "positive"),
    ("positive", "positive"),
    ("-", "negative"),
    ("neg", "negative"),
    ("negative", "negative"),
];

/// Patient inputs after normalization; not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInputs {
    pub tumor_type: String,
    pub tumor_subtype: String,
    pub tumor_stage: i64,
    pub tumor_grade: i64,
    pub er_status: String,
    pub pr_status: String,
    pub her2_status: String,
    pub lymph_node_status: String,
    pub genetic_risk: Option<String>,
}

pub fn normalize_text(value: &str) -> String {
    value.trim().to_lowercase()
}

pub fn normalize_receptor(value: &str) -> String {
    let text = normalize_text(value);
    RECEPTOR_ALIASES
        .iter()
        .find(|(alias, _)| *alias == text)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(text)
}

pub fn normalize(raw: &RawPatientInputs) -> NormalizedInputs {
    let normalized = NormalizedInputs {
        tumor_type: normalize_text(&raw.tumor_type),
        tumor_subtype: normalize_text(&raw.tumor_subtype),
        tumor_stage: raw.tumor_stage,
        tumor_grade: raw.tumor_grade,
        er_status: normalize_receptor(&raw.er_status),
        pr_status: normalize_receptor(&raw.pr_status),
        her2_status: normalize_receptor(&raw.her2_status),
        lymph_node_status: normalize_text(&raw.lymph_node_status),
        genetic_risk: raw.genetic_risk.as_deref().map(normalize_text),
    };
    tracing::debug!("Normalized inputs: {:?}", normalized);
    normalized
}

impl From<NormalizedInputs> for RawPatientInputs {
    fn from(n: NormalizedInputs) -> Self {
        RawPatientInputs {
            tumor_type: n.tumor_type,
            tumor_subtype: n.tumor_subtype,
            tumor_stage: n.tumor_stage,
            tumor_grade: n.tumor_grade,
            er_status: n.er_status,
            pr_status: n.pr_status,
            her2_status: n.her2_status,
            lymph_node_status: n.lymph_node_status,
            genetic_risk: n.genetic_risk,
        }
    }
}
