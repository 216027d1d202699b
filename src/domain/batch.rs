use crate::domain::intake::PatientForm;
use crate::domain::model::TreatmentPlan;
use serde::{Deserialize, Serialize};

/// One row of a batch case file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub case_id: String,
    pub tumor_type: String,
    pub tumor_subtype: String,
    pub tumor_stage: String,
    pub tumor_grade: String,
    pub er_status: String,
    pub pr_status: String,
    pub her2_status: String,
    pub lymph_node_status: String,
    #[serde(default)]
    pub genetic_risk: Option<String>,
}

impl CaseRecord {
    pub fn into_parts(self) -> (String, PatientForm) {
        let form = PatientForm {
            tumor_type: self.tumor_type,
            tumor_subtype: self.tumor_subtype,
            tumor_stage: self.tumor_stage,
            tumor_grade: self.tumor_grade,
            er_status: self.er_status,
            pr_status: self.pr_status,
            her2_status: self.her2_status,
            lymph_node_status: self.lymph_node_status,
            genetic_risk: self.genetic_risk,
        };
        (self.case_id, form)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Planned,
    Rejected,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Planned => "planned",
            CaseStatus::Rejected => "rejected",
        }
    }
}

/// Either a plan or the message explaining why there is none; never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseOutcome {
    pub case_id: String,
    pub status: CaseStatus,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub plan: Option<TreatmentPlan>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl CaseOutcome {
    pub fn planned(case_id: String, plan: TreatmentPlan) -> Self {
        Self {
            case_id,
            status: CaseStatus::Planned,
            plan: Some(plan),
            error: None,
        }
    }

    pub fn rejected(case_id: String, error: String) -> Self {
        Self {
            case_id,
            status: CaseStatus::Rejected,
            plan: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub outcomes: Vec<CaseOutcome>,
}

impl BatchResult {
    pub fn planned_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == CaseStatus::Planned)
            .count()
    }

    pub fn rejected_count(&self) -> usize {
        self.outcomes.len() - self.planned_count()
    }
}
