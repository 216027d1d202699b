use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// 腫瘤類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TumorType {
    Invasive,
    InSitu,
}

impl TumorType {
    pub const ALL: [TumorType; 2] = [TumorType::Invasive, TumorType::InSitu];

    pub fn as_str(&self) -> &'static str {
        match self {
            TumorType::Invasive => "invasive",
            TumorType::InSitu => "in-situ",
        }
    }

    pub fn from_canonical(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TumorSubtype {
    Ductal,
    Lobular,
    Other,
}

impl TumorSubtype {
    pub const ALL: [TumorSubtype; 3] = [
        TumorSubtype::Ductal,
        TumorSubtype::Lobular,
        TumorSubtype::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TumorSubtype::Ductal => "ductal",
            TumorSubtype::Lobular => "lobular",
            TumorSubtype::Other => "other",
        }
    }

    pub fn from_canonical(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Clinical stage 0 through 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TumorStage(u8);

impl TumorStage {
    pub const VALID: [i64; 5] = [0, 1, 2, 3, 4];

    pub fn new(value: i64) -> Option<Self> {
        Self::VALID
            .contains(&value)
            .then(|| TumorStage(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for TumorStage {
    type Error = String;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("tumor stage out of range: {}", value))
    }
}

impl From<TumorStage> for i64 {
    fn from(stage: TumorStage) -> Self {
        i64::from(stage.0)
    }
}

/// Histological grade 1 through 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TumorGrade(u8);

impl TumorGrade {
    pub const VALID: [i64; 3] = [1, 2, 3];

    pub fn new(value: i64) -> Option<Self> {
        Self::VALID
            .contains(&value)
            .then(|| TumorGrade(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for TumorGrade {
    type Error = String;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("tumor grade out of range: {}", value))
    }
}

impl From<TumorGrade> for i64 {
    fn from(grade: TumorGrade) -> Self {
        i64::from(grade.0)
    }
}

/// ER / PR / HER2 receptor result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceptorStatus {
    Positive,
    Negative,
}

impl ReceptorStatus {
    pub const ALL: [ReceptorStatus; 2] = [ReceptorStatus::Positive, ReceptorStatus::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReceptorStatus::Positive => "positive",
            ReceptorStatus::Negative => "negative",
        }
    }

    pub fn from_canonical(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, ReceptorStatus::Positive)
    }
}

/// Nodal involvement, clinical (cN) or pathological (pN).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LymphNodeStatus {
    #[serde(rename = "cN0")]
    CN0,
    #[serde(rename = "cN1")]
    CN1,
    #[serde(rename = "cN2")]
    CN2,
    #[serde(rename = "cN3")]
    CN3,
    #[serde(rename = "pN0")]
    PN0,
    #[serde(rename = "pN1")]
    PN1,
    #[serde(rename = "pN2")]
    PN2,
    #[serde(rename = "pN3")]
    PN3,
}

impl LymphNodeStatus {
    pub const ALL: [LymphNodeStatus; 8] = [
        LymphNodeStatus::CN0,
        LymphNodeStatus::CN1,
        LymphNodeStatus::CN2,
        LymphNodeStatus::CN3,
        LymphNodeStatus::PN0,
        LymphNodeStatus::PN1,
        LymphNodeStatus::PN2,
        LymphNodeStatus::PN3,
    ];

    /// 正規化後 (小寫) 的表示
    pub fn as_str(&self) -> &'static str {
        match self {
            LymphNodeStatus::CN0 => "cn0",
            LymphNodeStatus::CN1 => "cn1",
            LymphNodeStatus::CN2 => "cn2",
            LymphNodeStatus::CN3 => "cn3",
            LymphNodeStatus::PN0 => "pn0",
            LymphNodeStatus::PN1 => "pn1",
            LymphNodeStatus::PN2 => "pn2",
            LymphNodeStatus::PN3 => "pn3",
        }
    }

    /// TNM notation, e.g. `cN1`.
    pub fn label(&self) -> &'static str {
        match self {
            LymphNodeStatus::CN0 => "cN0",
            LymphNodeStatus::CN1 => "cN1",
            LymphNodeStatus::CN2 => "cN2",
            LymphNodeStatus::CN3 => "cN3",
            LymphNodeStatus::PN0 => "pN0",
            LymphNodeStatus::PN1 => "pN1",
            LymphNodeStatus::PN2 => "pN2",
            LymphNodeStatus::PN3 => "pN3",
        }
    }

    pub fn from_canonical(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn is_pathological(&self) -> bool {
        matches!(
            self,
            LymphNodeStatus::PN0 | LymphNodeStatus::PN1 | LymphNodeStatus::PN2 | LymphNodeStatus::PN3
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneticRisk {
    Low,
    High,
}

impl GeneticRisk {
    pub const ALL: [GeneticRisk; 2] = [GeneticRisk::Low, GeneticRisk::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            GeneticRisk::Low => "low",
            GeneticRisk::High => "high",
        }
    }

    pub fn from_canonical(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

/// Input fields in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    TumorType,
    TumorSubtype,
    TumorStage,
    TumorGrade,
    ErStatus,
    PrStatus,
    Her2Status,
    LymphNodeStatus,
    GeneticRisk,
}

impl InputField {
    pub const VALIDATION_ORDER: [InputField; 9] = [
        InputField::TumorType,
        InputField::TumorSubtype,
        InputField::TumorStage,
        InputField::TumorGrade,
        InputField::ErStatus,
        InputField::PrStatus,
        InputField::Her2Status,
        InputField::LymphNodeStatus,
        InputField::GeneticRisk,
    ];

    /// Name used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            InputField::TumorType => "tumor type",
            InputField::TumorSubtype => "tumor subtype",
            InputField::TumorStage => "tumor stage",
            InputField::TumorGrade => "tumor grade",
            InputField::ErStatus => "ER status",
            InputField::PrStatus => "PR status",
            InputField::Her2Status => "HER2 status",
            InputField::LymphNodeStatus => "lymph node status",
            InputField::GeneticRisk => "genetic risk",
        }
    }

    pub fn valid_options(&self) -> &'static str {
        match self {
            InputField::TumorType => "'Invasive' or 'In-situ'",
            InputField::TumorSubtype => "'Ductal', 'Lobular', or 'Other'",
            InputField::TumorStage => "0, 1, 2, 3, or 4",
            InputField::TumorGrade => "1, 2, or 3",
            InputField::ErStatus | InputField::PrStatus | InputField::Her2Status => {
                "'Positive' or 'Negative'"
            }
            InputField::LymphNodeStatus => {
                "'cN0', 'cN1', 'cN2', 'cN3', 'pN0', 'pN1', 'pN2', or 'pN3'"
            }
            InputField::GeneticRisk => "'Low', 'High', or None",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Patient inputs as supplied by the caller, before normalization.
///
/// Stage and grade are already integers; parsing them out of text is the
/// caller's job (see [`crate::domain::intake::PatientForm`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPatientInputs {
    pub tumor_type: String,
    pub tumor_subtype: String,
    pub tumor_stage: i64,
    pub tumor_grade: i64,
    pub er_status: String,
    pub pr_status: String,
    pub her2_status: String,
    pub lymph_node_status: String,
    #[serde(default)]
    pub genetic_risk: Option<String>,
}

/// Validated, typed patient inputs. Only the validator constructs these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatientInputs {
    pub tumor_type: TumorType,
    pub tumor_subtype: TumorSubtype,
    pub tumor_stage: TumorStage,
    pub tumor_grade: TumorGrade,
    pub er_status: ReceptorStatus,
    pub pr_status: ReceptorStatus,
    pub her2_status: ReceptorStatus,
    pub lymph_node_status: LymphNodeStatus,
    pub genetic_risk: Option<GeneticRisk>,
}

impl PatientInputs {
    pub fn is_triple_negative(&self) -> bool {
        !self.er_status.is_positive() && !self.pr_status.is_positive() && !self.her2_status.is_positive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentPlan {
    /// Recommendations in the order they should be carried out.
    pub treatment: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub side_effects: Option<BTreeSet<String>>,
}

impl fmt::Display for TreatmentPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Treatment Plan: {}", self.treatment.join(", "))?;
        if let Some(effects) = &self.side_effects {
            let effects: Vec<&str> = effects.iter().map(String::as_str).collect();
            write!(f, "\nSide Effects: {}", effects.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_and_grade_domains() {
        assert!(TumorStage::new(0).is_some());
        assert!(TumorStage::new(4).is_some());
        assert!(TumorStage::new(5).is_none());
        assert!(TumorStage::new(-1).is_none());
        assert!(TumorGrade::new(0).is_none());
        assert_eq!(TumorGrade::new(3).map(|g| g.value()), Some(3));
    }

    #[test]
    fn test_canonical_lookup() {
        assert_eq!(TumorType::from_canonical("in-situ"), Some(TumorType::InSitu));
        assert_eq!(TumorType::from_canonical("In-situ"), None);
        assert_eq!(LymphNodeStatus::from_canonical("pn2"), Some(LymphNodeStatus::PN2));
        assert_eq!(LymphNodeStatus::PN2.label(), "pN2");
        assert!(LymphNodeStatus::PN2.is_pathological());
        assert!(!LymphNodeStatus::CN0.is_pathological());
    }

    #[test]
    fn test_plan_display() {
        let plan = TreatmentPlan {
            treatment: vec!["A.".to_string(), "B.".to_string()],
            side_effects: Some(["Nausea".to_string(), "Fatigue".to_string()].into()),
        };
        assert_eq!(
            plan.to_string(),
            "Treatment Plan: A., B.\nSide Effects: Fatigue, Nausea"
        );

        let plan = TreatmentPlan {
            treatment: vec!["A.".to_string()],
            side_effects: None,
        };
        assert_eq!(plan.to_string(), "Treatment Plan: A.");
    }

    #[test]
    fn test_plan_json_omits_missing_side_effects() {
        let plan = TreatmentPlan {
            treatment: vec!["A.".to_string()],
            side_effects: None,
        };
        let json = serde_json::to_value(&plan).unwrap();
        assert!(json.get("side_effects").is_none());
    }
}
