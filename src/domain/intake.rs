use crate::domain::model::{InputField, RawPatientInputs};
use crate::utils::error::{NavigatorError, Result};
use serde::{Deserialize, Serialize};

/// Patient data as typed into a form or a CSV row: every field is text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientForm {
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

fn parse_integer(field: InputField, text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| NavigatorError::UpstreamParse {
            field,
            value: text.to_string(),
        })
}

/// 空白或 "none" 視為未提供
fn optional_text(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty() && !t.eq_ignore_ascii_case("none"))
        .map(str::to_string)
}

impl PatientForm {
    /// Parses stage and grade; fails with [`NavigatorError::UpstreamParse`]
    /// before any normalization or validation happens.
    pub fn into_raw(self) -> Result<RawPatientInputs> {
        let tumor_stage = parse_integer(InputField::TumorStage, &self.tumor_stage)?;
        let tumor_grade = parse_integer(InputField::TumorGrade, &self.tumor_grade)?;

        Ok(RawPatientInputs {
            tumor_type: self.tumor_type,
            tumor_subtype: self.tumor_subtype,
            tumor_stage,
            tumor_grade,
            er_status: self.er_status,
            pr_status: self.pr_status,
            her2_status: self.her2_status,
            lymph_node_status: self.lymph_node_status,
            genetic_risk: optional_text(self.genetic_risk.as_deref()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PatientForm {
        PatientForm {
            tumor_type: "Invasive".to_string(),
            tumor_subtype: "Lobular".to_string(),
            tumor_stage: " 4 ".to_string(),
            tumor_grade: "3".to_string(),
            er_status: "ER-".to_string(),
            pr_status: "-".to_string(),
            her2_status: "-".to_string(),
            lymph_node_status: "pN2".to_string(),
            genetic_risk: Some("None".to_string()),
        }
    }

    #[test]
    fn test_numeric_fields_are_parsed() {
        let raw = form().into_raw().unwrap();
        assert_eq!(raw.tumor_stage, 4);
        assert_eq!(raw.tumor_grade, 3);
        // 文字欄位保持原樣，交給 normalizer
        assert_eq!(raw.er_status, "ER-");
    }

    #[test]
    fn test_out_of_range_numbers_still_parse() {
        let mut f = form();
        f.tumor_stage = "9".to_string();
        assert_eq!(f.into_raw().unwrap().tumor_stage, 9);
    }

    #[test]
    fn test_non_numeric_stage_is_upstream_error() {
        let mut f = form();
        f.tumor_stage = "IV".to_string();
        match f.into_raw() {
            Err(NavigatorError::UpstreamParse { field, value }) => {
                assert_eq!(field, InputField::TumorStage);
                assert_eq!(value, "IV");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_grade_is_upstream_error() {
        let mut f = form();
        f.tumor_grade = "".to_string();
        assert!(matches!(
            f.into_raw(),
            Err(NavigatorError::UpstreamParse {
                field: InputField::TumorGrade,
                ..
            })
        ));
    }

    #[test]
    fn test_genetic_risk_absence() {
        for text in [None, Some(""), Some("   "), Some("none"), Some("NONE")] {
            let mut f = form();
            f.genetic_risk = text.map(str::to_string);
            assert_eq!(f.into_raw().unwrap().genetic_risk, None);
        }

        let mut f = form();
        f.genetic_risk = Some(" High ".to_string());
        assert_eq!(f.into_raw().unwrap().genetic_risk.as_deref(), Some("High"));
    }
}
