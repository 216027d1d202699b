use crate::core::normalizer::NormalizedInputs;
use crate::domain::model::{
    GeneticRisk, InputField, LymphNodeStatus, PatientInputs, ReceptorStatus, TumorGrade,
    TumorStage, TumorSubtype, TumorType,
};
use crate::utils::error::ValidationError;

fn check<T>(
    field: InputField,
    value: &str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<T, ValidationError> {
    parse(value).ok_or_else(|| ValidationError::new(field, value))
}

fn check_number<T>(
    field: InputField,
    value: i64,
    parse: impl FnOnce(i64) -> Option<T>,
) -> Result<T, ValidationError> {
    parse(value).ok_or_else(|| ValidationError::new(field, value.to_string()))
}

/// Checks every field against its domain, in [`InputField::VALIDATION_ORDER`],
/// and stops at the first one that fails.
pub fn validate(inputs: &NormalizedInputs) -> Result<PatientInputs, ValidationError> {
    let tumor_type = check(InputField::TumorType, &inputs.tumor_type, TumorType::from_canonical)?;
    let tumor_subtype = check(
        InputField::TumorSubtype,
        &inputs.tumor_subtype,
        TumorSubtype::from_canonical,
    )?;
    let tumor_stage = check_number(InputField::TumorStage, inputs.tumor_stage, TumorStage::new)?;
    let tumor_grade = check_number(InputField::TumorGrade, inputs.tumor_grade, TumorGrade::new)?;
    let er_status = check(InputField::ErStatus, &inputs.er_status, ReceptorStatus::from_canonical)?;
    let pr_status = check(InputField::PrStatus, &inputs.pr_status, ReceptorStatus::from_canonical)?;
    let her2_status = check(
        InputField::Her2Status,
        &inputs.her2_status,
        ReceptorStatus::from_canonical,
    )?;
    let lymph_node_status = check(
        InputField::LymphNodeStatus,
        &inputs.lymph_node_status,
        LymphNodeStatus::from_canonical,
    )?;
    // 未提供的基因風險是合法狀態
    let genetic_risk = match inputs.genetic_risk.as_deref() {
        None => None,
        Some(value) => Some(check(InputField::GeneticRisk, value, GeneticRisk::from_canonical)?),
    };

    Ok(PatientInputs {
        tumor_type,
        tumor_subtype,
        tumor_stage,
        tumor_grade,
        er_status,
        pr_status,
        her2_status,
        lymph_node_status,
        genetic_risk,
    })
}
