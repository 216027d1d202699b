use crate::core::{normalizer, rules, side_effects, validator};
use crate::domain::model::{RawPatientInputs, TreatmentPlan};
use crate::utils::error::ValidationError;

/// Normalizes, validates and evaluates one patient.
///
/// A validation failure is returned before any rule runs, so an error never
/// comes with a partial plan. Side effects are only resolved when asked for.
pub fn compute_treatment(
    inputs: &RawPatientInputs,
    include_side_effects: bool,
) -> Result<TreatmentPlan, ValidationError> {
    let normalized = normalizer::normalize(inputs);

    let patient = validator::validate(&normalized).inspect_err(|e| {
        tracing::warn!("❌ Input rejected ({}): {}", e.field, e.message);
    })?;

    let treatment = rules::evaluate(&patient);
    let side_effects = include_side_effects.then(|| side_effects::resolve_side_effects(&treatment));

    tracing::debug!(
        "Plan with {} recommendation(s), side effects requested: {}",
        treatment.len(),
        include_side_effects
    );

    Ok(TreatmentPlan {
        treatment,
        side_effects,
    })
}
