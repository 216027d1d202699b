use crate::core::navigator::compute_treatment;
use crate::core::{BatchResult, CaseOutcome, CaseRecord, ConfigProvider, Pipeline, Storage};
use crate::utils::error::{NavigatorError, Result};
use serde::Serialize;

pub const CSV_FILENAME: &str = "plans.csv";
pub const JSON_FILENAME: &str = "plans.json";

/// Evaluates every case in a CSV file and writes the plans back out.
pub struct BatchPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

#[derive(Debug, Serialize)]
struct BatchReport<'a> {
    generated_at: chrono::DateTime<chrono::Utc>,
    total: usize,
    planned: usize,
    rejected: usize,
    side_effects_included: bool,
    outcomes: &'a [CaseOutcome],
}

#[derive(Debug, Serialize)]
struct PlanRow<'a> {
    case_id: &'a str,
    status: &'a str,
    treatment: String,
    side_effects: String,
    error: &'a str,
}

impl<S: Storage, C: ConfigProvider> BatchPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn parse_cases(&self, data: &[u8]) -> Result<Vec<CaseRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter())
            .trim(csv::Trim::Headers)
            .from_reader(data);

        let mut cases = Vec::new();
        for row in reader.deserialize::<CaseRecord>() {
            cases.push(row?);
        }
        Ok(cases)
    }

    fn evaluate_case(&self, case: CaseRecord) -> Result<CaseOutcome> {
        let (case_id, form) = case.into_parts();

        let outcome = form
            .into_raw()
            .and_then(|raw| {
                compute_treatment(&raw, self.config.include_side_effects()).map_err(Into::into)
            });

        match outcome {
            Ok(plan) => Ok(CaseOutcome::planned(case_id, plan)),
            Err(e) if self.config.stop_on_invalid() => Err(NavigatorError::ProcessingError {
                message: format!("case '{}': {}", case_id, e),
            }),
            Err(e) => {
                tracing::warn!("⚠️ Case '{}' rejected: {}", case_id, e);
                Ok(CaseOutcome::rejected(case_id, e.to_string()))
            }
        }
    }

    fn render_csv(&self, result: &BatchResult) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        for outcome in &result.outcomes {
            let (treatment, side_effects) = match &outcome.plan {
                Some(plan) => (
                    plan.treatment.join(" | "),
                    plan.side_effects
                        .as_ref()
                        .map(|effects| effects.iter().cloned().collect::<Vec<_>>().join("; "))
                        .unwrap_or_default(),
                ),
                None => (String::new(), String::new()),
            };

            writer.serialize(PlanRow {
                case_id: &outcome.case_id,
                status: outcome.status.as_str(),
                treatment,
                side_effects,
                error: outcome.error.as_deref().unwrap_or(""),
            })?;
        }

        writer
            .into_inner()
            .map_err(|e| NavigatorError::IoError(e.into_error()))
    }

    fn render_json(&self, result: &BatchResult) -> Result<Vec<u8>> {
        let report = BatchReport {
            generated_at: chrono::Utc::now(),
            total: result.outcomes.len(),
            planned: result.planned_count(),
            rejected: result.rejected_count(),
            side_effects_included: self.config.include_side_effects(),
            outcomes: &result.outcomes,
        };
        Ok(serde_json::to_vec_pretty(&report)?)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for BatchPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<CaseRecord>> {
        tracing::debug!("Reading cases from: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path()).await?;
        self.parse_cases(&data)
    }

    async fn transform(&self, cases: Vec<CaseRecord>) -> Result<BatchResult> {
        let mut result = BatchResult::default();
        for case in cases {
            result.outcomes.push(self.evaluate_case(case)?);
        }
        Ok(result)
    }

    async fn load(&self, result: BatchResult) -> Result<String> {
        let mut written = Vec::new();

        for format in self.config.output_formats() {
            let (filename, data) = match format.as_str() {
                "csv" => (CSV_FILENAME, self.render_csv(&result)?),
                "json" => (JSON_FILENAME, self.render_json(&result)?),
                other => {
                    return Err(NavigatorError::InvalidConfigValueError {
                        field: "load.output_formats".to_string(),
                        value: other.to_string(),
                        reason: "Unsupported format".to_string(),
                    })
                }
            };

            self.storage.write_file(filename, &data).await?;
            tracing::info!("💾 Wrote {} ({} bytes)", filename, data.len());
            written.push(filename);
        }

        Ok(format!("{}/{{{}}}", self.config.output_path(), written.join(",")))
    }
}
