use crate::core::Pipeline;
use crate::utils::error::Result;

/// Drives a [`Pipeline`] through extract, transform and load.
pub struct NavigatorEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> NavigatorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("🚀 Starting batch evaluation");

        let cases = self.pipeline.extract().await?;
        tracing::info!("📥 Read {} case(s)", cases.len());

        let result = self.pipeline.transform(cases).await?;
        tracing::info!(
            "🩺 Evaluated {} case(s): {} planned, {} rejected",
            result.outcomes.len(),
            result.planned_count(),
            result.rejected_count()
        );

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("📁 Output saved to: {}", output_path);

        Ok(output_path)
    }
}
