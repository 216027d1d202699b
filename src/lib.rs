pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{cli::LocalStorage, toml_config::BatchConfig};

pub use crate::app::pipelines::BatchPipeline;
pub use crate::core::{engine::NavigatorEngine, navigator::compute_treatment};
pub use crate::domain::intake::PatientForm;
pub use crate::domain::model::{PatientInputs, RawPatientInputs, TreatmentPlan};
pub use crate::utils::error::{NavigatorError, Result, ValidationError};
