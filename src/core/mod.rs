pub mod engine;
pub mod navigator;
pub mod normalizer;
pub mod rules;
pub mod side_effects;
pub mod validator;

pub use crate::domain::batch::{BatchResult, CaseOutcome, CaseRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
