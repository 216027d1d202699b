use crate::core::ConfigProvider;
use crate::utils::error::{NavigatorError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SUPPORTED_FORMATS: [&str; 2] = ["csv", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub batch: BatchInfo,
    pub source: SourceConfig,
    pub evaluation: Option<EvaluationConfig>,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub input_path: String,
    pub delimiter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub include_side_effects: Option<bool>,
    pub stop_on_invalid: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
}

impl BatchConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${CASES_DIR})，未設定的變數保留原文
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NavigatorError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("batch.name", &self.batch.name)?;
        validation::validate_path("source.input_path", &self.source.input_path)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;

        if let Some(delimiter) = &self.source.delimiter {
            validation::validate_single_ascii_char("source.delimiter", delimiter)?;
        }

        if self.load.output_formats.is_empty() {
            return Err(NavigatorError::MissingConfigError {
                field: "load.output_formats".to_string(),
            });
        }
        for format in &self.load.output_formats {
            validation::validate_allowed_value("load.output_formats", format, &SUPPORTED_FORMATS)?;
        }

        Ok(())
    }

    fn evaluation(&self) -> EvaluationConfig {
        self.evaluation.clone().unwrap_or_default()
    }

    pub fn set_include_side_effects(&mut self, include: bool) {
        self.evaluation
            .get_or_insert_with(EvaluationConfig::default)
            .include_side_effects = Some(include);
    }
}

impl ConfigProvider for BatchConfig {
    fn input_path(&self) -> &str {
        &self.source.input_path
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }

    fn include_side_effects(&self) -> bool {
        self.evaluation().include_side_effects.unwrap_or(false)
    }

    fn stop_on_invalid(&self) -> bool {
        self.evaluation().stop_on_invalid.unwrap_or(false)
    }

    fn delimiter(&self) -> u8 {
        self.source
            .delimiter
            .as_deref()
            .and_then(|d| d.bytes().next())
            .unwrap_or(b',')
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
