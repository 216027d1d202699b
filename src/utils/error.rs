use crate::domain::model::InputField;
use thiserror::Error;

/// 輸入欄位不在允許範圍內。訊息原樣顯示給使用者。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: InputField,
    pub value: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: InputField, value: impl Into<String>) -> Self {
        let value = value.into();
        let message = format!(
            "Invalid {}: {}. Valid options are {}.",
            field.label(),
            value,
            field.valid_options()
        );
        Self {
            field,
            value,
            message,
        }
    }
}

#[derive(Error, Debug)]
pub enum NavigatorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Please enter valid numeric values for Tumor Stage and Tumor Grade.")]
    UpstreamParse { field: InputField, value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NavigatorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NavigatorError::Validation(_) | NavigatorError::UpstreamParse { .. } => {
                ErrorCategory::Input
            }
            NavigatorError::TomlParseError(_)
            | NavigatorError::ConfigError { .. }
            | NavigatorError::InvalidConfigValueError { .. }
            | NavigatorError::MissingConfigError { .. } => ErrorCategory::Configuration,
            NavigatorError::IoError(_) => ErrorCategory::Io,
            NavigatorError::CsvError(_)
            | NavigatorError::SerializationError(_)
            | NavigatorError::ProcessingError { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            NavigatorError::Validation(e) => e.message.clone(),
            NavigatorError::UpstreamParse { .. } => self.to_string(),
            NavigatorError::IoError(e) => format!("Could not access a file: {}", e),
            NavigatorError::CsvError(e) => format!("The case file could not be read: {}", e),
            NavigatorError::TomlParseError(_)
            | NavigatorError::ConfigError { .. }
            | NavigatorError::InvalidConfigValueError { .. }
            | NavigatorError::MissingConfigError { .. } => {
                format!("Configuration problem: {}", self)
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            NavigatorError::Validation(e) => {
                format!("Correct the {} and try again", e.field.label())
            }
            NavigatorError::UpstreamParse { field, value } => {
                format!("Enter a whole number for {} (got '{}')", field.label(), value)
            }
            NavigatorError::IoError(_) => {
                "Check that the path exists and is readable/writable".to_string()
            }
            NavigatorError::CsvError(_) => {
                "Check the CSV header and that every row has the same number of columns"
                    .to_string()
            }
            NavigatorError::SerializationError(_) => {
                "Report this issue; the output could not be encoded".to_string()
            }
            NavigatorError::TomlParseError(_) => {
                "Make sure the configuration file is valid TOML".to_string()
            }
            NavigatorError::ConfigError { .. }
            | NavigatorError::InvalidConfigValueError { .. }
            | NavigatorError::MissingConfigError { .. } => {
                "Review the configuration file against the documented sections".to_string()
            }
            NavigatorError::ProcessingError { .. } => {
                "Fix the offending case or disable stop_on_invalid".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, NavigatorError>;
