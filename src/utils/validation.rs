use crate::utils::error::{NavigatorError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(NavigatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(NavigatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NavigatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_allowed_value(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(NavigatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_single_ascii_char(field_name: &str, value: &str) -> Result<()> {
    if value.len() != 1 || !value.is_ascii() {
        return Err(NavigatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Must be exactly one ASCII character".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("load.output_path", "./plans").is_ok());
        assert!(validate_path("load.output_path", "  ").is_err());
        assert!(validate_path("load.output_path", "a\0b").is_err());
    }

    #[test]
    fn test_validate_allowed_value() {
        assert!(validate_allowed_value("load.output_formats", "csv", &["csv", "json"]).is_ok());
        let err = validate_allowed_value("load.output_formats", "tsv", &["csv", "json"]).unwrap_err();
        assert!(err.to_string().contains("csv, json"));
    }

    #[test]
    fn test_validate_single_ascii_char() {
        assert!(validate_single_ascii_char("source.delimiter", ";").is_ok());
        assert!(validate_single_ascii_char("source.delimiter", ";;").is_err());
        assert!(validate_single_ascii_char("source.delimiter", "").is_err());
        assert!(validate_single_ascii_char("source.delimiter", "é").is_err());
    }
}
