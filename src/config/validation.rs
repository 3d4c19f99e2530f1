//! Configuration validation logic
//!
//! Pagination rules are declared with `validator` derives on the settings
//! structs; this module turns their reports into [`ConfigError`]s and adds
//! the logger checks.

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::config::error::ConfigError;
use crate::config::settings::{LoggerSettings, Settings};
use crate::logger::VALID_LOG_LEVELS;

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

/// Every offered page size must select at least one record.
pub fn validate_page_sizes(sizes: &[u32]) -> Result<(), ValidationError> {
    if sizes.contains(&0) {
        return Err(ValidationError::new("page_size_zero")
            .with_message(Cow::Borrowed("Page sizes must be greater than 0")));
    }
    Ok(())
}

/// Flatten a (possibly nested) `validator` report into `(dotted.field, message)`
/// pairs sorted by field name.
fn flatten_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<(String, String)>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("failed '{}' check", error.code));
                    out.push((path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten_errors(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten_errors(&format!("{path}[{index}]"), nested, out);
                }
            }
        }
    }
}

/// Convert a `validator` report rooted at `section` into the first failing
/// field, in field-name order.
pub fn into_config_error(section: &str, errors: &ValidationErrors) -> ConfigError {
    let mut flattened = Vec::new();
    flatten_errors(section, errors, &mut flattened);
    flattened.sort();

    match flattened.into_iter().next() {
        Some((field, message)) => ConfigError::validation(field, message),
        None => ConfigError::validation(section.to_string(), "validation failed".to_string()),
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - Log format must be one of: full, compact, json
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl Settings {
    /// Validate all configuration settings, returning the first error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Validate::validate(&self.pagination).map_err(|e| into_config_error("pagination", &e))?;
        self.logger.validate()?;
        Ok(())
    }
}
