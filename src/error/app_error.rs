use thiserror::Error;

use crate::config::error::ConfigError;

/// Crate-wide error type.
///
/// Window computation fails fast with [`AppError::Configuration`]; rendering
/// failures are normally caught by the render layer and turned into text, so
/// [`AppError::Render`] only escapes from the lower-level entry points.
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid numeric pagination configuration (range size too small,
    /// inconsistent window bounds)
    #[error("Configuration error for {field}: {reason}")]
    Configuration { field: String, reason: String },

    /// A value of the wrong shape was handed to a pagination container
    #[error("Invalid value: {reason}")]
    Value { reason: String },

    /// The rendering collaborator failed
    #[error("Rendering failed")]
    Render {
        #[source]
        source: anyhow::Error,
    },

    /// The registry collaborator failed to read or write a value
    #[error("Registry operation failed for key {key}")]
    Registry {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Loading or validating settings failed
    #[error(transparent)]
    Settings(#[from] ConfigError),

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn configuration(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Configuration {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn value(reason: impl Into<String>) -> Self {
        AppError::Value {
            reason: reason.into(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Internal {
            source: error.into(),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
