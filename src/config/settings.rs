//! Settings structures loaded from TOML files and `PAGER_*` environment
//! variables.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, LogFormat, LoggerConfig};
use crate::pagination::DEFAULT_PAGE_SIZES;
use crate::render::{DEFAULT_COUNTER_TEMPLATE, DEFAULT_PAGESIZER_TEMPLATE, DEFAULT_PAGINATOR_TEMPLATE};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "pager-rs".to_string()
}

fn default_true() -> bool {
    true
}

fn default_page_size() -> u32 {
    10
}

fn default_range_size() -> u32 {
    5
}

fn default_page_sizes() -> Vec<u32> {
    DEFAULT_PAGE_SIZES.to_vec()
}

fn default_paginator() -> TemplateSettings {
    TemplateSettings::new(DEFAULT_PAGINATOR_TEMPLATE)
}

fn default_pagesizer() -> TemplateSettings {
    TemplateSettings::new(DEFAULT_PAGESIZER_TEMPLATE)
}

fn default_counter() -> TemplateSettings {
    TemplateSettings::new(DEFAULT_COUNTER_TEMPLATE)
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

// ============================================================================
// Application
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            name: default_app_name(),
        }
    }
}

// ============================================================================
// Pagination
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Persist and restore pagination values through the registry
    #[serde(default = "default_true")]
    pub auto_register: bool,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            auto_register: default_true(),
        }
    }
}

/// Template used by one of the renderer factories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TemplateSettings {
    #[validate(length(min = 1, message = "Template name cannot be empty"))]
    pub template: String,
}

impl TemplateSettings {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

/// Fallbacks applied when a request carries no usable value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PaginationDefaults {
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, message = "Page size must be at least 1"))]
    pub page_size: u32,

    #[serde(default = "default_range_size")]
    #[validate(range(min = 3, message = "Range size must be at least 3"))]
    pub range_size: u32,

    #[serde(default = "default_page_sizes")]
    #[validate(
        length(min = 1, message = "At least one page size is required"),
        custom(function = "crate::config::validation::validate_page_sizes")
    )]
    pub page_sizes: Vec<u32>,
}

impl Default for PaginationDefaults {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            range_size: default_range_size(),
            page_sizes: default_page_sizes(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PaginationSettings {
    #[serde(default)]
    pub globals: GlobalSettings,

    #[serde(default = "default_paginator")]
    #[validate(nested)]
    pub paginator: TemplateSettings,

    #[serde(default = "default_pagesizer")]
    #[validate(nested)]
    pub pagesizer: TemplateSettings,

    #[serde(default = "default_counter")]
    #[validate(nested)]
    pub counter: TemplateSettings,

    #[serde(default)]
    #[validate(nested)]
    pub defaults: PaginationDefaults,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            globals: GlobalSettings::default(),
            paginator: default_paginator(),
            pagesizer: default_pagesizer(),
            counter: default_counter(),
            defaults: PaginationDefaults::default(),
        }
    }
}

// ============================================================================
// Logger
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,

    #[serde(default)]
    pub console: ConsoleSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: ConsoleSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert the file representation into the runtime [`LoggerConfig`]
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format = self
            .format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::validation("logger.format".to_string(), e.to_string()))?;
        let console = ConsoleConfig::new(self.console.enabled, self.console.colored);

        LoggerConfig::new(console, format, self.level)
            .map_err(|e| ConfigError::validation("logger.level".to_string(), e.to_string()))
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationSettings,

    #[serde(default)]
    pub pagination: PaginationSettings,

    #[serde(default)]
    pub logger: LoggerSettings,
}
