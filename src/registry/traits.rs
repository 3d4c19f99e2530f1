//! Registry trait definition.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppResult;

/// A persisted pagination value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegistryValue {
    Integer(i64),
    Text(String),
}

impl RegistryValue {
    /// Integer view; numeric text is accepted as well.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            RegistryValue::Integer(value) => Some(*value),
            RegistryValue::Text(text) => text.trim().parse().ok(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RegistryValue::Text(text) => Some(text),
            RegistryValue::Integer(_) => None,
        }
    }
}

impl From<i64> for RegistryValue {
    fn from(value: i64) -> Self {
        RegistryValue::Integer(value)
    }
}

impl From<String> for RegistryValue {
    fn from(value: String) -> Self {
        RegistryValue::Text(value)
    }
}

impl From<&str> for RegistryValue {
    fn from(value: &str) -> Self {
        RegistryValue::Text(value.to_string())
    }
}

impl fmt::Display for RegistryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryValue::Integer(value) => write!(f, "{value}"),
            RegistryValue::Text(text) => f.write_str(text),
        }
    }
}

/// Per-user key/value store remembering the last-used pagination values.
///
/// Values are addressed by `(user_id, key, name)`, where `key` identifies the
/// paginated listing and `name` the value (`page`, `pagesize`, ...).
pub trait Registry: Send + Sync {
    fn read(&self, user_id: &str, key: &str, name: &str) -> AppResult<Option<RegistryValue>>;

    fn write(&self, user_id: &str, key: &str, name: &str, value: RegistryValue) -> AppResult<()>;

    /// Read a value, falling back to `default` when nothing is stored.
    fn read_or(&self, user_id: &str, key: &str, name: &str, default: RegistryValue) -> AppResult<RegistryValue> {
        Ok(self.read(user_id, key, name)?.unwrap_or(default))
    }
}
