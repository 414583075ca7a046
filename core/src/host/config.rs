use crate::error::{Result, SpurNoiseError};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Module configuration document
///
/// Only `actions` is interpreted. It stays a raw ordered map so that entries
/// for actions this module does not implement are accepted whatever their
/// shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleConfig {
    #[serde(default)]
    pub actions: Map<String, Value>,
}

impl ModuleConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Filters and parameters of one action
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActionConfig {
    #[serde(default)]
    pub filters: Map<String, Value>,
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl ActionConfig {
    /// Decodes the entry of action `name`
    pub fn from_value(name: &str, value: &Value) -> Result<Self> {
        serde_json::from_value(value.clone())
            .map_err(|e| SpurNoiseError::Config(format!("action `{}`: {}", name, e)))
    }

    /// Returns the filter stored under `key`
    pub fn filter(&self, key: &str) -> Result<&Value> {
        self.filters
            .get(key)
            .ok_or_else(|| SpurNoiseError::Config(format!("missing filter `{}`", key)))
    }

    /// Returns a positive integer parameter
    pub fn positive_param(&self, key: &str) -> Result<usize> {
        let value = self
            .params
            .get(key)
            .ok_or_else(|| SpurNoiseError::Config(format!("missing parameter `{}`", key)))?;

        // Values coming from XML-derived configs are often strings
        let parsed = match value {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        };
        match parsed {
            Some(n) if n > 0 => Ok(n as usize),
            _ => Err(SpurNoiseError::Config(format!(
                "parameter `{}` must be a positive integer, got {}",
                key, value
            ))),
        }
    }
}
