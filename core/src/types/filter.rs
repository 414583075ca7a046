use crate::error::{Result, SpurNoiseError};
use crate::types::TagSelector;
use serde_json::{Map, Value};

/// Expected attribute values a data set must carry
///
/// Every entry must match for a data set to pass; an empty spec matches
/// everything. Expected values are kept in their string form since
/// comparison is done on strings.
///
/// # Example
///
/// ```
/// use spurnoise_core::FilterSpec;
///
/// let spec = FilterSpec::new()
///     .with("SeriesDescription", "SURVEY")
///     .with("0x0018,0x0087", "1.5");
///
/// assert_eq!(spec.len(), 2);
/// assert!(!spec.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    entries: Vec<(TagSelector, String)>,
}

impl FilterSpec {
    /// Creates an empty spec, which matches any data set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add one expected value
    pub fn with(mut self, selector: impl Into<TagSelector>, expected: impl ToString) -> Self {
        self.entries.push((selector.into(), expected.to_string()));
        self
    }

    /// Builds a spec from a JSON object of `tag -> value`
    ///
    /// Values may be any JSON primitive; objects and arrays are rejected.
    pub fn from_json(map: &Map<String, Value>) -> Result<Self> {
        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map {
            entries.push((TagSelector::parse(key), json_value_to_string(key, value)?));
        }
        Ok(Self { entries })
    }

    /// Builds a spec from a JSON value that must be an object
    pub fn from_json_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::from_json(map),
            other => Err(SpurNoiseError::Config(format!(
                "filter must be an object of tag -> value, got {}",
                other
            ))),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TagSelector, &str)> {
        self.entries.iter().map(|(sel, val)| (sel, val.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Renders a configured filter value the way it is compared
fn json_value_to_string(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(true) => Ok("True".to_string()),
        Value::Bool(false) => Ok("False".to_string()),
        Value::Null => Ok("None".to_string()),
        Value::Array(_) | Value::Object(_) => Err(SpurNoiseError::Config(format!(
            "filter value for `{}` must be a primitive, got {}",
            key, value
        ))),
    }
}
