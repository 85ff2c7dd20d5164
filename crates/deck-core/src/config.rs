//! Chart card configuration and `data.json` validation

use crate::Record;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// One chart card: a title and its records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub title: String,
    pub data: Vec<Record>,
}

impl ChartConfig {
    pub fn new(title: impl Into<String>, data: Vec<Record>) -> Self {
        Self {
            title: title.into(),
            data,
        }
    }
}

/// Failure while loading or validating the chart payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("HTTP {0}")]
    Http(u16),
    #[error("request failed: {0}")]
    Network(String),
    #[error("malformed JSON: {0}")]
    Json(String),
    #[error("data.json must be an array of objects.")]
    NotAnArray,
    #[error("title in item {0} is invalid.")]
    InvalidTitle(usize),
    #[error("data in item {0} must be an array.")]
    InvalidData(usize),
}

/// Parse and validate a `data.json` payload
///
/// The payload must be an array; each item needs a string `title` and an
/// array `data`. The first offending item (by index) is reported. Records
/// themselves are not validated here.
pub fn parse_chart_configs(text: &str) -> Result<Vec<ChartConfig>, LoadError> {
    let payload: Value =
        serde_json::from_str(text).map_err(|e| LoadError::Json(e.to_string()))?;
    chart_configs_from_value(payload)
}

/// Validate an already-parsed payload
pub fn chart_configs_from_value(payload: Value) -> Result<Vec<ChartConfig>, LoadError> {
    let Value::Array(items) = payload else {
        return Err(LoadError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, mut item)| {
            let title = match item.get_mut("title").map(Value::take) {
                Some(Value::String(title)) => title,
                _ => return Err(LoadError::InvalidTitle(i)),
            };
            let data = match item.get_mut("data").map(Value::take) {
                Some(Value::Array(rows)) => rows.into_iter().map(Record::from).collect(),
                _ => return Err(LoadError::InvalidData(i)),
            };
            Ok(ChartConfig { title, data })
        })
        .collect()
}
