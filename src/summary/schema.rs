//! Validation of raw model output against the summary schema

use serde_json::{Map, Value};
use thiserror::Error;

use crate::summary::models::SummaryJson;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("model output is not valid JSON: {0}")]
    MalformedOutput(#[source] serde_json::Error),

    #[error("model output does not match the summary schema: {0}")]
    SchemaViolation(#[source] serde_json::Error),
}

/// Parse the model's raw text into a fully populated [`SummaryJson`].
///
/// Parsing happens in two steps so that text which is not JSON at all is
/// reported separately from JSON with the wrong shape. The top level must be
/// an object: the derived decoder would otherwise fill fields from an array
/// by position.
pub fn parse_summary(raw: &str) -> Result<SummaryJson, SchemaError> {
    let value: Value = serde_json::from_str(raw).map_err(SchemaError::MalformedOutput)?;
    let object: Map<String, Value> =
        serde_json::from_value(value).map_err(SchemaError::SchemaViolation)?;
    serde_json::from_value(Value::Object(object)).map_err(SchemaError::SchemaViolation)
}
