//! Interpretation of the formatter's `{ "result": ... }` payload.
//!
//! The formatter is an LLM and answers in whichever shape it likes: a JSON
//! object, a JSON-encoded string, a string holding a fenced ```json block, or
//! a list of `{key, value}` records. Strategies are tried in that order.

use serde_json::Value;
use tracing::{debug, warn};

use crate::company::CompanyError;
use crate::llm_client::extract_fenced_json;
use crate::models::company::{CompanyProfile, CompanyValues};

/// Turns the formatter's response body into a `CompanyProfile`.
pub fn parse_format_response(body: &Value) -> Result<CompanyProfile, CompanyError> {
    let payload = extract_payload(body)?;
    let profile = profile_from_object(&payload);

    if !profile.mission_statement.is_empty() {
        return Ok(profile);
    }

    match payload.as_array() {
        Some(records) => {
            debug!("Mission statement empty; rebuilding profile from key/value records");
            Ok(profile_from_records(records))
        }
        None => {
            warn!("Formatted company data has an empty mission statement");
            Err(CompanyError::MalformedResponse(
                "empty mission statement and no key/value records".to_string(),
            ))
        }
    }
}

/// Pulls the structured payload out of `result`: structure first, then the
/// string parsed directly, then the string's fenced block.
fn extract_payload(body: &Value) -> Result<Value, CompanyError> {
    let result = body
        .get("result")
        .filter(|r| is_present(r))
        .ok_or_else(|| CompanyError::MalformedResponse("No result found in formatted data".to_string()))?;

    match result {
        Value::Object(_) | Value::Array(_) => Ok(result.clone()),
        Value::String(text) => parse_text_payload(text),
        other => Err(CompanyError::MalformedResponse(format!(
            "Unexpected result format: expected an object or a string, got {other}"
        ))),
    }
}

fn parse_text_payload(text: &str) -> Result<Value, CompanyError> {
    let direct_error = match serde_json::from_str::<Value>(text.trim()) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    match extract_fenced_json(text) {
        Some(block) => serde_json::from_str::<Value>(block).map_err(|e| {
            CompanyError::MalformedResponse(format!("Failed to parse fenced formatted data: {e}"))
        }),
        None => Err(CompanyError::MalformedResponse(format!(
            "Failed to parse formatted data: {direct_error}"
        ))),
    }
}

/// A `result` counts as present unless it is null, false, zero or empty text.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn profile_from_object(payload: &Value) -> CompanyProfile {
    CompanyProfile {
        mission_statement: text_field(payload.get("missionStatement")),
        values: payload
            .get("values")
            .map(CompanyValues::from_json)
            .unwrap_or_default(),
        culture: text_field(payload.get("culture")),
    }
}

/// Rebuilds a profile from `[{"key": "missionStatement", "value": ...}, ...]`.
fn profile_from_records(records: &[Value]) -> CompanyProfile {
    let lookup = |key: &str| {
        records
            .iter()
            .find(|record| record.get("key").and_then(Value::as_str) == Some(key))
            .and_then(|record| record.get("value"))
    };

    CompanyProfile {
        mission_statement: text_field(lookup("missionStatement")),
        values: lookup("values").map(CompanyValues::from_json).unwrap_or_default(),
        culture: text_field(lookup("culture")),
    }
}

fn text_field(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
