//! Validation of response bodies.
//!
//! Kept free of any I/O so the shape rules can be exercised directly.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::library::Track;

use super::error::ApiError;

/// Parse a `/directories` body.
pub(crate) fn parse_directories(status: u16, body: &str) -> Result<Vec<String>, ApiError> {
    parse_array(status, body)
}

/// Parse a `/files/{directory}` body.
///
/// Anything other than a success status carrying a JSON array is a failure,
/// never an empty listing.
pub(crate) fn parse_files(status: u16, body: &str) -> Result<Vec<Track>, ApiError> {
    parse_array(status, body)
}

fn parse_array<T: DeserializeOwned>(status: u16, body: &str) -> Result<Vec<T>, ApiError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .as_ref()
            .and_then(error_field);
        return Err(ApiError::Status { status, message });
    }

    let value: Value = serde_json::from_str(body)?;
    if !value.is_array() {
        return Err(ApiError::UnexpectedShape {
            message: error_field(&value),
        });
    }

    Ok(serde_json::from_value(value)?)
}

fn error_field(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
