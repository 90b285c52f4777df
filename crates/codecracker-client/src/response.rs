//! Classification of statistics API responses
//!
//! The API reports failures two ways: a failing HTTP status, or a
//! successful status whose body still carries an `error` field. Both end up
//! as [`Error::Api`]; bodies that are not JSON end up as
//! [`Error::Transport`].

use codecracker_core::{Error, ProfileStats, Result, API_FALLBACK_MESSAGE};
use serde_json::Value;

/// Turn a raw `(status, body)` pair into profile statistics or an error.
///
/// Order of checks:
/// 1. body must parse as JSON
/// 2. failing status -> the body's `error` text, or a generic message
/// 3. a truthy `error` field wins over any data in the body
/// 4. the body is decoded as [`ProfileStats`]
///
/// The final decode reads `body` directly rather than the parsed [`Value`],
/// since `Value` objects do not keep key order and slices follow the order
/// of `languageStats`.
pub fn classify_response(status: u16, body: &str) -> Result<ProfileStats> {
    let data: Value = serde_json::from_str(body).map_err(|e| Error::transport(e.to_string()))?;
    let error_text = error_field(&data);

    if !is_success(status) {
        let message = error_text.unwrap_or_else(|| API_FALLBACK_MESSAGE.to_string());
        return Err(Error::api(Some(status), message));
    }

    if let Some(message) = error_text {
        return Err(Error::api(Some(status), message));
    }

    serde_json::from_str(body).map_err(|e| Error::transport(e.to_string()))
}

/// Whether the status is in the 2xx range
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// The body's `error` field, if present and truthy.
///
/// Empty strings, `false`, `0` and `null` count as "no error".
pub fn error_field(data: &Value) -> Option<String> {
    match data.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
