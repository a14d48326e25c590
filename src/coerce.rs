//! Inbound field coercion — numeric strings to numbers, blank defaults,
//! pagination fallbacks.
//!
//! The textual protocol is loose about field types: ids and quantities may
//! arrive as JSON numbers or numeric strings, and the backends declare
//! exact integer/float shapes. Everything the gateway forwards goes through
//! these helpers, so a string is never sent where a number is declared.

use serde::Deserialize;
use serde_json::Value;

use crate::error::GatewayError;

/// Coerce a JSON value to `i32`: numbers and numeric strings are accepted,
/// fractional values truncate.
pub fn int(value: Option<&Value>) -> Option<i32> {
    match value? {
        Value::Number(n) => n.as_f64().map(|f| f as i32),
        Value::String(s) => s.trim().parse::<f64>().ok().map(|f| f as i32),
        _ => None,
    }
}

/// Coerce a JSON value to `f64`: numbers and numeric strings are accepted.
pub fn float(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// A present, non-empty string field.
pub fn non_empty(value: Option<&Value>) -> Option<&str> {
    value?.as_str().filter(|s| !s.is_empty())
}

/// An optional string field, blank when absent or not a string.
pub fn string_or_blank(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Parse a path id segment, rejecting the request before any backend call
/// when it is not an integer.
pub fn parse_id(raw: &str, message: &str) -> Result<i32, GatewayError> {
    raw.parse::<i32>()
        .map_err(|_| GatewayError::Validation(message.to_string()))
}

/// Pagination query parameters.
///
/// These are never rejected: absent, non-numeric, or zero values fall back
/// to page 1 / limit 10, so a listing always succeeds with some positive
/// window. Negative values pass through unchanged, as the protocol always
/// has.
#[derive(Debug, Default, Deserialize)]
pub struct Pagination {
    page: Option<String>,
    limit: Option<String>,
}

impl Pagination {
    pub fn page(&self) -> i32 {
        fallback(&self.page, 1)
    }

    pub fn limit(&self) -> i32 {
        fallback(&self.limit, 10)
    }
}

fn fallback(raw: &Option<String>, default: i32) -> i32 {
    match raw
        .as_deref()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .map(|f| f as i32)
    {
        None | Some(0) => default,
        Some(n) => n,
    }
}
