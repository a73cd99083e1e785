//! Shared response-body normalizer.
//!
//! The backend answers with JSON on the happy path, JSON error details on
//! failures, and occasionally an empty body. Callers get one of three
//! shapes back: parsed JSON, the raw text when it is not valid JSON, or
//! `None` for an empty body. Malformed JSON is never an error here.

#[cfg(test)]
#[path = "body_test.rs"]
mod body_test;

use serde_json::Value;

/// Normalize a response body already read as text.
///
/// Empty text maps to `None`; valid JSON maps to the parsed value; anything
/// else maps to the text itself wrapped in `Value::String`.
pub fn parse_body(text: &str) -> Option<Value> {
    if text.is_empty() {
        return None;
    }
    match serde_json::from_str(text) {
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(text.to_owned())),
    }
}

/// Consume a response body exactly once and normalize it via [`parse_body`].
///
/// # Errors
///
/// Returns an error string if the body cannot be read at all; that is a
/// transport failure, not a parse failure, and propagates to the caller.
#[cfg(feature = "csr")]
pub async fn read_body(resp: gloo_net::http::Response) -> Result<Option<Value>, String> {
    let text = resp.text().await.map_err(|e| e.to_string())?;
    Ok(parse_body(&text))
}
