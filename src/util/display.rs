//! Tolerant field accessors for opaque backend payloads.
//!
//! DESIGN
//! ======
//! Pages render whatever the backend sends without imposing a schema.
//! Missing or mistyped fields degrade to placeholders, never to panics,
//! so a backend schema change cannot take a view down.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use serde_json::Value;

/// Pull a string field out of an object payload.
pub fn field_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// Pull a string field, falling back to a placeholder.
pub fn field_str_or<'a>(value: &'a Value, key: &str, fallback: &'a str) -> &'a str {
    field_str(value, key).unwrap_or(fallback)
}

/// Pull an integer field out of an object payload.
pub fn field_i64(value: &Value, key: &str) -> Option<i64> {
    value.get(key).and_then(Value::as_i64)
}

/// Shorten long free text for list rows, on a char boundary.
pub fn snippet(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

/// Render a skills field as a comma-separated list.
///
/// The backend is inconsistent here: list endpoints return the stored JSON
/// string verbatim (e.g. `"[\"python\",\"aws\"]"`) while detail responses
/// return a real array. Both shapes are accepted; anything else renders as
/// an empty string.
pub fn skill_list(value: &Value, key: &str) -> String {
    let field = match value.get(key) {
        Some(field) => field,
        None => return String::new(),
    };
    let parsed;
    let items = match field {
        Value::Array(items) => items,
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(inner)) => {
                parsed = inner;
                &parsed
            }
            _ => return String::new(),
        },
        _ => return String::new(),
    };
    items
        .iter()
        .filter_map(Value::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a match score (0.0..=1.0) as a percentage label.
pub fn score_label(value: &Value) -> String {
    value
        .get("score")
        .and_then(Value::as_f64)
        .map_or_else(|| "n/a".to_owned(), |score| format!("{:.0}%", score * 100.0))
}
