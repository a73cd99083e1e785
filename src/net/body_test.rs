use super::*;
use serde_json::json;

// =============================================================
// Empty bodies
// =============================================================

#[test]
fn parse_body_empty_text_is_absent() {
    assert_eq!(parse_body(""), None);
}

// =============================================================
// Valid JSON bodies
// =============================================================

#[test]
fn parse_body_object_round_trips() {
    let parsed = parse_body(r#"{"id": 1, "title": "ML Engineer"}"#);
    assert_eq!(parsed, Some(json!({"id": 1, "title": "ML Engineer"})));
}

#[test]
fn parse_body_array_round_trips() {
    let parsed = parse_body(r#"[{"id": 1}, {"id": 2}]"#);
    assert_eq!(parsed, Some(json!([{"id": 1}, {"id": 2}])));
}

#[test]
fn parse_body_accepts_bare_scalars() {
    assert_eq!(parse_body("42"), Some(json!(42)));
    assert_eq!(parse_body("null"), Some(Value::Null));
    assert_eq!(parse_body("\"quoted\""), Some(json!("quoted")));
}

// =============================================================
// Non-JSON text bodies
// =============================================================

#[test]
fn parse_body_non_json_falls_back_to_exact_text() {
    assert_eq!(
        parse_body("Internal Server Error"),
        Some(Value::String("Internal Server Error".to_owned()))
    );
}

#[test]
fn parse_body_truncated_json_falls_back_to_exact_text() {
    let raw = r#"{"id": 1, "title""#;
    assert_eq!(parse_body(raw), Some(Value::String(raw.to_owned())));
}

#[test]
fn parse_body_whitespace_only_is_text_not_absent() {
    assert_eq!(parse_body("  "), Some(Value::String("  ".to_owned())));
}
