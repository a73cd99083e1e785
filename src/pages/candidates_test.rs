use super::*;
use serde_json::json;

// =============================================================
// Create-candidate payloads
// =============================================================

#[test]
fn candidate_payload_includes_all_fields_when_present() {
    let payload = candidate_payload("Jane Doe", "jane@example.com", "python and fastapi");
    assert_eq!(
        payload,
        json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "resume_text": "python and fastapi",
        })
    );
}

#[test]
fn candidate_payload_omits_blank_optionals() {
    let payload = candidate_payload("Jane Doe", "", "  ");
    assert_eq!(payload, json!({"name": "Jane Doe"}));
}
