use super::*;
use serde_json::json;

// =============================================================
// Create-job payloads
// =============================================================

#[test]
fn job_payload_includes_location_when_present() {
    let payload = job_payload("ML Engineer", "Acme", "Remote", "Pytorch + NLP");
    assert_eq!(
        payload,
        json!({
            "title": "ML Engineer",
            "company": "Acme",
            "location": "Remote",
            "description": "Pytorch + NLP",
        })
    );
}

#[test]
fn job_payload_omits_blank_location() {
    let payload = job_payload("ML Engineer", "Acme", "   ", "desc");
    assert!(payload.get("location").is_none());
}

#[test]
fn job_payload_trims_fields() {
    let payload = job_payload("  ML Engineer ", " Acme ", "", " desc ");
    assert_eq!(payload["title"], "ML Engineer");
    assert_eq!(payload["company"], "Acme");
    assert_eq!(payload["description"], "desc");
}
