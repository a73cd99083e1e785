use super::*;

// =============================================================
// Base URL resolution
// =============================================================

#[test]
fn api_base_falls_back_to_local_backend() {
    // PORTAL_API_BASE is not set in the test environment.
    assert_eq!(api_base(), "http://127.0.0.1:8000");
}

// =============================================================
// URL construction
// =============================================================

#[test]
fn jobs_url_has_no_query() {
    assert_eq!(jobs_url(), "http://127.0.0.1:8000/jobs");
}

#[test]
fn candidates_url_appends_run_extract_flag_exactly_once() {
    assert_eq!(
        candidates_url(true),
        "http://127.0.0.1:8000/candidates?run_extract=true"
    );
}

#[test]
fn candidates_url_omits_flag_by_default() {
    assert_eq!(candidates_url(false), "http://127.0.0.1:8000/candidates");
}

#[test]
fn extract_url_embeds_candidate_id() {
    assert_eq!(
        extract_url(42),
        "http://127.0.0.1:8000/candidates/42/extract"
    );
}

#[test]
fn compute_match_url_carries_explain_when_enabled() {
    assert_eq!(
        compute_match_url(2, 1, true),
        "http://127.0.0.1:8000/matches/simple?candidate_id=2&job_id=1&explain=true"
    );
}

#[test]
fn compute_match_url_omits_explain_when_disabled() {
    assert_eq!(
        compute_match_url(2, 1, false),
        "http://127.0.0.1:8000/matches/simple?candidate_id=2&job_id=1"
    );
}

#[test]
fn matches_url_has_no_query() {
    assert_eq!(matches_url(), "http://127.0.0.1:8000/matches");
}

// =============================================================
// Multipart field serialization
// =============================================================

#[test]
fn run_extract_field_is_a_string_literal_never_a_boolean() {
    assert_eq!(run_extract_field(true), "true");
    assert_eq!(run_extract_field(false), "false");
}

// =============================================================
// Failure semantics (native stubs)
// =============================================================

// Outside the browser every request fails by construction, which doubles
// as a fixture for the error-policy split between wrappers.

#[test]
fn list_matches_returns_empty_on_failure() {
    assert!(futures::executor::block_on(list_matches()).is_empty());
}

#[test]
fn other_wrappers_propagate_failure() {
    let job = serde_json::json!({"title": "ML Engineer", "company": "Acme"});
    let candidate = serde_json::json!({"name": "Test Candidate"});
    assert!(futures::executor::block_on(list_jobs()).is_err());
    assert!(futures::executor::block_on(create_job(&job)).is_err());
    assert!(futures::executor::block_on(list_candidates()).is_err());
    assert!(futures::executor::block_on(create_candidate(&candidate, true)).is_err());
    assert!(futures::executor::block_on(extract_candidate(1)).is_err());
    assert!(futures::executor::block_on(compute_match(1, 1, true)).is_err());
}
