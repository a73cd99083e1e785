use super::*;
use serde_json::json;

// =============================================================
// Field accessors
// =============================================================

#[test]
fn field_str_reads_present_string() {
    let job = json!({"title": "ML Engineer"});
    assert_eq!(field_str(&job, "title"), Some("ML Engineer"));
}

#[test]
fn field_str_tolerates_missing_and_mistyped() {
    let job = json!({"id": 7});
    assert_eq!(field_str(&job, "title"), None);
    assert_eq!(field_str(&job, "id"), None);
    assert_eq!(field_str_or(&job, "title", "(untitled)"), "(untitled)");
}

#[test]
fn field_i64_reads_present_integer() {
    let candidate = json!({"id": 2, "name": "Test Candidate"});
    assert_eq!(field_i64(&candidate, "id"), Some(2));
    assert_eq!(field_i64(&candidate, "name"), None);
}

// =============================================================
// Snippets
// =============================================================

#[test]
fn snippet_leaves_short_text_alone() {
    assert_eq!(snippet("short", 10), "short");
}

#[test]
fn snippet_truncates_with_ellipsis() {
    assert_eq!(snippet("abcdefghij", 4), "abcd...");
}

#[test]
fn snippet_cuts_on_char_boundaries() {
    assert_eq!(snippet("héllo wörld", 5), "héllo...");
}

// =============================================================
// Skill lists
// =============================================================

#[test]
fn skill_list_joins_real_arrays() {
    let candidate = json!({"extracted_skills": ["python", "pytorch", "nlp"]});
    assert_eq!(skill_list(&candidate, "extracted_skills"), "python, pytorch, nlp");
}

#[test]
fn skill_list_parses_stored_json_strings() {
    let job = json!({"extracted_skills": "[\"python\",\"aws\"]"});
    assert_eq!(skill_list(&job, "extracted_skills"), "python, aws");
}

#[test]
fn skill_list_degrades_to_empty() {
    assert_eq!(skill_list(&json!({}), "extracted_skills"), "");
    assert_eq!(skill_list(&json!({"extracted_skills": null}), "extracted_skills"), "");
    assert_eq!(
        skill_list(&json!({"extracted_skills": "not json"}), "extracted_skills"),
        ""
    );
}

// =============================================================
// Score labels
// =============================================================

#[test]
fn score_label_formats_percentage() {
    assert_eq!(score_label(&json!({"score": 0.75})), "75%");
    assert_eq!(score_label(&json!({"score": 1.0})), "100%");
}

#[test]
fn score_label_handles_missing_score() {
    assert_eq!(score_label(&json!({})), "n/a");
}
