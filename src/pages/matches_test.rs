use super::*;

// =============================================================
// Id parsing
// =============================================================

#[test]
fn parse_id_accepts_positive_integers() {
    assert_eq!(parse_id("2"), Some(2));
    assert_eq!(parse_id("  17 "), Some(17));
}

#[test]
fn parse_id_rejects_garbage() {
    assert_eq!(parse_id(""), None);
    assert_eq!(parse_id("abc"), None);
    assert_eq!(parse_id("1.5"), None);
    assert_eq!(parse_id("0"), None);
    assert_eq!(parse_id("-3"), None);
}
