use super::*;

// =============================================================
// Active-link classification
// =============================================================

#[test]
fn link_class_marks_exact_match_active() {
    assert_eq!(link_class("/candidates", "/candidates"), "nav__link nav__link--active");
}

#[test]
fn link_class_requires_exact_match() {
    assert_eq!(link_class("/candidates", "/"), "nav__link");
    assert_eq!(link_class("/", "/candidates"), "nav__link");
}

#[test]
fn every_route_has_a_link() {
    let hrefs: Vec<&str> = LINKS.iter().map(|&(href, _)| href).collect();
    assert_eq!(hrefs, vec!["/", "/candidates", "/upload", "/matches"]);
}
