//! Persistent top navigation bar.
//!
//! Renders one link per routed page and highlights the link matching the
//! router's current location. Owns no state of its own.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

const LINKS: [(&str, &str); 4] = [
    ("/", "Jobs"),
    ("/candidates", "Candidates"),
    ("/upload", "Upload Resume"),
    ("/matches", "Matches"),
];

/// Class for a nav link given the current pathname. Exact match only, so
/// `/candidates` does not light up the root link.
fn link_class(current: &str, href: &str) -> &'static str {
    if current == href {
        "nav__link nav__link--active"
    } else {
        "nav__link"
    }
}

/// Top navigation bar shown on every page.
#[component]
pub fn Nav() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <nav class="nav">
            <span class="nav__brand">"LLM Job Portal"</span>
            {LINKS
                .iter()
                .map(|&(href, label)| {
                    view! {
                        <a class=move || link_class(&pathname.get(), href) href=href>
                            {label}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
