//! Root application component with routing and the navigation shell.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav::Nav;
use crate::pages::{
    candidates::CandidatesPage, jobs::JobsPage, matches::MatchesPage, upload::UploadPage,
};

/// Root application component.
///
/// Owns no state: it renders the persistent [`Nav`] bar plus a content
/// region and delegates route-to-view mapping to the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="portal" href="/styles.css"/>
        <Title text="LLM Job Portal"/>

        <Router>
            <Nav/>
            <main class="content">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=JobsPage/>
                    <Route path=StaticSegment("candidates") view=CandidatesPage/>
                    <Route path=StaticSegment("upload") view=UploadPage/>
                    <Route path=StaticSegment("matches") view=MatchesPage/>
                </Routes>
            </main>
        </Router>
    }
}
