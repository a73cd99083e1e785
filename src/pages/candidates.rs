//! Candidates page: list candidates, create new ones, trigger extraction.

#[cfg(test)]
#[path = "candidates_test.rs"]
mod candidates_test;

use leptos::prelude::*;
use serde_json::{Map, Value};

use crate::components::candidate_card::CandidateCard;

/// JSON body for `POST /candidates`. Email and resume text are optional in
/// the backend model; blank inputs are omitted.
fn candidate_payload(name: &str, email: &str, resume_text: &str) -> Value {
    let mut body = Map::new();
    body.insert("name".to_owned(), Value::String(name.trim().to_owned()));
    if !email.trim().is_empty() {
        body.insert("email".to_owned(), Value::String(email.trim().to_owned()));
    }
    if !resume_text.trim().is_empty() {
        body.insert(
            "resume_text".to_owned(),
            Value::String(resume_text.trim().to_owned()),
        );
    }
    Value::Object(body)
}

/// Candidates page with the list, a create form, and per-row extraction.
#[component]
pub fn CandidatesPage() -> impl IntoView {
    let candidates = RwSignal::new(Vec::<Value>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let resume_text = RwSignal::new(String::new());
    let run_extract = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let load = move || {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_candidates().await {
                Ok(Some(Value::Array(items))) => {
                    candidates.set(items);
                    error.set(None);
                }
                Ok(_) => {
                    candidates.set(Vec::new());
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };
    Effect::new(move || load());

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            leptos::task::spawn_local(async move {
                let payload = candidate_payload(
                    &name.get_untracked(),
                    &email.get_untracked(),
                    &resume_text.get_untracked(),
                );
                match crate::net::api::create_candidate(&payload, run_extract.get_untracked()).await
                {
                    Ok(_) => {
                        name.set(String::new());
                        email.set(String::new());
                        resume_text.set(String::new());
                        run_extract.set(false);
                        load();
                    }
                    Err(e) => error.set(Some(e)),
                }
                busy.set(false);
            });
        }
    };

    let on_extract = Callback::new(move |candidate_id: i64| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::extract_candidate(candidate_id).await {
                Ok(_) => load(),
                Err(e) => error.set(Some(e)),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = candidate_id;
    });

    view! {
        <section class="page page--candidates">
            <h1>"Candidates"</h1>

            <form class="form" on:submit=on_create>
                <input
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    placeholder="Email (optional)"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Resume text (optional)"
                    prop:value=move || resume_text.get()
                    on:input=move |ev| resume_text.set(event_target_value(&ev))
                ></textarea>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || run_extract.get()
                        on:change=move |ev| run_extract.set(event_target_checked(&ev))
                    />
                    "Extract skills right away"
                </label>
                <button class="btn" type="submit" disabled=move || busy.get()>
                    "Create candidate"
                </button>
            </form>

            {move || error.get().map(|e| view! { <div class="error-banner">{e}</div> })}
            <Show when=move || loading.get()>
                <p class="muted">"Loading candidates..."</p>
            </Show>

            <div class="card-list">
                {move || {
                    candidates
                        .get()
                        .into_iter()
                        .map(|candidate| {
                            view! { <CandidateCard candidate=candidate on_extract=on_extract/> }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
