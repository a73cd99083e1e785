//! Jobs page: list postings and create new ones.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use leptos::prelude::*;
use serde_json::{Map, Value};

use crate::components::job_card::JobCard;

/// JSON body for `POST /jobs`. Location is optional in the backend model,
/// so an empty input is omitted rather than sent as `""`.
fn job_payload(title: &str, company: &str, location: &str, description: &str) -> Value {
    let mut body = Map::new();
    body.insert("title".to_owned(), Value::String(title.trim().to_owned()));
    body.insert("company".to_owned(), Value::String(company.trim().to_owned()));
    if !location.trim().is_empty() {
        body.insert("location".to_owned(), Value::String(location.trim().to_owned()));
    }
    body.insert(
        "description".to_owned(),
        Value::String(description.trim().to_owned()),
    );
    Value::Object(body)
}

/// Jobs page with the posting list and a create form.
#[component]
pub fn JobsPage() -> impl IntoView {
    let jobs = RwSignal::new(Vec::<Value>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let title = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let load = move || {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::list_jobs().await {
                Ok(Some(Value::Array(items))) => {
                    jobs.set(items);
                    error.set(None);
                }
                Ok(_) => {
                    jobs.set(Vec::new());
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
                let payload = job_payload(
                    &title.get_untracked(),
                    &company.get_untracked(),
                    &location.get_untracked(),
                    &description.get_untracked(),
                );
                match crate::net::api::create_job(&payload).await {
                    Ok(_) => {
                        title.set(String::new());
                        company.set(String::new());
                        location.set(String::new());
                        description.set(String::new());
                        load();
                    }
                    Err(e) => error.set(Some(e)),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <section class="page page--jobs">
            <h1>"Jobs"</h1>

            <form class="form" on:submit=on_create>
                <input
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <input
                    placeholder="Company"
                    prop:value=move || company.get()
                    on:input=move |ev| company.set(event_target_value(&ev))
                />
                <input
                    placeholder="Location (optional)"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <button class="btn" type="submit" disabled=move || busy.get()>
                    "Create job"
                </button>
            </form>

            {move || error.get().map(|e| view! { <div class="error-banner">{e}</div> })}
            <Show when=move || loading.get()>
                <p class="muted">"Loading jobs..."</p>
            </Show>

            <div class="card-list">
                {move || {
                    jobs.get()
                        .into_iter()
                        .map(|job| view! { <JobCard job=job/> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
