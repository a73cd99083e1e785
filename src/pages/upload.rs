//! Resume upload page: multipart PDF upload with optional identity fields.

use leptos::prelude::*;
use serde_json::Value;

/// Upload page. The file goes up as a multipart form together with the
/// optional name/email fields and the extraction flag; the backend answers
/// with the candidate it created from the PDF text.
#[component]
pub fn UploadPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let run_extract = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let created = RwSignal::new(None::<Value>);

    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let on_upload = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            if busy.get_untracked() {
                return;
            }
            let Some(file) = file_input
                .get_untracked()
                .and_then(|el| el.files())
                .and_then(|files| files.get(0))
            else {
                error.set(Some("choose a PDF file first".to_owned()));
                return;
            };
            busy.set(true);
            leptos::task::spawn_local(async move {
                let name = name.get_untracked();
                let email = email.get_untracked();
                let name = (!name.trim().is_empty()).then(|| name.trim().to_owned());
                let email = (!email.trim().is_empty()).then(|| email.trim().to_owned());
                let result = crate::net::api::upload_resume(
                    &file,
                    name.as_deref(),
                    email.as_deref(),
                    run_extract.get_untracked(),
                )
                .await;
                match result {
                    Ok(body) => {
                        created.set(body);
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e)),
                }
                busy.set(false);
            });
        }
    };

    let created_view = move || {
        created.get().map(|body| {
            let pretty =
                serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string());
            view! {
                <div class="upload-result">
                    <h2>"Candidate created"</h2>
                    <pre>{pretty}</pre>
                </div>
            }
        })
    };

    view! {
        <section class="page page--upload">
            <h1>"Upload Resume"</h1>

            <form class="form" on:submit=on_upload>
                <input type="file" accept="application/pdf" node_ref=file_input/>
                <input
                    placeholder="Name (optional)"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    placeholder="Email (optional)"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || run_extract.get()
                        on:change=move |ev| run_extract.set(event_target_checked(&ev))
                    />
                    "Extract skills right away"
                </label>
                <button class="btn" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Uploading..." } else { "Upload" }}
                </button>
            </form>

            {move || error.get().map(|e| view! { <div class="error-banner">{e}</div> })}
            {created_view}
        </section>
    }
}
