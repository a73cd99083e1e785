//! Matches page: compute a candidate/job match and browse stored matches.

#[cfg(test)]
#[path = "matches_test.rs"]
mod matches_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::components::match_report::MatchReport;
use crate::util::display::{field_i64, field_str_or, score_label, snippet};

/// Parse an id field typed by the user. The backend keys are plain
/// positive integers.
fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// Matches page with the compute form and the stored-match history.
#[component]
pub fn MatchesPage() -> impl IntoView {
    let history = RwSignal::new(Vec::<Value>::new());
    let report = RwSignal::new(None::<Value>);
    let error = RwSignal::new(None::<String>);

    let candidate_id = RwSignal::new(String::new());
    let job_id = RwSignal::new(String::new());
    let explain = RwSignal::new(true);
    let busy = RwSignal::new(false);

    let load = move || {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            // Deliberately silent on failure: the history pane renders
            // empty rather than broken.
            history.set(crate::net::api::list_matches().await);
        });
    };
    Effect::new(move || load());

    let on_compute = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            if busy.get_untracked() {
                return;
            }
            let (Some(candidate), Some(job)) = (
                parse_id(&candidate_id.get_untracked()),
                parse_id(&job_id.get_untracked()),
            ) else {
                error.set(Some("candidate and job ids must be positive integers".to_owned()));
                return;
            };
            busy.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::compute_match(candidate, job, explain.get_untracked()).await
                {
                    Ok(body) => {
                        report.set(body);
                        error.set(None);
                        load();
                    }
                    Err(e) => error.set(Some(e)),
                }
                busy.set(false);
            });
        }
    };

    let history_rows = move || {
        history
            .get()
            .into_iter()
            .map(|entry| {
                let id = field_i64(&entry, "id");
                let pair = format!(
                    "candidate #{} vs job #{}",
                    field_i64(&entry, "candidate_id").unwrap_or_default(),
                    field_i64(&entry, "job_id").unwrap_or_default(),
                );
                let score = score_label(&entry);
                let explanation = snippet(field_str_or(&entry, "explanation", ""), 100);
                view! {
                    <div class="match-row">
                        <span class="match-row__id">{id.map(|id| format!("#{id}"))}</span>
                        <span class="match-row__pair">{pair}</span>
                        <span class="match-row__score">{score}</span>
                        <span class="match-row__explanation">{explanation}</span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section class="page page--matches">
            <h1>"Matches"</h1>

            <form class="form form--inline" on:submit=on_compute>
                <input
                    placeholder="Candidate id"
                    prop:value=move || candidate_id.get()
                    on:input=move |ev| candidate_id.set(event_target_value(&ev))
                />
                <input
                    placeholder="Job id"
                    prop:value=move || job_id.get()
                    on:input=move |ev| job_id.set(event_target_value(&ev))
                />
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || explain.get()
                        on:change=move |ev| explain.set(event_target_checked(&ev))
                    />
                    "Explain with LLM"
                </label>
                <button class="btn" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Computing..." } else { "Compute match" }}
                </button>
            </form>

            {move || error.get().map(|e| view! { <div class="error-banner">{e}</div> })}
            {move || report.get().map(|report| view! { <MatchReport report=report/> })}

            <h2>"History"</h2>
            <div class="match-history">{history_rows}</div>
        </section>
    }
}
