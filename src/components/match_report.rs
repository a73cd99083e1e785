//! Rendered result of a match computation.

use leptos::prelude::*;
use serde_json::Value;

use crate::util::display::{field_i64, field_str_or, score_label, skill_list};

/// Report card for a `POST /matches/simple` response: score, skill overlap,
/// and the LLM explanation/recommendations when explain was requested.
#[component]
pub fn MatchReport(report: Value) -> impl IntoView {
    let score = score_label(&report);
    let candidate_id = field_i64(&report, "candidate_id");
    let job_id = field_i64(&report, "job_id");
    let matching = skill_list(&report, "matching_skills");
    let missing = skill_list(&report, "missing_skills");
    let explanation = field_str_or(&report, "explanation", "").to_owned();
    let recommendations = report
        .get("recommendations")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(|rec| view! { <li>{rec.to_owned()}</li> })
                .collect_view()
        });

    view! {
        <div class="match-report">
            <div class="match-report__score">
                "Score: " {score}
                <span class="match-report__pair">
                    {candidate_id.map(|id| format!(" (candidate #{id}"))}
                    {job_id.map(|id| format!(", job #{id})"))}
                </span>
            </div>
            <div class="match-report__matching">"Matching skills: " {matching}</div>
            <div class="match-report__missing">"Missing skills: " {missing}</div>
            <p class="match-report__explanation">{explanation}</p>
            <ul class="match-report__recommendations">{recommendations}</ul>
        </div>
    }
}
