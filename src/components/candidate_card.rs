//! Card for a single candidate in the candidates list.
//!
//! DESIGN
//! ======
//! Extraction is a per-row action but the network call belongs to the page,
//! so the card only surfaces a callback with the candidate id.

use leptos::prelude::*;
use serde_json::Value;

use crate::util::display::{field_i64, field_str_or, skill_list, snippet};

/// One candidate row with an "extract skills" action.
#[component]
pub fn CandidateCard(
    candidate: Value,
    #[prop(optional)] on_extract: Option<Callback<i64>>,
) -> impl IntoView {
    let id = field_i64(&candidate, "id");
    let name = field_str_or(&candidate, "name", "(unnamed)").to_owned();
    let email = field_str_or(&candidate, "email", "").to_owned();
    let resume = snippet(field_str_or(&candidate, "resume_text", ""), 120);
    let skills = skill_list(&candidate, "extracted_skills");
    let skills_row = if skills.is_empty() {
        view! { <div class="candidate-card__skills candidate-card__skills--none">"No skills extracted yet"</div> }
            .into_any()
    } else {
        view! { <div class="candidate-card__skills">"Skills: " {skills}</div> }.into_any()
    };

    let extract_button = id.and_then(|id| {
        on_extract.map(|on_extract| {
            view! {
                <button
                    class="btn candidate-card__extract"
                    on:click=move |_| on_extract.run(id)
                    title="Extract skills from resume text"
                >
                    "Extract skills"
                </button>
            }
        })
    });

    view! {
        <div class="candidate-card">
            <div class="candidate-card__header">
                <span class="candidate-card__name">{name}</span>
                <span class="candidate-card__id">{id.map(|id| format!("#{id}"))}</span>
                {extract_button}
            </div>
            <div class="candidate-card__email">{email}</div>
            <p class="candidate-card__resume">{resume}</p>
            {skills_row}
        </div>
    }
}
