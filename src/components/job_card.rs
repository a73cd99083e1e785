//! Card for a single job in the jobs list.

use leptos::prelude::*;
use serde_json::Value;

use crate::util::display::{field_i64, field_str_or, skill_list, snippet};

/// One job row: title, company/location line, description snippet, and the
/// skills the backend extracted from the description (if any yet).
#[component]
pub fn JobCard(job: Value) -> impl IntoView {
    let id = field_i64(&job, "id");
    let title = field_str_or(&job, "title", "(untitled)").to_owned();
    let company = field_str_or(&job, "company", "(unknown company)").to_owned();
    let location = field_str_or(&job, "location", "");
    let company_line = if location.is_empty() {
        company
    } else {
        format!("{company} · {location}")
    };
    let description = snippet(field_str_or(&job, "description", ""), 160);
    let skills = skill_list(&job, "extracted_skills");
    let skills_row = (!skills.is_empty())
        .then(|| view! { <div class="job-card__skills">"Skills: " {skills}</div> });

    view! {
        <div class="job-card">
            <div class="job-card__header">
                <span class="job-card__title">{title}</span>
                <span class="job-card__id">{id.map(|id| format!("#{id}"))}</span>
            </div>
            <div class="job-card__company">{company_line}</div>
            <p class="job-card__description">{description}</p>
            {skills_row}
        </div>
    }
}
