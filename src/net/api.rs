//! REST wrappers for the job portal backend.
//!
//! Browser builds (`csr` feature): real HTTP calls via `gloo-net`. Other
//! builds get inert stubs so pages and native unit tests still compile.
//!
//! ERROR HANDLING
//! ==============
//! Every wrapper issues exactly one request and funnels the body through
//! [`body::read_body`]. Transport failures surface as `Err(String)` for the
//! caller to handle, with one deliberate exception: [`list_matches`] swallows
//! both non-OK statuses and transport errors and hands back an empty list.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

#[cfg(feature = "csr")]
use super::body;

/// Backend base URL, resolved at compile time from `PORTAL_API_BASE` with a
/// local-development fallback.
pub fn api_base() -> &'static str {
    option_env!("PORTAL_API_BASE").unwrap_or("http://127.0.0.1:8000")
}

#[cfg(any(test, feature = "csr"))]
fn jobs_url() -> String {
    format!("{}/jobs", api_base())
}

#[cfg(any(test, feature = "csr"))]
fn candidates_url(run_extract: bool) -> String {
    let flag = if run_extract { "?run_extract=true" } else { "" };
    format!("{}/candidates{flag}", api_base())
}

#[cfg(any(test, feature = "csr"))]
fn resumes_url() -> String {
    format!("{}/resumes", api_base())
}

#[cfg(any(test, feature = "csr"))]
fn extract_url(candidate_id: i64) -> String {
    format!("{}/candidates/{candidate_id}/extract", api_base())
}

#[cfg(any(test, feature = "csr"))]
fn compute_match_url(candidate_id: i64, job_id: i64, explain: bool) -> String {
    let flag = if explain { "&explain=true" } else { "" };
    format!(
        "{}/matches/simple?candidate_id={candidate_id}&job_id={job_id}{flag}",
        api_base()
    )
}

#[cfg(any(test, feature = "csr"))]
fn matches_url() -> String {
    format!("{}/matches", api_base())
}

/// Multipart field value for the extraction flag. The backend form parser
/// expects the literal strings `"true"`/`"false"`, never a boolean.
#[cfg(any(test, feature = "csr"))]
fn run_extract_field(run_extract: bool) -> &'static str {
    if run_extract { "true" } else { "false" }
}

/// Fetch all jobs via `GET /jobs`.
///
/// # Errors
///
/// Returns an error string if the request or body read fails.
pub async fn list_jobs() -> Result<Option<Value>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&jobs_url())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        body::read_body(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Create a job via `POST /jobs` with a JSON payload.
///
/// # Errors
///
/// Returns an error string if the request or body read fails.
pub async fn create_job(payload: &Value) -> Result<Option<Value>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&jobs_url())
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        body::read_body(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = payload;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch all candidates via `GET /candidates`.
///
/// # Errors
///
/// Returns an error string if the request or body read fails.
pub async fn list_candidates() -> Result<Option<Value>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&candidates_url(false))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        body::read_body(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Create a candidate via `POST /candidates`.
///
/// When `run_extract` is set the `?run_extract=true` flag is appended so the
/// backend schedules skill extraction after the insert; otherwise the URL
/// carries no query string at all.
///
/// # Errors
///
/// Returns an error string if the request or body read fails.
pub async fn create_candidate(payload: &Value, run_extract: bool) -> Result<Option<Value>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&candidates_url(run_extract))
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        body::read_body(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (payload, run_extract);
        Err("not available outside the browser".to_owned())
    }
}

/// Upload a PDF resume via `POST /resumes` as a multipart form.
///
/// The form carries the file, optional `name`/`email` fields, and the
/// extraction flag as a string field (see [`run_extract_field`]).
///
/// # Errors
///
/// Returns an error string if the form cannot be assembled or the request
/// or body read fails.
#[cfg(feature = "csr")]
pub async fn upload_resume(
    file: &web_sys::File,
    name: Option<&str>,
    email: Option<&str>,
    run_extract: bool,
) -> Result<Option<Value>, String> {
    let form = web_sys::FormData::new().map_err(|_| "form construction failed".to_owned())?;
    form.append_with_blob("file", file)
        .map_err(|_| "form append failed".to_owned())?;
    if let Some(name) = name {
        form.append_with_str("name", name)
            .map_err(|_| "form append failed".to_owned())?;
    }
    if let Some(email) = email {
        form.append_with_str("email", email)
            .map_err(|_| "form append failed".to_owned())?;
    }
    form.append_with_str("run_extract", run_extract_field(run_extract))
        .map_err(|_| "form append failed".to_owned())?;

    let resp = gloo_net::http::Request::post(&resumes_url())
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    body::read_body(resp).await
}

/// Trigger server-side skill extraction via `PUT /candidates/{id}/extract`.
///
/// # Errors
///
/// Returns an error string if the request or body read fails.
pub async fn extract_candidate(candidate_id: i64) -> Result<Option<Value>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::put(&extract_url(candidate_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        body::read_body(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = candidate_id;
        Err("not available outside the browser".to_owned())
    }
}

/// Score a candidate against a job via `POST /matches/simple`.
///
/// `explain` defaults to on in the UI; when set the backend also asks the
/// LLM for an explanation and recommendations.
///
/// # Errors
///
/// Returns an error string if the request or body read fails.
pub async fn compute_match(
    candidate_id: i64,
    job_id: i64,
    explain: bool,
) -> Result<Option<Value>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&compute_match_url(candidate_id, job_id, explain))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        body::read_body(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (candidate_id, job_id, explain);
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch stored matches via `GET /matches`.
///
/// The one error-suppressing wrapper: a failed request, a non-OK status, or
/// a non-array body all collapse to an empty list so the match history pane
/// renders as empty rather than broken.
pub async fn list_matches() -> Vec<Value> {
    #[cfg(feature = "csr")]
    {
        let Ok(resp) = gloo_net::http::Request::get(&matches_url()).send().await else {
            return Vec::new();
        };
        if !resp.ok() {
            return Vec::new();
        }
        match body::read_body(resp).await {
            Ok(Some(Value::Array(items))) => items,
            _ => Vec::new(),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        Vec::new()
    }
}
