//! Command-line client for the job portal REST API.
//!
//! Covers the same endpoint surface as the web frontend plus the demo-data
//! seeding that used to be done by ad-hoc scripts against the database.
//! Responses are normalized exactly like the frontend normalizes them and
//! pretty-printed to stdout.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde_json::{Map, Value, json};

use portal_ui::net::body::parse_body;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status} for {path}: {detail}")]
    Server {
        path: String,
        status: u16,
        detail: String,
    },
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("could not read {path}: {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },
    #[error("missing expected field `{0}` in response")]
    MissingField(&'static str),
}

#[derive(Parser, Debug)]
#[command(name = "portal-cli", about = "LLM job portal API CLI")]
struct Cli {
    #[arg(long, env = "PORTAL_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the demo job and candidate.
    Seed,
    /// Trigger skill extraction for a stored candidate.
    Extract { candidate_id: i64 },
    Job(JobCommand),
    Candidate(CandidateCommand),
    Resume(ResumeCommand),
    Match(MatchCommand),
}

#[derive(Args, Debug)]
struct JobCommand {
    #[command(subcommand)]
    command: JobSubcommand,
}

#[derive(Subcommand, Debug)]
enum JobSubcommand {
    List,
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        company: String,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        description: String,
    },
}

#[derive(Args, Debug)]
struct CandidateCommand {
    #[command(subcommand)]
    command: CandidateSubcommand,
}

#[derive(Subcommand, Debug)]
enum CandidateSubcommand {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        resume_text: Option<String>,
        #[arg(long, default_value_t = false)]
        run_extract: bool,
    },
}

#[derive(Args, Debug)]
struct ResumeCommand {
    #[command(subcommand)]
    command: ResumeSubcommand,
}

#[derive(Subcommand, Debug)]
enum ResumeSubcommand {
    Upload {
        file: PathBuf,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long, default_value_t = false)]
        run_extract: bool,
    },
}

#[derive(Args, Debug)]
struct MatchCommand {
    #[command(subcommand)]
    command: MatchSubcommand,
}

#[derive(Subcommand, Debug)]
enum MatchSubcommand {
    Compute {
        candidate_id: i64,
        job_id: i64,
        /// Skip the LLM explanation (on by default, like the frontend).
        #[arg(long, default_value_t = false)]
        no_explain: bool,
    },
    List,
}

fn candidates_path(run_extract: bool) -> String {
    let flag = if run_extract { "?run_extract=true" } else { "" };
    format!("/candidates{flag}")
}

fn extract_path(candidate_id: i64) -> String {
    format!("/candidates/{candidate_id}/extract")
}

fn compute_match_path(candidate_id: i64, job_id: i64, explain: bool) -> String {
    let flag = if explain { "&explain=true" } else { "" };
    format!("/matches/simple?candidate_id={candidate_id}&job_id={job_id}{flag}")
}

/// Demo job from the original seeding script.
fn seed_job_payload() -> Value {
    json!({
        "title": "ML Engineer",
        "company": "Acme",
        "description": "Experience with python, pytorch, nlp, aws",
        "extracted_skills": "[\"python\",\"pytorch\",\"natural language processing\",\"aws\"]",
    })
}

/// Demo candidate from the original seeding script. The create endpoint does
/// not accept pre-extracted skills, so seeding relies on `run_extract=true`
/// to fill them in server-side.
fn seed_candidate_payload() -> Value {
    json!({
        "name": "Test Candidate",
        "email": "test@example.com",
        "resume_text": "Experienced with python and pytorch for NLP projects.",
    })
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Command::Seed => run_seed(&client, &cli.base_url).await,
        Command::Extract { candidate_id } => {
            let body = api_request(
                &client,
                &cli.base_url,
                reqwest::Method::PUT,
                &extract_path(candidate_id),
                None,
            )
            .await?;
            print_body(&body)
        }
        Command::Job(job) => run_job(&client, &cli.base_url, job).await,
        Command::Candidate(candidate) => run_candidate(&client, &cli.base_url, candidate).await,
        Command::Resume(resume) => run_resume(&client, &cli.base_url, resume).await,
        Command::Match(m) => run_match(&client, &cli.base_url, m).await,
    }
}

async fn run_seed(client: &reqwest::Client, base_url: &str) -> Result<(), CliError> {
    let job = api_request(
        client,
        base_url,
        reqwest::Method::POST,
        "/jobs",
        Some(seed_job_payload()),
    )
    .await?;
    let job_id = body_id(&job).ok_or(CliError::MissingField("id"))?;
    eprintln!("seeded job #{job_id}");

    let candidate = api_request(
        client,
        base_url,
        reqwest::Method::POST,
        &candidates_path(true),
        Some(seed_candidate_payload()),
    )
    .await?;
    let candidate_id = body_id(&candidate).ok_or(CliError::MissingField("id"))?;
    eprintln!("seeded candidate #{candidate_id} (extraction scheduled)");
    Ok(())
}

async fn run_job(
    client: &reqwest::Client,
    base_url: &str,
    job: JobCommand,
) -> Result<(), CliError> {
    match job.command {
        JobSubcommand::List => {
            let body = api_request(client, base_url, reqwest::Method::GET, "/jobs", None).await?;
            print_body(&body)
        }
        JobSubcommand::Create {
            title,
            company,
            location,
            description,
        } => {
            let mut payload = Map::new();
            payload.insert("title".to_owned(), Value::String(title));
            payload.insert("company".to_owned(), Value::String(company));
            if let Some(location) = location {
                payload.insert("location".to_owned(), Value::String(location));
            }
            payload.insert("description".to_owned(), Value::String(description));
            let body = api_request(
                client,
                base_url,
                reqwest::Method::POST,
                "/jobs",
                Some(Value::Object(payload)),
            )
            .await?;
            print_body(&body)
        }
    }
}

async fn run_candidate(
    client: &reqwest::Client,
    base_url: &str,
    candidate: CandidateCommand,
) -> Result<(), CliError> {
    match candidate.command {
        CandidateSubcommand::List => {
            let body =
                api_request(client, base_url, reqwest::Method::GET, "/candidates", None).await?;
            print_body(&body)
        }
        CandidateSubcommand::Create {
            name,
            email,
            resume_text,
            run_extract,
        } => {
            let mut payload = Map::new();
            payload.insert("name".to_owned(), Value::String(name));
            if let Some(email) = email {
                payload.insert("email".to_owned(), Value::String(email));
            }
            if let Some(resume_text) = resume_text {
                payload.insert("resume_text".to_owned(), Value::String(resume_text));
            }
            let body = api_request(
                client,
                base_url,
                reqwest::Method::POST,
                &candidates_path(run_extract),
                Some(Value::Object(payload)),
            )
            .await?;
            print_body(&body)
        }
    }
}

async fn run_resume(
    client: &reqwest::Client,
    base_url: &str,
    resume: ResumeCommand,
) -> Result<(), CliError> {
    match resume.command {
        ResumeSubcommand::Upload {
            file,
            name,
            email,
            run_extract,
        } => {
            let data = std::fs::read(&file).map_err(|source| CliError::ReadFile {
                path: file.display().to_string(),
                source,
            })?;
            let file_name = file
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("resume.pdf")
                .to_owned();
            let part = reqwest::multipart::Part::bytes(data)
                .file_name(file_name)
                .mime_str("application/pdf")?;
            let mut form = reqwest::multipart::Form::new().part("file", part);
            if let Some(name) = name {
                form = form.text("name", name);
            }
            if let Some(email) = email {
                form = form.text("email", email);
            }
            // String field, not a boolean; the backend form parser expects
            // the literals "true"/"false".
            form = form.text("run_extract", if run_extract { "true" } else { "false" });

            let url = format!("{}/resumes", base_url.trim_end_matches('/'));
            let response = client.post(&url).multipart(form).send().await?;
            let status = response.status();
            let body = parse_body(&response.text().await?);
            if !status.is_success() {
                return Err(CliError::Server {
                    path: "/resumes".to_owned(),
                    status: status.as_u16(),
                    detail: body.map(|v| v.to_string()).unwrap_or_default(),
                });
            }
            print_body(&body)
        }
    }
}

async fn run_match(
    client: &reqwest::Client,
    base_url: &str,
    m: MatchCommand,
) -> Result<(), CliError> {
    match m.command {
        MatchSubcommand::Compute {
            candidate_id,
            job_id,
            no_explain,
        } => {
            let body = api_request(
                client,
                base_url,
                reqwest::Method::POST,
                &compute_match_path(candidate_id, job_id, !no_explain),
                None,
            )
            .await?;
            print_body(&body)
        }
        MatchSubcommand::List => {
            // Same suppression policy as the frontend: failures render as
            // an empty list.
            let body =
                match api_request(client, base_url, reqwest::Method::GET, "/matches", None).await {
                    Ok(Some(Value::Array(items))) => Value::Array(items),
                    _ => Value::Array(Vec::new()),
                };
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
    }
}

async fn api_request(
    client: &reqwest::Client,
    base_url: &str,
    method: reqwest::Method,
    path: &str,
    body: Option<Value>,
) -> Result<Option<Value>, CliError> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), path);
    let request = client.request(method, &url);
    let request = if let Some(json) = body {
        request.json(&json)
    } else {
        request
    };

    let response = request.send().await?;
    let status = response.status();
    let value = parse_body(&response.text().await?);

    if !status.is_success() {
        return Err(CliError::Server {
            path: path.to_owned(),
            status: status.as_u16(),
            detail: value.map(|v| v.to_string()).unwrap_or_default(),
        });
    }

    Ok(value)
}

fn body_id(body: &Option<Value>) -> Option<i64> {
    body.as_ref()?.get("id")?.as_i64()
}

fn print_body(body: &Option<Value>) -> Result<(), CliError> {
    match body {
        Some(value) => println!("{}", serde_json::to_string_pretty(value)?),
        None => println!("(empty response)"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================================
    // Path construction
    // =============================================================

    #[test]
    fn candidates_path_carries_flag_only_when_set() {
        assert_eq!(candidates_path(true), "/candidates?run_extract=true");
        assert_eq!(candidates_path(false), "/candidates");
    }

    #[test]
    fn extract_path_embeds_candidate_id() {
        assert_eq!(extract_path(2), "/candidates/2/extract");
    }

    #[test]
    fn compute_match_path_explain_flag() {
        assert_eq!(
            compute_match_path(2, 1, true),
            "/matches/simple?candidate_id=2&job_id=1&explain=true"
        );
        assert_eq!(
            compute_match_path(2, 1, false),
            "/matches/simple?candidate_id=2&job_id=1"
        );
    }

    // =============================================================
    // Seed payloads
    // =============================================================

    #[test]
    fn seed_job_matches_original_demo_record() {
        let payload = seed_job_payload();
        assert_eq!(payload["title"], "ML Engineer");
        assert_eq!(payload["company"], "Acme");
        let skills: Value =
            serde_json::from_str(payload["extracted_skills"].as_str().unwrap()).unwrap();
        assert_eq!(
            skills,
            serde_json::json!(["python", "pytorch", "natural language processing", "aws"])
        );
    }

    #[test]
    fn seed_candidate_matches_original_demo_record() {
        let payload = seed_candidate_payload();
        assert_eq!(payload["name"], "Test Candidate");
        assert_eq!(payload["email"], "test@example.com");
        assert!(payload.get("extracted_skills").is_none());
    }

    #[test]
    fn body_id_reads_integer_ids() {
        assert_eq!(body_id(&Some(serde_json::json!({"id": 7}))), Some(7));
        assert_eq!(body_id(&Some(serde_json::json!({}))), None);
        assert_eq!(body_id(&None), None);
    }
}
