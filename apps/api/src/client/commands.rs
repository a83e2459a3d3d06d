//! `compass assess` and `compass market`.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde_json::{json, Value};
use tracing::warn;

use crate::advisory::validation::{validate_assessment, ValidationError};
use crate::advisory::AdvisoryClient;
use crate::client::backend::BackendClient;
use crate::client::progress::show_progress;
use crate::client::render::{render_advice, render_market};
use crate::client::{CompassClient, ResultSource};
use crate::config::ClientConfig;
use crate::llm_client::LlmClient;

/// Every field is optional here so the validator can report all problems at once.
#[derive(Debug, Args)]
pub struct AssessArgs {
    #[arg(long)]
    pub major: Option<String>,
    /// Up to three skills; repeat the flag for each one.
    #[arg(long = "skill", value_name = "SKILL")]
    pub skills: Vec<String>,
    #[arg(long)]
    pub work_environment: Option<String>,
    #[arg(long)]
    pub motivation: Option<String>,
    #[arg(long)]
    pub core_interest: Option<String>,
    #[arg(long)]
    pub problem_solving: Option<String>,
    #[arg(long)]
    pub personality: Option<String>,
    /// Call the provider directly instead of the API, with offline fallback.
    #[arg(long)]
    pub direct: bool,
    /// Follow up with a market analysis for the Nth recommended career.
    #[arg(long, value_name = "N")]
    pub market: Option<usize>,
}

impl AssessArgs {
    fn to_json(&self) -> Value {
        json!({
            "major": self.major,
            "skills": self.skills,
            "workEnvironment": self.work_environment,
            "motivation": self.motivation,
            "coreInterest": self.core_interest,
            "problemSolving": self.problem_solving,
            "personality": self.personality,
        })
    }
}

#[derive(Debug, Args)]
pub struct MarketArgs {
    #[arg(long)]
    pub career_path: String,
    /// Call the provider directly instead of the API, with offline fallback.
    #[arg(long)]
    pub direct: bool,
}

pub async fn run_assess(args: AssessArgs, config: &ClientConfig) -> Result<()> {
    let input = match validate_assessment(&args.to_json()) {
        Ok(input) => input,
        Err(e) => return Err(report_invalid(e)),
    };
    let client = build_client(args.direct, config);

    let outcome = show_progress(client.career_advice(&input)).await?;
    announce(outcome.source);
    println!("{}", render_advice(&outcome.result));

    if let Some(n) = args.market {
        let titles = outcome.result.career_titles();
        let title = n
            .checked_sub(1)
            .and_then(|i| titles.get(i))
            .with_context(|| {
                format!(
                    "--market {n} is out of range: {} career path(s) available",
                    titles.len()
                )
            })?;

        let analysis = show_progress(client.market_analysis(title)).await?;
        announce(analysis.source);
        println!("Job Market Analysis: {title}");
        println!("{}", render_market(&analysis.result));
    }

    Ok(())
}

pub async fn run_market(args: MarketArgs, config: &ClientConfig) -> Result<()> {
    if args.career_path.trim().is_empty() {
        bail!("Career path is required");
    }
    let client = build_client(args.direct, config);

    let analysis = show_progress(client.market_analysis(args.career_path.trim())).await?;
    announce(analysis.source);
    println!("{}", render_market(&analysis.result));
    Ok(())
}

fn build_client(direct: bool, config: &ClientConfig) -> CompassClient {
    if !direct {
        return CompassClient::backend(BackendClient::new(config.api_url.clone()));
    }

    let advisor = match &config.gemini_api_key {
        Some(key) => Some(AdvisoryClient::new(Arc::new(LlmClient::new(key.clone())))),
        None => {
            warn!("GEMINI_API_KEY is not set; direct mode will use offline suggestions");
            None
        }
    };
    CompassClient::direct(advisor)
}

fn announce(source: ResultSource) {
    if source == ResultSource::Mock {
        eprintln!("The AI service is unavailable; showing offline suggestions instead.\n");
    }
}

fn report_invalid(err: ValidationError) -> anyhow::Error {
    for field in &err.errors {
        eprintln!("  --{}: {}", flag_name(&field.field), field.message);
    }
    anyhow::anyhow!("Invalid input data")
}

/// `workEnvironment` -> `work-environment`, `skills[1]` -> `skill`.
fn flag_name(field: &str) -> String {
    if field.starts_with("skills") {
        return "skill".to_string();
    }
    let mut out = String::with_capacity(field.len() + 4);
    for ch in field.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
