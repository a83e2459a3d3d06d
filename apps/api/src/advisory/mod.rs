//! Career advisor. Turns a validated assessment (or a career title) into a
//! prompt, asks the provider once, and classifies whatever JSON comes back.
//!
//! All provider calls go through `llm_client::TextGenerator`.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::advisory::prompts::{CAREER_ADVICE_PROMPT_TEMPLATE, MARKET_ANALYSIS_PROMPT_TEMPLATE};
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{extract_json_object, LlmError, TextGenerator};
use crate::models::advice::CareerAdvice;
use crate::models::assessment::AssessmentInput;
use crate::models::market::MarketAnalysisDocument;
use crate::models::SchemaMismatch;

pub mod handlers;
pub mod prompts;
pub mod validation;

/// Number of career paths the prompt asks for.
pub const EXPECTED_CAREER_PATHS: usize = 4;

/// Why a single generation attempt produced no usable document.
#[derive(Debug, Error)]
pub enum GenerationFailure {
    #[error("provider call failed: {0}")]
    Provider(#[from] LlmError),

    #[error("empty response from provider")]
    EmptyResponse,

    #[error("no JSON object found in response")]
    NoJsonObject,

    #[error("invalid JSON in response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error(transparent)]
    SchemaMismatch(#[from] SchemaMismatch),
}

#[derive(Debug, Error)]
#[error("Failed to get career advice: {0}")]
pub struct AdviceGenerationError(#[from] pub GenerationFailure);

#[derive(Debug, Error)]
#[error("Failed to get market analysis: {0}")]
pub struct AnalysisGenerationError(#[from] pub GenerationFailure);

#[derive(Clone)]
pub struct AdvisoryClient {
    generator: Arc<dyn TextGenerator>,
}

impl AdvisoryClient {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Asks the provider for career recommendations matching `input`.
    /// One attempt; any failure goes straight back to the caller.
    pub async fn request_career_advice(
        &self,
        input: &AssessmentInput,
    ) -> Result<CareerAdvice, AdviceGenerationError> {
        let prompt = build_career_advice_prompt(input);
        let value = self.generate_json(&prompt).await?;
        let advice = CareerAdvice::classify(value).map_err(GenerationFailure::from)?;

        if let CareerAdvice::Current(current) = &advice {
            if current.career_paths.len() != EXPECTED_CAREER_PATHS {
                warn!(
                    "Provider returned {} career paths (asked for {})",
                    current.career_paths.len(),
                    EXPECTED_CAREER_PATHS
                );
            }
        }
        info!("Career advice generated: shape={}", advice.shape());

        Ok(advice)
    }

    /// Asks the provider for a job-market summary of `career_path`.
    pub async fn request_market_analysis(
        &self,
        career_path: &str,
    ) -> Result<MarketAnalysisDocument, AnalysisGenerationError> {
        let prompt = build_market_analysis_prompt(career_path);
        let value = self.generate_json(&prompt).await?;
        let analysis = MarketAnalysisDocument::classify(value).map_err(GenerationFailure::from)?;
        info!("Market analysis generated for '{career_path}'");
        Ok(analysis)
    }

    async fn generate_json(&self, prompt: &str) -> Result<serde_json::Value, GenerationFailure> {
        let text = self.generator.generate(prompt).await?;
        if text.trim().is_empty() {
            return Err(GenerationFailure::EmptyResponse);
        }

        let span = extract_json_object(&text).ok_or(GenerationFailure::NoJsonObject)?;
        Ok(serde_json::from_str(span)?)
    }
}

pub fn build_career_advice_prompt(input: &AssessmentInput) -> String {
    let skills = input.skills.join(", ");
    fill_template(
        CAREER_ADVICE_PROMPT_TEMPLATE,
        &[
            ("major", &input.major),
            ("skills", &skills),
            ("work_environment", &input.work_environment),
            ("motivation", &input.motivation),
            ("core_interest", &input.core_interest),
            ("problem_solving", &input.problem_solving),
            ("personality", &input.personality),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

pub fn build_market_analysis_prompt(career_path: &str) -> String {
    fill_template(
        MARKET_ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("career_path", career_path),
            ("json_only", JSON_ONLY_INSTRUCTION),
        ],
    )
}

/// Replaces `{name}` placeholders in a single pass, so placeholder-looking text
/// inside a substituted value is left as written.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let hit = values.iter().find(|(name, _)| {
            after.starts_with(name) && after[name.len()..].starts_with('}')
        });
        match hit {
            Some((name, value)) => {
                out.push_str(value);
                rest = &after[name.len() + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
