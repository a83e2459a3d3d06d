use serde::{Deserialize, Serialize};

/// Upper bound on the number of skills a student may list.
pub const MAX_SKILLS: usize = 3;

/// A validated career-assessment submission.
///
/// Only constructed by `advisory::validation::validate_assessment`, so every
/// string is non-blank and `skills` holds between 1 and `MAX_SKILLS` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInput {
    pub major: String,
    pub skills: Vec<String>,
    pub work_environment: String,
    pub motivation: String,
    pub core_interest: String,
    pub problem_solving: String,
    pub personality: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAnalysisRequest {
    pub career_path: String,
}
