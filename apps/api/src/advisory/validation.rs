//! Input validation for the advisory endpoints.
//!
//! Validation never stops at the first problem: every field is checked so the
//! caller can fix the whole form in one round trip.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::assessment::{AssessmentInput, MAX_SKILLS};

/// One violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid input data: {}", summarize(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

#[cfg(test)]
impl ValidationError {
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validates a raw career-assessment body.
pub fn validate_assessment(raw: &Value) -> Result<AssessmentInput, ValidationError> {
    let body = as_object(raw)?;
    let mut errors = Vec::new();

    let major = required_text(body, "major", "Major is required", &mut errors);
    let skills = required_skills(body, &mut errors);
    let work_environment = required_text(
        body,
        "workEnvironment",
        "Work environment preference is required",
        &mut errors,
    );
    let motivation = required_text(
        body,
        "motivation",
        "Career motivation is required",
        &mut errors,
    );
    let core_interest =
        required_text(body, "coreInterest", "Core interest is required", &mut errors);
    let problem_solving = required_text(
        body,
        "problemSolving",
        "Problem solving preference is required",
        &mut errors,
    );
    let personality =
        required_text(body, "personality", "Personality type is required", &mut errors);

    if !errors.is_empty() {
        return Err(ValidationError { errors });
    }

    // No errors means every required_text call returned Some.
    Ok(AssessmentInput {
        major: major.unwrap_or_default(),
        skills,
        work_environment: work_environment.unwrap_or_default(),
        motivation: motivation.unwrap_or_default(),
        core_interest: core_interest.unwrap_or_default(),
        problem_solving: problem_solving.unwrap_or_default(),
        personality: personality.unwrap_or_default(),
    })
}

/// Validates a market analysis body and returns the requested career path.
pub fn validate_market_request(raw: &Value) -> Result<String, ValidationError> {
    let body = as_object(raw)?;
    let mut errors = Vec::new();
    match required_text(body, "careerPath", "Career path is required", &mut errors) {
        Some(path) => Ok(path),
        None => Err(ValidationError { errors }),
    }
}

fn as_object(raw: &Value) -> Result<&Map<String, Value>, ValidationError> {
    raw.as_object().ok_or_else(|| ValidationError {
        errors: vec![FieldError::new("body", "Request body must be a JSON object")],
    })
}

fn required_text(
    body: &Map<String, Value>,
    field: &str,
    missing_message: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, missing_message));
            None
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            errors.push(FieldError::new(field, missing_message));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new(field, format!("{field} must be a string")));
            None
        }
    }
}

fn required_skills(body: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Vec<String> {
    let items = match body.get("skills") {
        None | Some(Value::Null) => {
            errors.push(FieldError::new("skills", "At least one skill is required"));
            return Vec::new();
        }
        Some(Value::Array(items)) => items,
        Some(_) => {
            errors.push(FieldError::new(
                "skills",
                "skills must be an array of strings",
            ));
            return Vec::new();
        }
    };

    if items.is_empty() {
        errors.push(FieldError::new("skills", "At least one skill is required"));
    } else if items.len() > MAX_SKILLS {
        errors.push(FieldError::new(
            "skills",
            format!("Maximum {MAX_SKILLS} skills allowed"),
        ));
    }

    let mut skills = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match item.as_str() {
            Some(skill) if !skill.trim().is_empty() => skills.push(skill.to_string()),
            Some(_) => errors.push(FieldError::new(
                format!("skills[{i}]"),
                "Skill cannot be empty",
            )),
            None => errors.push(FieldError::new(
                format!("skills[{i}]"),
                "Skill must be a string",
            )),
        }
    }
    skills
}
