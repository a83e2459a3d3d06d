//! Career advice documents.
//!
//! The provider has answered in more than one shape over time, so the shape is
//! decided once in `CareerAdvice::classify` and carried as an enum from there on.
//! Serialization is untagged: each variant goes over the wire in its original shape.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::SchemaMismatch;

/// One recommended career in the current document shape.
///
/// Any field may be missing from a provider document; absent values come back
/// empty and renderers skip them. A field of the wrong type is still a mismatch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerPathEntry {
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub next_steps: Vec<String>,
    pub outlook: String,
}

/// Current shape: several ranked career paths plus general advice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentAdvice {
    pub career_paths: Vec<CareerPathEntry>,
    #[serde(default)]
    pub general_advice: String,
}

/// Legacy shape: a single career path with reasons and a starter project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyAdvice {
    pub career_path: String,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub suggested_project: String,
}

/// Free-text advice that never made it into a structured document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAdvice {
    pub raw_advice: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CareerAdvice {
    Current(CurrentAdvice),
    Legacy(LegacyAdvice),
    Raw(RawAdvice),
    Unknown(Value),
}

impl CareerAdvice {
    /// Decides the document shape by probing, in order, for `careerPaths` (array),
    /// `careerPath` (string) and `rawAdvice` (string). Anything else is `Unknown`.
    ///
    /// A present discriminating key whose document does not deserialize into the
    /// matching shape is a `SchemaMismatch`.
    pub fn classify(value: Value) -> Result<Self, SchemaMismatch> {
        if value.get("careerPaths").is_some_and(Value::is_array) {
            return serde_json::from_value(value)
                .map(CareerAdvice::Current)
                .map_err(|e| mismatch("current career advice", e));
        }

        if value.get("careerPath").is_some_and(Value::is_string) {
            return serde_json::from_value(value)
                .map(CareerAdvice::Legacy)
                .map_err(|e| mismatch("legacy career advice", e));
        }

        if value.get("rawAdvice").is_some_and(Value::is_string) {
            return serde_json::from_value(value)
                .map(CareerAdvice::Raw)
                .map_err(|e| mismatch("raw career advice", e));
        }

        Ok(CareerAdvice::Unknown(value))
    }

    pub fn shape(&self) -> &'static str {
        match self {
            CareerAdvice::Current(_) => "current",
            CareerAdvice::Legacy(_) => "legacy",
            CareerAdvice::Raw(_) => "raw",
            CareerAdvice::Unknown(_) => "unknown",
        }
    }

    /// Career titles a follow-up market analysis can be requested for, best match first.
    /// Entries without a title are skipped.
    pub fn career_titles(&self) -> Vec<&str> {
        match self {
            CareerAdvice::Current(advice) => advice
                .career_paths
                .iter()
                .map(|p| p.title.as_str())
                .filter(|title| !title.trim().is_empty())
                .collect(),
            CareerAdvice::Legacy(advice) => vec![advice.career_path.as_str()],
            CareerAdvice::Raw(_) | CareerAdvice::Unknown(_) => Vec::new(),
        }
    }
}

impl<'de> Deserialize<'de> for CareerAdvice {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        CareerAdvice::classify(value).map_err(serde::de::Error::custom)
    }
}

fn mismatch(shape: &'static str, err: serde_json::Error) -> SchemaMismatch {
    SchemaMismatch {
        shape,
        reason: err.to_string(),
    }
}
