use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::SchemaMismatch;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalaryRange {
    pub junior: String,
    pub mid_level: String,
    pub senior: String,
    pub tech_lead: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAnalysis {
    pub growth_potential: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<SalaryRange>,
    #[serde(default)]
    pub top_companies: Vec<String>,
}

/// A market analysis as returned by the provider: structured when it carries a
/// non-empty `growthPotential` string, otherwise kept verbatim for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarketAnalysisDocument {
    Structured(MarketAnalysis),
    Unknown(Value),
}

impl MarketAnalysisDocument {
    pub fn classify(value: Value) -> Result<Self, SchemaMismatch> {
        let has_growth = value
            .get("growthPotential")
            .and_then(Value::as_str)
            .is_some_and(|text| !text.trim().is_empty());
        if has_growth {
            return serde_json::from_value(value)
                .map(MarketAnalysisDocument::Structured)
                .map_err(|e| SchemaMismatch {
                    shape: "market analysis",
                    reason: e.to_string(),
                });
        }
        Ok(MarketAnalysisDocument::Unknown(value))
    }
}

impl<'de> Deserialize<'de> for MarketAnalysisDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        MarketAnalysisDocument::classify(value).map_err(serde::de::Error::custom)
    }
}
