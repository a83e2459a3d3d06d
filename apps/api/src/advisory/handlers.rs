//! Axum route handlers for the advisory API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use tracing::error;

use crate::advisory::validation::{validate_assessment, validate_market_request};
use crate::errors::AppError;
use crate::models::advice::CareerAdvice;
use crate::models::market::MarketAnalysisDocument;
use crate::state::AppState;

pub const CAREER_ADVICE_PATH: &str = "/api/career-advice";
pub const MARKET_ANALYSIS_PATH: &str = "/api/market-analysis";

/// POST /api/career-advice
///
/// Validates the assessment, asks the provider once and returns the advice
/// document in whichever shape the provider produced.
pub async fn handle_career_advice(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CareerAdvice>, AppError> {
    let Json(raw) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let input = validate_assessment(&raw)?;

    let advice = state
        .advisor
        .request_career_advice(&input)
        .await
        .map_err(|e| {
            error!(endpoint = CAREER_ADVICE_PATH, "{e}");
            AppError::from(e)
        })?;

    Ok(Json(advice))
}

/// POST /api/market-analysis
pub async fn handle_market_analysis(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MarketAnalysisDocument>, AppError> {
    let Json(raw) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let career_path = validate_market_request(&raw)?;

    let analysis = state
        .advisor
        .request_market_analysis(&career_path)
        .await
        .map_err(|e| {
            error!(endpoint = MARKET_ANALYSIS_PATH, "{e}");
            AppError::from(e)
        })?;

    Ok(Json(analysis))
}
