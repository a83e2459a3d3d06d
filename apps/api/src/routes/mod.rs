pub mod health;

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method, Uri},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::advisory::handlers::{
    handle_career_advice, handle_market_analysis, CAREER_ADVICE_PATH, MARKET_ANALYSIS_PATH,
};
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("Endpoint not found: {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/api/health", get(health::health_handler))
        .route(CAREER_ADVICE_PATH, post(handle_career_advice))
        .route(MARKET_ANALYSIS_PATH, post(handle_market_analysis))
        .fallback(not_found)
        .with_state(state)
}

/// CORS restricted to a fixed allow-list. Requests from other origins get no
/// CORS headers, so browsers refuse the response.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid origin in ALLOWED_ORIGINS: '{origin}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::advisory::AdvisoryClient;
    use crate::config::DEFAULT_ALLOWED_ORIGINS;
    use crate::llm_client::testing::CannedGenerator;

    const FOUR_PATHS: &str = r#"Sure! ```json
    {
        "careerPaths": [
            {"title": "Backend Developer", "description": "d", "requiredSkills": ["Go"], "nextSteps": ["Build an API"], "outlook": "Strong"},
            {"title": "Mobile Developer", "description": "d", "outlook": "Good"},
            {"title": "Cloud Engineer", "description": "d", "outlook": "Growing"},
            {"title": "Data Engineer", "description": "d", "outlook": "Growing"}
        ],
        "generalAdvice": "Build things you care about."
    }
    ```"#;

    const MARKET: &str = r#"{
        "growthPotential": "Rapid growth",
        "requiredSkills": ["Go", "SQL"],
        "salaryRange": {"junior": "$600", "midLevel": "$1,500", "senior": "$3,000", "techLead": "$4,500"},
        "topCompanies": ["FPT Software", "VNG"]
    }"#;

    fn app_with(generator: CannedGenerator) -> (Router, Arc<CannedGenerator>) {
        let generator = Arc::new(generator);
        let state = AppState {
            advisor: AdvisoryClient::new(generator.clone()),
        };
        (build_router(state), generator)
    }

    fn it_student() -> Value {
        json!({
            "major": "Information Technology",
            "skills": ["coding"],
            "workEnvironment": "remote",
            "motivation": "impact",
            "coreInterest": "building",
            "problemSolving": "analytical",
            "personality": "introvert"
        })
    }

    fn post_json(path: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_career_advice_success() {
        let (app, generator) = app_with(CannedGenerator::replying(FOUR_PATHS));

        let response = app
            .oneshot(post_json(CAREER_ADVICE_PATH, &it_student()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let paths = body["careerPaths"].as_array().unwrap();
        assert!(paths.len() <= 4);
        assert_eq!(paths[0]["title"], "Backend Developer");
        assert_eq!(body["generalAdvice"], "Build things you care about.");
        assert!(generator.last_prompt().unwrap().contains("Major: Information Technology"));
    }

    #[tokio::test]
    async fn test_career_advice_legacy_shape_passes_through() {
        let legacy = r#"{"careerPath": "Web Developer", "reasons": ["r1"], "suggestedProject": "Portfolio"}"#;
        let (app, _) = app_with(CannedGenerator::replying(legacy));

        let response = app
            .oneshot(post_json(CAREER_ADVICE_PATH, &it_student()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["careerPath"], "Web Developer");
    }

    #[tokio::test]
    async fn test_partial_career_documents_return_200() {
        let cases = [
            (
                r#"{"careerPaths": [{"title": "Backend Developer", "description": "d"}]}"#,
                "careerPaths",
            ),
            (
                r#"{"careerPath": "Web Developer", "reasons": ["r"]}"#,
                "careerPath",
            ),
        ];
        for (document, key) in cases {
            let (app, _) = app_with(CannedGenerator::replying(document));

            let response = app
                .oneshot(post_json(CAREER_ADVICE_PATH, &it_student()))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "document: {document}");
            let body = body_json(response).await;
            assert!(body.get(key).is_some());
        }
    }

    #[tokio::test]
    async fn test_market_analysis_without_salary_range_returns_200() {
        let document = r#"{"growthPotential": "High", "requiredSkills": ["Go"], "topCompanies": ["VNG"]}"#;
        let (app, _) = app_with(CannedGenerator::replying(document));

        let response = app
            .oneshot(post_json(
                MARKET_ANALYSIS_PATH,
                &json!({"careerPath": "Backend Developer"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["growthPotential"], "High");
        assert!(body.get("salaryRange").is_none());
    }

    #[tokio::test]
    async fn test_empty_major_returns_400_naming_major() {
        let (app, generator) = app_with(CannedGenerator::replying(FOUR_PATHS));

        let response = app
            .oneshot(post_json(CAREER_ADVICE_PATH, &json!({"major": ""})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        let fields: Vec<&str> = body["error"]["fields"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|f| f["field"].as_str())
            .collect();
        assert!(fields.contains(&"major"));
        assert!(generator.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_skill_count_out_of_range_returns_400() {
        for skills in [json!([]), json!(["a", "b", "c", "d"])] {
            let (app, _) = app_with(CannedGenerator::replying(FOUR_PATHS));
            let mut body = it_student();
            body["skills"] = skills;

            let response = app
                .oneshot(post_json(CAREER_ADVICE_PATH, &body))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = body_json(response).await;
            assert_eq!(body["error"]["fields"][0]["field"], "skills");
        }
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (app, _) = app_with(CannedGenerator::replying(FOUR_PATHS));
        let request = Request::builder()
            .method("POST")
            .uri(CAREER_ADVICE_PATH)
            .header("content-type", "application/json")
            .body(Body::from("{\"major\": "))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_provider_prose_returns_500() {
        let (app, _) = app_with(CannedGenerator::replying("Sorry, I can't do that."));

        let response = app
            .oneshot(post_json(CAREER_ADVICE_PATH, &it_student()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "ADVICE_GENERATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("no JSON object"));
    }

    #[tokio::test]
    async fn test_provider_failure_returns_500() {
        let (app, _) = app_with(CannedGenerator::failing(400, "API key not valid"));

        let response = app
            .oneshot(post_json(CAREER_ADVICE_PATH, &it_student()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("API key not valid"));
    }

    #[tokio::test]
    async fn test_market_analysis_success() {
        let (app, generator) = app_with(CannedGenerator::replying(MARKET));

        let response = app
            .oneshot(post_json(
                MARKET_ANALYSIS_PATH,
                &json!({"careerPath": "Backend Developer"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["salaryRange"]["techLead"], "$4,500");
        assert_eq!(body["topCompanies"][1], "VNG");
        assert!(generator.last_prompt().unwrap().contains("'Backend Developer'"));
    }

    #[tokio::test]
    async fn test_market_analysis_missing_career_path_returns_400() {
        let (app, _) = app_with(CannedGenerator::replying(MARKET));

        let response = app
            .oneshot(post_json(MARKET_ANALYSIS_PATH, &json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["fields"][0]["field"], "careerPath");
    }

    #[tokio::test]
    async fn test_market_analysis_failure_returns_500() {
        let (app, _) = app_with(CannedGenerator::replying(""));

        let response = app
            .oneshot(post_json(
                MARKET_ANALYSIS_PATH,
                &json!({"careerPath": "Chef"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "ANALYSIS_GENERATION_ERROR");
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let (app, _) = app_with(CannedGenerator::replying(""));

        let response = app
            .clone()
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["service"], "Career Compass API");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (app, _) = app_with(CannedGenerator::replying(""));
        let response = app
            .oneshot(Request::get("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    fn cors_app() -> Router {
        let origins: Vec<String> = DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect();
        let (app, _) = app_with(CannedGenerator::replying(""));
        app.layer(cors_layer(&origins).unwrap())
    }

    #[tokio::test]
    async fn test_cors_allows_listed_origin() {
        let request = Request::get("/api/health")
            .header("origin", "https://plozdev.github.io")
            .body(Body::empty())
            .unwrap();

        let response = cors_app().oneshot(request).await.unwrap();

        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "https://plozdev.github.io"
        );
        assert_eq!(response.headers()["access-control-allow-credentials"], "true");
    }

    #[tokio::test]
    async fn test_cors_ignores_other_origins() {
        let request = Request::get("/api/health")
            .header("origin", "https://evil.example")
            .body(Body::empty())
            .unwrap();

        let response = cors_app().oneshot(request).await.unwrap();

        assert!(response
            .headers()
            .get("access-control-allow-origin")
            .is_none());
    }

    #[test]
    fn test_cors_layer_rejects_invalid_origin() {
        assert!(cors_layer(&["bad\norigin".to_string()]).is_err());
    }
}
