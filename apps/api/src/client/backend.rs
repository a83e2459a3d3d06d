use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::advisory::handlers::{CAREER_ADVICE_PATH, MARKET_ANALYSIS_PATH};
use crate::advisory::validation::FieldError;
use crate::client::ClientError;
use crate::models::advice::CareerAdvice;
use crate::models::assessment::{AssessmentInput, MarketAnalysisRequest};
use crate::models::market::MarketAnalysisDocument;

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    fields: Vec<FieldError>,
}

/// Talks to the Compass HTTP API.
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn career_advice(&self, input: &AssessmentInput) -> Result<CareerAdvice, ClientError> {
        self.post(CAREER_ADVICE_PATH, input).await
    }

    pub async fn market_analysis(
        &self,
        career_path: &str,
    ) -> Result<MarketAnalysisDocument, ClientError> {
        let body = MarketAnalysisRequest {
            career_path: career_path.to_string(),
        };
        self.post(MARKET_ANALYSIS_PATH, &body).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: serde::Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        debug!("POST {url}");

        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::Server {
                status: status.as_u16(),
                message: server_error_message(&text),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

/// Reads `error.message` (plus any field errors) from an API error body.
fn server_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if envelope.error.fields.is_empty() => envelope.error.message,
        Ok(envelope) => {
            let fields = envelope
                .error
                .fields
                .iter()
                .map(|f| format!("{}: {}", f.field, f.message))
                .collect::<Vec<_>>()
                .join("; ");
            format!("{} ({fields})", envelope.error.message)
        }
        Err(_) if body.trim().is_empty() => "no response body".to_string(),
        Err(_) => body.to_string(),
    }
}
