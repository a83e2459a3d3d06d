//! Terminal client for the career advisor.
//!
//! Mirrors the browser flow: one submission moves `Idle → Submitting` and ends in
//! `Success` or `Failed`. In direct mode the client calls the provider itself and
//! a failure is replaced by an offline mock result, so the user always sees advice.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::advisory::{AdviceGenerationError, AdvisoryClient, AnalysisGenerationError};
use crate::client::backend::BackendClient;
use crate::client::mock::{mock_career_advice, mock_market_analysis};
use crate::client::progress::with_minimum_duration;
use crate::models::advice::CareerAdvice;
use crate::models::assessment::AssessmentInput;
use crate::models::market::MarketAnalysisDocument;

pub mod backend;
pub mod commands;
pub mod mock;
pub mod progress;
pub mod render;

/// Shortest time the loading state lasts in direct mode.
pub const MIN_LOADING: Duration = Duration::from_secs(3);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server responded with {status}: {message}")]
    Server { status: u16, message: String },

    #[error(transparent)]
    Advice(#[from] AdviceGenerationError),

    #[error(transparent)]
    Analysis(#[from] AnalysisGenerationError),

    #[error("GEMINI_API_KEY is required to call the provider directly")]
    MissingApiKey,

    #[error("Submission is {0}; a submission produces exactly one outcome")]
    InvalidTransition(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Through the Compass HTTP API.
    Backend,
    /// Straight to the provider, with the offline mock as fallback.
    Direct,
}

/// Where a successful result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    Backend,
    Provider,
    Mock,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState<T> {
    Idle,
    Submitting,
    Success { result: T, source: ResultSource },
    Failed(String),
}

impl<T> SubmissionState<T> {
    fn name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Success { .. } => "already successful",
            SubmissionState::Failed(_) => "already failed",
        }
    }
}

/// A single submission. Transitions that would produce a second outcome are rejected.
#[derive(Debug)]
pub struct Submission<T> {
    mode: Mode,
    state: SubmissionState<T>,
}

impl<T> Submission<T> {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            state: SubmissionState::Idle,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &SubmissionState<T> {
        &self.state
    }

    pub fn begin(&mut self) -> Result<(), ClientError> {
        match self.state {
            SubmissionState::Idle => {
                self.state = SubmissionState::Submitting;
                Ok(())
            }
            ref other => Err(ClientError::InvalidTransition(other.name())),
        }
    }

    pub fn succeed(&mut self, result: T, source: ResultSource) -> Result<(), ClientError> {
        match self.state {
            SubmissionState::Submitting => {
                self.state = SubmissionState::Success { result, source };
                Ok(())
            }
            ref other => Err(ClientError::InvalidTransition(other.name())),
        }
    }

    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), ClientError> {
        match self.state {
            SubmissionState::Submitting => {
                self.state = SubmissionState::Failed(reason.into());
                Ok(())
            }
            ref other => Err(ClientError::InvalidTransition(other.name())),
        }
    }

    /// `Failed → Success(Mock)`, only available in direct mode.
    pub fn fall_back(&mut self, mock: T) -> Result<(), ClientError> {
        if self.mode == Mode::Direct && matches!(self.state, SubmissionState::Failed(_)) {
            self.state = SubmissionState::Success {
                result: mock,
                source: ResultSource::Mock,
            };
            return Ok(());
        }
        Err(ClientError::InvalidTransition(self.state.name()))
    }

    pub fn into_state(self) -> SubmissionState<T> {
        self.state
    }
}

/// Successful result plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub result: T,
    pub source: ResultSource,
}

enum Transport {
    Backend(BackendClient),
    /// `None` when no provider key is configured; every request then falls back to the mock.
    Direct(Option<AdvisoryClient>),
}

pub struct CompassClient {
    transport: Transport,
    min_loading: Duration,
}

impl CompassClient {
    pub fn backend(backend: BackendClient) -> Self {
        Self {
            transport: Transport::Backend(backend),
            min_loading: Duration::ZERO,
        }
    }

    pub fn direct(advisor: Option<AdvisoryClient>) -> Self {
        Self {
            transport: Transport::Direct(advisor),
            min_loading: MIN_LOADING,
        }
    }

    pub fn with_min_loading(mut self, min_loading: Duration) -> Self {
        self.min_loading = min_loading;
        self
    }

    pub fn mode(&self) -> Mode {
        match self.transport {
            Transport::Backend(_) => Mode::Backend,
            Transport::Direct(_) => Mode::Direct,
        }
    }

    pub async fn career_advice(
        &self,
        input: &AssessmentInput,
    ) -> Result<Outcome<CareerAdvice>, ClientError> {
        let mut submission = Submission::new(self.mode());
        submission.begin()?;

        let result = match &self.transport {
            Transport::Backend(backend) => backend.career_advice(input).await,
            Transport::Direct(advisor) => {
                let call = async {
                    let advisor = advisor.as_ref().ok_or(ClientError::MissingApiKey)?;
                    Ok::<_, ClientError>(advisor.request_career_advice(input).await?)
                };
                with_minimum_duration(call, self.min_loading).await
            }
        };

        self.settle(submission, result, || {
            mock_career_advice(&input.major, &input.skills)
        })
    }

    pub async fn market_analysis(
        &self,
        career_path: &str,
    ) -> Result<Outcome<MarketAnalysisDocument>, ClientError> {
        let mut submission = Submission::new(self.mode());
        submission.begin()?;

        let result = match &self.transport {
            Transport::Backend(backend) => backend.market_analysis(career_path).await,
            Transport::Direct(advisor) => {
                let call = async {
                    let advisor = advisor.as_ref().ok_or(ClientError::MissingApiKey)?;
                    Ok::<_, ClientError>(advisor.request_market_analysis(career_path).await?)
                };
                with_minimum_duration(call, self.min_loading).await
            }
        };

        self.settle(submission, result, || {
            MarketAnalysisDocument::Structured(mock_market_analysis(career_path))
        })
    }

    fn settle<T>(
        &self,
        mut submission: Submission<T>,
        result: Result<T, ClientError>,
        mock: impl FnOnce() -> T,
    ) -> Result<Outcome<T>, ClientError> {
        let source = match self.mode() {
            Mode::Backend => ResultSource::Backend,
            Mode::Direct => ResultSource::Provider,
        };

        match result {
            Ok(value) => submission.succeed(value, source)?,
            Err(e) => {
                submission.fail(e.to_string())?;
                if self.mode() == Mode::Backend {
                    return Err(e);
                }
                // The progress line owns stderr here; the user is told by the caller.
                debug!("Provider request failed, showing offline suggestions: {e}");
                submission.fall_back(mock())?;
            }
        }

        match submission.into_state() {
            SubmissionState::Success { result, source } => Ok(Outcome { result, source }),
            other => Err(ClientError::InvalidTransition(other.name())),
        }
    }
}
