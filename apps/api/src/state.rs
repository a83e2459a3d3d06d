use crate::advisory::AdvisoryClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; every request is independent.
#[derive(Clone)]
pub struct AppState {
    pub advisor: AdvisoryClient,
}
