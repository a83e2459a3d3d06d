pub mod advice;
pub mod assessment;
pub mod market;

use thiserror::Error;

/// A provider document carried a discriminating key but did not fit that shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{shape} document did not match its schema: {reason}")]
pub struct SchemaMismatch {
    pub shape: &'static str,
    pub reason: String,
}
