//! Error types for options resolution.

use appwrap_infer::InferError;
use thiserror::Error;

/// Errors surfaced by options resolution.
///
/// Only precondition failures and a failed user agent lookup are surfaced.
/// Icon and title failures are logged and replaced with defaults.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The request has no target URL
    #[error("a target URL is required")]
    MissingTargetUrl,

    /// The target URL could not be normalized
    #[error("invalid target URL: {0}")]
    InvalidUrl(#[source] InferError),

    /// Host platform or architecture could not be determined
    #[error("host detection failed: {0}")]
    HostDetection(#[source] InferError),

    /// User agent inference failed
    #[error("user agent inference failed: {0}")]
    UserAgent(#[source] InferError),

    /// Request or result could not be (de)serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using `ResolveError`.
pub type Result<T> = std::result::Result<T, ResolveError>;

impl From<ResolveError> for appwrap_core::AppwrapError {
    fn from(err: ResolveError) -> Self {
        Self::Options(err.to_string())
    }
}
