//! Error types for the inference collaborators.

use thiserror::Error;

/// Errors that can occur while inferring a value from an external source.
#[derive(Error, Debug)]
pub enum InferError {
    /// Target URL could not be normalized into a valid absolute URL
    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl {
        /// URL after scheme prefixing
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// Host operating system or architecture is not supported
    #[error("unsupported host {0}")]
    UnsupportedHost(String),

    /// No Chrome version is known for the requested Electron version
    #[error("no Chrome version known for Electron {0}")]
    UnknownElectronVersion(String),

    /// No user agent template exists for the platform
    #[error("cannot build a user agent for platform {0}")]
    UnsupportedPlatform(String),

    /// HTTP transport error
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("request to {url} failed with HTTP {status}")]
    HttpStatus {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// Page has no `<title>` element
    #[error("no title found at {0}")]
    TitleNotFound(String),

    /// The collaborator is not able to produce a value at all
    #[error("{0}")]
    Unavailable(String),
}

/// Result type alias using `InferError`.
pub type Result<T> = std::result::Result<T, InferError>;

impl From<InferError> for appwrap_core::AppwrapError {
    fn from(err: InferError) -> Self {
        Self::Inference(err.to_string())
    }
}
