//! Error types for job id extraction and job board calls.

use thiserror::Error;

/// Result type for job board operations.
pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// No non-empty segment after the last `/`
    #[error("invalid URL format, unable to extract job id")]
    InvalidUrlFormat,
}

/// Job board failures. Callers see all of these as one generic failure;
/// the variants only exist so the logs say what actually went wrong.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// No response received (connection refused, DNS, timeout)
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-2xx response from the job board
    #[error("job board returned status {status}: {body}")]
    Status {
        status: u16,
        headers: String,
        body: String,
    },

    /// Body is not JSON or lacks `data.jobPosting`
    #[error("malformed job board response: {0}")]
    MalformedResponse(String),
}
