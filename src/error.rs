//! Error taxonomy for the scrape pipeline.

use thiserror::Error;

/// Everything that can stop a scrape. Nothing here is retried or recovered
/// locally; callers propagate it to the process boundary.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Missing Reddit credentials. Set environment variables: {}", .missing.join(", "))]
    Configuration { missing: Vec<&'static str> },

    #[error("invalid listing mode {0:?}: MODE must be one of: new, hot, top")]
    InvalidMode(String),

    #[error(transparent)]
    ExternalService(#[from] ExternalServiceError),

    #[error("output I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Failures surfaced while talking to the Reddit API.
#[derive(Debug, Error)]
pub enum ExternalServiceError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{context}: request failed: {source}")]
    Request {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{context}: Reddit responded with HTTP {status} for {url}")]
    Status {
        context: &'static str,
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("authentication rejected: {0}")]
    Auth(String),

    #[error("{context}: malformed response: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
