use thiserror::Error;

/// Errors raised while fetching article suggestions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    /// Connection, DNS, TLS or timeout failure
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-success status or an `error` body
    #[error("API error ({code}): {message}")]
    Api { code: String, message: String },

    /// The response body was not the expected JSON shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// The background worker has shut down
    #[error("Suggestion worker unavailable")]
    WorkerUnavailable,
}

impl From<reqwest::Error> for SuggestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SuggestError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            SuggestError::Api {
                code: status.as_u16().to_string(),
                message: err.to_string(),
            }
        } else {
            SuggestError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SuggestError {
    fn from(err: serde_json::Error) -> Self {
        SuggestError::Parse(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
