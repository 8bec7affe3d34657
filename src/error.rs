//! Error types for the PandaScore client

use thiserror::Error;


pub type Result<T> = std::result::Result<T, PandaScoreError>;

#[derive(Error, Debug)]
pub enum PandaScoreError {
    /// The game identifier is not one the API partitions results by.
    /// Raised before any network call.
    #[error("unknown game '{game}'")]
    InvalidGame { game: String },

    /// Network, DNS, TLS or timeout failure reported by the transport.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response carrying the API's own error message.
    #[error("PandaScore error: {message}")]
    Api { message: String },

    /// Malformed JSON in a success or an error body.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PandaScoreError {
    /// True when the API itself rejected the request (bad token, unknown path, ...).
    pub fn is_api(&self) -> bool {
        matches!(self, PandaScoreError::Api { .. })
    }

    /// The message reported by the API, without the fixed label.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            PandaScoreError::Api { message } => Some(message),
            _ => None,
        }
    }
}
