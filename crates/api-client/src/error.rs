use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the movie backend
#[derive(Error, Debug)]
pub enum ClientError {
    /// The backend answered with a non-success status
    #[error("{endpoint} returned status {status}: {body}")]
    Fetch {
        endpoint: &'static str,
        status: StatusCode,
        body: String,
    },

    /// The body did not match any accepted shape
    #[error("Malformed response from {endpoint}: {reason}")]
    Protocol {
        endpoint: &'static str,
        reason: String,
    },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ClientError {
    /// HTTP status for `Fetch` errors
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
