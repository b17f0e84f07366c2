//! Error types for follower fetches.
//!
//! Every failure is returned to the caller. Nothing in this module turns a
//! failed fetch into an empty list.

use thiserror::Error;

/// Errors that can occur while fetching followers.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure: connect, DNS, TLS, timeout, or reading the body
    #[error("Network error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-2xx status
    #[error("{}", http_status_message(.status, .message))]
    HttpStatus { status: u16, message: Option<String> },

    /// Body is not JSON or not an array of follower objects
    #[error("Failed to decode followers: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// The request could not be built from configuration
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

fn http_status_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => format!("HTTP {status}: {message}"),
        None => format!("HTTP {status}"),
    }
}

impl FetchError {
    /// Stable tag for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::Network { .. } => "network_error",
            FetchError::HttpStatus { .. } => "http_status_error",
            FetchError::Decode { .. } => "decode_error",
            FetchError::InvalidRequest(_) => "invalid_request",
        }
    }

    /// HTTP status code, for `HttpStatus` only.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short message for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Network { .. } => "Could not reach GitHub",
            FetchError::HttpStatus { status: 404, .. } => "Account not found",
            FetchError::HttpStatus {
                status: 403 | 429, ..
            } => "GitHub rate limit reached",
            FetchError::HttpStatus { .. } => "GitHub returned an error",
            FetchError::Decode { .. } => "Unexpected response from GitHub",
            FetchError::InvalidRequest(_) => "Invalid configuration",
        }
    }
}
