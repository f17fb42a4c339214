//! Error types for the claim store client.

use thiserror::Error;

/// Claim store transport errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection error (network, DNS, refused, timeout)
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The store answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, if readable
        body: String,
    },

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Any other request failure
    #[error("Request error: {0}")]
    RequestError(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            ClientError::ConnectionError(e.to_string())
        } else if e.is_decode() {
            ClientError::DecodeError(e.to_string())
        } else {
            ClientError::RequestError(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::DecodeError(format!("JSON parsing error: {}", e))
    }
}
