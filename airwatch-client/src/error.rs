//! Error types for the node client.

use thiserror::Error;

/// Errors that can occur when fetching measurement data from a node.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed or the node returned a non-success status.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The response body was not a valid measurement payload.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Could not reach the node at all.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Timeout waiting for the node to respond.
    #[error("Request timed out")]
    Timeout,
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_connect() {
            ClientError::Connection(err.to_string())
        } else if err.is_decode() {
            ClientError::Parse(err.to_string())
        } else {
            ClientError::Http(err.to_string())
        }
    }
}
