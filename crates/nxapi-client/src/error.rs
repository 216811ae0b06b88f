//! NXAPI client errors

use thiserror::Error;

/// Errors that can occur when talking to a device
#[derive(Debug, Error)]
pub enum NxapiError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization error for a request body
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configured headers could not be converted into HTTP headers
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// API path was not relative (must start with '/')
    #[error("Invalid API path: {0}")]
    InvalidPath(String),
}
