//! PokeAPI access
//!
//! Defines the ApiError type, the response records consumed from the remote
//! service, and the async HTTP client used by the lookup worker.

use thiserror::Error;

mod client;
pub mod types;

pub use client::PokeApiClient;

/// Errors that can occur while talking to PokeAPI
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Primary record lookup returned a non-success status
    #[error("Pokemon not found: {0}")]
    NotFound(String),

    /// Any other request returned a non-success status
    #[error("API error ({code}) for {url}")]
    Status { code: u16, url: String },

    /// Transport failure (connection refused, DNS, TLS, body read)
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not the expected JSON shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configured base URL or a record's resource URL is unusable
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Network(error.to_string())
    }
}
