//! Error types for the Tavily client.

use thiserror::Error;

/// Result type for Tavily client operations.
pub type Result<T> = std::result::Result<T, TavilyError>;

/// Tavily client errors.
#[derive(Debug, Error)]
pub enum TavilyError {
    /// HTTP transport failure (connection refused, timeout, DNS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the Tavily API
    #[error("Tavily API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}
