//! Error types for the OpenAI client.

use thiserror::Error;

/// Result type for OpenAI client operations.
pub type Result<T> = std::result::Result<T, OpenAIError>;

/// OpenAI client errors.
#[derive(Debug, Error)]
pub enum OpenAIError {
    /// Missing API key or invalid client settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport failure before a response arrived
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response (rate limit, invalid request, server error)
    #[error("API error: {0}")]
    Api(String),

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}
