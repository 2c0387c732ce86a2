//! Typed errors for the recommendation pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`). The pipeline itself
//! never surfaces these to its caller; they exist so the degraded paths
//! (empty hits, empty summary, fallback verdict) stay inspectable below the
//! pipeline boundary.

use thiserror::Error;

/// Errors that can occur below the pipeline boundary.
#[derive(Debug, Error)]
pub enum ShopWiseError {
    /// Missing or invalid configuration; fatal at construction time
    #[error("config error: {0}")]
    Config(String),

    /// Search backend call failed
    #[error("search failed: {0}")]
    Search(#[from] tavily_client::TavilyError),

    /// Generation model call failed
    #[error("AI service error: {0}")]
    AI(#[from] openai_client::OpenAIError),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, ShopWiseError>;
