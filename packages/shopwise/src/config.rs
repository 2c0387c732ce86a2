//! Environment-sourced configuration.
//!
//! Missing credentials are a fatal error at construction time, not at call
//! time. `.env` loading (dotenvy) is the binary's job; the library only
//! reads the process environment.

use crate::error::{Result, ShopWiseError};
use crate::security::SecretString;

/// Default generation model when `OPENAI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct ShopWiseConfig {
    /// Tavily search API key (`TAVILY_API_KEY`)
    pub tavily_api_key: SecretString,

    /// OpenAI API key (`OPENAI_API_KEY`)
    pub openai_api_key: SecretString,

    /// Generation model id (`OPENAI_MODEL`, optional)
    pub openai_model: String,
}

impl ShopWiseConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset, matching how operators usually blank
    /// out a key to disable it.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let tavily_api_key = required(&lookup, "TAVILY_API_KEY")?;
        let openai_api_key = required(&lookup, "OPENAI_API_KEY")?;
        let openai_model = lookup("OPENAI_MODEL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            tavily_api_key: SecretString::new(tavily_api_key),
            openai_api_key: SecretString::new(openai_api_key),
            openai_model,
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String> {
    lookup(name)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ShopWiseError::Config(format!("{} environment variable not set", name)))
}
