//! Analyst seam: one injectable generation capability, used for two
//! prompts — per-product summarization and cross-product judging.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::error::Result;
use crate::prompts;
use crate::types::{EnrichedProduct, Verdict};
use openai_client::{ChatRequest, Message, OpenAIClient};

/// Summarization runs colder than judging.
const EXTRACT_TEMPERATURE: f32 = 0.2;
const JUDGE_TEMPERATURE: f32 = 0.3;

/// Tuning knobs for one generation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    /// Sampling temperature.
    pub temperature: f32,

    /// Constrain the completion to a JSON object.
    pub json_response: bool,
}

/// The "call a generation model" capability.
///
/// Both analyst operations go through this single seam, so tests can
/// substitute [`crate::testing::MockChatModel`] for both call sites at
/// once.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn generate(&self, system: &str, user: &str, params: GenerationParams) -> Result<String>;
}

/// OpenAI-backed chat model.
pub struct OpenAiModel {
    client: OpenAIClient,
    model: String,
}

impl OpenAiModel {
    /// Create a model handle with the given API key and model id.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: OpenAIClient::new(api_key),
            model: model.into(),
        }
    }

    /// Wrap an existing client (custom base URL, test server).
    pub fn with_client(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// The configured model id.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatModel for OpenAiModel {
    async fn generate(&self, system: &str, user: &str, params: GenerationParams) -> Result<String> {
        let mut request = ChatRequest::new(&self.model)
            .message(Message::system(system))
            .message(Message::user(user))
            .temperature(params.temperature);

        if params.json_response {
            request = request.json_object();
        }

        let response = self.client.chat_completion(request).await?;
        Ok(response.content)
    }
}

/// Parse a judge reply as a JSON verdict.
///
/// Kept separate from [`Analyst::judge_products`] so failure causes stay
/// inspectable in tests; the pipeline-facing method applies the fallback.
pub fn parse_verdict(text: &str) -> std::result::Result<Verdict, serde_json::Error> {
    serde_json::from_str(text)
}

/// Summarizer and judge over one chat model.
pub struct Analyst {
    model: Arc<dyn ChatModel>,
}

impl Analyst {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Summarize key specs, price, and pros/cons from a product snippet.
    ///
    /// Returns the trimmed completion, or an empty string when the backend
    /// call fails; the cause goes to the log, not the caller.
    pub async fn extract_info(&self, snippet: &str) -> String {
        let params = GenerationParams {
            temperature: EXTRACT_TEMPERATURE,
            json_response: false,
        };

        match self
            .model
            .generate(prompts::EXTRACT_INFO_PROMPT, snippet, params)
            .await
        {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!(error = %e, "product info extraction failed");
                String::new()
            }
        }
    }

    /// Rank the products and pick a winner.
    ///
    /// A failed backend call degrades to empty text, which then fails JSON
    /// parsing; both failure modes land on [`Verdict::fallback`].
    pub async fn judge_products(&self, question: &str, products: &[EnrichedProduct]) -> Verdict {
        let user = prompts::judge_user_prompt(question, products);
        let params = GenerationParams {
            temperature: JUDGE_TEMPERATURE,
            json_response: true,
        };

        let response = match self.model.generate(prompts::JUDGE_PROMPT, &user, params).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "judge call failed");
                String::new()
            }
        };

        match parse_verdict(&response) {
            Ok(verdict) => verdict,
            Err(e) => {
                warn!(error = %e, "judge response was not valid JSON, using fallback");
                Verdict::fallback()
            }
        }
    }
}
