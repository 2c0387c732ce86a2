//! LLM prompts for the recommendation pipeline.

use crate::types::EnrichedProduct;

/// System prompt for per-product summarization.
pub const EXTRACT_INFO_PROMPT: &str = r#"You are a meticulous shopping researcher. Extract and summarize:
1. Key specifications
2. Price (in USD if available)
3. Main pros and cons
4. Any notable features

Format as a concise summary."#;

/// System prompt for ranking products and picking a winner.
pub const JUDGE_PROMPT: &str = r#"You are an expert tech reviewer.
Analyze the products and return a JSON response with:
- winner: string (best overall product or chosen between A/B)
- ranking: list (ordered product names from best to worst)
- reasons: list of strings (key reasons for the recommendation)

Consider factors like value, specs, reliability, and user needs."#;

/// Build the judge user message: the question plus a JSON dump of the
/// enriched product briefs.
pub fn judge_user_prompt(question: &str, products: &[EnrichedProduct]) -> String {
    let briefs = serde_json::to_string_pretty(products).unwrap_or_default();
    format!("Question: {}\n\nProduct briefs:\n{}", question, briefs)
}
