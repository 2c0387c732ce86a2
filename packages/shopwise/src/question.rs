//! Shopping question parsing.

use regex::Regex;

/// Comparison shape: two spans separated by "vs" or "vs.", the second
/// terminated by a question mark or end of input. Both spans are lazy, so
/// the first "vs" occurrence wins on questions like "A vs B vs C".
const VS_PATTERN: &str = r"(?i)(.+?)\s+vs\.?\s+(.+?)(?:\?|$)";

/// Split an "A vs B" style question into its two product spans.
///
/// Returns `None` for plain questions. Spans are trimmed.
pub fn split_comparison(question: &str) -> Option<(String, String)> {
    let re = Regex::new(VS_PATTERN).unwrap();
    let caps = re.captures(question)?;
    Some((
        caps[1].trim().to_string(),
        caps[2].trim().to_string(),
    ))
}
