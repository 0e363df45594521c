//! Word generation for dynamic categories and topic suggestions.
//!
//! [`WordGenerator`] is the seam to whatever produces topic words. The
//! production implementation talks to an OpenAI-compatible chat API; the
//! static implementation serves words from a JSON file for offline runs and
//! tests.

pub mod openai;
pub mod static_words;

use async_trait::async_trait;
use regex::Regex;
use std::sync::OnceLock;

use crate::error::{BoardError, BoardResult};
use crate::models::CategoryKind;

pub use openai::OpenAiWordGenerator;
pub use static_words::StaticWordGenerator;

fn brace_list_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{([^}]*)\}")
            .unwrap_or_else(|e| unreachable!("static brace pattern is valid: {e}"))
    })
}

/// Produces words for a topic.
#[async_trait]
pub trait WordGenerator: Send + Sync {
    /// Short generator name for logs.
    fn name(&self) -> &'static str;

    /// Returns at most `count` words of `category` related to `topic`.
    ///
    /// May return fewer words. Failures are
    /// [`BoardError::UpstreamGeneration`].
    async fn generate(
        &self,
        topic: &str,
        category: CategoryKind,
        count: usize,
    ) -> BoardResult<Vec<String>>;

    /// Returns at most `max` free-form words for `topic` in `language`.
    async fn suggest(&self, topic: &str, max: usize, language: &str) -> BoardResult<Vec<String>> {
        let _ = (topic, max, language);
        Err(BoardError::upstream(
            "suggestions",
            format!("{} generator does not support suggestions", self.name()),
        ))
    }
}

/// Splits a comma-separated answer into at most `max` trimmed words.
///
/// ```
/// use coreboard::words::parse_comma_list;
///
/// assert_eq!(parse_comma_list(" run, jump ,, play", 2), vec!["run", "jump"]);
/// ```
#[must_use]
pub fn parse_comma_list(content: &str, max: usize) -> Vec<String> {
    content
        .split(',')
        .map(|word| word.trim().trim_end_matches('.').trim())
        .filter(|word| !word.is_empty())
        .take(max)
        .map(str::to_string)
        .collect()
}

/// Extracts the first `{a, b, c}` list from an answer.
///
/// Returns an empty list when no braces are present.
#[must_use]
pub fn parse_brace_list(content: &str, max: usize) -> Vec<String> {
    let cleaned = content.replace("\n\n", "");
    brace_list_pattern()
        .captures(&cleaned)
        .and_then(|caps| caps.get(1))
        .map(|inner| parse_comma_list(inner.as_str(), max))
        .unwrap_or_default()
}
