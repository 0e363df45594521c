//! Topic word suggestions with pictograms.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;

use crate::error::{BoardError, BoardResult};
use crate::pictograms::{resolve_all, Pictogram, PictogramResolver};
use crate::words::WordGenerator;

/// A suggested word and its pictogram, if one was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Short stable id
    pub id: String,
    /// Suggested word
    pub label: String,
    /// Language the word was requested in
    pub locale: String,
    /// Matching pictogram
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pictogram: Option<Pictogram>,
}

fn suggestion_id(topic: &str, index: usize, label: &str) -> String {
    let digest = Sha256::digest(format!("{topic}:{index}:{label}").as_bytes());
    let mut hex = format!("{digest:x}");
    hex.truncate(8);
    hex
}

/// Asks the generator for topic words and attaches pictograms.
#[derive(Clone)]
pub struct SuggestionService {
    generator: Arc<dyn WordGenerator>,
    resolver: Arc<dyn PictogramResolver>,
}

impl SuggestionService {
    /// Creates the service.
    pub fn new(generator: Arc<dyn WordGenerator>, resolver: Arc<dyn PictogramResolver>) -> Self {
        Self {
            generator,
            resolver,
        }
    }

    /// Suggests at most `max` words for `topic`.
    pub async fn suggest(
        &self,
        topic: &str,
        max: usize,
        language: &str,
    ) -> BoardResult<Vec<Suggestion>> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(BoardError::invalid_input("topic must not be empty"));
        }
        if max == 0 {
            return Err(BoardError::invalid_input("max suggestions must be positive"));
        }

        let words: Vec<String> = self
            .generator
            .suggest(topic, max, language)
            .await?
            .into_iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .take(max)
            .collect();
        if words.is_empty() {
            return Err(BoardError::upstream("suggestions", "suggestion list is empty"));
        }

        let pictograms = resolve_all(self.resolver.as_ref(), words.as_slice(), language).await;
        info!(
            topic,
            words = words.len(),
            with_images = pictograms.iter().filter(|p| p.is_some()).count(),
            "suggestions ready"
        );

        Ok(words
            .into_iter()
            .zip(pictograms)
            .enumerate()
            .map(|(idx, (label, pictogram))| Suggestion {
                id: suggestion_id(topic, idx, &label),
                label,
                locale: language.to_string(),
                pictogram,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pictograms::NoopResolver;
    use crate::words::StaticWordGenerator;

    fn service(suggestions: &[&str]) -> SuggestionService {
        let generator = StaticWordGenerator::new().with_suggestions(suggestions.iter().copied());
        SuggestionService::new(Arc::new(generator), Arc::new(NoopResolver))
    }

    #[tokio::test]
    async fn test_suggest_truncates_and_skips_blanks() {
        let result = service(&["sand", " ", "waves", "sun"])
            .suggest("beach", 2, "en")
            .await
            .unwrap();
        let labels: Vec<&str> = result.iter().map(|s| s.label.as_str()).collect();
        // generator truncates to 2 first, the blank is then dropped
        assert_eq!(labels, vec!["sand"]);
        assert!(result[0].pictogram.is_none());
        assert_eq!(result[0].locale, "en");
        assert_eq!(result[0].id.len(), 8);
    }

    #[tokio::test]
    async fn test_suggest_validates_input() {
        let svc = service(&["sand"]);
        assert!(matches!(
            svc.suggest("  ", 5, "en").await,
            Err(BoardError::InvalidInput(_))
        ));
        assert!(matches!(
            svc.suggest("beach", 0, "en").await,
            Err(BoardError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_suggest_empty_is_upstream_error() {
        let result = service(&[" "]).suggest("beach", 3, "en").await;
        assert!(matches!(result, Err(BoardError::UpstreamGeneration { .. })));
    }
}
