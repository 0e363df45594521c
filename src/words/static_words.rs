//! Word generator serving words from a fixed table.
//!
//! Word files are JSON objects keyed by category name or id, with an
//! optional `suggestions` list:
//!
//! ```json
//! {
//!   "Actions": ["eat", "drink", "play"],
//!   "adjectives-adverbs": ["big", "small"],
//!   "suggestions": ["sand", "waves"]
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::WordGenerator;
use crate::error::{BoardError, BoardResult};
use crate::models::CategoryKind;

const SUGGESTIONS_KEY: &str = "suggestions";

/// In-memory word table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticWordGenerator {
    words: HashMap<CategoryKind, Vec<String>>,
    suggestions: Vec<String>,
}

impl StaticWordGenerator {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the words for `category`.
    #[must_use]
    pub fn with_words<I, S>(mut self, category: CategoryKind, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words
            .insert(category, words.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the suggestion list.
    #[must_use]
    pub fn with_suggestions<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = words.into_iter().map(Into::into).collect();
        self
    }

    /// Parses a JSON word table.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<String>> =
            serde_json::from_str(json).context("Word file must map categories to word lists")?;

        raw.into_iter()
            .try_fold(Self::new(), |table, (key, words)| -> Result<Self> {
                if key.eq_ignore_ascii_case(SUGGESTIONS_KEY) {
                    return Ok(table.with_suggestions(words));
                }
                let category: CategoryKind = key
                    .parse()
                    .context("Word file lists an unknown category")?;
                Ok(table.with_words(category, words))
            })
    }

    /// Loads a JSON word table from `path`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read word file: {}", path.display()))?;
        Self::from_json(&content).context(format!("Failed to parse word file: {}", path.display()))
    }

    /// Words stored for `category`.
    #[must_use]
    pub fn words(&self, category: CategoryKind) -> Option<&[String]> {
        self.words.get(&category).map(Vec::as_slice)
    }
}

#[async_trait]
impl WordGenerator for StaticWordGenerator {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn generate(
        &self,
        _topic: &str,
        category: CategoryKind,
        count: usize,
    ) -> BoardResult<Vec<String>> {
        let words = self.words(category).ok_or_else(|| {
            BoardError::upstream(category.name(), "no words listed for this category")
        })?;
        Ok(words.iter().take(count).cloned().collect())
    }

    async fn suggest(&self, _topic: &str, max: usize, _language: &str) -> BoardResult<Vec<String>> {
        if self.suggestions.is_empty() {
            return Err(BoardError::upstream("suggestions", "no suggestions listed"));
        }
        Ok(self.suggestions.iter().take(max).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_json_accepts_names_and_ids() {
        let table = StaticWordGenerator::from_json(
            r#"{"Actions": ["eat"], "adjectives-adverbs": ["big", "small"], "Determiners": []}"#,
        )
        .unwrap();
        assert_eq!(table.words(CategoryKind::Actions).unwrap(), ["eat"]);
        assert_eq!(table.words(CategoryKind::AdjectivesAdverbs).unwrap().len(), 2);
        assert!(table.words(CategoryKind::Determiners).unwrap().is_empty());
        assert!(table.words(CategoryKind::Prepositions).is_none());
    }

    #[test]
    fn test_from_json_rejects_unknown_category() {
        assert!(StaticWordGenerator::from_json(r#"{"Nouns": ["cat"]}"#).is_err());
        assert!(StaticWordGenerator::from_json(r#"["cat"]"#).is_err());
    }

    #[test]
    fn test_from_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.json");
        fs::write(&path, r#"{"Prepositions": ["in", "on"], "suggestions": ["sun"]}"#).unwrap();

        let table = StaticWordGenerator::from_json_file(&path).unwrap();
        assert_eq!(table.words(CategoryKind::Prepositions).unwrap(), ["in", "on"]);

        assert!(StaticWordGenerator::from_json_file(&dir.path().join("missing.json")).is_err());
    }

    #[tokio::test]
    async fn test_generate_truncates_and_errors_on_missing() {
        let table = StaticWordGenerator::new()
            .with_words(CategoryKind::Actions, ["go", "eat", "play"])
            .with_suggestions(["sun", "sea"]);

        let words = table.generate("beach", CategoryKind::Actions, 2).await.unwrap();
        assert_eq!(words, vec!["go", "eat"]);

        assert!(table
            .generate("beach", CategoryKind::Determiners, 2)
            .await
            .is_err());

        let suggestions = table.suggest("beach", 5, "en").await.unwrap();
        assert_eq!(suggestions, vec!["sun", "sea"]);
    }
}
