//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use coreboard::config::Config;
use coreboard::error::{BoardError, BoardResult};
use coreboard::models::CategoryKind;
use coreboard::pictograms::{Pictogram, PictogramLookup, PictogramResolver};
use coreboard::words::{StaticWordGenerator, WordGenerator};
use tempfile::TempDir;

/// Word table covering every dynamic category with more words than any
/// test board needs.
pub fn full_word_table() -> StaticWordGenerator {
    StaticWordGenerator::new()
        .with_words(CategoryKind::Actions, (1..=40).map(|i| format!("act{i}")))
        .with_words(
            CategoryKind::AdjectivesAdverbs,
            (1..=40).map(|i| format!("adj{i}")),
        )
        .with_words(CategoryKind::Determiners, (1..=20).map(|i| format!("det{i}")))
        .with_words(CategoryKind::Prepositions, (1..=20).map(|i| format!("prep{i}")))
        .with_suggestions(["lion", "zebra", "ticket", "cage", "keeper"])
}

/// JSON word file content matching [`full_word_table`].
pub fn full_word_json() -> String {
    let list = |prefix: &str, n: usize| -> Vec<String> {
        (1..=n).map(|i| format!("{prefix}{i}")).collect()
    };
    serde_json::json!({
        "Actions": list("act", 40),
        "Adjectives/Adverbs": list("adj", 40),
        "determiners": list("det", 20),
        "prepositions": list("prep", 20),
        "suggestions": ["lion", "zebra", "ticket", "cage", "keeper"],
    })
    .to_string()
}

/// Writes `content` to `words.json` in a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn write_words_file(content: &str) -> (PathBuf, TempDir) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("words.json");
    fs::write(&path, content).expect("Failed to write word file");
    (path, temp)
}

/// Writes a default configuration with images disabled to a temp dir.
pub fn temp_config() -> (PathBuf, TempDir) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("config.toml");
    let mut config = Config::new();
    config.board.fetch_images = false;
    config.save_to(&path).expect("Failed to save config");
    (path, temp)
}

/// Generator that records every category it is asked for.
#[derive(Default)]
pub struct RecordingGenerator {
    inner: StaticWordGenerator,
    calls: Mutex<Vec<(CategoryKind, usize)>>,
}

impl RecordingGenerator {
    pub fn new(inner: StaticWordGenerator) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(CategoryKind, usize)> {
        let mut calls = self.calls.lock().unwrap().clone();
        calls.sort();
        calls
    }
}

#[async_trait]
impl WordGenerator for RecordingGenerator {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn generate(
        &self,
        topic: &str,
        category: CategoryKind,
        count: usize,
    ) -> BoardResult<Vec<String>> {
        self.calls.lock().unwrap().push((category, count));
        self.inner.generate(topic, category, count).await
    }

    async fn suggest(&self, topic: &str, max: usize, language: &str) -> BoardResult<Vec<String>> {
        self.inner.suggest(topic, max, language).await
    }
}

/// Generator whose requests for one category always fail.
pub struct FailingGenerator {
    pub failing: CategoryKind,
}

#[async_trait]
impl WordGenerator for FailingGenerator {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn generate(
        &self,
        topic: &str,
        category: CategoryKind,
        count: usize,
    ) -> BoardResult<Vec<String>> {
        if category == self.failing {
            return Err(BoardError::upstream(category.name(), "service unavailable"));
        }
        full_word_table().generate(topic, category, count).await
    }
}

/// Resolver that knows every word except the listed ones, and fails with a
/// transport error for words in `broken`.
#[derive(Default)]
pub struct MockResolver {
    pub missing: HashSet<String>,
    pub broken: HashSet<String>,
}

impl MockResolver {
    pub fn missing(words: &[&str]) -> Self {
        Self {
            missing: words.iter().map(|w| (*w).to_string()).collect(),
            broken: HashSet::new(),
        }
    }

    pub fn into_arc(self) -> Arc<dyn PictogramResolver> {
        Arc::new(self)
    }
}

/// Pictogram id the mock resolver returns for `word`.
pub fn mock_pictogram_id(word: &str) -> String {
    format!("pic-{}", word.replace(' ', "_"))
}

#[async_trait]
impl PictogramResolver for MockResolver {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn resolve(&self, word: &str, _language: &str) -> BoardResult<PictogramLookup> {
        if self.broken.contains(word) {
            return Err(BoardError::Pictogram(format!("connection reset for {word}")));
        }
        if self.missing.contains(word) {
            return Ok(PictogramLookup::NotFound);
        }
        let id = mock_pictogram_id(word);
        Ok(PictogramLookup::Found(Pictogram {
            url: format!("https://symbols.test/{id}.png"),
            id,
            symbol_set: "mock".to_string(),
            content_type: Some("image/png".to_string()),
        }))
    }
}
