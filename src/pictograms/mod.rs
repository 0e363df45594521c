//! Pictogram lookup against public symbol sets.
//!
//! A [`PictogramResolver`] maps a word to a pictogram, or reports that the
//! symbol set has none. Lookups for a word list run concurrently through
//! [`resolve_all`]; a missing or failed lookup never fails the batch.

pub mod arasaac;
pub mod global_symbols;
pub mod language;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::SymbolsConfig;
use crate::error::{BoardError, BoardResult};
use crate::models::BoardImage;

pub use arasaac::ArasaacResolver;
pub use global_symbols::GlobalSymbolsResolver;

/// Symbol sets pictograms can be drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolSet {
    /// ARASAAC (<https://arasaac.org>)
    #[default]
    Arasaac,
    /// Global Symbols (<https://globalsymbols.com>)
    GlobalSymbols,
}

impl SymbolSet {
    /// Kebab-case name used in config files and CLI flags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Arasaac => "arasaac",
            Self::GlobalSymbols => "global-symbols",
        }
    }
}

impl fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymbolSet {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "arasaac" => Ok(Self::Arasaac),
            "global-symbols" | "globalsymbols" => Ok(Self::GlobalSymbols),
            other => Err(BoardError::invalid_input(format!(
                "unknown symbol set '{other}' (expected arasaac or global-symbols)"
            ))),
        }
    }
}

/// A pictogram found for a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pictogram {
    /// Identifier within the symbol set
    pub id: String,
    /// Image URL
    pub url: String,
    /// Symbol set name or id
    pub symbol_set: String,
    /// MIME type, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl Pictogram {
    /// Converts the pictogram into a board image entry.
    #[must_use]
    pub fn to_board_image(&self) -> BoardImage {
        BoardImage {
            id: self.id.clone(),
            url: self.url.clone(),
            content_type: self.content_type.clone(),
            symbol_set: Some(self.symbol_set.clone()),
            width: None,
            height: None,
        }
    }
}

/// Outcome of a single lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PictogramLookup {
    /// The symbol set has a pictogram for the word
    Found(Pictogram),
    /// The symbol set has nothing for the word
    NotFound,
}

impl PictogramLookup {
    /// Converts into an `Option`.
    #[must_use]
    pub fn into_option(self) -> Option<Pictogram> {
        match self {
            Self::Found(pictogram) => Some(pictogram),
            Self::NotFound => None,
        }
    }
}

/// Looks up pictograms for single words.
#[async_trait]
pub trait PictogramResolver: Send + Sync {
    /// Short resolver name for logs.
    fn name(&self) -> &'static str;

    /// Resolves `word` in `language`.
    ///
    /// Transport and decoding failures are reported as
    /// [`BoardError::Pictogram`]; an empty result is `NotFound`.
    async fn resolve(&self, word: &str, language: &str) -> BoardResult<PictogramLookup>;
}

/// Resolver that never finds anything. Used when images are disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopResolver;

#[async_trait]
impl PictogramResolver for NoopResolver {
    fn name(&self) -> &'static str {
        "none"
    }

    async fn resolve(&self, _word: &str, _language: &str) -> BoardResult<PictogramLookup> {
        Ok(PictogramLookup::NotFound)
    }
}

/// Resolves every word concurrently.
///
/// Results are in input order. Failed lookups are logged and treated as not
/// found.
pub async fn resolve_all<S: AsRef<str> + Sync>(
    resolver: &dyn PictogramResolver,
    words: &[S],
    language: &str,
) -> Vec<Option<Pictogram>> {
    let lookups = words
        .iter()
        .map(|word| resolver.resolve(word.as_ref(), language));

    join_all(lookups)
        .await
        .into_iter()
        .zip(words)
        .map(|(result, word)| match result {
            Ok(PictogramLookup::Found(pictogram)) => Some(pictogram),
            Ok(PictogramLookup::NotFound) => {
                debug!(
                    resolver = resolver.name(),
                    word = word.as_ref(),
                    "no pictogram found"
                );
                None
            }
            Err(err) => {
                warn!(
                    resolver = resolver.name(),
                    word = word.as_ref(),
                    error = %err,
                    "pictogram lookup failed"
                );
                None
            }
        })
        .collect()
}

/// Builds the resolver configured in `symbols`.
pub fn resolver_from_config(symbols: &SymbolsConfig) -> BoardResult<Arc<dyn PictogramResolver>> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("coreboard/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| BoardError::Config(format!("failed to build HTTP client: {e}")))?;

    Ok(match symbols.symbol_set {
        SymbolSet::Arasaac => Arc::new(ArasaacResolver::new(client, &symbols.arasaac_url)),
        SymbolSet::GlobalSymbols => Arc::new(GlobalSymbolsResolver::new(
            client,
            &symbols.global_symbols_url,
            symbols.global_symbols_set.clone(),
        )),
    })
}

/// Guesses an image MIME type from a URL extension.
pub(crate) fn content_type_for(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let ext = path.rsplit_once('.')?.1.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "svg" => "image/svg+xml",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => return None,
    };
    Some(mime.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OddOnly;

    #[async_trait]
    impl PictogramResolver for OddOnly {
        fn name(&self) -> &'static str {
            "odd"
        }

        async fn resolve(&self, word: &str, _language: &str) -> BoardResult<PictogramLookup> {
            match word.len() {
                0 => Err(BoardError::Pictogram("empty word".to_string())),
                n if n % 2 == 1 => Ok(PictogramLookup::Found(Pictogram {
                    id: word.to_string(),
                    url: format!("https://img.test/{word}.png"),
                    symbol_set: "test".to_string(),
                    content_type: Some("image/png".to_string()),
                })),
                _ => Ok(PictogramLookup::NotFound),
            }
        }
    }

    #[tokio::test]
    async fn test_resolve_all_keeps_input_order() {
        let words = ["cat", "dog", "bird", "", "horse"];
        let results = resolve_all(&OddOnly, &words[..], "en").await;

        let ids: Vec<Option<&str>> = results
            .iter()
            .map(|r| r.as_ref().map(|p| p.id.as_str()))
            .collect();
        assert_eq!(
            ids,
            vec![Some("cat"), Some("dog"), None, None, Some("horse")]
        );
    }

    #[tokio::test]
    async fn test_noop_resolver() {
        let results = resolve_all(&NoopResolver, &["go".to_string()][..], "en").await;
        assert_eq!(results, vec![None]);
    }

    #[test]
    fn test_symbol_set_parsing() {
        assert_eq!("arasaac".parse::<SymbolSet>().unwrap(), SymbolSet::Arasaac);
        assert_eq!(
            "Global-Symbols".parse::<SymbolSet>().unwrap(),
            SymbolSet::GlobalSymbols
        );
        assert!("openmoji".parse::<SymbolSet>().is_err());
        assert_eq!(SymbolSet::GlobalSymbols.to_string(), "global-symbols");
    }

    #[test]
    fn test_content_type_for() {
        assert_eq!(
            content_type_for("https://x.test/a/1_500.png").as_deref(),
            Some("image/png")
        );
        assert_eq!(
            content_type_for("https://x.test/a.SVG?v=2").as_deref(),
            Some("image/svg+xml")
        );
        assert_eq!(content_type_for("https://x.test/a"), None);
    }

    #[test]
    fn test_to_board_image() {
        let pictogram = Pictogram {
            id: "2349".to_string(),
            url: "https://static.arasaac.org/pictograms/2349/2349_500.png".to_string(),
            symbol_set: "arasaac".to_string(),
            content_type: Some("image/png".to_string()),
        };
        let image = pictogram.to_board_image();
        assert_eq!(image.id, "2349");
        assert_eq!(image.symbol_set.as_deref(), Some("arasaac"));
        assert_eq!(image.content_type.as_deref(), Some("image/png"));
    }
}
