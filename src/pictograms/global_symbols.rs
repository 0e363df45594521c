//! Global Symbols label search.

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

use super::language::strip_diacritics;
use super::{content_type_for, Pictogram, PictogramLookup, PictogramResolver};
use crate::error::{BoardError, BoardResult};

#[derive(Debug, Deserialize)]
struct LabelHit {
    picto: PictoHit,
}

#[derive(Debug, Deserialize)]
struct PictoHit {
    id: u64,
    symbolset_id: u64,
    image_url: String,
    #[serde(default)]
    native_format: Option<String>,
}

/// Resolver backed by the Global Symbols labels API.
#[derive(Debug, Clone)]
pub struct GlobalSymbolsResolver {
    client: reqwest::Client,
    search_url: String,
    symbol_set: Option<String>,
}

impl GlobalSymbolsResolver {
    /// Creates a resolver; `symbol_set` restricts results to one set slug.
    pub fn new(client: reqwest::Client, search_url: &str, symbol_set: Option<String>) -> Self {
        Self {
            client,
            search_url: search_url.to_string(),
            symbol_set: symbol_set.filter(|s| !s.trim().is_empty()),
        }
    }

    /// Search URL with `query`, `symbolset` and `language` parameters.
    pub fn lookup_url(&self, word: &str, language: &str) -> BoardResult<Url> {
        let mut url = Url::parse(&self.search_url).map_err(|e| {
            BoardError::Config(format!("invalid Global Symbols URL '{}': {e}", self.search_url))
        })?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("query", &strip_diacritics(word));
            if let Some(set) = &self.symbol_set {
                query.append_pair("symbolset", set);
            }
            query.append_pair("language", language);
        }
        Ok(url)
    }

    fn first_pictogram(hits: Vec<LabelHit>) -> PictogramLookup {
        hits.into_iter()
            .next()
            .map_or(PictogramLookup::NotFound, |hit| {
                let picto = hit.picto;
                let content_type = match picto.native_format.as_deref() {
                    Some("svg") => Some("image/svg+xml".to_string()),
                    Some("png") => Some("image/png".to_string()),
                    _ => content_type_for(&picto.image_url),
                };
                PictogramLookup::Found(Pictogram {
                    id: picto.id.to_string(),
                    url: picto.image_url,
                    symbol_set: picto.symbolset_id.to_string(),
                    content_type,
                })
            })
    }
}

#[async_trait]
impl PictogramResolver for GlobalSymbolsResolver {
    fn name(&self) -> &'static str {
        "global-symbols"
    }

    async fn resolve(&self, word: &str, language: &str) -> BoardResult<PictogramLookup> {
        let url = self.lookup_url(word, language)?;
        let hits: Vec<LabelHit> = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| BoardError::Pictogram(format!("Global Symbols request failed: {e}")))?
            .json()
            .await
            .map_err(|e| BoardError::Pictogram(format!("invalid Global Symbols response: {e}")))?;

        Ok(Self::first_pictogram(hits))
    }
}
