//! ARASAAC pictogram lookup.
//!
//! Uses the `bestsearch` endpoint, which returns the best matches for a
//! keyword and answers 404 when there are none.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use super::language::{locale_for_symbols, strip_diacritics};
use super::{Pictogram, PictogramLookup, PictogramResolver};
use crate::constants::ARASAAC_STATIC_URL;
use crate::error::{BoardError, BoardResult};

/// Symbol set tag written into board images.
pub const ARASAAC_SYMBOL_SET: &str = "arasaac";

#[derive(Debug, Deserialize)]
struct BestSearchHit {
    #[serde(rename = "_id")]
    id: u64,
}

/// Resolver backed by the ARASAAC REST API.
#[derive(Debug, Clone)]
pub struct ArasaacResolver {
    client: reqwest::Client,
    base_url: String,
}

impl ArasaacResolver {
    /// Creates a resolver for the API at `base_url`.
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `{base}/{locale}/bestsearch/{word}` with the word percent-encoded.
    pub fn lookup_url(&self, word: &str, language: &str) -> BoardResult<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            BoardError::Config(format!("invalid ARASAAC URL '{}': {e}", self.base_url))
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                BoardError::Config(format!("ARASAAC URL '{}' cannot take a path", self.base_url))
            })?
            .pop_if_empty()
            .push(locale_for_symbols(language))
            .push("bestsearch")
            .push(&strip_diacritics(word));
        Ok(url)
    }

    /// Image URL for an ARASAAC pictogram id.
    #[must_use]
    pub fn image_url(id: u64) -> String {
        format!("{ARASAAC_STATIC_URL}/{id}/{id}_500.png")
    }

    fn first_pictogram(hits: &[BestSearchHit]) -> PictogramLookup {
        hits.first().map_or(PictogramLookup::NotFound, |hit| {
            PictogramLookup::Found(Pictogram {
                id: hit.id.to_string(),
                url: Self::image_url(hit.id),
                symbol_set: ARASAAC_SYMBOL_SET.to_string(),
                content_type: Some("image/png".to_string()),
            })
        })
    }
}

#[async_trait]
impl PictogramResolver for ArasaacResolver {
    fn name(&self) -> &'static str {
        ARASAAC_SYMBOL_SET
    }

    async fn resolve(&self, word: &str, language: &str) -> BoardResult<PictogramLookup> {
        let url = self.lookup_url(word, language)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| BoardError::Pictogram(format!("ARASAAC request failed: {e}")))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(PictogramLookup::NotFound);
        }
        let response = response
            .error_for_status()
            .map_err(|e| BoardError::Pictogram(format!("ARASAAC returned an error: {e}")))?;

        let hits: Vec<BestSearchHit> = response
            .json()
            .await
            .map_err(|e| BoardError::Pictogram(format!("invalid ARASAAC response: {e}")))?;

        Ok(Self::first_pictogram(&hits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(base: &str) -> ArasaacResolver {
        ArasaacResolver::new(reqwest::Client::new(), base)
    }

    #[test]
    fn test_lookup_url() {
        let url = resolver("https://api.arasaac.org/api/pictograms/")
            .lookup_url("ice cream", "eng")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.arasaac.org/api/pictograms/en/bestsearch/ice%20cream"
        );
    }

    #[test]
    fn test_lookup_url_strips_diacritics() {
        let url = resolver("https://api.arasaac.org/api/pictograms")
            .lookup_url("canción", "spa")
            .unwrap();
        assert!(url.as_str().ends_with("/es/bestsearch/cancion"));
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            resolver("not a url").lookup_url("go", "en"),
            Err(BoardError::Config(_))
        ));
    }

    #[test]
    fn test_first_pictogram() {
        let hits: Vec<BestSearchHit> =
            serde_json::from_str(r#"[{"_id": 2349, "keywords": []}, {"_id": 7}]"#).unwrap();
        let lookup = ArasaacResolver::first_pictogram(&hits);
        let PictogramLookup::Found(pictogram) = lookup else {
            panic!("expected a pictogram");
        };
        assert_eq!(pictogram.id, "2349");
        assert_eq!(
            pictogram.url,
            "https://static.arasaac.org/pictograms/2349/2349_500.png"
        );
        assert_eq!(ArasaacResolver::first_pictogram(&[]), PictogramLookup::NotFound);
    }
}
