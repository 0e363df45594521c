//! End-to-end core board generation.
//!
//! validate → allocate → generate dynamic words (concurrently) → combine →
//! resolve pictograms → lay out → assemble.
//!
//! A failure in any dynamic-category request aborts the whole board; no
//! partial board is returned. Placement overflow and missing pictograms are
//! logged and never abort.

use std::sync::Arc;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::Config;
use crate::constants::MAX_TOTAL_BUTTONS;
use crate::error::{BoardError, BoardResult};
use crate::models::{BoardDocument, Category, CategoryKind, CORE_CATEGORIES};
use crate::pictograms::{resolve_all, PictogramResolver};
use crate::services::allocator::{allocate, SlotAllocations};
use crate::services::assembler::BoardAssembler;
use crate::services::combiner::{combine, fixed_words_by_category, DedupPolicy, WordsByCategory};
use crate::services::layout_engine::{layout, LayoutReport};
use crate::words::WordGenerator;

/// A board request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreBoardRequest {
    /// Board topic (e.g., "going to the zoo")
    pub topic: String,
    /// Requested number of buttons
    pub total_buttons: usize,
}

impl CoreBoardRequest {
    /// Creates a request.
    pub fn new(topic: impl Into<String>, total_buttons: usize) -> Self {
        Self {
            topic: topic.into(),
            total_buttons,
        }
    }

    fn validate(&self) -> BoardResult<()> {
        if self.topic.trim().is_empty() {
            return Err(BoardError::invalid_input("topic must not be empty"));
        }
        if self.total_buttons == 0 {
            return Err(BoardError::invalid_input(
                "total buttons must be a positive integer",
            ));
        }
        if self.total_buttons > MAX_TOTAL_BUTTONS {
            return Err(BoardError::invalid_input(format!(
                "total buttons must be at most {MAX_TOTAL_BUTTONS}, got {}",
                self.total_buttons
            )));
        }
        Ok(())
    }
}

/// Generation settings taken from the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSettings {
    /// Duplicate label handling
    pub dedup: DedupPolicy,
    /// Locale written into the document
    pub locale: String,
    /// Language for pictogram lookup
    pub language: String,
    /// Whether pictograms are looked up
    pub fetch_images: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl GenerationSettings {
    /// Extracts settings from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            dedup: config.board.dedup,
            locale: config.board.locale.clone(),
            language: config.symbols.language.clone(),
            fetch_images: config.board.fetch_images,
        }
    }
}

/// A generated board and the intermediate results that shaped it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedBoard {
    /// The board document
    pub document: BoardDocument,
    /// Slots allotted per category
    pub allocations: SlotAllocations,
    /// Placement diagnostics
    pub report: LayoutReport,
}

/// Generates core boards with injected collaborators.
#[derive(Clone)]
pub struct CoreBoardService {
    settings: GenerationSettings,
    categories: &'static [Category],
    generator: Arc<dyn WordGenerator>,
    resolver: Arc<dyn PictogramResolver>,
}

impl CoreBoardService {
    /// Creates a service over the standard category table.
    pub fn new(
        settings: GenerationSettings,
        generator: Arc<dyn WordGenerator>,
        resolver: Arc<dyn PictogramResolver>,
    ) -> Self {
        Self {
            settings,
            categories: &CORE_CATEGORIES,
            generator,
            resolver,
        }
    }

    /// Settings in use.
    #[must_use]
    pub const fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Generates a board for `request`.
    pub async fn generate(&self, request: &CoreBoardRequest) -> BoardResult<GeneratedBoard> {
        request.validate()?;
        let topic = request.topic.trim();
        info!(topic, total_buttons = request.total_buttons, "generating core board");

        let allocations = allocate(request.total_buttons, self.categories)?;
        let dynamic = self.generate_dynamic_words(topic, &allocations).await?;
        let fixed = fixed_words_by_category(self.categories);
        let words = combine(&fixed, &dynamic, &allocations, self.settings.dedup)?;

        let images = if self.settings.fetch_images {
            let labels: Vec<&str> = words.iter().map(|w| w.label.as_str()).collect();
            resolve_all(self.resolver.as_ref(), labels.as_slice(), &self.settings.language).await
        } else {
            Vec::new()
        };

        let outcome = layout(&words, request.total_buttons)?;
        if outcome.report.dropped() > 0 {
            warn!(
                dropped = outcome.report.dropped(),
                placed = outcome.report.placed(),
                "some words did not fit on the grid"
            );
        }

        let document = BoardAssembler::new(self.settings.locale.clone()).assemble(
            &words,
            outcome.grid,
            topic,
            &images,
            request.total_buttons,
        );

        info!(
            board_id = %document.id,
            buttons = document.buttons.len(),
            images = document.images.len(),
            "core board generated"
        );

        Ok(GeneratedBoard {
            document,
            allocations,
            report: outcome.report,
        })
    }

    /// Requests every dynamic category with slots at once.
    ///
    /// Results keep request order. The first failure, or an empty answer,
    /// aborts generation.
    async fn generate_dynamic_words(
        &self,
        topic: &str,
        allocations: &SlotAllocations,
    ) -> BoardResult<WordsByCategory> {
        let requests: Vec<(CategoryKind, usize)> = self
            .categories
            .iter()
            .filter(|c| c.word_source.is_dynamic())
            .map(|c| (c.kind, allocations.slots_for(c.kind)))
            .filter(|(_, slots)| *slots > 0)
            .collect();

        let responses = join_all(
            requests
                .iter()
                .map(|(kind, slots)| self.generator.generate(topic, *kind, *slots)),
        )
        .await;

        requests
            .into_iter()
            .zip(responses)
            .map(|((kind, _), response)| {
                let words = response.map_err(|err| match err {
                    BoardError::UpstreamGeneration { .. } => err,
                    other => BoardError::upstream(kind.name(), other.to_string()),
                })?;
                if words.iter().all(|w| w.trim().is_empty()) {
                    return Err(BoardError::upstream(kind.name(), "generator returned no words"));
                }
                Ok((kind, words))
            })
            .collect()
    }
}
