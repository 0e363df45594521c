//! Merges fixed and generated words into the ordered core word list.
//!
//! Order is a hard contract: fixed categories first (lexicon order, each
//! truncated to its allocation), then dynamic categories in the order their
//! generation results arrived. Ids are assigned sequentially from 1 after
//! filtering, and that order drives grid placement.

use crate::error::{BoardError, BoardResult};
use crate::models::{Category, CategoryKind, CoreWord};
use crate::services::allocator::SlotAllocations;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Words grouped by category, in significant order.
pub type WordsByCategory = Vec<(CategoryKind, Vec<String>)>;

/// How duplicate labels are handled while combining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DedupPolicy {
    /// Keep every word
    Keep,
    /// Drop case-insensitive repeats inside one category
    #[default]
    WithinCategory,
    /// Drop labels already emitted by any earlier category
    AcrossBoard,
}

impl DedupPolicy {
    /// All policies, for help output.
    pub const ALL: [Self; 3] = [Self::Keep, Self::WithinCategory, Self::AcrossBoard];

    /// Kebab-case name used in config files and CLI flags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keep => "keep",
            Self::WithinCategory => "within-category",
            Self::AcrossBoard => "across-board",
        }
    }
}

impl fmt::Display for DedupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DedupPolicy {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| {
                BoardError::invalid_input(format!(
                    "unknown dedup policy '{s}' (expected keep, within-category or across-board)"
                ))
            })
    }
}

/// Order in which the built-in fixed lexicons are emitted.
///
/// Interjections come before Negation, so under [`DedupPolicy::AcrossBoard`]
/// the shared "no" stays with Interjections.
pub const FIXED_LEXICON_ORDER: [CategoryKind; 4] = [
    CategoryKind::Pronouns,
    CategoryKind::Questions,
    CategoryKind::Interjections,
    CategoryKind::Negation,
];

/// Collects the fixed lexicons of `categories` in lexicon order.
///
/// Fixed categories missing from [`FIXED_LEXICON_ORDER`] follow in declared
/// order.
#[must_use]
pub fn fixed_words_by_category(categories: &[Category]) -> WordsByCategory {
    let mut fixed: WordsByCategory = categories
        .iter()
        .filter_map(|c| {
            c.word_source
                .fixed_words()
                .map(|words| (c.kind, words.iter().map(|w| (*w).to_string()).collect()))
        })
        .collect();
    fixed.sort_by_key(|(kind, _)| {
        FIXED_LEXICON_ORDER
            .iter()
            .position(|k| k == kind)
            .unwrap_or(FIXED_LEXICON_ORDER.len())
    });
    fixed
}

/// Labels accepted so far, threaded through the fold.
#[derive(Default)]
struct Accepted {
    labels: Vec<(CategoryKind, String)>,
    board_seen: HashSet<String>,
}

impl Accepted {
    fn take_category(
        mut self,
        category: CategoryKind,
        words: &[String],
        limit: usize,
        policy: DedupPolicy,
    ) -> Self {
        let mut category_seen: HashSet<String> = HashSet::new();
        let mut taken = 0;

        for word in words {
            if taken == limit {
                break;
            }
            let label = word.trim();
            if label.is_empty() {
                continue;
            }
            let key = label.to_lowercase();
            let duplicate = match policy {
                DedupPolicy::Keep => false,
                DedupPolicy::WithinCategory => category_seen.contains(&key),
                DedupPolicy::AcrossBoard => {
                    category_seen.contains(&key) || self.board_seen.contains(&key)
                }
            };
            if duplicate {
                debug!(category = category.name(), label, "dropping duplicate label");
                continue;
            }
            category_seen.insert(key);
            self.labels.push((category, label.to_string()));
            taken += 1;
        }

        self.board_seen.extend(category_seen);
        debug!(category = category.name(), taken, limit, "combined words");
        self
    }
}

/// Builds the ordered core word list.
///
/// Every category contributes at most its allocated slot count (truncate,
/// never pad); a zero allocation contributes nothing. Blank and duplicate
/// labels do not count against the allocation, so later words fill the gap. Dynamic categories
/// appear in the order given by `dynamic`.
pub fn combine(
    fixed: &[(CategoryKind, Vec<String>)],
    dynamic: &[(CategoryKind, Vec<String>)],
    allocations: &SlotAllocations,
    policy: DedupPolicy,
) -> BoardResult<Vec<CoreWord>> {
    let mut seen_categories = HashSet::new();
    for (category, _) in fixed.iter().chain(dynamic) {
        if !seen_categories.insert(*category) {
            return Err(BoardError::invalid_input(format!(
                "category {category} supplied more than once"
            )));
        }
    }

    let accepted = fixed
        .iter()
        .chain(dynamic)
        .fold(Accepted::default(), |acc, (category, words)| {
            acc.take_category(*category, words, allocations.slots_for(*category), policy)
        });

    Ok(accepted
        .labels
        .into_iter()
        .enumerate()
        .map(|(idx, (category, label))| CoreWord::new(idx + 1, label, category))
        .collect())
}
