//! Linguistic categories that make up a core vocabulary board.
//!
//! The category table is process-wide immutable data: eight categories in a
//! fixed order, each with a slot percentage, a display color and a word
//! source. Fixed categories carry a hand-curated lexicon; dynamic categories
//! are filled by a word generator at board-generation time.

use crate::models::RgbColor;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight linguistic roles on a core board.
///
/// Variant order is the canonical order used for slot allocation,
/// word combination and grid placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoryKind {
    /// Personal, possessive, demonstrative and reflexive pronouns
    Pronouns,
    /// Core verbs
    Actions,
    /// Descriptors
    #[serde(rename = "Adjectives/Adverbs")]
    AdjectivesAdverbs,
    /// Articles, quantifiers and similar
    Determiners,
    /// Spatial and temporal relations
    Prepositions,
    /// Question words and starters
    Questions,
    /// Negative words
    Negation,
    /// Social expressions and responses
    Interjections,
}

impl CategoryKind {
    /// All kinds in canonical order.
    pub const ALL: [Self; 8] = [
        Self::Pronouns,
        Self::Actions,
        Self::AdjectivesAdverbs,
        Self::Determiners,
        Self::Prepositions,
        Self::Questions,
        Self::Negation,
        Self::Interjections,
    ];

    /// Display name, as used in board documents and prompts.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pronouns => "Pronouns",
            Self::Actions => "Actions",
            Self::AdjectivesAdverbs => "Adjectives/Adverbs",
            Self::Determiners => "Determiners",
            Self::Prepositions => "Prepositions",
            Self::Questions => "Questions",
            Self::Negation => "Negation",
            Self::Interjections => "Interjections",
        }
    }

    /// Kebab-case identifier (e.g., "adjectives-adverbs").
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Pronouns => "pronouns",
            Self::Actions => "actions",
            Self::AdjectivesAdverbs => "adjectives-adverbs",
            Self::Determiners => "determiners",
            Self::Prepositions => "prepositions",
            Self::Questions => "questions",
            Self::Negation => "negation",
            Self::Interjections => "interjections",
        }
    }

    /// Position of this kind in canonical order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Static definition of this kind.
    #[must_use]
    pub fn category(self) -> &'static Category {
        &CORE_CATEGORIES[self.index()]
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CategoryKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(needle) || kind.id() == needle)
            .ok_or_else(|| anyhow::anyhow!("Unknown category '{needle}'"))
    }
}

/// Where a category's words come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSource {
    /// Hand-curated lexicon, used in declared order
    Fixed(&'static [&'static str]),
    /// Requested from a word generator for each board
    Dynamic,
}

impl WordSource {
    /// Returns the fixed lexicon, if any.
    #[must_use]
    pub const fn fixed_words(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::Fixed(words) => Some(words),
            Self::Dynamic => None,
        }
    }

    /// Whether words are produced by a generator.
    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic)
    }
}

/// Static definition of a linguistic category.
///
/// `required` is informational only; nothing enforces a minimum presence.
/// `grid_percentage` is a legacy layout weight kept for API compatibility.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Which linguistic role this is
    pub kind: CategoryKind,
    /// Fraction of total buttons targeted for this category
    pub target_percentage: f64,
    /// Whether the category is considered essential
    pub required: bool,
    /// Legacy layout weight
    pub grid_percentage: Option<f64>,
    /// Background color of this category's buttons
    pub color: RgbColor,
    /// Word provenance
    pub word_source: WordSource,
}

impl Category {
    /// Display name of the category.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Border color shared by every core board button.
pub const BORDER_COLOR: RgbColor = RgbColor::new(0, 0, 0);

const PRONOUNS: &[&str] = &[
    // Personal
    "I", "you", "it", "we", "they", "he", "she",
    // Possessive
    "my", "your", "their", "his", "her", "our", "its",
    // Demonstrative
    "this", "that", "these", "those",
    // Reflexive
    "myself", "yourself", "themselves",
];

const QUESTIONS: &[&str] = &[
    "what", "where", "when", "who", "why", "how",
    "which", "whose", "can", "will", "did",
    "how long", "how often", "how many",
    "really", "right", "okay",
];

const INTERJECTIONS: &[&str] = &[
    "yes", "no", "please", "thank you",
    "hello", "hi", "bye", "goodbye",
    "wow", "oh", "ah", "ouch",
    "sorry", "excuse me", "okay", "well",
    "hey", "look", "listen", "wait",
];

const NEGATION: &[&str] = &[
    "not", "don't",
    "no", "never", "none",
    "can't", "won't", "didn't",
    "nothing", "nowhere", "nobody",
];

/// The eight core categories in canonical order.
///
/// Percentages intentionally sum to more than 1.0; they are targets, not a
/// partition of the grid.
pub static CORE_CATEGORIES: [Category; 8] = [
    Category {
        kind: CategoryKind::Pronouns,
        target_percentage: 0.15,
        required: true,
        grid_percentage: Some(0.9),
        color: RgbColor::new(255, 255, 200),
        word_source: WordSource::Fixed(PRONOUNS),
    },
    Category {
        kind: CategoryKind::Actions,
        target_percentage: 0.3,
        required: false,
        grid_percentage: Some(0.8),
        color: RgbColor::new(200, 255, 200),
        word_source: WordSource::Dynamic,
    },
    Category {
        kind: CategoryKind::AdjectivesAdverbs,
        target_percentage: 0.3,
        required: false,
        grid_percentage: Some(0.8),
        color: RgbColor::new(135, 206, 250),
        word_source: WordSource::Dynamic,
    },
    Category {
        kind: CategoryKind::Determiners,
        target_percentage: 0.15,
        required: false,
        grid_percentage: Some(0.5),
        color: RgbColor::new(180, 180, 180),
        word_source: WordSource::Dynamic,
    },
    Category {
        kind: CategoryKind::Prepositions,
        target_percentage: 0.15,
        required: false,
        grid_percentage: None,
        color: RgbColor::new(255, 255, 255),
        word_source: WordSource::Dynamic,
    },
    Category {
        kind: CategoryKind::Questions,
        target_percentage: 0.1,
        required: true,
        grid_percentage: Some(0.4),
        color: RgbColor::new(255, 200, 255),
        word_source: WordSource::Fixed(QUESTIONS),
    },
    Category {
        kind: CategoryKind::Negation,
        target_percentage: 0.1,
        required: true,
        grid_percentage: None,
        color: RgbColor::new(255, 140, 140),
        word_source: WordSource::Fixed(NEGATION),
    },
    Category {
        kind: CategoryKind::Interjections,
        target_percentage: 0.15,
        required: true,
        grid_percentage: None,
        color: RgbColor::new(255, 192, 203),
        word_source: WordSource::Fixed(INTERJECTIONS),
    },
];

/// Iterates the categories whose words are generated per board.
pub fn dynamic_categories() -> impl Iterator<Item = &'static Category> {
    CORE_CATEGORIES.iter().filter(|c| c.word_source.is_dynamic())
}

/// Serializable view of a category for listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    /// Kebab-case identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Fraction of total buttons targeted
    pub target_percentage: f64,
    /// Whether the category is considered essential
    pub required: bool,
    /// Button background color
    pub color: RgbColor,
    /// "fixed" or "dynamic"
    pub source: &'static str,
    /// Fixed lexicon; empty for dynamic categories
    pub words: Vec<&'static str>,
}

impl From<&Category> for CategorySummary {
    fn from(category: &Category) -> Self {
        let words = category.word_source.fixed_words().unwrap_or_default();
        Self {
            id: category.kind.id(),
            name: category.kind.name(),
            target_percentage: category.target_percentage,
            required: category.required,
            color: category.color,
            source: if category.word_source.is_dynamic() { "dynamic" } else { "fixed" },
            words: words.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_matches_table() {
        for (idx, category) in CORE_CATEGORIES.iter().enumerate() {
            assert_eq!(category.kind.index(), idx);
            assert_eq!(CategoryKind::ALL[idx], category.kind);
            assert_eq!(category.kind.category(), category);
        }
    }

    #[test]
    fn test_fixed_and_dynamic_split() {
        let dynamic: Vec<_> = dynamic_categories().map(|c| c.kind).collect();
        assert_eq!(
            dynamic,
            vec![
                CategoryKind::Actions,
                CategoryKind::AdjectivesAdverbs,
                CategoryKind::Determiners,
                CategoryKind::Prepositions,
            ]
        );

        let negation = CategoryKind::Negation.category();
        assert_eq!(negation.word_source.fixed_words().unwrap()[..2], ["not", "don't"]);
    }

    #[test]
    fn test_lexicon_sizes() {
        let len = |kind: CategoryKind| kind.category().word_source.fixed_words().unwrap().len();
        assert_eq!(len(CategoryKind::Pronouns), 21);
        assert_eq!(len(CategoryKind::Questions), 17);
        assert_eq!(len(CategoryKind::Interjections), 20);
        assert_eq!(len(CategoryKind::Negation), 11);
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(
            "Adjectives/Adverbs".parse::<CategoryKind>().unwrap(),
            CategoryKind::AdjectivesAdverbs
        );
        assert_eq!(
            "adjectives-adverbs".parse::<CategoryKind>().unwrap(),
            CategoryKind::AdjectivesAdverbs
        );
        assert_eq!("negation".parse::<CategoryKind>().unwrap(), CategoryKind::Negation);
        assert!("nouns".parse::<CategoryKind>().is_err());
    }

    #[test]
    fn test_kind_serde_uses_display_names() {
        let json = serde_json::to_string(&CategoryKind::AdjectivesAdverbs).unwrap();
        assert_eq!(json, "\"Adjectives/Adverbs\"");
        let kind: CategoryKind = serde_json::from_str("\"Questions\"").unwrap();
        assert_eq!(kind, CategoryKind::Questions);
    }

    #[test]
    fn test_summary() {
        let summary = CategorySummary::from(CategoryKind::Negation.category());
        assert_eq!(summary.id, "negation");
        assert_eq!(summary.source, "fixed");
        assert_eq!(summary.words.len(), 11);

        let json = serde_json::to_value(CategorySummary::from(CategoryKind::Actions.category()))
            .unwrap();
        assert_eq!(json["source"], "dynamic");
        assert_eq!(json["color"], "rgb(200, 255, 200)");
        assert!(json["words"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_percentages_are_heuristic() {
        let total: f64 = CORE_CATEGORIES.iter().map(|c| c.target_percentage).sum();
        assert!(total > 1.0);
        assert!(CORE_CATEGORIES.iter().all(|c| (0.0..=1.0).contains(&c.target_percentage)));
    }
}
