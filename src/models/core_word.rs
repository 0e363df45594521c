//! Vocabulary items placed on a core board.

use crate::models::category::{CategoryKind, BORDER_COLOR};
use crate::models::RgbColor;
use serde::{Deserialize, Serialize};

/// One vocabulary item of a core board.
///
/// Ids are sequential decimal strings starting at "1" and are unique within
/// one board-generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreWord {
    /// Button identifier
    pub id: String,
    /// Word or short phrase shown on the button
    pub label: String,
    /// Category color
    pub background_color: RgbColor,
    /// Border color
    pub border_color: RgbColor,
    /// Linguistic category
    pub category: CategoryKind,
}

impl CoreWord {
    /// Creates a word with the category's color and the shared border color.
    pub fn new(id: usize, label: impl Into<String>, category: CategoryKind) -> Self {
        Self {
            id: id.to_string(),
            label: label.into(),
            background_color: category.category().color,
            border_color: BORDER_COLOR,
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_category_colors() {
        let word = CoreWord::new(7, "run", CategoryKind::Actions);
        assert_eq!(word.id, "7");
        assert_eq!(word.label, "run");
        assert_eq!(word.background_color, RgbColor::new(200, 255, 200));
        assert_eq!(word.border_color, RgbColor::new(0, 0, 0));
        assert_eq!(word.category, CategoryKind::Actions);
    }
}
