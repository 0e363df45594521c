//! Board document assembly.
//!
//! Turns the combined word list, the filled grid and the per-word pictogram
//! results into an Open Board Format document. Pure transformation.

use sha2::{Digest, Sha256};
use std::collections::HashSet;

use crate::models::{
    BoardDocument, BoardGrid, BoardImage, Button, CoreWord, Grid, License, OBF_FORMAT,
};
use crate::pictograms::Pictogram;

/// Deterministic board id: 16 hex chars of `sha256("{topic}:{total_buttons}")`.
///
/// ```
/// use coreboard::services::assembler::board_id;
///
/// assert_eq!(board_id("zoo", 42), board_id("zoo", 42));
/// assert_ne!(board_id("zoo", 42), board_id("zoo", 43));
/// assert_eq!(board_id("zoo", 42).len(), 16);
/// ```
#[must_use]
pub fn board_id(topic: &str, total_buttons: usize) -> String {
    let digest = Sha256::digest(format!("{topic}:{total_buttons}").as_bytes());
    let mut hex = format!("{digest:x}");
    hex.truncate(16);
    hex
}

/// Builds board documents for one locale.
#[derive(Debug, Clone)]
pub struct BoardAssembler {
    locale: String,
    license: License,
}

impl BoardAssembler {
    /// Creates an assembler writing `locale` and the default license.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            license: License::default(),
        }
    }

    /// Assembles the board.
    ///
    /// `images` is positional: `images[i]` belongs to `words[i]`. A missing
    /// entry (or a short list) leaves the button without an image. Buttons
    /// sharing a pictogram reference a single image entry.
    #[must_use]
    pub fn assemble(
        &self,
        words: &[CoreWord],
        grid: Grid,
        topic: &str,
        images: &[Option<Pictogram>],
        total_buttons: usize,
    ) -> BoardDocument {
        let mut seen_images = HashSet::new();
        let mut board_images: Vec<BoardImage> = Vec::new();

        let buttons = words
            .iter()
            .enumerate()
            .map(|(idx, word)| {
                let pictogram = images.get(idx).and_then(Option::as_ref);
                if let Some(pictogram) = pictogram {
                    if seen_images.insert(pictogram.id.clone()) {
                        board_images.push(pictogram.to_board_image());
                    }
                }
                Button {
                    id: word.id.clone(),
                    label: word.label.clone(),
                    background_color: word.background_color,
                    border_color: word.border_color,
                    image_id: pictogram.map(|p| p.id.clone()),
                }
            })
            .collect();

        let rows = grid.rows();
        let columns = grid.columns();

        BoardDocument {
            format: OBF_FORMAT.to_string(),
            id: board_id(topic, total_buttons),
            locale: self.locale.clone(),
            name: format!("Core Board - {topic}"),
            description_html: format!("Core vocabulary board generated for the topic: {topic}"),
            license: self.license.clone(),
            buttons,
            grid: BoardGrid {
                rows,
                columns,
                order: grid.into_order(),
            },
            images: board_images,
            ext_coreboard_topic: Some(topic.to_string()),
            ext_coreboard_total_buttons: Some(total_buttons),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryKind, GridDimensions};

    fn pictogram(id: &str) -> Pictogram {
        Pictogram {
            id: id.to_string(),
            url: format!("https://img.test/{id}.png"),
            symbol_set: "test".to_string(),
            content_type: Some("image/png".to_string()),
        }
    }

    fn sample_words() -> Vec<CoreWord> {
        vec![
            CoreWord::new(1, "I", CategoryKind::Pronouns),
            CoreWord::new(2, "eat", CategoryKind::Actions),
            CoreWord::new(3, "not", CategoryKind::Negation),
        ]
    }

    fn sample_grid() -> Grid {
        let mut grid = Grid::empty(GridDimensions {
            rows: 2,
            columns: 2,
        });
        grid.set(0, 0, "1");
        grid.set(1, 0, "2");
        grid.set(0, 1, "3");
        grid
    }

    #[test]
    fn test_document_fields() {
        let board = BoardAssembler::new("en").assemble(
            &sample_words(),
            sample_grid(),
            "zoo",
            &[],
            4,
        );

        assert_eq!(board.format, "open-board-0.1");
        assert_eq!(board.id, board_id("zoo", 4));
        assert_eq!(board.name, "Core Board - zoo");
        assert_eq!(
            board.description_html,
            "Core vocabulary board generated for the topic: zoo"
        );
        assert_eq!(board.license.license_type, "CC By");
        assert_eq!(board.buttons.len(), 3);
        assert_eq!(board.grid.rows, 2);
        assert_eq!(board.grid.columns, 2);
        assert_eq!(board.grid.order[0][0].as_deref(), Some("1"));
        assert_eq!(board.grid.order[1][1], None);
        assert!(board.images.is_empty());
        assert_eq!(board.ext_coreboard_total_buttons, Some(4));
    }

    #[test]
    fn test_missing_image_omits_image_id() {
        let images = vec![Some(pictogram("10")), None];
        let board = BoardAssembler::new("en").assemble(
            &sample_words(),
            sample_grid(),
            "zoo",
            &images,
            4,
        );

        assert_eq!(board.buttons[0].image_id.as_deref(), Some("10"));
        assert_eq!(board.buttons[1].image_id, None);
        assert_eq!(board.buttons[1].label, "eat");
        assert_eq!(board.buttons[1].background_color.to_css(), "rgb(200, 255, 200)");
        // images shorter than words
        assert_eq!(board.buttons[2].image_id, None);
        assert_eq!(board.images.len(), 1);

        let json = serde_json::to_value(&board).unwrap();
        assert!(json["buttons"][1].get("image_id").is_none());
        assert_eq!(json["buttons"][0]["image_id"], "10");
    }

    #[test]
    fn test_shared_pictogram_listed_once() {
        let images = vec![Some(pictogram("7")), Some(pictogram("7")), Some(pictogram("8"))];
        let board = BoardAssembler::new("es").assemble(
            &sample_words(),
            sample_grid(),
            "playa",
            &images,
            4,
        );
        let ids: Vec<&str> = board.images.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["7", "8"]);
        assert_eq!(board.locale, "es");
    }

    #[test]
    fn test_serialized_shape() {
        let board = BoardAssembler::new("en").assemble(
            &sample_words(),
            sample_grid(),
            "zoo",
            &[],
            4,
        );
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json["license"]["type"], "CC By");
        assert_eq!(json["buttons"][0]["border_color"], "rgb(0, 0, 0)");
        assert_eq!(json["grid"]["order"][1][1], serde_json::Value::Null);
        assert_eq!(json["ext_coreboard_topic"], "zoo");
    }
}
