//! Terminal rendering of board grids.
//!
//! Draws the grid row by row as a text table. With color enabled each cell
//! gets its button's background color and a black or white label depending
//! on brightness.
//!
//! ```text
//! Board Layout: Core Board - zoo
//! =====================================================
//! I           |we          |eat         |---empty---
//! -----------------------------------------------------
//! ```

use std::collections::HashMap;
use std::fmt::Write;

use crossterm::style::{Color, Stylize};

use crate::models::{BoardDocument, Button};

/// Width of one rendered cell.
pub const CELL_WIDTH: usize = 12;

const RULE_WIDTH_PER_COLUMN: usize = 15;
const EMPTY_CELL: &str = "---empty---";
const DANGLING_CELL: &str = "---error---";

fn fit_label(label: &str) -> String {
    let truncated: String = label.chars().take(CELL_WIDTH).collect();
    format!("{truncated:<CELL_WIDTH$}")
}

fn render_button(button: &Button, color: bool) -> String {
    let text = fit_label(&button.label);
    if !color {
        return text;
    }
    let bg = button.background_color;
    let fg = if bg.is_light() { Color::Black } else { Color::White };
    text.on(bg.to_terminal_color()).with(fg).to_string()
}

/// Renders the grid of `board` as a text table.
#[must_use]
pub fn render_board(board: &BoardDocument, color: bool) -> String {
    let buttons: HashMap<&str, &Button> = board
        .buttons
        .iter()
        .map(|b| (b.id.as_str(), b))
        .collect();
    let rule_width = board.grid.columns * RULE_WIDTH_PER_COLUMN;

    let mut out = String::new();
    let _ = writeln!(out, "Board Layout: {}", board.name);
    let _ = writeln!(out, "{}", "=".repeat(rule_width));

    for row in &board.grid.order {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell.as_deref() {
                None => fit_label(EMPTY_CELL),
                Some(id) => buttons
                    .get(id)
                    .map_or_else(|| fit_label(DANGLING_CELL), |b| render_button(b, color)),
            })
            .collect();
        let _ = writeln!(out, "{}", cells.join("|"));
        let _ = writeln!(out, "{}", "-".repeat(rule_width));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BoardGrid, License, RgbColor, OBF_FORMAT};

    fn button(id: &str, label: &str, bg: RgbColor) -> Button {
        Button {
            id: id.to_string(),
            label: label.to_string(),
            background_color: bg,
            border_color: RgbColor::new(0, 0, 0),
            image_id: None,
        }
    }

    fn board() -> BoardDocument {
        BoardDocument {
            format: OBF_FORMAT.to_string(),
            id: "abc".to_string(),
            locale: "en".to_string(),
            name: "Core Board - test".to_string(),
            description_html: String::new(),
            license: License::default(),
            buttons: vec![
                button("1", "I", RgbColor::new(255, 255, 200)),
                button("2", "extraordinarily", RgbColor::new(20, 20, 20)),
            ],
            grid: BoardGrid {
                rows: 2,
                columns: 2,
                order: vec![
                    vec![Some("1".to_string()), Some("2".to_string())],
                    vec![None, Some("99".to_string())],
                ],
            },
            images: Vec::new(),
            ext_coreboard_topic: None,
            ext_coreboard_total_buttons: None,
        }
    }

    #[test]
    fn test_plain_render() {
        let text = render_board(&board(), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Board Layout: Core Board - test");
        assert_eq!(lines[1], "=".repeat(30));
        assert_eq!(lines[2], "I           |extraordinar");
        assert_eq!(lines[3], "-".repeat(30));
        assert_eq!(lines[4], "---empty--- |---error--- ");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_color_render_uses_contrast() {
        let text = render_board(&board(), true);
        // light background with black text, dark background with white text
        assert!(text.contains("\u{1b}[48;2;255;255;200m"));
        assert!(text.contains("\u{1b}[48;2;20;20;20m"));
        assert!(text.contains("\u{1b}[38;5;0m"));
        assert!(text.contains("\u{1b}[38;5;15m"));
        // empty cells are never colored
        assert!(text.contains("---empty--- |"));
    }
}
