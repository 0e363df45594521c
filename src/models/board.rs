//! Open Board Format (OBF) document shapes.
//!
//! Only the subset of OBF 0.1 that core boards use is modelled: buttons,
//! grid, images and license. Serialization follows the OBF field names.

use crate::models::RgbColor;
use serde::{Deserialize, Serialize};

/// Format tag written into every board.
pub const OBF_FORMAT: &str = "open-board-0.1";

/// License block of a board document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// License type (e.g., "CC By")
    #[serde(rename = "type")]
    pub license_type: String,
    /// URL of the license text
    pub copyright_notice_url: String,
    /// Author name
    pub author_name: String,
    /// Author URL
    pub author_url: String,
}

impl Default for License {
    fn default() -> Self {
        Self {
            license_type: "CC By".to_string(),
            copyright_notice_url: "https://creativecommons.org/licenses/by/4.0/".to_string(),
            author_name: "OpenAAC".to_string(),
            author_url: "https://www.openaac.org".to_string(),
        }
    }
}

/// A board button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    /// Button id, referenced from the grid order
    pub id: String,
    /// Text shown on the button
    pub label: String,
    /// Background color
    pub background_color: RgbColor,
    /// Border color
    pub border_color: RgbColor,
    /// Image shown on the button, if a pictogram was found
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
}

/// Grid section of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardGrid {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub columns: usize,
    /// Row-major button ids (`null` for empty cells)
    pub order: Vec<Vec<Option<String>>>,
}

/// An image referenced by buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardImage {
    /// Image id, referenced from `Button::image_id`
    pub id: String,
    /// Remote image URL
    pub url: String,
    /// MIME type, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Symbol set the image belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_set: Option<String>,
    /// Width in pixels, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height in pixels, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// A complete core board document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDocument {
    /// Always [`OBF_FORMAT`]
    pub format: String,
    /// Deterministic board id
    pub id: String,
    /// Board locale (e.g., "en")
    pub locale: String,
    /// Human-readable name
    pub name: String,
    /// HTML description
    pub description_html: String,
    /// License information
    pub license: License,
    /// One button per placed word
    pub buttons: Vec<Button>,
    /// Grid layout
    pub grid: BoardGrid,
    /// Images referenced by buttons
    pub images: Vec<BoardImage>,
    /// Topic the board was generated for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext_coreboard_topic: Option<String>,
    /// Requested button count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext_coreboard_total_buttons: Option<usize>,
}

impl BoardDocument {
    /// Looks up a button by id.
    #[must_use]
    pub fn button(&self, id: &str) -> Option<&Button> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Looks up an image by id.
    #[must_use]
    pub fn image(&self, id: &str) -> Option<&BoardImage> {
        self.images.iter().find(|i| i.id == id)
    }
}
