//! Data models for core boards.
//!
//! This module contains the category table, the word and grid types and the
//! Open Board Format document shapes. Models are independent of I/O.

pub mod board;
pub mod category;
pub mod core_word;
pub mod grid;
pub mod rgb;

// Re-export all model types
pub use board::{BoardDocument, BoardGrid, BoardImage, Button, License, OBF_FORMAT};
pub use category::{
    dynamic_categories, Category, CategoryKind, CategorySummary, WordSource, BORDER_COLOR,
    CORE_CATEGORIES,
};
pub use core_word::CoreWord;
pub use grid::{Cursor, Grid, GridDimensions};
pub use rgb::RgbColor;
