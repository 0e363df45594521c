//! Grid layout engine for core boards.
//!
//! The grid is split into three horizontal bands:
//!
//! ```text
//!   row 0 ┌──────────────┬──────────────────────────────┐
//!         │              │ Actions, Adjectives/Adverbs  │
//!  middle ├   Pronouns   ├──────────────────────────────┤
//!         │              │ Determiners, Prepositions    │
//!  p_end  ├──────────────┴──────────────────────────────┤
//!         │ Questions, Negation, Interjections          │
//!   rows  └─────────────────────────────────────────────┘
//! ```
//!
//! with `p_end = floor(rows * 0.8)` and `middle = floor(p_end * 0.8)`.
//! Each category fills its region column-major, and the cursor where it
//! stops becomes the start of the next category in the same band. The band
//! boundary between pronouns and the rest moves with the pronoun count.
//!
//! Categories without a fixed budget that must squeeze into leftover space
//! (Actions, Determiners, Questions, Negation) are capped by a balance
//! number derived from the remaining geometry. Words that do not fit are
//! dropped with a diagnostic; layout never fails for geometric reasons.

use crate::error::{BoardError, BoardResult};
use crate::models::{CategoryKind, CoreWord, Cursor, Grid, GridDimensions};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Grids with fewer cells than this use the conservative balance fraction.
pub const SMALL_GRID_THRESHOLD: usize = 60;

/// Share of the rows given to the pronoun block.
const PRONOUN_BAND_RATIO: f64 = 0.8;

/// Share of the pronoun rows given to the actions/descriptors band.
const MIDDLE_BAND_RATIO: f64 = 0.8;

/// How the row resets when a region moves to its next column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// New columns start at row 0
    TopReset,
    /// New columns start at the band's top row
    BandReset,
}

/// Where and how one category is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// First cell to try
    pub start: Cursor,
    /// Row new columns restart at in [`FillMode::BandReset`] mode
    pub band_top: usize,
    /// Exclusive row bound
    pub max_row: usize,
    /// Exclusive column bound
    pub end_col: usize,
    /// Column reset rule
    pub mode: FillMode,
    /// Cap on the number of words placed (`None` = unbounded)
    pub balance: Option<usize>,
}

impl Region {
    const fn reset_row(&self) -> usize {
        match self.mode {
            FillMode::TopReset => 0,
            FillMode::BandReset => self.band_top,
        }
    }
}

/// Result of placing one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Grid with the category's words added
    pub grid: Grid,
    /// Continuation cursor for the next category in the band
    pub end: Cursor,
    /// Words written to the grid
    pub placed: usize,
    /// Words dropped by the balance cap or for lack of space
    pub dropped: usize,
}

/// Diagnostic record of one category's placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionTrace {
    /// Category placed
    pub category: CategoryKind,
    /// Region the category was given
    pub region: Region,
    /// Cursor after placement
    pub end: Cursor,
    /// Words offered
    pub offered: usize,
    /// Words placed
    pub placed: usize,
    /// Words dropped
    pub dropped: usize,
}

/// Band boundaries for a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandGeometry {
    /// Grid dimensions
    pub dimensions: GridDimensions,
    /// Exclusive row bound of the pronoun block
    pub pronouns_end_row: usize,
    /// Exclusive row bound of the actions/descriptors band
    pub middle_section: usize,
}

impl BandGeometry {
    /// Computes band boundaries for `dimensions`.
    #[must_use]
    pub fn new(dimensions: GridDimensions) -> Self {
        let pronouns_end_row = (dimensions.rows as f64 * PRONOUN_BAND_RATIO).floor() as usize;
        let middle_section = (pronouns_end_row as f64 * MIDDLE_BAND_RATIO).floor() as usize;
        Self {
            dimensions,
            pronouns_end_row,
            middle_section,
        }
    }

    /// Region for `kind`, given the traces of every category placed before it.
    ///
    /// `traces` must be in canonical category order.
    #[must_use]
    pub fn region_for(&self, kind: CategoryKind, traces: &[RegionTrace]) -> Region {
        let columns = self.dimensions.columns;
        let rows = self.dimensions.rows;
        let cells = self.dimensions.cell_count();
        let p_end = self.pronouns_end_row;
        let middle = self.middle_section;
        let end_of = |k: CategoryKind| {
            traces
                .get(k.index())
                .map_or(Cursor::default(), |trace| trace.end)
        };
        let bottom_available = (rows - p_end) * columns;

        match kind {
            CategoryKind::Pronouns => Region {
                start: Cursor::new(0, 0),
                band_top: 0,
                max_row: p_end,
                end_col: columns,
                mode: FillMode::TopReset,
                balance: None,
            },
            CategoryKind::Actions => {
                let pronouns = end_of(CategoryKind::Pronouns);
                let available = middle.saturating_sub(pronouns.row)
                    + columns.saturating_sub(pronouns.col + 1) * middle;
                Region {
                    start: pronouns,
                    band_top: 0,
                    max_row: middle,
                    end_col: columns,
                    mode: FillMode::TopReset,
                    balance: Some(calculate_balance_number(cells, available, 0.5, 0.5)),
                }
            }
            CategoryKind::AdjectivesAdverbs => Region {
                start: end_of(CategoryKind::Actions),
                band_top: 0,
                max_row: middle,
                end_col: columns,
                mode: FillMode::TopReset,
                balance: None,
            },
            CategoryKind::Determiners => {
                let pronouns = end_of(CategoryKind::Pronouns);
                let available = (p_end - middle) * columns.saturating_sub(pronouns.col);
                Region {
                    start: Cursor::new(middle, pronouns.col),
                    band_top: middle,
                    max_row: p_end,
                    end_col: columns,
                    mode: FillMode::BandReset,
                    balance: Some(calculate_balance_number(cells, available, 0.5, 0.5)),
                }
            }
            CategoryKind::Prepositions => Region {
                start: end_of(CategoryKind::Determiners),
                band_top: middle,
                max_row: p_end,
                end_col: columns,
                mode: FillMode::BandReset,
                balance: None,
            },
            CategoryKind::Questions => Region {
                start: Cursor::new(p_end, 0),
                band_top: p_end,
                max_row: rows,
                end_col: columns,
                mode: FillMode::BandReset,
                balance: Some(calculate_balance_number(cells, bottom_available, 0.3, 0.4)),
            },
            CategoryKind::Negation => Region {
                start: end_of(CategoryKind::Questions),
                band_top: p_end,
                max_row: rows,
                end_col: columns,
                mode: FillMode::BandReset,
                balance: Some(calculate_balance_number(cells, bottom_available, 0.3, 0.3)),
            },
            CategoryKind::Interjections => Region {
                start: end_of(CategoryKind::Negation),
                band_top: p_end,
                max_row: rows,
                end_col: columns,
                mode: FillMode::BandReset,
                balance: None,
            },
        }
    }
}

/// Caps a category's word count by the space left for it.
///
/// Uses `small_fraction` below [`SMALL_GRID_THRESHOLD`] cells and
/// `large_fraction` otherwise; the result is floored, then bumped to even.
///
/// ```
/// use coreboard::services::layout_engine::calculate_balance_number;
///
/// assert_eq!(calculate_balance_number(42, 16, 0.5, 0.5), 8);
/// assert_eq!(calculate_balance_number(42, 6, 0.5, 0.5), 4);
/// assert_eq!(calculate_balance_number(100, 20, 0.3, 0.4), 8);
/// ```
#[must_use]
pub fn calculate_balance_number(
    grid_size: usize,
    available_slots: usize,
    small_fraction: f64,
    large_fraction: f64,
) -> usize {
    let fraction = if grid_size < SMALL_GRID_THRESHOLD {
        small_fraction
    } else {
        large_fraction
    };
    let balance = (available_slots as f64 * fraction).floor() as usize;
    if balance % 2 == 0 {
        balance
    } else {
        balance + 1
    }
}

/// Places `words` into `region`, column-major, returning the updated grid.
///
/// Occupied cells are stepped over. When the column cursor reaches the
/// region's end column the remaining words are dropped. The returned cursor
/// is where the next word would go; it equals `region.start` when nothing
/// was placed.
#[must_use]
pub fn place_words(grid: Grid, words: &[&CoreWord], region: &Region) -> Placement {
    let dims = grid.dimensions();
    let max_row = clamp_bound(region.max_row, dims.rows, "row");
    let end_col = clamp_bound(region.end_col, dims.columns, "column");
    let reset_row = region.reset_row();
    let limit = region.balance.unwrap_or(usize::MAX);

    if words.len() > limit {
        debug!(
            offered = words.len(),
            balance = limit,
            "balance number caps category"
        );
    }

    let mut grid = grid;
    let mut cursor = region.start;
    let mut placed = 0;

    'words: for word in words.iter().take(limit) {
        loop {
            if cursor.row >= max_row {
                cursor = Cursor::new(reset_row, cursor.col + 1);
            }
            if cursor.col >= end_col {
                break 'words;
            }
            if grid.is_free(cursor.row, cursor.col) {
                break;
            }
            debug!(row = cursor.row, col = cursor.col, "cell occupied, stepping over");
            cursor.row += 1;
        }

        grid.set(cursor.row, cursor.col, &word.id);
        placed += 1;
        cursor.row += 1;
    }

    if placed > 0 && cursor.row >= max_row && cursor.col < end_col {
        cursor = Cursor::new(reset_row, cursor.col + 1);
    }

    let dropped = words.len() - placed;
    if dropped > words.len().saturating_sub(limit) {
        warn!(
            dropped,
            placed, "region full, dropping words that do not fit"
        );
    }

    Placement {
        grid,
        end: cursor,
        placed,
        dropped,
    }
}

fn clamp_bound(bound: usize, limit: usize, axis: &str) -> usize {
    if bound > limit {
        warn!(bound, limit, axis, "region bound exceeds grid, clamping");
        limit
    } else {
        bound
    }
}

/// Output of a full layout run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOutcome {
    /// Filled grid
    pub grid: Grid,
    /// Per-category diagnostics
    pub report: LayoutReport,
}

/// Diagnostics for a full layout run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutReport {
    /// Band boundaries used
    pub bands: BandGeometry,
    /// One trace per category in canonical order
    pub regions: Vec<RegionTrace>,
}

impl LayoutReport {
    /// Trace for `kind`.
    #[must_use]
    pub fn region(&self, kind: CategoryKind) -> Option<&RegionTrace> {
        self.regions.iter().find(|r| r.category == kind)
    }

    /// Total words placed on the grid.
    #[must_use]
    pub fn placed(&self) -> usize {
        self.regions.iter().map(|r| r.placed).sum()
    }

    /// Total words dropped.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.regions.iter().map(|r| r.dropped).sum()
    }
}

/// Lays out `words` on a grid sized for `total_buttons`.
///
/// Words are grouped by category, keeping their relative order, and each
/// category is placed in its band in canonical order.
pub fn layout(words: &[CoreWord], total_buttons: usize) -> BoardResult<LayoutOutcome> {
    let dimensions = GridDimensions::for_buttons(total_buttons).ok_or_else(|| {
        BoardError::invalid_input("total buttons must be a positive integer")
    })?;
    validate_words(words)?;

    let bands = BandGeometry::new(dimensions);
    let groups = group_by_category(words);

    let (grid, regions) = CategoryKind::ALL.into_iter().fold(
        (Grid::empty(dimensions), Vec::with_capacity(CategoryKind::ALL.len())),
        |(grid, mut traces), kind| {
            let region = bands.region_for(kind, &traces);
            let offered = &groups[kind.index()];
            let placement = place_words(grid, offered, &region);
            debug!(
                category = kind.name(),
                start = ?region.start,
                end = ?placement.end,
                placed = placement.placed,
                dropped = placement.dropped,
                "placed category"
            );
            traces.push(RegionTrace {
                category: kind,
                region,
                end: placement.end,
                offered: offered.len(),
                placed: placement.placed,
                dropped: placement.dropped,
            });
            (placement.grid, traces)
        },
    );

    Ok(LayoutOutcome {
        grid,
        report: LayoutReport { bands, regions },
    })
}

fn validate_words(words: &[CoreWord]) -> BoardResult<()> {
    let mut ids = HashSet::with_capacity(words.len());
    for word in words {
        if word.id.trim().is_empty() {
            return Err(BoardError::invalid_input(format!(
                "word '{}' has an empty id",
                word.label
            )));
        }
        if !ids.insert(word.id.as_str()) {
            return Err(BoardError::invalid_input(format!(
                "duplicate word id '{}'",
                word.id
            )));
        }
    }
    Ok(())
}

fn group_by_category(words: &[CoreWord]) -> [Vec<&CoreWord>; 8] {
    let mut groups: [Vec<&CoreWord>; 8] = Default::default();
    for word in words {
        groups[word.category.index()].push(word);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_words(kind: CategoryKind, count: usize, first_id: usize) -> Vec<CoreWord> {
        (0..count)
            .map(|i| CoreWord::new(first_id + i, format!("{}-{i}", kind.id()), kind))
            .collect()
    }

    fn refs(words: &[CoreWord]) -> Vec<&CoreWord> {
        words.iter().collect()
    }

    fn dims(rows: usize, columns: usize) -> GridDimensions {
        GridDimensions { rows, columns }
    }

    #[test]
    fn test_balance_number() {
        // small grid uses first fraction
        assert_eq!(calculate_balance_number(59, 10, 0.3, 0.9), 4);
        // large grid uses second fraction
        assert_eq!(calculate_balance_number(60, 10, 0.3, 0.9), 10);
        // floor 4.2 -> 4
        assert_eq!(calculate_balance_number(42, 14, 0.3, 0.4), 4);
        // floor 1.5 -> 1 -> 2
        assert_eq!(calculate_balance_number(20, 3, 0.5, 0.5), 2);
        assert_eq!(calculate_balance_number(20, 0, 0.5, 0.5), 0);
    }

    #[test]
    fn test_band_geometry() {
        let bands = BandGeometry::new(dims(6, 7));
        assert_eq!(bands.pronouns_end_row, 4);
        assert_eq!(bands.middle_section, 3);

        let bands = BandGeometry::new(dims(10, 10));
        assert_eq!(bands.pronouns_end_row, 8);
        assert_eq!(bands.middle_section, 6);

        let bands = BandGeometry::new(dims(1, 1));
        assert_eq!(bands.pronouns_end_row, 0);
        assert_eq!(bands.middle_section, 0);
    }

    #[test]
    fn test_place_words_top_reset() {
        let words = make_words(CategoryKind::Pronouns, 5, 1);
        let region = Region {
            start: Cursor::new(0, 0),
            band_top: 0,
            max_row: 2,
            end_col: 3,
            mode: FillMode::TopReset,
            balance: None,
        };
        let placement = place_words(Grid::empty(dims(3, 3)), &refs(&words), &region);

        assert_eq!(placement.placed, 5);
        assert_eq!(placement.dropped, 0);
        assert_eq!(placement.grid.get(0, 0), Some("1"));
        assert_eq!(placement.grid.get(1, 0), Some("2"));
        assert_eq!(placement.grid.get(0, 1), Some("3"));
        assert_eq!(placement.grid.get(1, 1), Some("4"));
        assert_eq!(placement.grid.get(0, 2), Some("5"));
        assert_eq!(placement.grid.get(2, 0), None);
        assert_eq!(placement.end, Cursor::new(1, 2));
    }

    #[test]
    fn test_place_words_band_reset_and_full_column_cursor() {
        let words = make_words(CategoryKind::Questions, 4, 1);
        let region = Region {
            start: Cursor::new(2, 1),
            band_top: 2,
            max_row: 4,
            end_col: 4,
            mode: FillMode::BandReset,
            balance: None,
        };
        let placement = place_words(Grid::empty(dims(4, 4)), &refs(&words), &region);

        assert_eq!(placement.grid.get(2, 1), Some("1"));
        assert_eq!(placement.grid.get(3, 1), Some("2"));
        assert_eq!(placement.grid.get(2, 2), Some("3"));
        assert_eq!(placement.grid.get(3, 2), Some("4"));
        // column completed: cursor already moved to the next column's band top
        assert_eq!(placement.end, Cursor::new(2, 3));
    }

    #[test]
    fn test_place_words_truncates_to_capacity() {
        let words = make_words(CategoryKind::Interjections, 10, 1);
        let region = Region {
            start: Cursor::new(1, 0),
            band_top: 1,
            max_row: 2,
            end_col: 3,
            mode: FillMode::BandReset,
            balance: None,
        };
        let placement = place_words(Grid::empty(dims(2, 3)), &refs(&words), &region);
        assert_eq!(placement.placed, 3);
        assert_eq!(placement.dropped, 7);
        assert_eq!(placement.grid.filled_count(), 3);
    }

    #[test]
    fn test_place_words_respects_balance() {
        let words = make_words(CategoryKind::Actions, 10, 1);
        let region = Region {
            start: Cursor::new(0, 0),
            band_top: 0,
            max_row: 5,
            end_col: 5,
            mode: FillMode::TopReset,
            balance: Some(4),
        };
        let placement = place_words(Grid::empty(dims(5, 5)), &refs(&words), &region);
        assert_eq!(placement.placed, 4);
        assert_eq!(placement.dropped, 6);
        assert_eq!(placement.end, Cursor::new(4, 0));
    }

    #[test]
    fn test_place_words_empty_keeps_start() {
        let region = Region {
            start: Cursor::new(3, 2),
            band_top: 3,
            max_row: 4,
            end_col: 5,
            mode: FillMode::BandReset,
            balance: None,
        };
        let placement = place_words(Grid::empty(dims(5, 5)), &[], &region);
        assert_eq!(placement.placed, 0);
        assert_eq!(placement.end, Cursor::new(3, 2));
    }

    #[test]
    fn test_place_words_steps_over_occupied_cells() {
        let mut grid = Grid::empty(dims(3, 2));
        grid.set(0, 0, "99");
        let words = make_words(CategoryKind::Determiners, 2, 1);
        let region = Region {
            start: Cursor::new(0, 0),
            band_top: 0,
            max_row: 3,
            end_col: 2,
            mode: FillMode::BandReset,
            balance: None,
        };
        let placement = place_words(grid, &refs(&words), &region);
        assert_eq!(placement.grid.get(0, 0), Some("99"));
        assert_eq!(placement.grid.get(1, 0), Some("1"));
        assert_eq!(placement.grid.get(2, 0), Some("2"));
        assert_eq!(placement.end, Cursor::new(0, 1));
    }

    #[test]
    fn test_place_words_clamps_oversized_region() {
        let words = make_words(CategoryKind::Actions, 6, 1);
        let region = Region {
            start: Cursor::new(0, 0),
            band_top: 0,
            max_row: 10,
            end_col: 10,
            mode: FillMode::TopReset,
            balance: None,
        };
        let placement = place_words(Grid::empty(dims(2, 2)), &refs(&words), &region);
        assert_eq!(placement.placed, 4);
        assert_eq!(placement.dropped, 2);
        assert_eq!(placement.grid.get(1, 0), Some("2"));
        assert_eq!(placement.grid.get(1, 1), Some("4"));
        assert!(placement.grid.ids_are_unique());
    }

    #[test]
    fn test_place_words_start_outside_grid_drops_everything() {
        let words = make_words(CategoryKind::Negation, 3, 1);
        let region = Region {
            start: Cursor::new(7, 1),
            band_top: 7,
            max_row: 9,
            end_col: 4,
            mode: FillMode::BandReset,
            balance: None,
        };
        let placement = place_words(Grid::empty(dims(2, 2)), &refs(&words), &region);
        assert_eq!(placement.placed, 0);
        assert_eq!(placement.dropped, 3);
        assert_eq!(placement.grid.filled_count(), 0);
    }

    #[test]
    fn test_layout_rejects_bad_input() {
        assert!(matches!(layout(&[], 0), Err(BoardError::InvalidInput(_))));

        let mut words = make_words(CategoryKind::Pronouns, 2, 1);
        words[1].id = "1".to_string();
        assert!(matches!(layout(&words, 10), Err(BoardError::InvalidInput(_))));

        let mut words = make_words(CategoryKind::Pronouns, 1, 1);
        words[0].id = " ".to_string();
        assert!(layout(&words, 10).is_err());
    }

    #[test]
    fn test_layout_empty_word_list() {
        let outcome = layout(&[], 9).unwrap();
        assert_eq!(outcome.grid.filled_count(), 0);
        assert_eq!(outcome.report.regions.len(), 8);
        assert_eq!(outcome.report.placed(), 0);
    }

    fn forty_two_button_words() -> Vec<CoreWord> {
        let counts = [6, 14, 14, 6, 6, 4, 4, 6];
        let mut next_id = 1;
        let mut words = Vec::new();
        for (kind, count) in CategoryKind::ALL.into_iter().zip(counts) {
            words.extend(make_words(kind, count, next_id));
            next_id += count;
        }
        words
    }

    #[test]
    fn test_layout_forty_two_buttons_trace() {
        let outcome = layout(&forty_two_button_words(), 42).unwrap();
        let report = &outcome.report;
        assert_eq!(report.bands.pronouns_end_row, 4);
        assert_eq!(report.bands.middle_section, 3);

        let trace = |kind| report.region(kind).unwrap();
        let pronouns = trace(CategoryKind::Pronouns);
        assert_eq!(pronouns.placed, 6);
        assert_eq!(pronouns.end, Cursor::new(2, 1));

        let actions = trace(CategoryKind::Actions);
        assert_eq!(actions.region.start, Cursor::new(2, 1));
        assert_eq!(actions.region.balance, Some(8));
        assert_eq!(actions.placed, 8);

        let adjectives = trace(CategoryKind::AdjectivesAdverbs);
        assert_eq!(adjectives.region.start, actions.end);
        assert_eq!(adjectives.placed, 8);

        let determiners = trace(CategoryKind::Determiners);
        assert_eq!(determiners.region.start, Cursor::new(3, 1));
        assert_eq!(determiners.region.balance, Some(4));
        assert_eq!(determiners.placed, 4);

        let prepositions = trace(CategoryKind::Prepositions);
        assert_eq!(prepositions.region.start, Cursor::new(3, 5));
        assert_eq!(prepositions.placed, 2);

        let questions = trace(CategoryKind::Questions);
        assert_eq!(questions.region.start, Cursor::new(4, 0));
        assert_eq!(questions.region.balance, Some(4));
        assert_eq!(questions.placed, 4);

        assert_eq!(trace(CategoryKind::Negation).region.start, Cursor::new(4, 2));
        assert_eq!(trace(CategoryKind::Negation).placed, 4);
        assert_eq!(
            trace(CategoryKind::Interjections).region.start,
            Cursor::new(4, 4)
        );
        assert_eq!(trace(CategoryKind::Interjections).placed, 6);

        assert_eq!(outcome.grid.filled_count(), 42);
        assert!(outcome.grid.ids_are_unique());
        assert_eq!(report.placed(), 42);
        assert_eq!(report.dropped(), 18);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let words = forty_two_button_words();
        assert_eq!(layout(&words, 42).unwrap(), layout(&words, 42).unwrap());
    }

    #[test]
    fn test_layout_single_button() {
        let words = make_words(CategoryKind::Interjections, 3, 1);
        let outcome = layout(&words, 1).unwrap();
        assert_eq!(outcome.grid.get(0, 0), Some("1"));
        assert_eq!(outcome.report.dropped(), 2);
    }
}
