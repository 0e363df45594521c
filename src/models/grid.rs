//! Board grid geometry and cell storage.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Grid dimensions derived from a requested button count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub columns: usize,
}

impl GridDimensions {
    /// Computes `columns = ceil(sqrt(total))` and `rows = ceil(total / columns)`.
    ///
    /// Returns `None` for a zero button count.
    ///
    /// ```
    /// use coreboard::models::GridDimensions;
    ///
    /// let dims = GridDimensions::for_buttons(20).unwrap();
    /// assert_eq!((dims.rows, dims.columns), (4, 5));
    /// ```
    #[must_use]
    pub fn for_buttons(total_buttons: usize) -> Option<Self> {
        if total_buttons == 0 {
            return None;
        }
        let columns = ceil_sqrt(total_buttons);
        let rows = total_buttons.div_ceil(columns);
        Some(Self { rows, columns })
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Whether `(row, col)` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns
    }
}

/// Smallest `c` with `c * c >= n`, computed without float rounding surprises.
fn ceil_sqrt(n: usize) -> usize {
    let mut c = (n as f64).sqrt() as usize;
    while c * c < n {
        c += 1;
    }
    while c > 1 && (c - 1) * (c - 1) >= n {
        c -= 1;
    }
    c.max(1)
}

/// A `(row, col)` position in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cursor {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Cursor {
    /// Creates a cursor.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Rows × columns matrix of optional button ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    dimensions: GridDimensions,
    cells: Vec<Vec<Option<String>>>,
}

impl Grid {
    /// Creates an all-empty grid.
    #[must_use]
    pub fn empty(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            cells: vec![vec![None; dimensions.columns]; dimensions.rows],
        }
    }

    /// Grid dimensions.
    #[must_use]
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.dimensions.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.dimensions.columns
    }

    /// Id stored at `(row, col)`, if any.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col)?.as_deref()
    }

    /// Whether `(row, col)` is inside the grid and holds no id.
    #[must_use]
    pub fn is_free(&self, row: usize, col: usize) -> bool {
        self.dimensions.contains(row, col) && self.cells[row][col].is_none()
    }

    /// Stores `id` at `(row, col)`. Only the layout engine writes to grids.
    pub(crate) fn set(&mut self, row: usize, col: usize, id: &str) {
        self.cells[row][col] = Some(id.to_string());
    }

    /// Row-major view of the cells, as serialized in the board `order`.
    #[must_use]
    pub fn order(&self) -> &[Vec<Option<String>>] {
        &self.cells
    }

    /// Consumes the grid, returning the row-major cell matrix.
    #[must_use]
    pub fn into_order(self) -> Vec<Vec<Option<String>>> {
        self.cells
    }

    /// Iterates all filled cells as `(row, col, id)`.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize, &str)> {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.as_deref().map(|id| (row, col, id)))
        })
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.filled_cells().count()
    }

    /// Whether every filled cell holds a distinct id.
    #[must_use]
    pub fn ids_are_unique(&self) -> bool {
        let mut seen = HashSet::new();
        self.filled_cells().all(|(_, _, id)| seen.insert(id))
    }
}
