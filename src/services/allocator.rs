//! Per-category slot allocation.

use crate::error::{BoardError, BoardResult};
use crate::models::{Category, CategoryKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of grid slots allotted to one category for one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySlotAllocation {
    /// Category the slots belong to
    pub category: CategoryKind,
    /// Even, non-negative slot count
    pub slots: usize,
    /// Copied from the category definition (informational)
    pub required: bool,
}

/// Ordered allocations, one per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAllocations(Vec<CategorySlotAllocation>);

impl SlotAllocations {
    /// Slots for `category`, or 0 when the category was not allocated.
    #[must_use]
    pub fn slots_for(&self, category: CategoryKind) -> usize {
        self.0
            .iter()
            .find(|a| a.category == category)
            .map_or(0, |a| a.slots)
    }

    /// Sum of all slots. May differ from the requested button count.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|a| a.slots).sum()
    }

    /// Iterates allocations in category order.
    pub fn iter(&self) -> std::slice::Iter<'_, CategorySlotAllocation> {
        self.0.iter()
    }

    /// Number of allocated categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no category was allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a SlotAllocations {
    type Item = &'a CategorySlotAllocation;
    type IntoIter = std::slice::Iter<'a, CategorySlotAllocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<CategorySlotAllocation>> for SlotAllocations {
    fn from(allocations: Vec<CategorySlotAllocation>) -> Self {
        Self(allocations)
    }
}

/// Splits `total_buttons` across `categories` by target percentage.
///
/// Each count is `round(total * percentage)`, bumped by one when odd, so the
/// sum drifts from `total_buttons`; the grid tolerates empty cells.
///
/// ```
/// use coreboard::models::{CategoryKind, CORE_CATEGORIES};
/// use coreboard::services::allocator::allocate;
///
/// let allocations = allocate(20, &CORE_CATEGORIES).unwrap();
/// assert_eq!(allocations.slots_for(CategoryKind::Pronouns), 4);
/// ```
pub fn allocate(total_buttons: usize, categories: &[Category]) -> BoardResult<SlotAllocations> {
    if total_buttons == 0 {
        return Err(BoardError::invalid_input(
            "total buttons must be a positive integer",
        ));
    }

    let allocations = categories
        .iter()
        .map(|category| {
            let pct = category.target_percentage;
            if !pct.is_finite() || !(0.0..=1.0).contains(&pct) {
                return Err(BoardError::invalid_input(format!(
                    "target percentage for {} must be within [0, 1], got {pct}",
                    category.name()
                )));
            }

            let mut slots = (total_buttons as f64 * pct).round() as usize;
            if slots % 2 != 0 {
                slots += 1;
            }

            debug!(category = category.name(), slots, "allocated slots");
            Ok(CategorySlotAllocation {
                category: category.kind,
                slots,
                required: category.required,
            })
        })
        .collect::<BoardResult<Vec<_>>>()?;

    Ok(SlotAllocations(allocations))
}
