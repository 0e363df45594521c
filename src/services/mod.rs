//! Service layer for board generation.
//!
//! The pure core (allocation, combination, layout, assembly) lives beside
//! the async services that drive the word generator and pictogram resolver.

pub mod allocator;
pub mod assembler;
pub mod combiner;
pub mod core_board;
pub mod layout_engine;
pub mod suggestions;

// Re-export commonly used types and functions
pub use allocator::{allocate, CategorySlotAllocation, SlotAllocations};
pub use assembler::{board_id, BoardAssembler};
pub use combiner::{combine, DedupPolicy};
pub use core_board::{CoreBoardRequest, CoreBoardService, GeneratedBoard, GenerationSettings};
pub use layout_engine::{layout, LayoutReport, RegionTrace};
pub use suggestions::{Suggestion, SuggestionService};
