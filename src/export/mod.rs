//! Human-readable renderings of generated boards.

pub mod visualizer;

pub use visualizer::render_board;
