//! CLI command handlers for CoreBoard.
//!
//! This module provides headless, scriptable access to board generation
//! for automation, testing, and CI/CD integration.

pub mod allocate;
pub mod categories;
pub mod common;
pub mod config;
pub mod generate;
pub mod suggest;

// Re-export types used by main.rs and tests
pub use allocate::AllocateArgs;
pub use categories::CategoriesArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
pub use suggest::SuggestArgs;
