//! CoreBoard Library
//!
//! Generates core vocabulary boards for augmentative and alternative
//! communication (AAC). A board request for a topic and a button count is
//! split into per-category slots, filled with fixed and generated words,
//! laid out on a grid by linguistic category and written as an Open Board
//! Format document.
//!
//! ```no_run
//! use std::sync::Arc;
//! use coreboard::config::Config;
//! use coreboard::pictograms::NoopResolver;
//! use coreboard::services::{CoreBoardRequest, CoreBoardService, GenerationSettings};
//! use coreboard::words::OpenAiWordGenerator;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let service = CoreBoardService::new(
//!     GenerationSettings::from_config(&config),
//!     Arc::new(OpenAiWordGenerator::from_config(&config.llm)?),
//!     Arc::new(NoopResolver),
//! );
//! let board = service.generate(&CoreBoardRequest::new("the zoo", 42)).await?;
//! println!("{}", serde_json::to_string_pretty(&board.document)?);
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod models;
pub mod pictograms;
pub mod services;
pub mod words;

#[cfg(feature = "web")]
pub mod web;

pub use error::{BoardError, BoardResult};
