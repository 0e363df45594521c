//! Core board generation command.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;

use crate::cli::common::{load_config, resolver_for, runtime, to_json, CliError, CliResult};
use crate::constants::MAX_TOTAL_BUTTONS;
use crate::export::render_board;
use crate::pictograms::SymbolSet;
use crate::services::{
    CoreBoardRequest, CoreBoardService, DedupPolicy, GeneratedBoard, GenerationSettings,
};
use crate::words::{OpenAiWordGenerator, StaticWordGenerator, WordGenerator};

/// Generate a core vocabulary board for a topic
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Board topic (e.g., "going to the zoo")
    #[arg(short, long, value_name = "TOPIC")]
    pub topic: String,

    /// Number of buttons (defaults to board.default_total_buttons)
    #[arg(short, long, value_name = "N")]
    pub buttons: Option<usize>,

    /// Read dynamic words from a JSON file instead of calling the word service
    #[arg(long, value_name = "FILE")]
    pub words: Option<PathBuf>,

    /// Skip pictogram lookup
    #[arg(long)]
    pub no_images: bool,

    /// Symbol set for pictograms (arasaac or global-symbols)
    #[arg(long, value_name = "SET")]
    pub symbol_set: Option<SymbolSet>,

    /// Pictogram lookup language
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Duplicate label policy (keep, within-category, across-board)
    #[arg(long, value_name = "POLICY")]
    pub dedup: Option<DedupPolicy>,

    /// Write the board to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the colored grid to stderr
    #[arg(long)]
    pub visualize: bool,

    /// Include allocations and layout report in the output
    #[arg(long)]
    pub report: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let mut config = load_config(config_path)?;
        if let Some(symbol_set) = self.symbol_set {
            config.symbols.symbol_set = symbol_set;
        }
        if let Some(language) = &self.language {
            config.symbols.language.clone_from(language);
        }
        if let Some(dedup) = self.dedup {
            config.board.dedup = dedup;
        }
        if self.no_images {
            config.board.fetch_images = false;
        }

        let total_buttons = self.buttons.unwrap_or(config.board.default_total_buttons);
        if total_buttons == 0 || total_buttons > MAX_TOTAL_BUTTONS {
            return Err(CliError::validation(format!(
                "--buttons must be within 1..={MAX_TOTAL_BUTTONS}, got {total_buttons}"
            )));
        }

        let generator: Arc<dyn WordGenerator> = match &self.words {
            Some(path) => Arc::new(
                StaticWordGenerator::from_json_file(path)
                    .map_err(|e| CliError::io(format!("{e:#}")))?,
            ),
            None => Arc::new(OpenAiWordGenerator::from_config(&config.llm)?),
        };
        let resolver = resolver_for(&config, config.board.fetch_images)?;
        let service = CoreBoardService::new(
            GenerationSettings::from_config(&config),
            generator,
            resolver,
        );

        let request = CoreBoardRequest::new(self.topic.clone(), total_buttons);
        let board = runtime()?.block_on(service.generate(&request))?;

        if self.visualize {
            eprintln!("{}", render_board(&board.document, true));
        }

        let json = if self.report {
            to_json(&board, true)?
        } else {
            to_json(&board.document, true)?
        };
        self.write_output(&json, &board)
    }

    fn write_output(&self, json: &str, board: &GeneratedBoard) -> CliResult<()> {
        match &self.output {
            Some(path) => {
                fs::write(path, json).map_err(|e| {
                    CliError::io(format!("Failed to write {}: {e}", path.display()))
                })?;
                eprintln!(
                    "Board '{}' written to {} ({} buttons, {} placed)",
                    board.document.name,
                    path.display(),
                    board.document.buttons.len(),
                    board.report.placed()
                );
            }
            None => println!("{json}"),
        }
        Ok(())
    }
}
