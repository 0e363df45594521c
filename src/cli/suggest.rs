//! Topic word suggestion command.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;

use crate::cli::common::{load_config, resolver_for, runtime, to_json, CliError, CliResult};
use crate::constants::DEFAULT_MAX_SUGGESTIONS;
use crate::services::SuggestionService;
use crate::words::{OpenAiWordGenerator, StaticWordGenerator, WordGenerator};

/// Suggest words and pictograms for a topic
#[derive(Debug, Clone, Args)]
pub struct SuggestArgs {
    /// Topic to suggest words for
    #[arg(short, long, value_name = "TOPIC")]
    pub topic: String,

    /// Maximum number of suggestions
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_MAX_SUGGESTIONS)]
    pub max: usize,

    /// Language for words and pictograms (defaults to symbols.language)
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Read suggestions from a JSON word file instead of calling the word service
    #[arg(long, value_name = "FILE")]
    pub words: Option<PathBuf>,

    /// Skip pictogram lookup
    #[arg(long)]
    pub no_images: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl SuggestArgs {
    /// Execute the suggest command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let language = self
            .language
            .clone()
            .unwrap_or_else(|| config.symbols.language.clone());

        let generator: Arc<dyn WordGenerator> = match &self.words {
            Some(path) => Arc::new(
                StaticWordGenerator::from_json_file(path)
                    .map_err(|e| CliError::io(format!("{e:#}")))?,
            ),
            None => Arc::new(OpenAiWordGenerator::from_config(&config.llm)?),
        };
        let fetch_images = config.board.fetch_images && !self.no_images;
        let service = SuggestionService::new(generator, resolver_for(&config, fetch_images)?);

        let suggestions =
            runtime()?.block_on(service.suggest(&self.topic, self.max, &language))?;

        if self.json {
            println!("{}", to_json(&suggestions, false)?);
            return Ok(());
        }

        println!("Suggestions for '{}' ({}):", self.topic.trim(), suggestions.len());
        println!();
        for suggestion in &suggestions {
            let image = suggestion
                .pictogram
                .as_ref()
                .map_or("(no pictogram)", |p| p.url.as_str());
            println!("  {:<20} {}", suggestion.label, image);
        }
        Ok(())
    }
}
