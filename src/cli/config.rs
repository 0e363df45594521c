//! Configuration management CLI commands.

use std::path::{Path, PathBuf};

use crate::cli::common::{load_config, to_json, CliError, CliResult};
use crate::config::Config;
use crate::constants::{APP_BINARY_NAME, APP_NAME};
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the configuration file path
    Path,
    /// Write a configuration file with default values
    Init(ConfigInitArgs),
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write a default configuration file
#[derive(Args, Debug, Clone)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(config_path),
            ConfigCommand::Path => {
                println!("{}", resolve_path(config_path)?.display());
                Ok(())
            }
            ConfigCommand::Init(args) => args.execute(config_path),
        }
    }
}

fn resolve_path(config_path: Option<&Path>) -> CliResult<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate config directory: {e}"))),
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;

        if self.json {
            println!("{}", to_json(&config, true)?);
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigInitArgs {
    /// Execute init command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let path = resolve_path(config_path)?;
        if path.exists() && !self.force {
            return Err(CliError::validation(format!(
                "Configuration already exists at {} (use --force to overwrite)",
                path.display()
            )));
        }

        Config::new()
            .save_to(&path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration written to {}", path.display());
        println!("Run '{APP_BINARY_NAME} config show' to review it.");
        Ok(())
    }
}

fn output_human_readable(config: &Config) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();
    println!("Word generation:");
    println!("  Endpoint:      {}", config.llm.endpoint);
    println!("  Model:         {}", config.llm.model);
    println!("  API key env:   {}", config.llm.api_key_env);
    println!("  Temperature:   {}", config.llm.temperature);
    println!();
    println!("Symbols:");
    println!("  Symbol set:    {}", config.symbols.symbol_set);
    println!("  ARASAAC:       {}", config.symbols.arasaac_url);
    println!("  Global Symbols: {}", config.symbols.global_symbols_url);
    if let Some(set) = &config.symbols.global_symbols_set {
        println!("  Set filter:    {set}");
    }
    println!("  Language:      {}", config.symbols.language);
    println!();
    println!("Board:");
    println!("  Buttons:       {}", config.board.default_total_buttons);
    println!("  Dedup:         {}", config.board.dedup);
    println!("  Locale:        {}", config.board.locale);
    println!("  Fetch images:  {}", config.board.fetch_images);
}
