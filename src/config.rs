//! Configuration management for the application.
//!
//! Configuration is stored as TOML in a platform-specific directory and is
//! passed explicitly into the generation services.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    APP_DIR_NAME, DEFAULT_ARASAAC_URL, DEFAULT_GLOBAL_SYMBOLS_URL, DEFAULT_LANGUAGE,
    DEFAULT_LLM_ENDPOINT, DEFAULT_LLM_MODEL, DEFAULT_TOTAL_BUTTONS, MAX_TOTAL_BUTTONS,
};
use crate::pictograms::SymbolSet;
use crate::services::DedupPolicy;

/// Word-generation service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of an OpenAI-compatible API (e.g., "<https://api.openai.com/v1>")
    pub endpoint: String,
    /// Chat model name
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Sampling temperature in `[0, 2]`
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_LLM_ENDPOINT.to_string(),
            model: DEFAULT_LLM_MODEL.to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            temperature: 0.0,
        }
    }
}

impl LlmConfig {
    /// Reads the API key from the configured environment variable.
    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// Pictogram lookup settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolsConfig {
    /// ARASAAC API base URL
    pub arasaac_url: String,
    /// Global Symbols label search URL
    pub global_symbols_url: String,
    /// Symbol set used for board images
    pub symbol_set: SymbolSet,
    /// Global Symbols symbol-set slug (e.g., "mulberry")
    pub global_symbols_set: Option<String>,
    /// Lookup language (e.g., "en", "spa", "pt-BR")
    pub language: String,
}

impl Default for SymbolsConfig {
    fn default() -> Self {
        Self {
            arasaac_url: DEFAULT_ARASAAC_URL.to_string(),
            global_symbols_url: DEFAULT_GLOBAL_SYMBOLS_URL.to_string(),
            symbol_set: SymbolSet::default(),
            global_symbols_set: None,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Board generation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Button count used when none is requested
    pub default_total_buttons: usize,
    /// Duplicate label handling
    pub dedup: DedupPolicy,
    /// Locale written into board documents
    pub locale: String,
    /// Whether pictograms are looked up for board buttons
    pub fetch_images: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_total_buttons: DEFAULT_TOTAL_BUTTONS,
            dedup: DedupPolicy::default(),
            locale: DEFAULT_LANGUAGE.to_string(),
            fetch_images: true,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/CoreBoard/config.toml`
/// - macOS: `~/Library/Application Support/CoreBoard/config.toml`
/// - Windows: `%APPDATA%\CoreBoard\config.toml`
///
/// Missing sections and fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Word-generation service
    pub llm: LlmConfig,
    /// Pictogram lookup
    pub symbols: SymbolsConfig,
    /// Board defaults
    pub board: BoardConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults when missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .context(format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context(format!(
                "Failed to create config directory: {}",
                dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - service URLs are non-empty http(s) URLs
    /// - `temperature` lies in `[0, 2]`
    /// - `default_total_buttons` is positive and within the supported maximum
    /// - locale and language are set
    pub fn validate(&self) -> Result<()> {
        validate_url("llm.endpoint", &self.llm.endpoint)?;
        validate_url("symbols.arasaac_url", &self.symbols.arasaac_url)?;
        validate_url("symbols.global_symbols_url", &self.symbols.global_symbols_url)?;

        if self.llm.model.trim().is_empty() {
            anyhow::bail!("llm.model must not be empty");
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            anyhow::bail!(
                "llm.temperature must be within [0, 2], got {}",
                self.llm.temperature
            );
        }

        let total = self.board.default_total_buttons;
        if total == 0 || total > MAX_TOTAL_BUTTONS {
            anyhow::bail!(
                "board.default_total_buttons must be within 1..={MAX_TOTAL_BUTTONS}, got {total}"
            );
        }
        if self.board.locale.trim().is_empty() {
            anyhow::bail!("board.locale must not be empty");
        }
        if self.symbols.language.trim().is_empty() {
            anyhow::bail!("symbols.language must not be empty");
        }

        Ok(())
    }
}

fn validate_url(field: &str, value: &str) -> Result<()> {
    let value = value.trim();
    if value.is_empty() {
        anyhow::bail!("{field} must not be empty");
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        anyhow::bail!("{field} must be an http(s) URL, got '{value}'");
    }
    Ok(())
}
