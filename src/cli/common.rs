//! Shared CLI plumbing: error type, exit codes and output helpers.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::config::Config;
use crate::error::BoardError;
use crate::pictograms::{resolver_from_config, NoopResolver, PictogramResolver};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Invalid arguments or input
    Validation = 1,
    /// File system or serialization failure
    Io = 2,
    /// Word generation or another remote service failed
    Upstream = 3,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should end with
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid arguments or input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// File system or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Remote service failure.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Upstream,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<BoardError> for CliError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::InvalidInput(_) => Self::validation(err.to_string()),
            BoardError::UpstreamGeneration { .. } | BoardError::Pictogram(_) => {
                Self::upstream(err.to_string())
            }
            BoardError::Config(_) => Self::io(err.to_string()),
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads configuration from `path`, or the default location.
pub fn load_config(path: Option<&Path>) -> CliResult<Config> {
    let loaded = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    loaded.map_err(|e| CliError::io(format!("Failed to load config: {e:#}")))
}

/// Resolver for the configured symbol set, or none when images are off.
pub fn resolver_for(config: &Config, fetch_images: bool) -> CliResult<Arc<dyn PictogramResolver>> {
    if fetch_images {
        Ok(resolver_from_config(&config.symbols)?)
    } else {
        Ok(Arc::new(NoopResolver))
    }
}

/// Serializes `value` as JSON, pretty or compact.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))
}

/// Builds the async runtime used by networked commands.
pub fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::io(format!("Failed to start async runtime: {e}")))
}
