//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the default service endpoints.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "CoreBoard";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "coreboard";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "CoreBoard";

/// Default OpenAI-compatible API base URL.
pub const DEFAULT_LLM_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default chat model.
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";

/// Default ARASAAC pictogram API.
pub const DEFAULT_ARASAAC_URL: &str = "https://api.arasaac.org/api/pictograms";

/// Static host for ARASAAC pictogram images.
pub const ARASAAC_STATIC_URL: &str = "https://static.arasaac.org/pictograms";

/// Default Global Symbols label search API.
pub const DEFAULT_GLOBAL_SYMBOLS_URL: &str = "https://globalsymbols.com/api/v1/labels/search/";

/// Default language for word generation and pictogram lookup.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default number of buttons on a generated board.
pub const DEFAULT_TOTAL_BUTTONS: usize = 42;

/// Largest board the generator accepts.
pub const MAX_TOTAL_BUTTONS: usize = 400;

/// Default number of topic word suggestions.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;
