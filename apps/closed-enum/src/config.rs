//! # Configuration
//!
//! Optional TOML configuration for the binary.
//!
//! ```toml
//! [output]
//! json = false
//! quiet = false
//!
//! [logging]
//! format = "text"   # or "json"
//! filter = "closed_enum=info"
//! ```
//!
//! Precedence, lowest to highest: built-in defaults, config file,
//! environment (`RUST_LOG`, `CLOSED_ENUM_LOG_FORMAT`), command-line flags
//! (`--verbose`, `--quiet`, `--json-mode`).

use crate::error::AppError;
use closed_enum_core::{ClosedEnumeration, closed_enumeration};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "closed-enum.toml";

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "CLOSED_ENUM_LOG_FORMAT";

/// Filter used when neither `RUST_LOG` nor the config file sets one.
pub const DEFAULT_LOG_FILTER: &str = "closed_enum=info,closed_enum_core=warn";

/// Filter used by `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "closed_enum=debug,closed_enum_core=debug";

/// Maximum accepted config file size (64 KB).
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

closed_enumeration! {
    /// Log output format.
    #[derive(Copy)]
    pub struct LogFormat;
    values {
        TEXT = "text",
        JSON = "json",
    }
}

impl Default for LogFormat {
    fn default() -> Self {
        Self::TEXT
    }
}

// =============================================================================
// CONFIG STRUCTURE
// =============================================================================

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// `[output]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Render command output as JSON.
    pub json: bool,
    /// Suppress the banner.
    pub quiet: bool,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

// =============================================================================
// LOADING
// =============================================================================

impl AppConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, AppError> {
        toml::from_str(text).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load the configuration.
    ///
    /// - `Some(path)`: the file must exist and parse.
    /// - `None`: `closed-enum.toml` in the working directory is used if it
    ///   exists, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => Self::load_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn load_file(path: &Path) -> Result<Self, AppError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            AppError::Io(format!("Cannot read config '{}': {}", path.display(), e))
        })?;

        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(AppError::Config(format!(
                "Config file size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            AppError::Io(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Log filter directives after applying `RUST_LOG` and `--verbose`.
    ///
    /// An empty or blank `RUST_LOG` counts as unset.
    pub fn log_filter<'a>(&'a self, verbose: bool, env_value: Option<&'a str>) -> &'a str {
        if verbose {
            return VERBOSE_LOG_FILTER;
        }
        env_value
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(self.logging.filter.as_str())
    }

    /// Log format after applying the `CLOSED_ENUM_LOG_FORMAT` override.
    pub fn log_format(&self, env_value: Option<&str>) -> Result<LogFormat, AppError> {
        match env_value {
            Some(value) => LogFormat::from_name(value.trim())
                .map_err(|e| AppError::Config(format!("{}: {}", LOG_FORMAT_ENV, e))),
            None => Ok(self.logging.format),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
