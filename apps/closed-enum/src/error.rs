//! # Application Errors
//!
//! Errors raised by the binary on top of the core lookup errors.

use closed_enum_core::EnumerationError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum AppError {
    /// A discovery, lookup or comparison failed in the core.
    #[error(transparent)]
    Enumeration(#[from] EnumerationError),

    /// The configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Command input was rejected before reaching the core.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(String),
}
