//! # closed-enum CLI Module
//!
//! This module implements the CLI interface.
//!
//! ## Available Commands
//!
//! - `kinds` - List registered kinds
//! - `list` - List the names of a kind, in declaration order
//! - `describe` - Show the names of a kind on one line
//! - `resolve` - Resolve a name to its canonical value
//! - `compare` - Compare two values for equality and order
//! - `check` - Validate every registered kind

mod commands;

use crate::config::AppConfig;
use crate::error::AppError;
use clap::{Parser, Subcommand};
use closed_enum_core::Catalog;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// closed-enum - inspect closed enumeration kinds
///
/// Lists the fixed value sets of the registered kinds and resolves names
/// back to canonical values, ignoring case.
#[derive(Parser, Debug)]
#[command(name = "closed-enum")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered kinds
    Kinds,

    /// List the names of a kind
    List {
        /// Kind label (case-insensitive)
        kind: String,
    },

    /// Show the names of a kind joined on one line
    Describe {
        /// Kind label (case-insensitive)
        kind: String,
    },

    /// Resolve a name to its canonical value
    Resolve {
        /// Kind label (case-insensitive)
        kind: String,

        /// Name to resolve (case-insensitive)
        name: String,
    },

    /// Compare two values
    Compare {
        /// Kind of the left value
        kind: String,

        /// Left value name
        left: String,

        /// Right value name
        right: String,

        /// Kind of the right value (defaults to the left kind)
        #[arg(long)]
        right_kind: Option<String>,
    },

    /// Validate every registered kind
    Check,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments and return the rendered output.
pub fn execute(cli: Cli, config: &AppConfig) -> Result<String, AppError> {
    let json_mode = cli.json_mode || config.output.json;
    let catalog = Catalog::builtin()?;

    match cli.command {
        Some(Commands::Kinds) | None => cmd_kinds(&catalog, json_mode),
        Some(Commands::List { kind }) => cmd_list(&catalog, json_mode, &kind),
        Some(Commands::Describe { kind }) => cmd_describe(&catalog, json_mode, &kind),
        Some(Commands::Resolve { kind, name }) => {
            cmd_resolve(&catalog, json_mode, &kind, &name)
        }
        Some(Commands::Compare {
            kind,
            left,
            right,
            right_kind,
        }) => {
            let right_kind = right_kind.as_deref().unwrap_or(&kind);
            cmd_compare(
                &catalog,
                json_mode,
                (kind.as_str(), left.as_str()),
                (right_kind, right.as_str()),
            )
        }
        Some(Commands::Check) => cmd_check(&catalog, json_mode),
    }
}
