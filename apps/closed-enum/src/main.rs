//! # closed-enum
//!
//! The main binary for inspecting closed enumeration kinds.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │          apps/closed-enum (THE BINARY)        │
//! │                                               │
//! │  ┌─────────────┐         ┌────────────────┐   │
//! │  │   CLI       │         │  Config (TOML) │   │
//! │  │  (clap)     │         │  + tracing     │   │
//! │  └──────┬──────┘         └───────┬────────┘   │
//! │         └───────────┬────────────┘            │
//! │                     ▼                         │
//! │            ┌──────────────────┐               │
//! │            │ closed-enum-core │               │
//! │            │   (THE LOGIC)    │               │
//! │            └──────────────────┘               │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! closed-enum kinds
//! closed-enum list weekday
//! closed-enum resolve frequency weekly
//! closed-enum compare weekday mo fr
//! closed-enum --json-mode check
//! ```

use clap::Parser;
use closed_enum::cli::{self, Cli};
use closed_enum::config::{AppConfig, LOG_FORMAT_ENV, LogFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let env_format = std::env::var(LOG_FORMAT_ENV).ok();
    let log_format = match config.log_format(env_format.as_deref()) {
        Ok(format) => format,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = config.log_filter(cli.verbose, rust_log.as_deref());
    let filter = EnvFilter::try_new(directives)
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));

    if log_format == LogFormat::JSON {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let json_mode = cli.json_mode || config.output.json;
    if !(cli.quiet || config.output.quiet || json_mode) {
        print_banner();
    }

    match cli::execute(cli, &config) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            tracing::error!("Error: {}", e);
            // The log filter may hide the line above; stderr always gets it.
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print the startup banner to stderr so command output stays clean.
fn print_banner() {
    eprintln!(
        r#"
  closed-enum v{}

  Closed • Named • Case-insensitive
"#,
        env!("CARGO_PKG_VERSION")
    );
}
