//! # closed-enum
//!
//! Command-line front end for `closed-enum-core`.
//!
//! The binary in `main.rs` is a thin wrapper: it loads configuration,
//! installs logging and hands the parsed arguments to [`cli::execute`].

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
