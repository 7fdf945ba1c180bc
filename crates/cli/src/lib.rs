// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! crfrs - Contextual range filters from the command line.
//!
//! This crate provides the `crf` CLI on top of [`crf_core`]: named filters
//! loaded from `crf.toml`, ad hoc filters described by flags, and text, JSON
//! and SQL renderings of an evaluated range argument.
//!
//! # Main Components
//!
//! - [`Config`] - Named filters from `crf.toml`
//! - [`FilterDefinition`] - A checked filter, ready to evaluate arguments
//! - [`Evaluation`] - Label, validity, intervals and predicate for one argument
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use crfrs::{Config, FilterDefinition};
//! use crf_core::SystemClock;
//!
//! let config = Config::load(Path::new("crf.toml"))?;
//! let def = FilterDefinition::from_config(Some("price"), config.filter("price")?)?;
//! let eval = def.evaluate("10--50", &SystemClock)?;
//! println!("{}", eval.label);
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod config;
pub mod definition;
pub mod env;
pub mod error;
pub mod help;
pub mod output;

pub use cli::{Cli, Command, FilterArgs, ListFormat, OutputFormat};
pub use config::{Config, FilterConfig};
pub use definition::{Evaluation, FilterDefinition};
pub use error::{Error, Result};

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();
    match cli.command {
        Command::Eval {
            expr,
            filter,
            now,
            output,
        } => commands::eval::run(config, &expr, &filter, now.as_deref(), output),
        Command::Check { expr, filter, now } => {
            commands::check::run(config, &expr, &filter, now.as_deref())
        }
        Command::Filters { output } => commands::filters::run(config, output),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
