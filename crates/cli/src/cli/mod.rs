// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};

pub use args::FilterArgs;

/// Output format for `eval`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    /// Parameterized SQL fragment
    Sql,
}

/// Output format for listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "crf")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Contextual range filters: turn range arguments into query predicates")]
#[command(
    long_about = "Contextual range filters: turn range arguments into query predicates.\n\n\
    A range argument like 1--5+10--20, a--f or \"2 weeks ago--now\" becomes a label \
    and a boundary-condition predicate over one field."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::syntax())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Config file [default: $CRF_CONFIG or ./crf.toml]
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate a range argument into a label and predicate
    #[command(after_help = colors::examples("\
Examples:
  crf eval 1--5+10-- -d numeric -m           Two numeric ranges
  crf eval a--f --domain string -x           Exclude a string range
  crf eval \"2 weeks ago--now\" -d date        Relative date range
  crf eval 20240101-- -d date --now 2024-06-01
  crf eval 5--10 -f price -o sql             Configured filter as SQL
  crf eval -d numeric -- --10                Leading '--' needs a separator"))]
    Eval {
        /// Range argument, e.g. 1--5, 10--, a--f+q--y
        #[arg(allow_hyphen_values = true)]
        expr: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Reference time for relative dates [default: now]
        #[arg(long, value_name = "DATETIME")]
        now: Option<String>,

        /// Output format (text, json, sql)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Validate a range argument, failing if it is invalid
    #[command(after_help = colors::examples("\
Examples:
  crf check 1--5 -d numeric          Succeeds
  crf check 9--1 -d numeric          Fails: bounds out of order
  crf check someday -f created       Fails: not a date"))]
    Check {
        /// Range argument
        #[arg(allow_hyphen_values = true)]
        expr: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Reference time for relative dates [default: now]
        #[arg(long, value_name = "DATETIME")]
        now: Option<String>,
    },

    /// List filters defined in crf.toml
    Filters {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: ListFormat,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
