// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for crf-core operations.

use thiserror::Error;

/// All possible errors that can occur while parsing or compiling ranges.
///
/// Invalid user input is never a panic: it surfaces as [`Error::InvalidInterval`]
/// or [`Error::UnresolvableDate`] and marks the whole range set invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid range '{token}': {reason}")]
    InvalidInterval { token: String, reason: String },

    #[error("cannot resolve date '{text}' with format '{format}'\n  hint: use a relative phrase like 'yesterday' or '2 weeks ago', or a value matching the format")]
    UnresolvableDate { text: String, format: String },

    #[error("invalid date format '{format}': {reason}")]
    InvalidFormat { format: String, reason: String },

    #[error("unknown domain: '{0}'\n  hint: valid domains are: numeric, string, date")]
    UnknownDomain(String),

    #[error("unknown granularity: '{0}'\n  hint: valid granularities are: fulldate, year, year_month, month, week, day")]
    UnknownGranularity(String),

    #[error("unknown invalid-input policy: '{0}'\n  hint: valid policies are: match-nothing, match-all")]
    UnknownPolicy(String),

    #[error("invalid field reference: '{0}'\n  hint: use 'column' or 'table.column'")]
    InvalidField(String),

    #[error("cannot compile range set: {0}")]
    NotCompilable(&'static str),
}

impl Error {
    /// Shorthand for an [`Error::InvalidInterval`].
    pub(crate) fn invalid(token: &str, reason: impl Into<String>) -> Self {
        Error::InvalidInterval {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

/// A specialized Result type for crf-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
