// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

/// All possible errors that can occur in the crfrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no config file found\n  hint: create crf.toml, set CRF_CONFIG, or pass --config")]
    ConfigNotFound,

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    #[error("filter '{name}': {reason}")]
    FilterConfig { name: String, reason: String },

    #[error("unknown filter: '{name}'\n  hint: configured filters are: {available}")]
    UnknownFilter { name: String, available: String },

    #[error("invalid --now value '{0}'\n  hint: use YYYY-MM-DD, YYYY-MM-DDTHH:MM or YYYY-MM-DDTHH:MM:SS")]
    InvalidNow(String),

    #[error("invalid range argument '{expr}': {reason}")]
    InvalidArgument { expr: String, reason: String },

    #[error(transparent)]
    Range(#[from] crf_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for crfrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
