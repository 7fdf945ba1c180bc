// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter configuration.
//!
//! Named range filters live in `crf.toml`:
//!
//! ```toml
//! [filters.price]
//! field = "node.price"
//! domain = "numeric"
//! allow_multiple = true
//! invalid_label = "Bad price"
//!
//! [filters.created]
//! field = "node.created"
//! domain = "date"
//! granularity = "year_month"
//! ```
//!
//! The file is found through `--config`, then `CRF_CONFIG`, then the working
//! directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crf_core::{DomainKind, Granularity, InvalidPolicy};
use serde::{Deserialize, Serialize};

use crate::env;
use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "crf.toml";

/// Contents of `crf.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub filters: BTreeMap<String, FilterConfig>,
}

/// One range filter: which field it narrows and how its argument is read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Column the filter applies to, as `column` or `table.column`.
    pub field: String,
    #[serde(default)]
    pub domain: DomainKind,
    /// Accept several ranges joined with `+` or spaces.
    #[serde(default)]
    pub allow_multiple: bool,
    /// Exclude values in the ranges instead of selecting them.
    #[serde(default)]
    pub negate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_label: Option<String>,
    #[serde(default)]
    pub on_invalid: InvalidPolicy,

    // Date filters only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granularity: Option<Granularity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_format: Option<String>,
    /// Defaults to enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_dates: Option<bool>,

    // String filters only.
    #[serde(default)]
    pub transform_dash: bool,
}

impl Config {
    /// Loads configuration from a `crf.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string().trim_end().to_string(),
        })?;
        tracing::debug!(path = %path.display(), filters = config.filters.len(), "loaded config");
        Ok(config)
    }

    /// Find and load the config file, if there is one.
    ///
    /// An explicit path must exist. Without one, `CRF_CONFIG` is used, then
    /// `crf.toml` in the working directory.
    pub fn discover(explicit: Option<&Path>) -> Result<Option<(PathBuf, Self)>> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => locate()?,
        };
        path.map(|path| Config::load(&path).map(|config| (path, config)))
            .transpose()
    }

    /// Look up a filter by name.
    pub fn filter(&self, name: &str) -> Result<&FilterConfig> {
        self.filters.get(name).ok_or_else(|| Error::UnknownFilter {
            name: name.to_string(),
            available: self.names(),
        })
    }

    /// Comma-separated filter names, for messages.
    pub fn names(&self) -> String {
        if self.filters.is_empty() {
            return "(none)".to_string();
        }
        self.filters.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}

fn locate() -> Result<Option<PathBuf>> {
    if let Some(path) = env::config_path() {
        return Ok(Some(path));
    }
    let local = std::env::current_dir()?.join(CONFIG_FILE_NAME);
    Ok(local.is_file().then_some(local))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
