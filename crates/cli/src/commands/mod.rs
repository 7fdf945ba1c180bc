// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod check;
pub mod eval;
pub mod filters;

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use crf_core::{FixedClock, SystemClock};

use crate::cli::FilterArgs;
use crate::config::{Config, FilterConfig};
use crate::definition::{Evaluation, FilterDefinition, DEFAULT_FIELD};
use crate::error::{Error, Result};

/// Accepted `--now` layouts, tried in order.
const NOW_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Build the filter a command evaluates against.
///
/// With `--filter` the named filter is loaded from the config file and the
/// remaining flags override it. Without it, the flags describe the filter.
pub fn definition(config_path: Option<&Path>, args: &FilterArgs) -> Result<FilterDefinition> {
    match &args.filter {
        Some(name) => {
            let (path, config) = Config::discover(config_path)?.ok_or(Error::ConfigNotFound)?;
            tracing::debug!(filter = %name, path = %path.display(), "using configured filter");
            let base = config.filter(name)?.clone();
            FilterDefinition::from_config(Some(name), &args.apply_to(base))
        }
        None => {
            let base = FilterConfig {
                field: DEFAULT_FIELD.to_string(),
                ..FilterConfig::default()
            };
            FilterDefinition::from_config(None, &args.apply_to(base))
        }
    }
}

/// Parse a `--now` value. A bare date means midnight.
pub fn parse_now(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN));
    }
    NOW_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| Error::InvalidNow(value.to_string()))
}

/// Evaluate `expr` with a fixed reference time, or the system clock.
pub fn evaluate(def: &FilterDefinition, expr: &str, now: Option<&str>) -> Result<Evaluation> {
    match now {
        Some(now) => def.evaluate(expr, &FixedClock(parse_now(now)?)),
        None => def.evaluate(expr, &SystemClock),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
