// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crf_core::{DomainKind, InvalidPolicy};
use serde::Serialize;

use crate::cli::ListFormat;
use crate::colors;
use crate::config::{Config, FilterConfig};
use crate::definition::FilterDefinition;
use crate::error::{Error, Result};

/// One configured filter and whether its settings check out.
#[derive(Debug, Serialize)]
pub(crate) struct FilterSummary {
    name: String,
    field: String,
    domain: DomainKind,
    allow_multiple: bool,
    negate: bool,
    on_invalid: InvalidPolicy,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl FilterSummary {
    fn new(name: &str, config: &FilterConfig) -> Self {
        let error = FilterDefinition::from_config(Some(name), config)
            .err()
            .map(|e| e.to_string());
        FilterSummary {
            name: name.to_string(),
            field: config.field.clone(),
            domain: config.domain,
            allow_multiple: config.allow_multiple,
            negate: config.negate,
            on_invalid: config.on_invalid,
            valid: error.is_none(),
            error,
        }
    }
}

pub fn run(config: Option<&Path>, format: ListFormat) -> Result<()> {
    let (path, config) = Config::discover(config)?.ok_or(Error::ConfigNotFound)?;
    tracing::debug!(path = %path.display(), "listing filters");
    let summaries = summarize(&config);
    match format {
        ListFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        ListFormat::Text => {
            let text = render_text(&summaries);
            if !text.is_empty() {
                println!("{text}");
            }
        }
    }
    Ok(())
}

pub(crate) fn summarize(config: &Config) -> Vec<FilterSummary> {
    config
        .filters
        .iter()
        .map(|(name, filter)| FilterSummary::new(name, filter))
        .collect()
}

/// One line per filter: name, domain, field, then switches.
pub(crate) fn render_text(summaries: &[FilterSummary]) -> String {
    let width = summaries.iter().map(|s| s.name.len()).max().unwrap_or(0);
    summaries
        .iter()
        .map(|s| {
            let domain = s.domain.to_string();
            let mut line = format!("{:width$}  {domain:<7}  {}", s.name, s.field);
            if s.allow_multiple {
                line.push_str(" [multiple]");
            }
            if s.negate {
                line.push_str(" [exclude]");
            }
            if s.on_invalid != InvalidPolicy::default() {
                line.push_str(&format!(" [on-invalid: {}]", s.on_invalid));
            }
            if let Some(error) = &s.error {
                let first = error.lines().next().unwrap_or_default();
                line.push_str(&format!("  {}", colors::status(first, false)));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "filters_tests.rs"]
mod tests;
