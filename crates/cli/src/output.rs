// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of evaluations for `crf eval`.

use crf_core::{Applied, SqlFragment};

use crate::cli::OutputFormat;
use crate::colors;
use crate::definition::Evaluation;
use crate::error::Result;

pub fn render(eval: &Evaluation, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(eval)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(eval)?),
        OutputFormat::Sql => Ok(render_sql(&eval.applied)),
    }
}

/// Labelled lines: label, status, date display (if any), predicate.
pub fn render_text(eval: &Evaluation) -> String {
    let mut lines = vec![format!("label:     {}", eval.label)];
    let status = match &eval.error {
        None => colors::status("valid", true),
        Some(error) => {
            let first = error.lines().next().unwrap_or_default();
            format!("{} ({first})", colors::status("invalid", false))
        }
    };
    lines.push(format!("status:    {status}"));
    for display in &eval.display {
        lines.push(format!("dates:     {display}"));
    }
    let predicate = match &eval.applied {
        Applied::Unfiltered => "(none)".to_string(),
        Applied::MatchNothing => "matches nothing".to_string(),
        Applied::Predicate(predicate) => predicate.to_string(),
    };
    lines.push(format!("predicate: {predicate}"));
    lines.join("\n")
}

/// A WHERE fragment followed by its parameters as a comment.
pub fn render_sql(applied: &Applied) -> String {
    match SqlFragment::from_applied(applied) {
        None => "-- unfiltered".to_string(),
        Some(fragment) if fragment.params.is_empty() => fragment.sql,
        Some(fragment) => {
            let params = fragment
                .params
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}\n-- params: {params}", fragment.sql)
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
