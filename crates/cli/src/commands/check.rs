// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::cli::FilterArgs;
use crate::colors;
use crate::definition::Evaluation;
use crate::error::{Error, Result};

use super::{definition, evaluate};

pub fn run(
    config: Option<&Path>,
    expr: &str,
    filter: &FilterArgs,
    now: Option<&str>,
) -> Result<()> {
    let def = definition(config, filter)?;
    let eval = evaluate(&def, expr, now)?;
    let label = verdict(eval)?;
    println!("{} {label}", colors::status("ok:", true));
    Ok(())
}

/// The label of a valid evaluation, or why it is invalid.
pub(crate) fn verdict(eval: Evaluation) -> Result<String> {
    if eval.valid {
        return Ok(eval.label);
    }
    Err(Error::InvalidArgument {
        expr: eval.expression,
        reason: eval.error.unwrap_or_else(|| "invalid input".to_string()),
    })
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
