// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::cli::{FilterArgs, OutputFormat};
use crate::error::Result;
use crate::output;

use super::{definition, evaluate};

/// Print the label and predicate for `expr`.
///
/// An invalid argument is not an error here; the output reports it.
pub fn run(
    config: Option<&Path>,
    expr: &str,
    filter: &FilterArgs,
    now: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let def = definition(config, filter)?;
    let eval = evaluate(&def, expr, now)?;
    println!("{}", output::render(&eval, format)?);
    Ok(())
}
