// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help and evaluation output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders, hints and defaults: medium grey
    pub const CONTEXT: u8 = 245;
    /// A valid range argument: soft green
    pub const VALID: u8 = 114;
    /// An invalid range argument: soft red
    pub const INVALID: u8 = 174;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{RESET}")
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Color a validity marker, when colors are enabled.
pub fn status(text: &str, valid: bool) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    paint(if valid { codes::VALID } else { codes::INVALID }, text)
}

/// Colorize an examples help block, when colors are enabled.
///
/// Lines ending in `:` are headers. Other lines split into a command and a
/// description at the first run of two or more spaces:
///
/// ```text
/// Examples:
///   crf eval 1--5 --domain numeric    Evaluate a numeric range
/// ```
pub fn examples(text: &str) -> String {
    if should_colorize() {
        paint_examples(text)
    } else {
        text.to_string()
    }
}

fn paint_examples(text: &str) -> String {
    let mut lines = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            lines.push(format!("{indent}{}", header(trimmed)));
        } else if let Some(end) = find_description_start(trimmed) {
            let (cmd, desc) = trimmed.split_at(end);
            lines.push(format!("{indent}{}{desc}", colorize_command(cmd)));
        } else {
            lines.push(line.to_string());
        }
    }
    lines.join("\n")
}

/// Colorize a command line: quoted arguments and `<placeholders>` as
/// context, everything else as literal.
pub fn colorize_command(cmd: &str) -> String {
    let mut out = String::with_capacity(cmd.len() + 64);
    let mut rest = cmd;

    while let Some(start) = rest.find(['"', '<']) {
        let close = if rest[start..].starts_with('"') { '"' } else { '>' };
        let end = rest[start + 1..]
            .find(close)
            .map_or(rest.len(), |i| start + i + 2);
        if start > 0 {
            out.push_str(&literal(&rest[..start]));
        }
        out.push_str(&context(&rest[start..end]));
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        out.push_str(&literal(rest));
    }
    out
}

/// Find where the description starts (at 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let mut run_start = None;
    for (i, c) in line.char_indices() {
        match (c, run_start) {
            (' ', None) => run_start = Some(i),
            (' ', Some(_)) => {}
            (_, Some(start)) if i - start >= 2 => return Some(start),
            (_, Some(_)) => run_start = None,
            _ => {}
        }
    }
    None
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
