// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
        .invalid(fg(colors::codes::INVALID))
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        styled(colors::header, "Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header}
  {eval}      Evaluate a range argument into a label and predicate
  {check}     Validate a range argument
  {filters}   List filters defined in crf.toml
",
        header = styled(colors::header, "Commands:"),
        eval = styled(colors::literal, "eval"),
        check = styled(colors::literal, "check"),
        filters = styled(colors::literal, "filters"),
    )
}

/// Range syntax summary shown after options in main help.
pub fn syntax() -> String {
    colors::examples(
        "\
Range syntax:
  7                        Exactly 7
  1--5                     From 1 to 5, inclusive
  10--                     10 and up
  --10                     Up to 10
  1--5+10--20              Either range (with --multiple)
  100:250                  Colon works as a separator too
  \"2 weeks ago--now\"       Relative dates (date filters)",
    )
}

fn styled(paint: fn(&str) -> String, text: &str) -> String {
    if colors::should_colorize() {
        paint(text)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
