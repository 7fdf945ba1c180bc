// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Date format strings.
//!
//! Argument definitions describe dates with single-letter format codes
//! (`Ymd`, `Ym`, `F j, Y`, ...). A [`DateFormat`] translates those codes into
//! chrono strftime items once and then formats, validates, and orders values
//! with them.
//!
//! # Codes
//!
//! - `Y` / `y` - 4-digit / 2-digit year, `o` - ISO week-numbering year
//! - `m` / `n` - month with / without leading zero
//! - `d` / `j` - day of month with / without leading zero
//! - `F` / `M` - full / abbreviated month name
//! - `W` - ISO week number, `w` - weekday (Sunday = 0), `N` - ISO weekday
//! - `D` / `l` - abbreviated / full weekday name
//! - `H` / `G` - 24-hour with / without leading zero
//! - `h` / `g` - 12-hour with / without leading zero, `A` / `a` - AM/PM
//! - `i` - minutes, `s` - seconds, `U` - Unix timestamp
//! - `\x` - literal `x`
//!
//! Every other character is copied literally.

use std::cmp::Ordering;
use std::fmt;

use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::error::{Error, Result};

/// A date format, kept in both its source and strftime spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    source: String,
    strftime: String,
    /// Every field survives `to_datetime`, so values must format back to
    /// themselves. Weekday and timestamp fields do not.
    round_trips: bool,
}

impl DateFormat {
    /// Translate a format string written with single-letter codes.
    pub fn new(source: &str) -> Result<Self> {
        if source.is_empty() {
            return Err(Error::InvalidFormat {
                format: String::new(),
                reason: "format is empty".to_string(),
            });
        }

        let mut strftime = String::with_capacity(source.len() * 3);
        let mut round_trips = true;
        let mut chars = source.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                let Some(literal) = chars.next() else {
                    return Err(Error::InvalidFormat {
                        format: source.to_string(),
                        reason: "trailing escape character".to_string(),
                    });
                };
                push_literal(&mut strftime, literal);
                continue;
            }
            match strftime_spec(c) {
                Some(spec) => {
                    round_trips &= !matches!(c, 'w' | 'N' | 'D' | 'l' | 'U');
                    strftime.push_str(spec);
                }
                None => push_literal(&mut strftime, c),
            }
        }

        Ok(DateFormat {
            source: source.to_string(),
            strftime,
            round_trips,
        })
    }

    /// The format as it was written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The equivalent chrono strftime string.
    pub fn strftime(&self) -> &str {
        &self.strftime
    }

    /// Render an instant with this format.
    pub fn format(&self, instant: &NaiveDateTime) -> String {
        instant.format(&self.strftime).to_string()
    }

    /// Returns true if `text` is a complete value in this format.
    ///
    /// The fields must name a real date, and the value must be written the
    /// way this format writes it: `20240230` and `2024011` are not `Ymd`
    /// dates. Formats that do not name a full date (`Y`, `Ym`, `W`) only
    /// check the fields they contain.
    pub fn accepts(&self, text: &str) -> bool {
        let Some(instant) = self.to_datetime(text) else {
            return false;
        };
        !self.round_trips || self.format(&instant).eq_ignore_ascii_case(text)
    }

    /// Order two values written in this format.
    ///
    /// Returns `None` when either value does not parse.
    pub fn compare(&self, a: &str, b: &str) -> Option<Ordering> {
        let a = SortKey::from(&self.parsed(a)?);
        let b = SortKey::from(&self.parsed(b)?);
        Some(a.cmp(&b))
    }

    /// Interpret `text` as an instant, filling fields the format lacks with
    /// the start of their period (January, the 1st, midnight). A missing year
    /// falls back to 2000.
    pub fn to_datetime(&self, text: &str) -> Option<NaiveDateTime> {
        let key = SortKey::from(&self.parsed(text)?);
        let year = key.year.unwrap_or(2000);
        let date = match key.isoweek {
            Some(week) if key.month.is_none() && key.day.is_none() => {
                NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).or_else(|| {
                    // Week 53 alone still names a week; 2004 has one.
                    key.year
                        .is_none()
                        .then(|| NaiveDate::from_isoywd_opt(2004, week, Weekday::Mon))
                        .flatten()
                })?
            }
            _ => NaiveDate::from_ymd_opt(year, key.month.unwrap_or(1), key.day.unwrap_or(1))?,
        };
        let time = NaiveTime::from_hms_opt(
            key.hour.unwrap_or(0),
            key.minute.unwrap_or(0),
            key.second.unwrap_or(0),
        )?;
        Some(date.and_time(time))
    }

    fn parsed(&self, text: &str) -> Option<Parsed> {
        if text.is_empty() {
            return None;
        }
        let mut parsed = Parsed::new();
        parse(&mut parsed, text, StrftimeItems::new(&self.strftime)).ok()?;
        Some(parsed)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Map one format code to its strftime spelling.
fn strftime_spec(code: char) -> Option<&'static str> {
    let spec = match code {
        'Y' => "%Y",
        'y' => "%y",
        'o' => "%G",
        'm' => "%m",
        'n' => "%-m",
        'd' => "%d",
        'j' => "%-d",
        'F' => "%B",
        'M' => "%b",
        'W' => "%V",
        'w' => "%w",
        'N' => "%u",
        'D' => "%a",
        'l' => "%A",
        'H' => "%H",
        'G' => "%-H",
        'h' => "%I",
        'g' => "%-I",
        'A' => "%p",
        'a' => "%P",
        'i' => "%M",
        's' => "%S",
        'U' => "%s",
        _ => return None,
    };
    Some(spec)
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

/// Field-by-field ordering key for partially specified dates.
///
/// Fields compare most significant first; a missing field sorts before a
/// present one.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct SortKey {
    year: Option<i32>,
    month: Option<u32>,
    isoweek: Option<u32>,
    day: Option<u32>,
    weekday: Option<u32>,
    hour: Option<u32>,
    minute: Option<u32>,
    second: Option<u32>,
}

impl From<&Parsed> for SortKey {
    fn from(p: &Parsed) -> Self {
        let year = p.year.or_else(|| match (p.year_div_100, p.year_mod_100) {
            (Some(div), Some(rem)) => Some(div * 100 + rem),
            (None, Some(rem)) => Some(if rem < 70 { 2000 + rem } else { 1900 + rem }),
            _ => p.isoyear,
        });
        let hour = match (p.hour_div_12, p.hour_mod_12) {
            (Some(div), Some(rem)) => Some(div * 12 + rem),
            (None, Some(rem)) => Some(rem),
            _ => None,
        };
        SortKey {
            year,
            month: p.month,
            isoweek: p.isoweek,
            day: p.day,
            weekday: p.weekday.map(|w| w.num_days_from_sunday()),
            hour,
            minute: p.minute,
            second: p.second,
        }
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
