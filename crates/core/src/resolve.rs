// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution of relative date phrases.
//!
//! Date bounds may be written relative to the evaluation time, for example
//! `2 weeks ago--yesterday` or `-1 month--now`. Resolution turns each such
//! phrase into an absolute value in the domain's parse format.
//!
//! # Phrases
//!
//! - `now`, `today`, `midnight`, `noon`, `yesterday`, `tomorrow`
//! - `N unit[s] ago`, `+N unit[s]`, `-N unit[s]`, `N unit[s]`
//! - `last unit`, `next unit`, `this unit`
//!
//! Terms combine left to right (`yesterday noon`, `1 year 2 months ago`).
//! `ago` negates every offset before it. Units are `sec`/`second`,
//! `min`/`minute`, `hour`, `day`, `week`, `fortnight`, `month` and `year`.
//! Month and year offsets are calendar offsets, clamped to the end of the
//! month.

use chrono::{Duration, Local, Months, NaiveDateTime, NaiveTime};

use crate::error::{Error, Result};
use crate::format::DateFormat;
use crate::interval::Bound;

/// Source of the reference time for relative dates.
///
/// This allows injecting a fixed clock for testing.
pub trait Clock: Send + Sync {
    /// The current local time.
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the system's local time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (*self).now()
    }
}

/// Resolve both bounds of an interval against `reference`.
///
/// Closed bounds that read as relative phrases are replaced with the
/// resolved instant in `format`. Other closed bounds must already be in
/// `format`. Open bounds pass through.
///
/// # Errors
///
/// Returns [`Error::UnresolvableDate`] for a bound that is neither a relative
/// phrase nor a value in `format`.
pub fn resolve(
    low: &Bound,
    high: &Bound,
    format: &DateFormat,
    reference: NaiveDateTime,
) -> Result<(Bound, Bound)> {
    Ok((
        resolve_bound(low, format, reference)?,
        resolve_bound(high, format, reference)?,
    ))
}

fn resolve_bound(bound: &Bound, format: &DateFormat, reference: NaiveDateTime) -> Result<Bound> {
    let Some(text) = bound.value() else {
        return Ok(Bound::Open);
    };

    if let Some(instant) = relative_instant(text, reference) {
        let absolute = format.format(&instant);
        tracing::debug!(phrase = text, resolved = %absolute, "resolved relative date");
        return Ok(Bound::Closed(absolute));
    }

    if format.accepts(text) {
        return Ok(bound.clone());
    }

    Err(Error::UnresolvableDate {
        text: text.to_string(),
        format: format.to_string(),
    })
}

/// A term of a relative phrase.
#[derive(Debug, Clone, PartialEq)]
enum Term<'a> {
    Number(i64),
    Word(&'a str),
}

/// A calendar or clock unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Fortnight,
    Month,
    Year,
}

impl Unit {
    fn parse(word: &str) -> Option<Self> {
        let singular = word.strip_suffix('s').unwrap_or(word);
        let unit = match singular {
            "sec" | "second" => Unit::Second,
            "min" | "minute" => Unit::Minute,
            "hour" => Unit::Hour,
            "day" => Unit::Day,
            "week" => Unit::Week,
            "fortnight" => Unit::Fortnight,
            "month" => Unit::Month,
            "year" => Unit::Year,
            _ => return None,
        };
        Some(unit)
    }
}

/// Offsets accumulated while reading a phrase.
#[derive(Debug, Default)]
struct Offset {
    months: i64,
    seconds: i64,
}

impl Offset {
    fn add(&mut self, amount: i64, unit: Unit) -> Option<()> {
        let (months, seconds) = match unit {
            Unit::Second => (0, amount),
            Unit::Minute => (0, amount.checked_mul(60)?),
            Unit::Hour => (0, amount.checked_mul(3_600)?),
            Unit::Day => (0, amount.checked_mul(86_400)?),
            Unit::Week => (0, amount.checked_mul(7 * 86_400)?),
            Unit::Fortnight => (0, amount.checked_mul(14 * 86_400)?),
            Unit::Month => (amount, 0),
            Unit::Year => (amount.checked_mul(12)?, 0),
        };
        self.months = self.months.checked_add(months)?;
        self.seconds = self.seconds.checked_add(seconds)?;
        Some(())
    }

    fn negate(&mut self) {
        self.months = self.months.saturating_neg();
        self.seconds = self.seconds.saturating_neg();
    }
}

/// Interpret `phrase` as a time relative to `reference`.
///
/// Returns `None` if the phrase is not a relative phrase.
pub fn relative_instant(phrase: &str, reference: NaiveDateTime) -> Option<NaiveDateTime> {
    let lowered = phrase.trim().to_lowercase();
    let terms = lex(&lowered)?;
    if terms.is_empty() {
        return None;
    }

    let mut day_shift: i64 = 0;
    let mut time: Option<NaiveTime> = None;
    let mut offset = Offset::default();

    let mut i = 0;
    while i < terms.len() {
        match (&terms[i], terms.get(i + 1)) {
            (Term::Number(n), Some(Term::Word(w))) => {
                offset.add(*n, Unit::parse(w)?)?;
                i += 2;
            }
            (Term::Word(w @ ("last" | "next" | "this")), Some(Term::Word(unit))) => {
                let amount = match *w {
                    "last" => -1,
                    "next" => 1,
                    _ => 0,
                };
                offset.add(amount, Unit::parse(unit)?)?;
                i += 2;
            }
            (Term::Word(w), _) => {
                match *w {
                    "now" => {}
                    "today" | "midnight" => time = Some(midnight()),
                    "noon" => time = NaiveTime::from_hms_opt(12, 0, 0),
                    "yesterday" => {
                        day_shift -= 1;
                        time = Some(midnight());
                    }
                    "tomorrow" => {
                        day_shift += 1;
                        time = Some(midnight());
                    }
                    "ago" => offset.negate(),
                    _ => return None,
                }
                i += 1;
            }
            (Term::Number(_), _) => return None,
        }
    }

    let mut instant = reference
        .date()
        .checked_add_signed(Duration::try_days(day_shift)?)?
        .and_time(time.unwrap_or_else(|| reference.time()));

    let months = Months::new(u32::try_from(offset.months.unsigned_abs()).ok()?);
    instant = if offset.months < 0 {
        instant.checked_sub_months(months)?
    } else {
        instant.checked_add_months(months)?
    };

    instant.checked_add_signed(Duration::try_seconds(offset.seconds)?)
}

fn midnight() -> NaiveTime {
    NaiveTime::from_hms_opt(0, 0, 0).unwrap_or_default()
}

/// Split a lowercased phrase into numbers and words.
///
/// A sign is only part of a number when a digit follows it directly.
/// Returns `None` for characters that never appear in a relative phrase.
fn lex(phrase: &str) -> Option<Vec<Term<'_>>> {
    let mut terms = Vec::new();
    let bytes = phrase.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        if c.is_ascii_whitespace() || c == b',' {
            i += 1;
            continue;
        }

        let signed = (c == b'+' || c == b'-') && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if c.is_ascii_digit() || signed {
            let start = i;
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            let number = phrase[start..i].trim_start_matches('+').parse().ok()?;
            terms.push(Term::Number(number));
            continue;
        }

        if c.is_ascii_alphabetic() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
                i += 1;
            }
            terms.push(Term::Word(&phrase[start..i]));
            continue;
        }

        return None;
    }

    Some(terms)
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
