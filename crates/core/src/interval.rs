// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing single range tokens into intervals.
//!
//! A token is one of:
//!
//! ```text
//! value          exact value
//! low--high      closed range, inclusive on both ends
//! low--          everything from low upwards
//! --high         everything up to high
//! ```
//!
//! A colon may stand in for the double hyphen (`low:high`). The double hyphen
//! is tried first, so values that contain a colon still split correctly.

use std::cmp::Ordering;

use serde::Serialize;

use crate::domain::ValueDomain;
use crate::error::{Error, Result};

/// Primary range separator.
pub const RANGE_SEPARATOR: &str = "--";

/// Secondary range separator, used when the primary one is absent.
pub const ALT_RANGE_SEPARATOR: char = ':';

/// One end of an interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Bound {
    /// Unbounded on this side.
    Open,
    /// Bounded by this value, inclusive.
    Closed(String),
}

impl Bound {
    /// The bound's value, if it is closed.
    pub fn value(&self) -> Option<&str> {
        match self {
            Bound::Open => None,
            Bound::Closed(value) => Some(value),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Bound::Open)
    }

    fn from_fragment(fragment: &str) -> Self {
        if fragment.is_empty() {
            Bound::Open
        } else {
            Bound::Closed(fragment.to_string())
        }
    }
}

/// A parsed range over one value domain.
///
/// At least one bound is always closed. An exact interval has identical
/// closed bounds. When both bounds are closed and comparable, `low <= high`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interval {
    low: Bound,
    high: Bound,
    exact: bool,
    raw: String,
}

impl Interval {
    pub fn low(&self) -> &Bound {
        &self.low
    }

    pub fn high(&self) -> &Bound {
        &self.high
    }

    /// Returns true if the token named a single value rather than a range.
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// The token text the interval was parsed from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Replace the bounds, keeping the raw token and exactness.
    ///
    /// Used by date resolution, which rewrites bound text but not the token
    /// the user typed.
    pub(crate) fn with_bounds(&self, low: Bound, high: Bound) -> Self {
        Interval {
            low,
            high,
            exact: self.exact,
            raw: self.raw.clone(),
        }
    }
}

/// Parse one range token over `domain`.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] if a bound fails domain validation,
/// both bounds are empty, the token has more than one separator, or the
/// lower bound sorts after the upper bound.
pub fn parse_interval(token: &str, domain: &ValueDomain) -> Result<Interval> {
    let rules = domain.rules();
    let parts = split_range(token);

    match parts.as_slice() {
        [value] => {
            if !rules.accepts(value) {
                return Err(rejected_value(token, value, domain));
            }
            Ok(Interval {
                low: Bound::Closed(value.to_string()),
                high: Bound::Closed(value.to_string()),
                exact: true,
                raw: token.to_string(),
            })
        }
        [low, high] => {
            if low.is_empty() && high.is_empty() {
                return Err(Error::invalid(token, "both bounds are empty"));
            }
            for fragment in [low, high] {
                if !fragment.is_empty() && !rules.accepts(fragment) {
                    return Err(rejected_value(token, fragment, domain));
                }
            }
            if !low.is_empty() && !high.is_empty() {
                check_order(token, low, high, domain)?;
            }
            Ok(Interval {
                low: Bound::from_fragment(low),
                high: Bound::from_fragment(high),
                exact: false,
                raw: token.to_string(),
            })
        }
        _ => Err(Error::invalid(token, "too many range separators")),
    }
}

/// Reject `low--high` if `low` sorts after `high`.
///
/// Values the domain cannot order yet pass; they are checked again once
/// resolved.
pub(crate) fn check_order(
    token: &str,
    low: &str,
    high: &str,
    domain: &ValueDomain,
) -> Result<()> {
    if domain.rules().compare(low, high) == Some(Ordering::Greater) {
        return Err(Error::invalid(
            token,
            format!("lower bound '{low}' is greater than upper bound '{high}'"),
        ));
    }
    Ok(())
}

fn split_range(token: &str) -> Vec<&str> {
    let parts: Vec<&str> = token.split(RANGE_SEPARATOR).collect();
    if parts.len() < 2 {
        return token.split(ALT_RANGE_SEPARATOR).collect();
    }
    parts
}

fn rejected_value(token: &str, fragment: &str, domain: &ValueDomain) -> Error {
    if fragment.is_empty() {
        return Error::invalid(token, "empty range");
    }
    Error::invalid(token, format!("'{fragment}' is not a valid {} value", domain.kind()))
}

#[cfg(test)]
#[path = "interval_tests.rs"]
mod tests;
