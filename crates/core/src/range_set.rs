// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Range sets: the parsed form of one range argument.
//!
//! A [`RangeSet`] is built once per argument value and then only read. It is
//! either valid, holding zero or more intervals, or invalid, holding the
//! error that rejected it. One bad token invalidates the whole set, so a
//! malformed argument never narrows results partially.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::domain::ValueDomain;
use crate::error::{Error, Result};
use crate::format::DateFormat;
use crate::interval::{check_order, parse_interval, Interval};
use crate::resolve::{resolve, Clock};
use crate::tokenize::tokenize;

/// Label shown for an invalid argument when none is configured.
pub const DEFAULT_INVALID_LABEL: &str = "Invalid input";

/// Label shown for an empty argument when none is configured.
pub const DEFAULT_EMPTY_LABEL: &str = "Uncategorized";

/// Joins interval labels of a multi-range argument.
pub const LABEL_SEPARATOR: &str = " + ";

/// Configured label text for the invalid and empty states.
///
/// Blank strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty: Option<String>,
}

impl Labels {
    pub fn invalid(&self) -> &str {
        non_blank(&self.invalid).unwrap_or(DEFAULT_INVALID_LABEL)
    }

    pub fn empty(&self) -> &str {
        non_blank(&self.empty).unwrap_or(DEFAULT_EMPTY_LABEL)
    }
}

fn non_blank(label: &Option<String>) -> Option<&str> {
    label.as_deref().filter(|s| !s.trim().is_empty())
}

/// How a range argument is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeOptions {
    /// Split the argument into several ranges on `+` or space.
    pub allow_multiple: bool,
    /// Exclude, rather than include, values in the ranges.
    pub negate: bool,
    /// Read single hyphens in string arguments as spaces.
    pub transform_dash: bool,
    pub labels: Labels,
}

/// The ordered union of intervals parsed from one argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSet {
    domain: ValueDomain,
    intervals: Vec<Interval>,
    negate: bool,
    fault: Option<Error>,
    unresolved: bool,
    labels: Labels,
}

impl RangeSet {
    /// Build a range set with default labels.
    ///
    /// With `allow_multiple` the argument is split into tokens first;
    /// otherwise the whole argument is a single token. An empty argument
    /// yields a valid, empty set.
    pub fn build(expr: &str, domain: ValueDomain, allow_multiple: bool, negate: bool) -> Self {
        let options = RangeOptions {
            allow_multiple,
            negate,
            ..RangeOptions::default()
        };
        Self::build_with(expr, domain, &options)
    }

    /// Build a range set with full options.
    ///
    /// Parsing stops at the first bad token.
    pub fn build_with(expr: &str, domain: ValueDomain, options: &RangeOptions) -> Self {
        let mut set = RangeSet {
            unresolved: false,
            domain,
            intervals: Vec::new(),
            negate: options.negate,
            fault: None,
            labels: options.labels.clone(),
        };

        if expr.is_empty() {
            return set;
        }

        let tokens = if options.allow_multiple {
            tokenize(expr)
        } else {
            vec![expr]
        };

        let dashes = options.transform_dash && matches!(set.domain, ValueDomain::LexString);
        for token in tokens {
            let token = if dashes {
                Cow::Owned(transform_dash(token))
            } else {
                Cow::Borrowed(token)
            };
            match parse_interval(&token, &set.domain) {
                Ok(interval) => set.intervals.push(interval),
                Err(fault) => {
                    tracing::debug!(token = %token, error = %fault, "rejected range token");
                    return set.invalidated(fault);
                }
            }
        }

        set.unresolved = set.domain.needs_resolution();
        set
    }

    /// Resolve relative date phrases against `clock`.
    ///
    /// Sets over other domains, or with relative dates disabled, are
    /// returned unchanged. A bound that does not resolve, or a resolved
    /// range whose bounds are out of order, invalidates the set.
    pub fn resolved<C: Clock>(self, clock: &C) -> Self {
        let format = match self.domain.as_date() {
            Some(date) if date.relative_enabled() => date.parse_format().clone(),
            _ => return self,
        };
        if !self.unresolved {
            return self;
        }

        let reference = clock.now();
        let outcome: Result<Vec<Interval>> = self
            .intervals
            .iter()
            .map(|interval| self.resolve_interval(interval, &format, reference))
            .collect();

        match outcome {
            Ok(intervals) => RangeSet {
                intervals,
                unresolved: false,
                ..self
            },
            Err(fault) => {
                tracing::debug!(error = %fault, "relative date resolution failed");
                self.invalidated(fault)
            }
        }
    }

    fn resolve_interval(
        &self,
        interval: &Interval,
        format: &DateFormat,
        reference: chrono::NaiveDateTime,
    ) -> Result<Interval> {
        let (low, high) = resolve(interval.low(), interval.high(), format, reference)?;
        if let (Some(l), Some(h)) = (low.value(), high.value()) {
            check_order(interval.raw(), l, h, &self.domain)?;
        }
        Ok(interval.with_bounds(low, high))
    }

    fn invalidated(mut self, fault: Error) -> Self {
        self.intervals.clear();
        self.fault = Some(fault);
        self.unresolved = false;
        self
    }

    pub fn domain(&self) -> &ValueDomain {
        &self.domain
    }

    /// The parsed intervals, in argument order. Empty when invalid.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Returns true if the set excludes its ranges rather than including them.
    pub fn negate(&self) -> bool {
        self.negate
    }

    pub fn is_valid(&self) -> bool {
        self.fault.is_none()
    }

    /// Returns true for a valid set with no intervals (no argument given).
    pub fn is_empty(&self) -> bool {
        self.is_valid() && self.intervals.is_empty()
    }

    /// Returns true if relative dates still need [`RangeSet::resolved`].
    pub fn is_unresolved(&self) -> bool {
        self.unresolved
    }

    /// The error that invalidated the set, if any.
    pub fn fault(&self) -> Option<&Error> {
        self.fault.as_ref()
    }

    /// Human-readable title for the argument.
    ///
    /// Shows the tokens as typed, not as resolved, joined by `" + "`.
    pub fn label(&self) -> String {
        if !self.is_valid() {
            return self.labels.invalid().to_string();
        }
        if self.intervals.is_empty() {
            return self.labels.empty().to_string();
        }
        self.intervals
            .iter()
            .map(Interval::raw)
            .collect::<Vec<_>>()
            .join(LABEL_SEPARATOR)
    }
}

/// Replace lone hyphens with spaces, keeping `--` separators.
fn transform_dash(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let paired = (i > 0 && chars[i - 1] == '-') || chars.get(i + 1) == Some(&'-');
            if c == '-' && !paired {
                ' '
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "range_set_tests.rs"]
mod tests;
