// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiling range sets into boundary-condition predicates.
//!
//! A [`Predicate`] is an OR of per-interval conditions over one field, with
//! an optional outer NOT. Negation applies to the union as a whole:
//! excluding `1--5+10--20` excludes every value in either range.
//!
//! The core never talks to a query engine. Query layers render predicates
//! through their own [`ConditionSink`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::domain::ValueDomain;
use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::range_set::RangeSet;

/// A column, optionally qualified by a table alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef {
    table: Option<String>,
    column: String,
}

impl FieldRef {
    /// An unqualified column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if `column` is not an identifier.
    pub fn new(column: &str) -> Result<Self> {
        if !is_identifier(column) {
            return Err(Error::InvalidField(column.to_string()));
        }
        Ok(FieldRef {
            table: None,
            column: column.to_string(),
        })
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn column(&self) -> &str {
        &self.column
    }
}

impl FromStr for FieldRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.split_once('.') {
            None => FieldRef::new(s),
            Some((table, column)) if is_identifier(table) && is_identifier(column) => {
                Ok(FieldRef {
                    table: Some(table.to_string()),
                    column: column.to_string(),
                })
            }
            Some(_) => Err(Error::InvalidField(s.to_string())),
        }
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table {
            Some(table) => write!(f, "{table}.{}", self.column),
            None => f.write_str(&self.column),
        }
    }
}

impl Serialize for FieldRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A bound value as the query layer should bind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// A decimal number, kept as typed.
    Number(String),
    Text(String),
}

impl Literal {
    fn in_domain(value: &str, domain: &ValueDomain) -> Self {
        match domain {
            ValueDomain::Numeric => Literal::Number(value.to_string()),
            ValueDomain::LexString | ValueDomain::Date(_) => Literal::Text(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Literal::Number(s) | Literal::Text(s) => s,
        }
    }
}

/// SQL-style literal: numbers bare, text single-quoted.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => f.write_str(n),
            Literal::Text(t) => write!(f, "'{}'", t.replace('\'', "''")),
        }
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Literal::Number(n) => {
                if let Ok(i) = n.parse::<i64>() {
                    serializer.serialize_i64(i)
                } else if let Ok(x) = n.parse::<f64>() {
                    serializer.serialize_f64(x)
                } else {
                    serializer.serialize_str(n)
                }
            }
            Literal::Text(t) => serializer.serialize_str(t),
        }
    }
}

/// A boundary condition on the predicate's field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Condition {
    /// `field = value`
    Equals { value: Literal },
    /// `field BETWEEN low AND high`, inclusive on both ends.
    Between { low: Literal, high: Literal },
    /// `field <= value`
    LessOrEqual { value: Literal },
    /// `field >= value`
    GreaterOrEqual { value: Literal },
}

impl Condition {
    fn from_interval(interval: &Interval, domain: &ValueDomain) -> Result<Self> {
        let lit = |value: &str| Literal::in_domain(value, domain);
        let condition = match (interval.low().value(), interval.high().value()) {
            (Some(low), Some(high)) if interval.is_exact() || low == high => {
                Condition::Equals { value: lit(low) }
            }
            (Some(low), Some(high)) => Condition::Between {
                low: lit(low),
                high: lit(high),
            },
            (None, Some(high)) => Condition::LessOrEqual { value: lit(high) },
            (Some(low), None) => Condition::GreaterOrEqual { value: lit(low) },
            (None, None) => return Err(Error::NotCompilable("interval has no closed bound")),
        };
        Ok(condition)
    }

    fn render<S: ConditionSink>(&self, field: &FieldRef, sink: &mut S) -> S::Condition {
        match self {
            Condition::Equals { value } => sink.equals(field, value),
            Condition::Between { low, high } => sink.between(field, low, high),
            Condition::LessOrEqual { value } => sink.less_or_equal(field, value),
            Condition::GreaterOrEqual { value } => sink.greater_or_equal(field, value),
        }
    }

    fn describe(&self, field: &FieldRef) -> String {
        match self {
            Condition::Equals { value } => format!("{field} = {value}"),
            Condition::Between { low, high } => format!("{field} BETWEEN {low} AND {high}"),
            Condition::LessOrEqual { value } => format!("{field} <= {value}"),
            Condition::GreaterOrEqual { value } => format!("{field} >= {value}"),
        }
    }
}

/// A query layer's condition builder.
///
/// [`Predicate::render`] calls the boundary methods once per interval, then
/// `or` exactly once for the group, then `not` if the set is negated.
pub trait ConditionSink {
    type Condition;

    fn equals(&mut self, field: &FieldRef, value: &Literal) -> Self::Condition;
    fn between(&mut self, field: &FieldRef, low: &Literal, high: &Literal) -> Self::Condition;
    fn less_or_equal(&mut self, field: &FieldRef, value: &Literal) -> Self::Condition;
    fn greater_or_equal(&mut self, field: &FieldRef, value: &Literal) -> Self::Condition;
    fn or(&mut self, conditions: Vec<Self::Condition>) -> Self::Condition;
    fn not(&mut self, condition: Self::Condition) -> Self::Condition;
}

/// A compiled range set: any of `conditions`, optionally negated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Predicate {
    field: FieldRef,
    any_of: Vec<Condition>,
    negated: bool,
}

impl Predicate {
    pub fn field(&self) -> &FieldRef {
        &self.field
    }

    /// Per-interval conditions, in argument order. Never empty.
    pub fn conditions(&self) -> &[Condition] {
        &self.any_of
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Build this predicate's condition tree with `sink`.
    pub fn render<S: ConditionSink>(&self, sink: &mut S) -> S::Condition {
        let parts = self
            .any_of
            .iter()
            .map(|c| c.render(&self.field, sink))
            .collect();
        let group = sink.or(parts);
        if self.negated {
            sink.not(group)
        } else {
            group
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .any_of
            .iter()
            .map(|c| c.describe(&self.field))
            .collect::<Vec<_>>()
            .join(" OR ");
        if self.negated {
            write!(f, "NOT ({body})")
        } else {
            f.write_str(&body)
        }
    }
}

/// Compile a valid, non-empty, resolved range set over `field`.
///
/// # Errors
///
/// Returns [`Error::NotCompilable`] for an invalid, empty, or unresolved set.
/// Callers decide what those states mean with [`apply`].
pub fn compile(set: &RangeSet, field: &FieldRef) -> Result<Predicate> {
    if !set.is_valid() {
        return Err(Error::NotCompilable("range set is invalid"));
    }
    if set.is_empty() {
        return Err(Error::NotCompilable("range set is empty"));
    }
    if set.is_unresolved() {
        return Err(Error::NotCompilable("relative dates are not resolved"));
    }

    let any_of = set
        .intervals()
        .iter()
        .map(|interval| Condition::from_interval(interval, set.domain()))
        .collect::<Result<Vec<_>>>()?;

    Ok(Predicate {
        field: field.clone(),
        any_of,
        negated: set.negate(),
    })
}

/// What to do with the query when an argument is invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidPolicy {
    /// Return no rows.
    #[default]
    MatchNothing,
    /// Ignore the argument, as if it were absent.
    MatchAll,
}

impl InvalidPolicy {
    pub fn valid_names() -> &'static str {
        "match-nothing, match-all"
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InvalidPolicy::MatchNothing => "match-nothing",
            InvalidPolicy::MatchAll => "match-all",
        }
    }
}

impl FromStr for InvalidPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "match-nothing" | "nothing" | "none" => Ok(InvalidPolicy::MatchNothing),
            "match-all" | "all" | "skip" => Ok(InvalidPolicy::MatchAll),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for InvalidPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The effect of one range argument on a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Applied {
    /// No condition is added.
    Unfiltered,
    /// The query must return no rows.
    MatchNothing,
    Predicate(Predicate),
}

/// Decide how `set` narrows a query on `field`.
///
/// Empty sets leave the query unfiltered. Invalid sets follow `policy`.
///
/// # Errors
///
/// Returns [`Error::NotCompilable`] if the set still holds unresolved
/// relative dates.
pub fn apply(set: &RangeSet, field: &FieldRef, policy: InvalidPolicy) -> Result<Applied> {
    if let Some(fault) = set.fault() {
        tracing::debug!(field = %field, %policy, error = %fault, "applying invalid range set");
        return Ok(match policy {
            InvalidPolicy::MatchNothing => Applied::MatchNothing,
            InvalidPolicy::MatchAll => Applied::Unfiltered,
        });
    }
    if set.is_empty() {
        return Ok(Applied::Unfiltered);
    }
    compile(set, field).map(Applied::Predicate)
}

#[cfg(test)]
#[path = "predicate_tests.rs"]
mod tests;
