// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Range filters ready to evaluate.
//!
//! A [`FilterDefinition`] is a checked [`FilterConfig`]: the field reference
//! is parsed, the date formats compile, and options that do not apply to the
//! filter's domain are rejected.

use crf_core::{
    apply, Applied, Clock, DateDomain, DomainKind, FieldRef, Interval, InvalidPolicy, Labels,
    RangeOptions, RangeSet, ValueDomain,
};
use serde::Serialize;

use crate::config::FilterConfig;
use crate::error::{Error, Result};

/// Field used when no filter or `--field` is given.
pub const DEFAULT_FIELD: &str = "value";

/// Name shown in errors for filters described only by flags.
const AD_HOC: &str = "(ad hoc)";

#[derive(Debug, Clone, PartialEq)]
pub struct FilterDefinition {
    pub name: Option<String>,
    pub field: FieldRef,
    pub domain: ValueDomain,
    pub options: RangeOptions,
    pub policy: InvalidPolicy,
}

impl FilterDefinition {
    /// Check a filter's settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FilterConfig`] for a bad field reference, a bad date
    /// format, or an option that does not apply to the domain.
    pub fn from_config(name: Option<&str>, config: &FilterConfig) -> Result<Self> {
        let fail = |reason: String| Error::FilterConfig {
            name: name.unwrap_or(AD_HOC).to_string(),
            reason,
        };

        let field = config
            .field
            .parse::<FieldRef>()
            .map_err(|e| fail(e.to_string()))?;
        check_applicable(config).map_err(fail)?;
        let domain = build_domain(config).map_err(|e| fail(e.to_string()))?;

        Ok(FilterDefinition {
            name: name.map(str::to_string),
            field,
            domain,
            options: RangeOptions {
                allow_multiple: config.allow_multiple,
                negate: config.negate,
                transform_dash: config.transform_dash,
                labels: Labels {
                    invalid: config.invalid_label.clone(),
                    empty: config.empty_label.clone(),
                },
            },
            policy: config.on_invalid,
        })
    }

    /// Parse, resolve and apply one argument value.
    pub fn evaluate<C: Clock>(&self, expr: &str, clock: &C) -> Result<Evaluation> {
        let set = RangeSet::build_with(expr, self.domain.clone(), &self.options).resolved(clock);
        let applied = apply(&set, &self.field, self.policy)?;
        tracing::info!(
            filter = self.name.as_deref().unwrap_or(AD_HOC),
            expr,
            valid = set.is_valid(),
            "evaluated range argument"
        );
        Ok(Evaluation::new(self, expr, &set, applied))
    }
}

fn check_applicable(config: &FilterConfig) -> std::result::Result<(), String> {
    if config.domain != DomainKind::Date {
        let date_only = [
            ("granularity", config.granularity.is_some()),
            ("display_format", config.display_format.is_some()),
            ("parse_format", config.parse_format.is_some()),
            ("relative_dates", config.relative_dates.is_some()),
        ];
        if let Some((key, _)) = date_only.iter().find(|(_, set)| *set) {
            return Err(format!("'{key}' only applies to date filters"));
        }
    }
    if config.domain != DomainKind::String && config.transform_dash {
        return Err("'transform_dash' only applies to string filters".to_string());
    }
    Ok(())
}

fn build_domain(config: &FilterConfig) -> crf_core::Result<ValueDomain> {
    let domain = match config.domain {
        DomainKind::Numeric => ValueDomain::Numeric,
        DomainKind::String => ValueDomain::LexString,
        DomainKind::Date => {
            let granularity = config.granularity.unwrap_or_default();
            ValueDomain::Date(DateDomain::new(
                config
                    .display_format
                    .as_deref()
                    .unwrap_or(granularity.display_format()),
                config
                    .parse_format
                    .as_deref()
                    .unwrap_or(granularity.parse_format()),
                config.relative_dates.unwrap_or(true),
            )?)
        }
    };
    Ok(domain)
}

/// The outcome of evaluating one argument value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    pub expression: String,
    pub domain: DomainKind,
    pub field: FieldRef,
    pub label: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub intervals: Vec<Interval>,
    /// Date intervals in the display format.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub display: Vec<String>,
    pub applied: Applied,
}

impl Evaluation {
    fn new(def: &FilterDefinition, expr: &str, set: &RangeSet, applied: Applied) -> Self {
        let display = match def.domain.as_date() {
            Some(date) => set
                .intervals()
                .iter()
                .map(|interval| display_interval(date, interval))
                .collect(),
            None => Vec::new(),
        };
        Evaluation {
            filter: def.name.clone(),
            expression: expr.to_string(),
            domain: def.domain.kind(),
            field: def.field.clone(),
            label: set.label(),
            valid: set.is_valid(),
            error: set.fault().map(ToString::to_string),
            intervals: set.intervals().to_vec(),
            display,
            applied,
        }
    }
}

fn display_interval(date: &DateDomain, interval: &Interval) -> String {
    let show = |value: Option<&str>| {
        value
            .map(|v| date.display_value(v).unwrap_or_else(|| v.to_string()))
            .unwrap_or_default()
    };
    let low = show(interval.low().value());
    if interval.is_exact() {
        return low;
    }
    format!("{low}--{}", show(interval.high().value()))
}

#[cfg(test)]
#[path = "definition_tests.rs"]
mod tests;
