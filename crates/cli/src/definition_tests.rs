// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::NaiveDate;
use crf_core::{FixedClock, Granularity};
use yare::parameterized;

fn filter(domain: DomainKind) -> FilterConfig {
    FilterConfig {
        field: "node.value".to_string(),
        domain,
        ..FilterConfig::default()
    }
}

fn jan_15() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap(),
    )
}

#[test]
fn builds_numeric_definition() {
    let config = FilterConfig {
        allow_multiple: true,
        negate: true,
        invalid_label: Some("Bad".to_string()),
        on_invalid: InvalidPolicy::MatchAll,
        ..filter(DomainKind::Numeric)
    };
    let def = FilterDefinition::from_config(Some("price"), &config).unwrap();
    assert_eq!(def.name.as_deref(), Some("price"));
    assert_eq!(def.field.to_string(), "node.value");
    assert_eq!(def.domain, ValueDomain::Numeric);
    assert!(def.options.allow_multiple);
    assert!(def.options.negate);
    assert_eq!(def.options.labels.invalid(), "Bad");
    assert_eq!(def.policy, InvalidPolicy::MatchAll);
}

#[test]
fn date_definition_uses_granularity_formats() {
    let config = FilterConfig {
        granularity: Some(Granularity::YearMonth),
        ..filter(DomainKind::Date)
    };
    let def = FilterDefinition::from_config(None, &config).unwrap();
    let date = def.domain.as_date().unwrap();
    assert_eq!(date.parse_format().as_str(), "Ym");
    assert_eq!(date.display_format().as_str(), "F Y");
    assert!(date.relative_enabled());
}

#[test]
fn explicit_formats_override_granularity() {
    let config = FilterConfig {
        granularity: Some(Granularity::Year),
        parse_format: Some("Y-m-d".to_string()),
        relative_dates: Some(false),
        ..filter(DomainKind::Date)
    };
    let def = FilterDefinition::from_config(None, &config).unwrap();
    let date = def.domain.as_date().unwrap();
    assert_eq!(date.parse_format().as_str(), "Y-m-d");
    assert_eq!(date.display_format().as_str(), "Y");
    assert!(!date.relative_enabled());
}

#[parameterized(
    granularity = { FilterConfig { granularity: Some(Granularity::Day), ..filter(DomainKind::Numeric) }, "'granularity' only applies to date filters" },
    relative = { FilterConfig { relative_dates: Some(false), ..filter(DomainKind::String) }, "'relative_dates' only applies to date filters" },
    dash = { FilterConfig { transform_dash: true, ..filter(DomainKind::Date) }, "'transform_dash' only applies to string filters" },
    bad_field = { FilterConfig { field: "a.b.c".to_string(), ..filter(DomainKind::Numeric) }, "invalid field reference" },
    bad_format = { FilterConfig { parse_format: Some("Ymd\\".to_string()), ..filter(DomainKind::Date) }, "invalid date format" },
)]
fn rejects_bad_settings(config: FilterConfig, expected: &str) {
    let err = FilterDefinition::from_config(Some("f"), &config).unwrap_err();
    assert!(matches!(err, Error::FilterConfig { ref name, .. } if name == "f"));
    assert!(err.to_string().contains(expected), "{err}");
}

#[test]
fn ad_hoc_errors_are_named() {
    let config = FilterConfig {
        transform_dash: true,
        ..filter(DomainKind::Numeric)
    };
    let err = FilterDefinition::from_config(None, &config).unwrap_err();
    assert!(err.to_string().starts_with("filter '(ad hoc)'"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Evaluation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn evaluates_numeric_union() {
    let config = FilterConfig {
        allow_multiple: true,
        ..filter(DomainKind::Numeric)
    };
    let def = FilterDefinition::from_config(Some("price"), &config).unwrap();
    let eval = def.evaluate("1--5+10--", &jan_15()).unwrap();
    assert!(eval.valid);
    assert_eq!(eval.label, "1--5 + 10--");
    assert_eq!(eval.intervals.len(), 2);
    assert!(eval.display.is_empty());
    assert!(matches!(
        &eval.applied,
        Applied::Predicate(p) if p.to_string() == "node.value BETWEEN 1 AND 5 OR node.value >= 10"
    ));
}

#[test]
fn evaluates_invalid_argument() {
    let def = FilterDefinition::from_config(None, &filter(DomainKind::Numeric)).unwrap();
    let eval = def.evaluate("9--1", &jan_15()).unwrap();
    assert!(!eval.valid);
    assert_eq!(eval.label, "Invalid input");
    assert!(eval.error.unwrap().contains("greater than"));
    assert_eq!(eval.applied, Applied::MatchNothing);
}

#[test]
fn evaluates_empty_argument() {
    let config = FilterConfig {
        empty_label: Some("Any".to_string()),
        ..filter(DomainKind::Numeric)
    };
    let def = FilterDefinition::from_config(None, &config).unwrap();
    let eval = def.evaluate("", &jan_15()).unwrap();
    assert!(eval.valid);
    assert_eq!(eval.label, "Any");
    assert_eq!(eval.applied, Applied::Unfiltered);
}

#[test]
fn evaluates_relative_dates_with_display() {
    let def = FilterDefinition::from_config(None, &filter(DomainKind::Date)).unwrap();
    let eval = def.evaluate("yesterday--now", &jan_15()).unwrap();
    assert!(eval.valid);
    assert_eq!(eval.label, "yesterday--now");
    assert_eq!(eval.display, vec!["January 14, 2024--January 15, 2024"]);
    assert!(matches!(
        &eval.applied,
        Applied::Predicate(p) if p.to_string() == "node.value BETWEEN '20240114' AND '20240115'"
    ));
}

#[test]
fn display_of_open_and_exact_dates() {
    let config = FilterConfig {
        allow_multiple: true,
        ..filter(DomainKind::Date)
    };
    let def = FilterDefinition::from_config(None, &config).unwrap();
    let eval = def.evaluate("20240101+--20231231", &jan_15()).unwrap();
    assert_eq!(eval.display, vec!["January 1, 2024", "--December 31, 2023"]);
}

#[test]
fn evaluation_serializes_for_json_output() {
    let def = FilterDefinition::from_config(Some("n"), &filter(DomainKind::Numeric)).unwrap();
    let eval = def.evaluate("3", &jan_15()).unwrap();
    let json = serde_json::to_value(&eval).unwrap();
    assert_eq!(json["filter"], "n");
    assert_eq!(json["domain"], "numeric");
    assert_eq!(json["field"], "node.value");
    assert_eq!(json["valid"], true);
    assert!(json.get("error").is_none());
    assert_eq!(json["applied"]["kind"], "predicate");
    assert_eq!(json["applied"]["any_of"][0]["op"], "equals");
    assert_eq!(json["intervals"][0]["low"]["kind"], "closed");
}
