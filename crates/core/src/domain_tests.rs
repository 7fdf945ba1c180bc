// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn date_domain(relative: bool) -> ValueDomain {
    ValueDomain::Date(DateDomain::with_granularity(Granularity::Fulldate, relative).unwrap())
}

// ─────────────────────────────────────────────────────────────────────────────
// Numeric
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    integer = { "42" },
    negative = { "-7" },
    plus_sign = { "+3" },
    decimal = { "29.95" },
    leading_dot = { ".5" },
    exponent = { "1e3" },
)]
fn numeric_accepts(fragment: &str) {
    assert!(ValueDomain::Numeric.rules().accepts(fragment));
}

#[parameterized(
    empty = { "" },
    word = { "bad" },
    infinity = { "inf" },
    nan = { "NaN" },
    padded = { " 5" },
    trailing_text = { "5kg" },
)]
fn numeric_rejects(fragment: &str) {
    assert!(!ValueDomain::Numeric.rules().accepts(fragment));
}

#[test]
fn numeric_compares_by_value_not_text() {
    let rules = ValueDomain::Numeric.rules();
    assert_eq!(rules.compare("9", "10"), Some(Ordering::Less));
    assert_eq!(rules.compare("-2", "-10"), Some(Ordering::Greater));
    assert_eq!(rules.compare("1.50", "1.5"), Some(Ordering::Equal));
}

#[parameterized(
    above_f64_precision = { "10000000000000001", "10000000000000000", Ordering::Greater },
    equal_large = { "9007199254740993", "9007199254740993", Ordering::Equal },
    negative_large = { "-9007199254740993", "-9007199254740992", Ordering::Less },
    past_i64 = { "92233720368547758070", "92233720368547758069", Ordering::Greater },
    signed = { "+3", "-3", Ordering::Greater },
)]
fn numeric_compares_large_integers_exactly(low: &str, high: &str, expected: Ordering) {
    assert_eq!(ValueDomain::Numeric.rules().compare(low, high), Some(expected));
}

// ─────────────────────────────────────────────────────────────────────────────
// Lexicographic strings
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn lex_accepts_any_non_empty_string() {
    let rules = ValueDomain::LexString.rules();
    assert!(rules.accepts("a"));
    assert!(rules.accepts("Zürich"));
    assert!(rules.accepts("123"));
    assert!(!rules.accepts(""));
}

#[test]
fn lex_compares_by_codepoint() {
    let rules = ValueDomain::LexString.rules();
    assert_eq!(rules.compare("a", "f"), Some(Ordering::Less));
    assert_eq!(rules.compare("Z", "a"), Some(Ordering::Less));
    assert_eq!(rules.compare("10", "9"), Some(Ordering::Less));
}

// ─────────────────────────────────────────────────────────────────────────────
// Dates
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn date_without_relative_requires_parse_format() {
    let domain = date_domain(false);
    assert!(domain.rules().accepts("20240114"));
    assert!(!domain.rules().accepts("yesterday"));
    assert!(!domain.rules().accepts("2024-01-14"));
}

#[test]
fn date_with_relative_defers_validation() {
    let domain = date_domain(true);
    assert!(domain.rules().accepts("yesterday"));
    assert!(domain.rules().accepts("anything at all"));
    assert!(!domain.rules().accepts(""));
}

#[test]
fn date_compare_is_none_for_unresolved_phrases() {
    let domain = date_domain(true);
    assert_eq!(domain.rules().compare("yesterday", "now"), None);
    assert_eq!(
        domain.rules().compare("20240101", "20240201"),
        Some(Ordering::Less)
    );
}

#[test]
fn date_display_value_uses_display_format() {
    let date = DateDomain::with_granularity(Granularity::Fulldate, false).unwrap();
    assert_eq!(date.display_value("20240114").as_deref(), Some("January 14, 2024"));
    assert_eq!(date.display_value("not a date"), None);
}

#[test]
fn date_domain_rejects_bad_format() {
    assert!(DateDomain::new("F j, Y", "", true).is_err());
}

#[test]
fn needs_resolution_only_for_relative_dates() {
    assert!(date_domain(true).needs_resolution());
    assert!(!date_domain(false).needs_resolution());
    assert!(!ValueDomain::Numeric.needs_resolution());
    assert!(!ValueDomain::LexString.needs_resolution());
}

// ─────────────────────────────────────────────────────────────────────────────
// Granularity and kind names
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    fulldate = { "fulldate", Granularity::Fulldate, "Ymd" },
    year = { "year", Granularity::Year, "Y" },
    year_month = { "year_month", Granularity::YearMonth, "Ym" },
    year_month_dashed = { "year-month", Granularity::YearMonth, "Ym" },
    month = { "Month", Granularity::Month, "m" },
    week = { "week", Granularity::Week, "W" },
    day = { "day", Granularity::Day, "d" },
)]
fn granularity_from_str(name: &str, expected: Granularity, parse_format: &str) {
    let granularity: Granularity = name.parse().unwrap();
    assert_eq!(granularity, expected);
    assert_eq!(granularity.parse_format(), parse_format);
    assert_eq!(granularity.to_string().parse::<Granularity>().unwrap(), expected);
}

#[test]
fn granularity_unknown_name() {
    let err = "decade".parse::<Granularity>().unwrap_err();
    assert!(matches!(err, Error::UnknownGranularity(_)));
}

#[parameterized(
    numeric = { "numeric", DomainKind::Numeric },
    number = { "number", DomainKind::Numeric },
    string = { "string", DomainKind::String },
    text = { "TEXT", DomainKind::String },
    date = { "date", DomainKind::Date },
)]
fn domain_kind_from_str(name: &str, expected: DomainKind) {
    assert_eq!(name.parse::<DomainKind>().unwrap(), expected);
}

#[test]
fn domain_kind_unknown_name() {
    let err = "colour".parse::<DomainKind>().unwrap_err();
    assert!(err.to_string().contains("colour"));
}

#[test]
fn domain_kind_matches_variant() {
    assert_eq!(ValueDomain::Numeric.kind(), DomainKind::Numeric);
    assert_eq!(ValueDomain::LexString.kind(), DomainKind::String);
    assert_eq!(date_domain(true).kind(), DomainKind::Date);
    assert_eq!(DomainKind::String.to_string(), "string");
}
