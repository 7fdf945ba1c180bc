// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    invalid_interval = { Error::invalid("9--1", "lower bound is greater than upper bound"), "9--1" },
    unknown_domain = { Error::UnknownDomain("colour".into()), "numeric, string, date" },
    unknown_granularity = { Error::UnknownGranularity("decade".into()), "year_month" },
    unknown_policy = { Error::UnknownPolicy("maybe".into()), "match-nothing" },
    not_compilable = { Error::NotCompilable("range set is empty"), "empty" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn unresolvable_date_display_has_hint() {
    let err = Error::UnresolvableDate {
        text: "someday".into(),
        format: "Ymd".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("someday"));
    assert!(msg.contains("Ymd"));
    assert!(msg.contains("hint:"));
}

#[test]
fn invalid_helper_builds_interval_error() {
    let err = Error::invalid("abc", "not a number");
    assert_eq!(
        err,
        Error::InvalidInterval {
            token: "abc".into(),
            reason: "not a number".into()
        }
    );
}
