// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    config_not_found = { Error::ConfigNotFound, "CRF_CONFIG" },
    unknown_filter = {
        Error::UnknownFilter { name: "colour".into(), available: "price, created".into() },
        "price, created"
    },
    filter_config = {
        Error::FilterConfig { name: "price".into(), reason: "bad field".into() },
        "filter 'price': bad field"
    },
    invalid_now = { Error::InvalidNow("soon".into()), "hint:" },
    invalid_argument = {
        Error::InvalidArgument { expr: "9--1".into(), reason: "out of order".into() },
        "'9--1': out of order"
    },
)]
fn error_display_contains(err: Error, expected: &str) {
    let msg = err.to_string();
    assert!(msg.contains(expected), "{msg:?} should contain {expected:?}");
}

#[test]
fn core_errors_pass_through_unchanged() {
    let core = crf_core::Error::UnknownDomain("colour".into());
    let expected = core.to_string();
    let err: Error = core.into();
    assert!(matches!(err, Error::Range(_)));
    assert_eq!(err.to_string(), expected);
}

#[test]
fn io_errors_convert() {
    let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert_eq!(err.to_string(), "io error: gone");
}
