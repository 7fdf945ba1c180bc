// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

//! Tests for the public `run()` function.
//!
//! These check routing and error propagation. Printed output is covered by
//! the integration tests that run the binary.

use super::*;
use clap::Parser;
use std::fs;
use tempfile::TempDir;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("crf").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_run_eval_ad_hoc() {
    assert!(run(cli(&["eval", "1--5", "-d", "numeric"])).is_ok());
}

#[test]
fn test_run_eval_invalid_argument_is_not_an_error() {
    assert!(run(cli(&["eval", "9--1", "-d", "numeric", "-o", "sql"])).is_ok());
}

#[test]
fn test_run_check_invalid_argument_fails() {
    let err = run(cli(&["check", "9--1", "-d", "numeric"])).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_run_check_bad_now() {
    let err = run(cli(&["check", "yesterday", "-d", "date", "--now", "later"])).unwrap_err();
    assert!(matches!(err, Error::InvalidNow(_)));
}

#[test]
fn test_run_with_named_filter() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("crf.toml");
    fs::write(&path, "[filters.size]\nfield = \"size\"\n").unwrap();
    let path = path.to_str().unwrap();

    assert!(run(cli(&["check", "1--5", "-f", "size", "--config", path])).is_ok());
    assert!(run(cli(&["filters", "--config", path])).is_ok());
    let err = run(cli(&["eval", "1", "-f", "weight", "--config", path])).unwrap_err();
    assert!(matches!(err, Error::UnknownFilter { .. }));
}

#[test]
fn test_run_missing_config_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.toml");
    let err = run(cli(&["filters", "--config", path.to_str().unwrap()])).unwrap_err();
    assert!(matches!(err, Error::ConfigRead { .. }));
}
