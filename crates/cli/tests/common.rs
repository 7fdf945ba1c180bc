// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const SAMPLE_CONFIG: &str = r#"
[filters.price]
field = "node.price"
domain = "numeric"
allow_multiple = true
invalid_label = "Bad price"

[filters.created]
field = "node.created"
domain = "date"

[filters.title]
field = "title"
domain = "string"
transform_dash = true
negate = true

[filters.month]
field = "node.created"
domain = "date"
granularity = "year_month"
relative_dates = false
"#;

/// The binary, isolated from the caller's environment and working directory.
pub fn crf() -> Command {
    let mut cmd = cargo_bin_cmd!("crf");
    cmd.env("NO_COLOR", "1")
        .env_remove("COLOR")
        .env_remove("CRF_CONFIG")
        .env_remove("RUST_LOG")
        .current_dir(std::env::temp_dir());
    cmd
}

/// A temp directory holding `crf.toml` with `content`.
pub fn config_dir(content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("crf.toml"), content).unwrap();
    temp
}

/// The binary run from a directory holding the sample `crf.toml`.
pub fn crf_in(temp: &TempDir) -> Command {
    let mut cmd = crf();
    cmd.current_dir(temp.path());
    cmd
}
