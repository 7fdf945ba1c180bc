// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;

const SAMPLE: &str = r#"
[filters.price]
field = "node.price"
domain = "numeric"
allow_multiple = true
invalid_label = "Bad price"
on_invalid = "match-all"

[filters.created]
field = "node.created"
domain = "date"
granularity = "year_month"
relative_dates = false

[filters.title]
field = "title"
domain = "string"
transform_dash = true
"#;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(CONFIG_FILE_NAME);
    fs::write(&path, content).unwrap();
    (temp, path)
}

#[test]
fn test_load_sample_config() {
    let (_temp, path) = write_config(SAMPLE);
    let config = Config::load(&path).unwrap();
    assert_eq!(config.filters.len(), 3);

    let price = config.filter("price").unwrap();
    assert_eq!(price.field, "node.price");
    assert_eq!(price.domain, DomainKind::Numeric);
    assert!(price.allow_multiple);
    assert!(!price.negate);
    assert_eq!(price.invalid_label.as_deref(), Some("Bad price"));
    assert_eq!(price.on_invalid, InvalidPolicy::MatchAll);

    let created = config.filter("created").unwrap();
    assert_eq!(created.granularity, Some(Granularity::YearMonth));
    assert_eq!(created.relative_dates, Some(false));

    assert!(config.filter("title").unwrap().transform_dash);
}

#[test]
fn test_defaults() {
    let config: Config = toml::from_str("[filters.n]\nfield = \"n\"\n").unwrap();
    let filter = config.filter("n").unwrap();
    assert_eq!(filter.domain, DomainKind::Numeric);
    assert_eq!(filter.on_invalid, InvalidPolicy::MatchNothing);
    assert!(!filter.allow_multiple);
    assert_eq!(filter.relative_dates, None);
}

#[test]
fn test_empty_file_has_no_filters() {
    let (_temp, path) = write_config("");
    let config = Config::load(&path).unwrap();
    assert!(config.filters.is_empty());
    assert_eq!(config.names(), "(none)");
}

#[test]
fn test_unknown_filter_lists_available() {
    let config: Config = toml::from_str(SAMPLE).unwrap();
    let err = config.filter("colour").unwrap_err();
    assert!(err.to_string().contains("created, price, title"));
}

#[test]
fn test_unknown_keys_are_rejected() {
    let (_temp, path) = write_config("[filters.n]\nfield = \"n\"\nnegated = true\n");
    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigParse { .. }));
    assert!(err.to_string().contains("negated"));
}

#[test]
fn test_bad_domain_is_rejected() {
    let (_temp, path) = write_config("[filters.n]\nfield = \"n\"\ndomain = \"colour\"\n");
    assert!(matches!(
        Config::load(&path),
        Err(Error::ConfigParse { .. })
    ));
}

#[test]
fn test_discover_explicit_path() {
    let (_temp, path) = write_config(SAMPLE);
    let (found, config) = Config::discover(Some(&path)).unwrap().unwrap();
    assert_eq!(found, path);
    assert!(config.filters.contains_key("price"));
}

#[test]
fn test_discover_missing_explicit_path_fails() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");
    assert!(matches!(
        Config::discover(Some(&missing)),
        Err(Error::ConfigRead { .. })
    ));
}
