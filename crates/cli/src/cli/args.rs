// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` by every command that
//! evaluates a range argument.

use clap::Args;
use crf_core::{DomainKind, Granularity, InvalidPolicy};

use crate::config::FilterConfig;

/// Which filter reads the argument.
///
/// `--filter` picks one from `crf.toml`; the other flags describe a filter
/// ad hoc or override the configured one.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Use a filter defined in crf.toml
    #[arg(long, short = 'f', value_name = "NAME")]
    pub filter: Option<String>,

    /// Value domain (numeric, string, date)
    #[arg(long, short = 'd')]
    pub domain: Option<DomainKind>,

    /// Field the predicate applies to, as column or table.column
    #[arg(long, value_name = "FIELD")]
    pub field: Option<String>,

    /// Accept several ranges joined with '+' or spaces
    #[arg(long, short = 'm')]
    pub multiple: bool,

    /// Exclude values in the ranges instead of selecting them
    #[arg(long, short = 'x')]
    pub exclude: bool,

    /// Date granularity (fulldate, year, year_month, month, week, day)
    #[arg(long, short = 'g')]
    pub granularity: Option<Granularity>,

    /// Date format of argument values, e.g. Ymd
    #[arg(long, value_name = "FORMAT")]
    pub parse_format: Option<String>,

    /// Date format for display, e.g. "F j, Y"
    #[arg(long, value_name = "FORMAT")]
    pub display_format: Option<String>,

    /// Disallow relative dates such as "2 weeks ago"
    #[arg(long)]
    pub no_relative: bool,

    /// Read single hyphens in string arguments as spaces
    #[arg(long)]
    pub transform_dash: bool,

    /// Label for an invalid argument
    #[arg(long, value_name = "TEXT")]
    pub invalid_label: Option<String>,

    /// Label for an empty argument
    #[arg(long, value_name = "TEXT")]
    pub empty_label: Option<String>,

    /// What an invalid argument does to the query (match-nothing, match-all)
    #[arg(long, value_name = "POLICY")]
    pub on_invalid: Option<InvalidPolicy>,
}

impl FilterArgs {
    /// Layer these flags over `base`.
    ///
    /// Switches only ever turn options on; they cannot turn off an option
    /// the config file enables.
    pub fn apply_to(&self, base: FilterConfig) -> FilterConfig {
        let mut config = base;
        if let Some(domain) = self.domain {
            config.domain = domain;
        }
        if let Some(field) = &self.field {
            config.field.clone_from(field);
        }
        config.allow_multiple |= self.multiple;
        config.negate |= self.exclude;
        config.transform_dash |= self.transform_dash;
        if self.no_relative {
            config.relative_dates = Some(false);
        }
        if self.granularity.is_some() {
            config.granularity = self.granularity;
        }
        override_with(&mut config.parse_format, &self.parse_format);
        override_with(&mut config.display_format, &self.display_format);
        override_with(&mut config.invalid_label, &self.invalid_label);
        override_with(&mut config.empty_label, &self.empty_label);
        if let Some(policy) = self.on_invalid {
            config.on_invalid = policy;
        }
        config
    }
}

fn override_with(slot: &mut Option<String>, flag: &Option<String>) {
    if flag.is_some() {
        slot.clone_from(flag);
    }
}
