// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Value domains and their validation rules.
//!
//! A [`ValueDomain`] decides whether a bound fragment is acceptable and how
//! two fragments order. Each variant exposes those two questions through the
//! [`DomainRules`] capability, so parsing never inspects the variant itself.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::format::DateFormat;

/// Validation and ordering for the values of one domain.
pub trait DomainRules {
    /// Returns true if `fragment` may be used as a bound.
    fn accepts(&self, fragment: &str) -> bool;

    /// Order two accepted fragments.
    ///
    /// Returns `None` when the values cannot be ordered yet (for example an
    /// unresolved relative date). Ordering is then checked after resolution.
    fn compare(&self, low: &str, high: &str) -> Option<Ordering>;
}

/// Signed decimal numbers, ordered numerically.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericRules;

impl DomainRules for NumericRules {
    fn accepts(&self, fragment: &str) -> bool {
        parse_number(fragment).is_some()
    }

    fn compare(&self, low: &str, high: &str) -> Option<Ordering> {
        // Integers compare exactly; f64 loses precision past 2^53.
        if let (Ok(low), Ok(high)) = (low.parse::<i128>(), high.parse::<i128>()) {
            return Some(low.cmp(&high));
        }
        parse_number(low)?.partial_cmp(&parse_number(high)?)
    }
}

/// Any non-empty string, ordered by codepoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexRules;

impl DomainRules for LexRules {
    fn accepts(&self, fragment: &str) -> bool {
        !fragment.is_empty()
    }

    fn compare(&self, low: &str, high: &str) -> Option<Ordering> {
        Some(low.cmp(high))
    }
}

fn parse_number(fragment: &str) -> Option<f64> {
    // f64 parsing also accepts "inf" and "NaN", which are not decimal numbers.
    if !fragment.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    fragment.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Date resolution of a date argument.
///
/// Each granularity fixes a display format (for people) and a parse format
/// (for URL values).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    #[default]
    #[serde(alias = "full_date")]
    Fulldate,
    Year,
    YearMonth,
    Month,
    Week,
    Day,
}

impl Granularity {
    /// Returns valid granularity names for help text.
    pub fn valid_names() -> &'static str {
        "fulldate, year, year_month, month, week, day"
    }

    /// Format used when showing values to people.
    pub fn display_format(self) -> &'static str {
        match self {
            Granularity::Fulldate => "F j, Y",
            Granularity::Year => "Y",
            Granularity::YearMonth => "F Y",
            Granularity::Month => "F",
            Granularity::Week => "w",
            Granularity::Day => "j",
        }
    }

    /// Format that URL values are written in.
    pub fn parse_format(self) -> &'static str {
        match self {
            Granularity::Fulldate => "Ymd",
            Granularity::Year => "Y",
            Granularity::YearMonth => "Ym",
            Granularity::Month => "m",
            Granularity::Week => "W",
            Granularity::Day => "d",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Granularity::Fulldate => "fulldate",
            Granularity::Year => "year",
            Granularity::YearMonth => "year_month",
            Granularity::Month => "month",
            Granularity::Week => "week",
            Granularity::Day => "day",
        };
        f.write_str(name)
    }
}

impl FromStr for Granularity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "fulldate" | "full_date" | "date" => Ok(Granularity::Fulldate),
            "year" => Ok(Granularity::Year),
            "year_month" => Ok(Granularity::YearMonth),
            "month" => Ok(Granularity::Month),
            "week" => Ok(Granularity::Week),
            "day" => Ok(Granularity::Day),
            _ => Err(Error::UnknownGranularity(s.to_string())),
        }
    }
}

/// Date domain: formats plus whether relative phrases are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateDomain {
    display_format: DateFormat,
    parse_format: DateFormat,
    relative_enabled: bool,
}

impl DateDomain {
    /// Create a date domain from explicit formats.
    pub fn new(display_format: &str, parse_format: &str, relative_enabled: bool) -> Result<Self> {
        Ok(DateDomain {
            display_format: DateFormat::new(display_format)?,
            parse_format: DateFormat::new(parse_format)?,
            relative_enabled,
        })
    }

    /// Create a date domain with the formats of a granularity preset.
    pub fn with_granularity(granularity: Granularity, relative_enabled: bool) -> Result<Self> {
        Self::new(
            granularity.display_format(),
            granularity.parse_format(),
            relative_enabled,
        )
    }

    pub fn display_format(&self) -> &DateFormat {
        &self.display_format
    }

    pub fn parse_format(&self) -> &DateFormat {
        &self.parse_format
    }

    pub fn relative_enabled(&self) -> bool {
        self.relative_enabled
    }

    /// Render a value written in the parse format with the display format.
    ///
    /// Returns `None` if `value` is not in the parse format.
    pub fn display_value(&self, value: &str) -> Option<String> {
        let instant = self.parse_format.to_datetime(value)?;
        Some(self.display_format.format(&instant))
    }
}

impl DomainRules for DateDomain {
    /// With relative dates enabled any non-empty fragment is accepted here and
    /// checked for real when it is resolved.
    fn accepts(&self, fragment: &str) -> bool {
        if self.relative_enabled {
            !fragment.is_empty()
        } else {
            self.parse_format.accepts(fragment)
        }
    }

    fn compare(&self, low: &str, high: &str) -> Option<Ordering> {
        self.parse_format.compare(low, high)
    }
}

/// The kind of values an argument holds, without per-domain settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainKind {
    #[default]
    Numeric,
    #[serde(alias = "lexstring", alias = "text")]
    String,
    Date,
}

impl DomainKind {
    /// Returns valid domain names for help text.
    pub fn valid_names() -> &'static str {
        "numeric, string, date"
    }
}

impl FromStr for DomainKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "numeric" | "number" => Ok(DomainKind::Numeric),
            "string" | "lexstring" | "text" => Ok(DomainKind::String),
            "date" => Ok(DomainKind::Date),
            _ => Err(Error::UnknownDomain(s.to_string())),
        }
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainKind::Numeric => write!(f, "numeric"),
            DomainKind::String => write!(f, "string"),
            DomainKind::Date => write!(f, "date"),
        }
    }
}

/// The domain a range argument ranges over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueDomain {
    Numeric,
    LexString,
    Date(DateDomain),
}

impl ValueDomain {
    /// The validation rules for this domain.
    pub fn rules(&self) -> &dyn DomainRules {
        match self {
            ValueDomain::Numeric => &NumericRules,
            ValueDomain::LexString => &LexRules,
            ValueDomain::Date(date) => date,
        }
    }

    pub fn kind(&self) -> DomainKind {
        match self {
            ValueDomain::Numeric => DomainKind::Numeric,
            ValueDomain::LexString => DomainKind::String,
            ValueDomain::Date(_) => DomainKind::Date,
        }
    }

    /// The date settings, if this is a date domain.
    pub fn as_date(&self) -> Option<&DateDomain> {
        match self {
            ValueDomain::Date(date) => Some(date),
            _ => None,
        }
    }

    /// Returns true if bounds must be resolved before compiling.
    pub fn needs_resolution(&self) -> bool {
        self.as_date().is_some_and(DateDomain::relative_enabled)
    }
}

#[cfg(test)]
#[path = "domain_tests.rs"]
mod tests;
