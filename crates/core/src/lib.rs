// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! crf-core: Contextual range filter grammar.
//!
//! Turns a single URL-supplied argument such as `1--5+10--20`,
//! `a--f`, or `2 weeks ago--yesterday` into a boundary-condition predicate
//! and a human-readable label. Values flow through four stages:
//!
//! ```text
//! tokenize -> parse_interval -> RangeSet::resolved -> compile
//! ```
//!
//! Every stage is a pure function over immutable values. The only ambient
//! input is the reference time used for relative dates, which callers inject
//! through a [`Clock`].

pub mod domain;
pub mod error;
pub mod format;
pub mod interval;
pub mod predicate;
pub mod range_set;
pub mod resolve;
pub mod sql;
pub mod tokenize;

pub use domain::{DateDomain, DomainKind, DomainRules, Granularity, ValueDomain};
pub use error::{Error, Result};
pub use format::DateFormat;
pub use interval::{parse_interval, Bound, Interval};
pub use predicate::{
    apply, compile, Applied, Condition, ConditionSink, FieldRef, InvalidPolicy, Literal,
    Predicate,
};
pub use range_set::{Labels, RangeOptions, RangeSet};
pub use resolve::{relative_instant, resolve, Clock, FixedClock, SystemClock};
pub use sql::{SqlFragment, SqlSink};
pub use tokenize::tokenize;
