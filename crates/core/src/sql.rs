// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering predicates as parameterized SQL.
//!
//! Values never appear in the SQL text. Each bound becomes a `?` placeholder
//! and its value is appended to [`SqlFragment::params`] in placeholder order.

use serde::Serialize;

use crate::predicate::{Applied, ConditionSink, FieldRef, Literal};

/// A WHERE-clause fragment with positional parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SqlFragment {
    pub sql: String,
    pub params: Vec<Literal>,
    #[serde(skip)]
    grouped: bool,
}

impl SqlFragment {
    fn new(sql: String, params: Vec<Literal>) -> Self {
        SqlFragment {
            sql,
            params,
            grouped: false,
        }
    }

    /// A condition no row satisfies.
    pub fn never() -> Self {
        SqlFragment::new("1 = 0".to_string(), Vec::new())
    }

    /// Render the effect of a range argument.
    ///
    /// Returns `None` when the query is left unfiltered.
    pub fn from_applied(applied: &Applied) -> Option<Self> {
        match applied {
            Applied::Unfiltered => None,
            Applied::MatchNothing => Some(SqlFragment::never()),
            Applied::Predicate(predicate) => Some(predicate.render(&mut SqlSink)),
        }
    }
}

/// [`ConditionSink`] producing [`SqlFragment`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlSink;

impl ConditionSink for SqlSink {
    type Condition = SqlFragment;

    fn equals(&mut self, field: &FieldRef, value: &Literal) -> SqlFragment {
        SqlFragment::new(format!("{field} = ?"), vec![value.clone()])
    }

    fn between(&mut self, field: &FieldRef, low: &Literal, high: &Literal) -> SqlFragment {
        SqlFragment::new(
            format!("{field} BETWEEN ? AND ?"),
            vec![low.clone(), high.clone()],
        )
    }

    fn less_or_equal(&mut self, field: &FieldRef, value: &Literal) -> SqlFragment {
        SqlFragment::new(format!("{field} <= ?"), vec![value.clone()])
    }

    fn greater_or_equal(&mut self, field: &FieldRef, value: &Literal) -> SqlFragment {
        SqlFragment::new(format!("{field} >= ?"), vec![value.clone()])
    }

    fn or(&mut self, conditions: Vec<SqlFragment>) -> SqlFragment {
        if conditions.len() < 2 {
            return conditions
                .into_iter()
                .next()
                .unwrap_or_else(SqlFragment::never);
        }

        let mut parts = Vec::with_capacity(conditions.len());
        let mut params = Vec::new();
        for condition in conditions {
            parts.push(condition.sql);
            params.extend(condition.params);
        }
        SqlFragment {
            sql: format!("({})", parts.join(" OR ")),
            params,
            grouped: true,
        }
    }

    fn not(&mut self, condition: SqlFragment) -> SqlFragment {
        let sql = if condition.grouped {
            format!("NOT {}", condition.sql)
        } else {
            format!("NOT ({})", condition.sql)
        };
        SqlFragment::new(sql, condition.params)
    }
}

#[cfg(test)]
#[path = "sql_tests.rs"]
mod tests;
