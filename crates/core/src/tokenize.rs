// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Splitting a compound range expression into range tokens.

/// Characters that separate the ranges of a union.
///
/// `+` and space are equivalent: a `+` in a URL often arrives already
/// decoded as a space.
pub const UNION_SEPARATORS: [char; 2] = ['+', ' '];

/// Split `expr` into its range tokens, in order.
///
/// Every separator character ends a token, so consecutive separators yield
/// empty tokens. Those are kept and rejected later by the interval parser.
/// An empty expression yields no tokens.
///
/// ```ignore
/// assert_eq!(tokenize("1--5+10--20"), vec!["1--5", "10--20"]);
/// ```
pub fn tokenize(expr: &str) -> Vec<&str> {
    if expr.is_empty() {
        return Vec::new();
    }
    expr.split(UNION_SEPARATORS).collect()
}

#[cfg(test)]
#[path = "tokenize_tests.rs"]
mod tests;
