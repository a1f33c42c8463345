//! Linear boolean query grammar.
//!
//! A query is a flat list of tokens. The keywords `and`, `or` and `not`
//! (any case) set the connective for the next term; every other token is a
//! term. Terms without a preceding keyword are joined with AND. There is no
//! grouping and no precedence: clauses fold strictly left to right.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::is_valid_term;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operator {
    #[default]
    And,
    Or,
    Not,
}

impl Operator {
    /// Matches a token against the operator keywords, ignoring ASCII case.
    pub fn from_keyword(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("and") {
            Some(Operator::And)
        } else if token.eq_ignore_ascii_case("or") {
            Some(Operator::Or)
        } else if token.eq_ignore_ascii_case("not") {
            Some(Operator::Not)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(operator, term)` step of a parsed query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryClause {
    pub op: Operator,
    /// The term exactly as supplied; no normalization happens here.
    pub term: String,
}

impl QueryClause {
    pub fn new(op: Operator, term: impl Into<String>) -> Self {
        Self { op, term: term.into() }
    }
}

/// Parses raw query tokens into clauses.
///
/// Blank and over-long tokens are skipped without touching the pending
/// operator. A keyword followed by another keyword is overwritten, and a
/// trailing keyword yields nothing.
pub fn parse_query<S: AsRef<str>>(tokens: &[S]) -> Vec<QueryClause> {
    let mut clauses = Vec::new();
    let mut current = Operator::And;
    for token in tokens {
        let token = token.as_ref();
        if !is_valid_term(token) {
            continue;
        }
        match Operator::from_keyword(token) {
            Some(op) => current = op,
            None => {
                clauses.push(QueryClause::new(current, token));
                current = Operator::And;
            }
        }
    }
    clauses
}
