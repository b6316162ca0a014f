// Copyright 2026 the Tasklane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query validation.
//!
//! Validation is a substring heuristic over the raw query text, not a parse. It catches the
//! two mistakes that make the chart unusable:
//! - a hand-written `SINCE`/`UNTIL` clause while the platform time picker injects its own, and
//! - a mandatory column alias that the query never assigns.
//!
//! False negatives (a query that passes but still does not yield the aliases) are accepted;
//! the row transformer tolerates missing fields.

use tasklane_core::{ColumnContract, ColumnSpec};
use tracing::debug;

use crate::{QueryConfig, ValidationError};

/// Keywords that open a time-bound clause.
pub const TIME_CLAUSE_KEYWORDS: &[&str] = &["SINCE", "UNTIL"];

/// Accepted ways of assigning an alias.
///
/// The `as` keyword is matched ASCII case-insensitively; the alias itself must match exactly,
/// since result keys are case-sensitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AliasSpelling {
    /// `as 'alias'`
    SingleQuoted,
    /// `as "alias"`
    DoubleQuoted,
    /// ``as `alias` ``
    Backticked,
    /// `as alias`
    Bare,
}

impl AliasSpelling {
    /// Every accepted spelling, in the order they are tried.
    pub const ALL: &'static [Self] = &[
        Self::SingleQuoted,
        Self::DoubleQuoted,
        Self::Backticked,
        Self::Bare,
    ];

    /// The text that must follow the `as` keyword for this spelling.
    pub fn suffix(self, alias: &str) -> String {
        match self {
            Self::SingleQuoted => format!(" '{alias}'"),
            Self::DoubleQuoted => format!(" \"{alias}\""),
            Self::Backticked => format!(" `{alias}`"),
            Self::Bare => format!(" {alias}"),
        }
    }

    /// Returns `true` if `query` contains this spelling of `alias`.
    pub fn matches(self, query: &str, alias: &str) -> bool {
        let suffix = self.suffix(alias);
        let bytes = query.as_bytes();
        query
            .match_indices(suffix.as_str())
            .any(|(i, _)| i >= 2 && bytes[i - 2..i].eq_ignore_ascii_case(b"as"))
    }
}

/// A configuration that passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidQuery<'a> {
    /// Account to run against.
    pub account_id: u64,
    /// The configuration that was validated.
    pub config: &'a QueryConfig,
}

/// Checks query text against the column contract.
///
/// The time-clause check runs first. Mandatory columns are then checked in contract order and
/// the first one with no accepted spelling is reported.
pub fn validate(query: &str, use_time_picker: bool) -> Result<(), ValidationError> {
    if use_time_picker && has_time_clause(query) {
        debug!("query carries its own time clause");
        return Err(ValidationError::DuplicateTimeClause);
    }
    if let Some(missing) = ColumnContract
        .mandatory()
        .find(|spec| !assigns_alias(query, spec))
    {
        debug!(alias = missing.alias, "query is missing a mandatory alias");
        return Err(ValidationError::MissingMandatoryAlias(missing.alias));
    }
    Ok(())
}

/// Validates a full configuration: required inputs first, then [`validate`].
pub fn validate_config(config: &QueryConfig) -> Result<ValidQuery<'_>, ValidationError> {
    let (Some(account_id), Some(query)) = (config.account_id, config.query.as_deref()) else {
        return Err(ValidationError::MissingQueryInputs);
    };
    if query.trim().is_empty() {
        return Err(ValidationError::MissingQueryInputs);
    }
    validate(query, config.use_time_picker)?;
    Ok(ValidQuery { account_id, config })
}

/// Returns `true` if `query` assigns the alias of `spec` in any accepted spelling.
pub fn assigns_alias(query: &str, spec: &ColumnSpec) -> bool {
    AliasSpelling::ALL
        .iter()
        .any(|spelling| spelling.matches(query, spec.alias))
}

/// Returns `true` if `query` contains a time-bound keyword as a whole word.
pub fn has_time_clause(query: &str) -> bool {
    TIME_CLAUSE_KEYWORDS
        .iter()
        .any(|kw| contains_word_ignore_case(query, kw))
}

fn contains_word_ignore_case(text: &str, word: &str) -> bool {
    let hay = text.as_bytes();
    let needle = word.as_bytes();
    if needle.is_empty() || needle.len() > hay.len() {
        return false;
    }
    (0..=hay.len() - needle.len()).any(|i| {
        let end = i + needle.len();
        hay[i..end].eq_ignore_ascii_case(needle)
            && (i == 0 || !is_word_byte(hay[i - 1]))
            && (end == hay.len() || !is_word_byte(hay[end]))
    })
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
