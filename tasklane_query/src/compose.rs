// Copyright 2026 the Tasklane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query assembly.
//!
//! The executable query is the base query followed by an optional time-range clause and an
//! optional `WHERE` filter clause. Composition is plain string concatenation: fragments are
//! neither quoted nor escaped, so callers must supply safe fragments.

use tracing::debug;

use crate::QueryConfig;

/// Keyword prefixed to the dashboard filter clause.
pub const FILTER_KEYWORD: &str = "WHERE";

/// Builds the query to execute for one render cycle.
///
/// Clause order is fixed (base, time, filter) and clauses are joined with single spaces.
/// - the time clause is used only when [`QueryConfig::use_time_picker`] is set and the
///   platform supplied a non-blank clause;
/// - the filter clause is used only when [`QueryConfig::enable_filters`] is set and the
///   filters are non-blank, and is emitted as `WHERE <filters>`.
///
/// Each fragment is trimmed before joining.
pub fn compose(
    config: &QueryConfig,
    platform_time_range: Option<&str>,
    user_filters: Option<&str>,
) -> String {
    let mut out = config.base_query().trim().to_owned();

    if config.use_time_picker
        && let Some(clause) = non_blank(platform_time_range)
    {
        push_clause(&mut out, clause);
    }

    if config.enable_filters
        && let Some(filters) = non_blank(user_filters)
    {
        push_clause(&mut out, &format!("{FILTER_KEYWORD} {filters}"));
    }

    debug!(query = %out, "composed query");
    out
}

fn non_blank(fragment: Option<&str>) -> Option<&str> {
    fragment.map(str::trim).filter(|s| !s.is_empty())
}

fn push_clause(out: &mut String, clause: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(clause);
}
