// Copyright 2026 the Tasklane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The column contract shared by query validation and row extraction.
//!
//! The chart engine is opinionated about column order and data type, so the contract is a
//! fixed, ordered table. Both the validator (which aliases a query must assign) and the
//! transformer (where each value lands in a row) read from [`COLUMNS`], which keeps the two in
//! lockstep.

use smallvec::SmallVec;

/// Semantic type of a column, matching the chart engine's data table types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Free text.
    String,
    /// An absolute point in time.
    Date,
    /// A numeric value.
    Number,
}

impl ColumnKind {
    /// Returns the chart engine's name for this type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Date => "date",
            Self::Number => "number",
        }
    }
}

/// Identifies one column of the contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    /// Unique task instance identifier.
    TaskId,
    /// Display name of the task.
    TaskName,
    /// Start time.
    Start,
    /// End time.
    End,
    /// Duration in milliseconds.
    Duration,
    /// Completion percentage.
    PercentComplete,
    /// Comma-separated ids of tasks this one depends on.
    Dependencies,
}

impl Column {
    /// Position of this column in every [`crate::TaskRow`].
    pub fn index(self) -> usize {
        match self {
            Self::TaskId => 0,
            Self::TaskName => 1,
            Self::Start => 2,
            Self::End => 3,
            Self::Duration => 4,
            Self::PercentComplete => 5,
            Self::Dependencies => 6,
        }
    }

    /// The contract entry for this column.
    pub fn spec(self) -> &'static ColumnSpec {
        &COLUMNS[self.index()]
    }
}

/// A way of spelling a result key for a column alias.
///
/// Grouped or faceted queries name aggregate results `latest.<alias>`; plain selects use the
/// alias as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LookupKey {
    /// `latest.<alias>`
    LatestAggregate,
    /// `<alias>`
    Plain,
}

impl LookupKey {
    /// Prefix used for latest-aggregate result keys.
    pub const LATEST_PREFIX: &'static str = "latest.";

    /// Builds the result key this strategy looks up for `alias`.
    pub fn key_for(self, alias: &str) -> String {
        match self {
            Self::LatestAggregate => format!("{}{alias}", Self::LATEST_PREFIX),
            Self::Plain => alias.to_owned(),
        }
    }
}

/// Lookup order applied to every column: the aggregate spelling wins over the plain one.
pub const DEFAULT_LOOKUP: &[LookupKey] = &[LookupKey::LatestAggregate, LookupKey::Plain];

/// One entry of the column contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Which column this is.
    pub column: Column,
    /// Alias the query must assign to the value.
    pub alias: &'static str,
    /// Human readable label used in the header row.
    pub label: &'static str,
    /// Semantic type.
    pub kind: ColumnKind,
    /// Whether the chart can render without this column.
    pub mandatory: bool,
    /// Ordered result-key strategies; the first non-empty hit wins.
    pub lookup: &'static [LookupKey],
}

impl ColumnSpec {
    /// Result keys to try, in order, for this column.
    pub fn lookup_keys(&self) -> SmallVec<[String; 2]> {
        self.lookup.iter().map(|k| k.key_for(self.alias)).collect()
    }
}

const fn spec(
    column: Column,
    alias: &'static str,
    label: &'static str,
    kind: ColumnKind,
    mandatory: bool,
) -> ColumnSpec {
    ColumnSpec {
        column,
        alias,
        label,
        kind,
        mandatory,
        lookup: DEFAULT_LOOKUP,
    }
}

/// Number of columns in the contract.
pub const COLUMN_COUNT: usize = 7;

/// The ordered column contract.
pub static COLUMNS: [ColumnSpec; COLUMN_COUNT] = [
    spec(Column::TaskId, "taskId", "Task Id", ColumnKind::String, true),
    spec(Column::TaskName, "taskName", "Task Name", ColumnKind::String, true),
    spec(Column::Start, "start", "Task Start", ColumnKind::Date, true),
    spec(Column::End, "end", "Task End", ColumnKind::Date, true),
    spec(Column::Duration, "duration", "Duration", ColumnKind::Number, false),
    spec(
        Column::PercentComplete,
        "percentComplete",
        "Percent Complete",
        ColumnKind::Number,
        false,
    ),
    spec(
        Column::Dependencies,
        "dependencies",
        "Dependencies",
        ColumnKind::String,
        false,
    ),
];

/// Read-only view over [`COLUMNS`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ColumnContract;

impl ColumnContract {
    /// All columns, in output order.
    pub fn columns(self) -> &'static [ColumnSpec] {
        &COLUMNS
    }

    /// Mandatory columns, in output order.
    pub fn mandatory(self) -> impl Iterator<Item = &'static ColumnSpec> {
        COLUMNS.iter().filter(|c| c.mandatory)
    }

    /// Comma-separated list of the mandatory aliases, for user-facing messages.
    pub fn mandatory_aliases(self) -> String {
        self.mandatory()
            .map(|c| c.alias)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_the_task_identity_and_bounds_are_mandatory() {
        let mandatory: Vec<_> = ColumnContract.mandatory().map(|c| c.alias).collect();
        assert_eq!(mandatory, ["taskId", "taskName", "start", "end"]);
    }

    #[test]
    fn column_index_matches_contract_position() {
        for (i, spec) in COLUMNS.iter().enumerate() {
            assert_eq!(spec.column.index(), i, "{:?} out of place", spec.column);
        }
    }

    #[test]
    fn chart_types_follow_engine_order() {
        let kinds: Vec<_> = COLUMNS.iter().map(|c| c.kind.as_str()).collect();
        assert_eq!(
            kinds,
            ["string", "string", "date", "date", "number", "number", "string"]
        );
    }

    #[test]
    fn lookup_tries_latest_aggregate_first() {
        let keys = Column::PercentComplete.spec().lookup_keys();
        assert_eq!(keys.as_slice(), ["latest.percentComplete", "percentComplete"]);
    }
}
