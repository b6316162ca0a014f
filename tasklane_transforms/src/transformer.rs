// Copyright 2026 the Tasklane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Batch row transformation.

use chrono::{DateTime, Utc};
use tasklane_core::{Cell, Clock, Column, ColumnContract, RawRecord, SystemClock, TaskRow};
use tracing::{debug, trace};

use crate::coerce::extract;

/// Prefix added to the name of a task whose end time was inferred.
pub const RUNNING_MARKER: &str = "(Running) ";

/// Maps raw result records to chart rows.
///
/// Per record, each contract column is looked up and coerced (see [`crate::extract`]). Then:
/// - a row with no end time is closed at "now", its name gets [`RUNNING_MARKER`], and
///   [`TaskRow::end_inferred`] is set;
/// - a row with no start time is dropped.
///
/// Input order is preserved and nothing is sorted. Transformation never fails: bad values
/// degrade to [`Cell::Empty`] instead of aborting the batch.
#[derive(Clone, Copy, Debug, Default)]
pub struct RowTransformer<C = SystemClock> {
    clock: C,
}

impl RowTransformer {
    /// A transformer that reads the system clock.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> RowTransformer<C> {
    /// A transformer that reads "now" from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Transforms a batch, reading the clock once for the whole batch.
    pub fn transform(&self, raw: &[RawRecord]) -> Vec<TaskRow> {
        self.transform_at(raw, self.clock.now())
    }

    /// Transforms a batch using `now` as the end time of running tasks.
    pub fn transform_at(&self, raw: &[RawRecord], now: DateTime<Utc>) -> Vec<TaskRow> {
        let rows: Vec<TaskRow> = raw
            .iter()
            .filter_map(|record| transform_record(record, now))
            .collect();
        debug!(
            records = raw.len(),
            rows = rows.len(),
            running = rows.iter().filter(|r| r.end_inferred).count(),
            "transformed query results"
        );
        rows
    }
}

/// Transforms one record, or returns `None` if it has no usable start time.
pub fn transform_record(record: &RawRecord, now: DateTime<Utc>) -> Option<TaskRow> {
    let mut row = TaskRow::new(
        ColumnContract
            .columns()
            .iter()
            .map(|spec| extract(record, spec)),
    );

    if row.get(Column::End).is_empty() {
        *row.get_mut(Column::End) = Cell::Date(now);
        let name = row.get(Column::TaskName).to_string();
        *row.get_mut(Column::TaskName) = Cell::Text(format!("{RUNNING_MARKER}{name}"));
        row.end_inferred = true;
    }

    if row.get(Column::Start).is_empty() {
        trace!(task = %row.get(Column::TaskId), "dropping row without start time");
        return None;
    }
    Some(row)
}
