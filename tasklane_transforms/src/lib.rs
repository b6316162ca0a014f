// Copyright 2026 the Tasklane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query results to Gantt task rows.
//!
//! This crate turns the schema-less records returned by a query into [`TaskRow`]s that follow
//! the column contract from `tasklane_core`:
//! - each column is resolved through its ordered lookup keys (`latest.<alias>`, then `<alias>`),
//! - each value is coerced to its column's type (timestamp, number or text), and
//! - rows without an end are treated as still running; rows without a start are dropped.
//!
//! [`TaskRow`]: tasklane_core::TaskRow

mod coerce;
mod transformer;

pub use coerce::{coerce, extract, resolve, to_number, to_text, to_timestamp};
pub use transformer::{RUNNING_MARKER, RowTransformer, transform_record};
