// Copyright 2026 the Tasklane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core model for query-driven Gantt timelines.
//!
//! This crate holds what every other Tasklane crate agrees on:
//! - the ordered **column contract** (which aliases a query assigns, and where each value
//!   lands in a row),
//! - the **row model** ([`RawRecord`] in, [`TaskRow`] of [`Cell`]s out), and
//! - a [`Clock`] hook for the "still running" end-time policy.
//!
//! Validation and query assembly live in `tasklane_query`, row extraction in
//! `tasklane_transforms`, and chart packaging in `tasklane_charts`.

mod cell;
mod clock;
mod contract;
mod row;

pub use cell::Cell;
pub use clock::{Clock, FixedClock, SystemClock};
pub use contract::{
    COLUMN_COUNT, COLUMNS, Column, ColumnContract, ColumnKind, ColumnSpec, DEFAULT_LOOKUP,
    LookupKey,
};
pub use row::{RawRecord, TaskRow};
