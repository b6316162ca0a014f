// Copyright 2026 the Tasklane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw records in, ordered task rows out.

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::{COLUMN_COUNT, Cell, Column};

/// One record of a query result set: keys are `<alias>` or `latest.<alias>`.
///
/// Nothing about the key set is guaranteed.
pub type RawRecord = HashMap<String, serde_json::Value>;

/// One chart row: a [`Cell`] per contract column, in contract order.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskRow {
    cells: SmallVec<[Cell; COLUMN_COUNT]>,
    /// `true` when the end time was not in the data and was filled with "now".
    ///
    /// Such rows describe tasks assumed to still be running.
    pub end_inferred: bool,
}

impl TaskRow {
    /// Builds a row from per-column values.
    ///
    /// Missing trailing cells are filled with [`Cell::Empty`]; extra cells are dropped.
    pub fn new(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut cells: SmallVec<[Cell; COLUMN_COUNT]> =
            cells.into_iter().take(COLUMN_COUNT).collect();
        cells.resize(COLUMN_COUNT, Cell::Empty);
        Self {
            cells,
            end_inferred: false,
        }
    }

    /// Returns the value of a column.
    pub fn get(&self, column: Column) -> &Cell {
        &self.cells[column.index()]
    }

    /// Returns a mutable reference to the value of a column.
    pub fn get_mut(&mut self, column: Column) -> &mut Cell {
        &mut self.cells[column.index()]
    }

    /// All cells in contract order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
