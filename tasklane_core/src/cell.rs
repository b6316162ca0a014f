// Copyright 2026 the Tasklane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row values.

use core::fmt;

use chrono::{DateTime, Utc};

/// A single value in a [`crate::TaskRow`].
///
/// `Empty` plays the role of the empty string in the chart engine's data table: the value was
/// missing or could not be used.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cell {
    /// Absent or unusable value.
    #[default]
    Empty,
    /// Text value.
    Text(String),
    /// Numeric value.
    Number(f64),
    /// Absolute timestamp.
    Date(DateTime<Utc>),
}

impl Cell {
    /// Returns `true` for [`Cell::Empty`] and for empty text.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns the timestamp if this is a date cell.
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Date(d) => write!(f, "{}", d.to_rfc3339()),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<DateTime<Utc>> for Cell {
    fn from(d: DateTime<Utc>) -> Self {
        Self::Date(d)
    }
}
