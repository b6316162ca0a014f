// Copyright 2026 the Tasklane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wall-clock hook.
//!
//! Rows without an end time are closed at "now". Transforms take the current time from a
//! [`Clock`] so callers (and tests) can pin it.

use chrono::{DateTime, Utc};

/// Source of the current time.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
