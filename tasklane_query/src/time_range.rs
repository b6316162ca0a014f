// Copyright 2026 the Tasklane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform time ranges.
//!
//! The dashboard time picker hands over either a rolling `duration` or a fixed
//! `begin_time`/`end_time` pair, all in epoch milliseconds. This module turns that into the
//! `SINCE` clause appended by [`crate::compose`] and into the subheader shown above the chart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
// Average Gregorian month and year.
const MS_PER_MONTH: i64 = 2_629_746_000;
const MS_PER_YEAR: i64 = 31_556_952_000;

/// Subheader used when the platform did not supply a usable range.
pub const DEFAULT_RANGE_DESCRIPTION: &str = "Since 60 minutes ago";

const SUBHEADER_DATE_FORMAT: &str = "%b %d %I:%M";

/// A time range from the platform time picker.
///
/// A positive `duration` takes precedence over the fixed bounds when describing the range; the
/// bounds take precedence when building the query clause.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeRange {
    /// Start of a fixed range, epoch millis.
    #[serde(alias = "beginTime")]
    pub begin_time: Option<i64>,
    /// End of a fixed range, epoch millis.
    #[serde(alias = "endTime")]
    pub end_time: Option<i64>,
    /// Length of a rolling range ending now, in millis.
    pub duration: Option<i64>,
}

impl TimeRange {
    /// A rolling range covering the last `duration_ms` milliseconds.
    pub fn rolling(duration_ms: i64) -> Self {
        Self {
            duration: Some(duration_ms),
            ..Self::default()
        }
    }

    /// A fixed range between two epoch-millisecond instants.
    pub fn fixed(begin_ms: i64, end_ms: i64) -> Self {
        Self {
            begin_time: Some(begin_ms),
            end_time: Some(end_ms),
            duration: None,
        }
    }

    fn positive_duration(&self) -> Option<i64> {
        self.duration.filter(|d| *d > 0)
    }

    fn bounds(&self) -> Option<(i64, i64)> {
        match (self.begin_time, self.end_time) {
            (Some(b), Some(e)) if b != 0 && e != 0 => Some((b, e)),
            _ => None,
        }
    }

    /// Converts the range to a query time clause.
    ///
    /// Returns `None` when the range carries neither bounds nor a positive duration.
    pub fn to_clause(&self) -> Option<String> {
        if let Some((begin, end)) = self.bounds() {
            return Some(format!("SINCE {begin} UNTIL {end}"));
        }
        let duration = self.positive_duration()?;
        #[allow(
            clippy::cast_precision_loss,
            reason = "picker durations are far below 2^52 ms"
        )]
        let minutes = duration as f64 / MS_PER_MINUTE as f64;
        Some(format!("SINCE {minutes} MINUTES AGO"))
    }

    /// Human readable description for the chart subheader, e.g. `Since 5 minutes ago`.
    ///
    /// Fixed bounds are rendered in UTC.
    pub fn describe(&self) -> String {
        if let Some(duration) = self.positive_duration() {
            return format!("Since {}", relative_past(duration));
        }
        if let Some((begin, end)) = self.bounds()
            && let (Some(begin), Some(end)) = (
                DateTime::<Utc>::from_timestamp_millis(begin),
                DateTime::<Utc>::from_timestamp_millis(end),
            )
        {
            return format!(
                "Since {} Until {}",
                begin.format(SUBHEADER_DATE_FORMAT),
                end.format(SUBHEADER_DATE_FORMAT)
            );
        }
        DEFAULT_RANGE_DESCRIPTION.to_owned()
    }
}

/// Describes how long ago an instant `duration_ms` in the past was.
///
/// Thresholds follow the common "relative time" wording: `a few seconds ago`, `a minute ago`,
/// `N minutes ago`, `an hour ago`, and so on up to years.
pub fn relative_past(duration_ms: i64) -> String {
    let ms = duration_ms.saturating_abs();
    let seconds = round_div(ms, MS_PER_SECOND);
    let minutes = round_div(ms, MS_PER_MINUTE);
    let hours = round_div(ms, MS_PER_HOUR);
    let days = round_div(ms, MS_PER_DAY);
    let months = round_div(ms, MS_PER_MONTH);

    let phrase = if seconds <= 44 {
        "a few seconds".to_owned()
    } else if seconds <= 89 {
        "a minute".to_owned()
    } else if minutes <= 44 {
        format!("{minutes} minutes")
    } else if minutes <= 89 {
        "an hour".to_owned()
    } else if hours <= 21 {
        format!("{hours} hours")
    } else if hours <= 35 {
        "a day".to_owned()
    } else if days <= 25 {
        format!("{days} days")
    } else if days <= 45 {
        "a month".to_owned()
    } else if months <= 10 {
        format!("{months} months")
    } else if months <= 17 {
        "a year".to_owned()
    } else {
        format!("{} years", round_div(ms, MS_PER_YEAR).max(2))
    };
    format!("{phrase} ago")
}

fn round_div(n: i64, d: i64) -> i64 {
    n.saturating_add(d / 2) / d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolling_range_becomes_minutes_ago() {
        let clause = TimeRange::rolling(30 * MS_PER_MINUTE).to_clause();
        assert_eq!(clause.as_deref(), Some("SINCE 30 MINUTES AGO"));
        let clause = TimeRange::rolling(90 * MS_PER_SECOND).to_clause();
        assert_eq!(clause.as_deref(), Some("SINCE 1.5 MINUTES AGO"));
    }

    #[test]
    fn fixed_range_uses_since_until() {
        let clause = TimeRange::fixed(1_000, 2_000).to_clause();
        assert_eq!(clause.as_deref(), Some("SINCE 1000 UNTIL 2000"));
    }

    #[test]
    fn empty_range_has_no_clause() {
        assert_eq!(TimeRange::default().to_clause(), None);
        assert_eq!(TimeRange::rolling(0).to_clause(), None);
    }

    #[test]
    fn describe_rolling_ranges() {
        assert_eq!(
            TimeRange::rolling(30 * MS_PER_MINUTE).describe(),
            "Since 30 minutes ago"
        );
        assert_eq!(TimeRange::rolling(MS_PER_HOUR).describe(), "Since an hour ago");
        assert_eq!(
            TimeRange::rolling(3 * MS_PER_HOUR).describe(),
            "Since 3 hours ago"
        );
        assert_eq!(
            TimeRange::rolling(7 * MS_PER_DAY).describe(),
            "Since 7 days ago"
        );
        assert_eq!(
            TimeRange::rolling(10 * MS_PER_SECOND).describe(),
            "Since a few seconds ago"
        );
    }

    #[test]
    fn describe_fixed_range_in_utc() {
        // 2024-03-05 14:07 UTC .. 2024-03-06 09:30 UTC
        let range = TimeRange::fixed(1_709_647_620_000, 1_709_717_400_000);
        assert_eq!(range.describe(), "Since Mar 05 02:07 Until Mar 06 09:30");
    }

    #[test]
    fn describe_falls_back_to_default() {
        assert_eq!(TimeRange::default().describe(), DEFAULT_RANGE_DESCRIPTION);
    }

    #[test]
    fn deserializes_platform_and_camel_case_keys() {
        let a: TimeRange =
            serde_json::from_str(r#"{"begin_time": 1, "end_time": 2, "duration": null}"#)
                .unwrap();
        let b: TimeRange = serde_json::from_str(r#"{"beginTime": 1, "endTime": 2}"#).unwrap();
        assert_eq!(a, b);
    }
}
