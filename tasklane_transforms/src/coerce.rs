// Copyright 2026 the Tasklane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value lookup and coercion for a single column.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tasklane_core::{Cell, ColumnKind, ColumnSpec, RawRecord};
use tracing::trace;

// Largest magnitude of a valid epoch-millisecond timestamp in the chart engine.
const MAX_EPOCH_MS: f64 = 8.64e15;

/// Returns the first non-empty value for `spec`, trying its lookup keys in order.
///
/// `null` and `""` count as empty; `0` and `false` are values.
pub fn resolve<'a>(record: &'a RawRecord, spec: &ColumnSpec) -> Option<&'a Value> {
    spec.lookup
        .iter()
        .filter_map(|key| record.get(key.key_for(spec.alias).as_str()))
        .find(|v| !is_blank(v))
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Converts a resolved value into a cell of the given kind.
///
/// The cell always matches the column's declared type: date columns hold timestamps, number
/// columns numbers, and string columns text. Values that cannot be used become
/// [`Cell::Empty`].
pub fn coerce(value: &Value, kind: ColumnKind) -> Cell {
    let cell = match kind {
        ColumnKind::Date => to_timestamp(value).map(Cell::Date),
        ColumnKind::Number => to_number(value).map(Cell::Number),
        ColumnKind::String => to_text(value).map(Cell::Text),
    };
    cell.unwrap_or_else(|| {
        trace!(%value, kind = kind.as_str(), "unusable value");
        Cell::Empty
    })
}

/// Looks up and coerces the value for one column of `record`.
pub fn extract(record: &RawRecord, spec: &ColumnSpec) -> Cell {
    resolve(record, spec).map_or(Cell::Empty, |v| coerce(v, spec.kind))
}

/// Interprets a value as a finite number. Numeric strings are parsed.
pub fn to_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

/// Renders a scalar as text. Arrays and objects have no text form.
pub fn to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Interprets a value as an absolute timestamp.
///
/// Numbers are epoch milliseconds. Strings may be RFC 3339 or integer epoch milliseconds.
pub fn to_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => {
            if let Some(ms) = n.as_i64() {
                return DateTime::from_timestamp_millis(ms);
            }
            let ms = n.as_f64().filter(|f| f.is_finite() && f.abs() <= MAX_EPOCH_MS)?;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "bounded by MAX_EPOCH_MS, well inside the i64 range"
            )]
            let ms = ms.round() as i64;
            DateTime::from_timestamp_millis(ms)
        }
        Value::String(s) => {
            let s = s.trim();
            DateTime::parse_from_rfc3339(s)
                .map(|d| d.with_timezone(&Utc))
                .ok()
                .or_else(|| s.parse::<i64>().ok().and_then(DateTime::from_timestamp_millis))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tasklane_core::Column;

    use super::*;

    fn record(v: Value) -> RawRecord {
        match v {
            Value::Object(map) => map.into_iter().collect(),
            _ => RawRecord::new(),
        }
    }

    #[test]
    fn latest_aggregate_wins_over_plain() {
        let r = record(json!({ "latest.taskName": "agg", "taskName": "plain" }));
        assert_eq!(resolve(&r, Column::TaskName.spec()), Some(&json!("agg")));
    }

    #[test]
    fn blank_aggregate_falls_back_to_plain() {
        let r = record(json!({ "latest.taskName": "", "taskName": "plain" }));
        assert_eq!(resolve(&r, Column::TaskName.spec()), Some(&json!("plain")));
        let r = record(json!({ "latest.taskName": null, "taskName": "plain" }));
        assert_eq!(resolve(&r, Column::TaskName.spec()), Some(&json!("plain")));
    }

    #[test]
    fn zero_is_a_value() {
        let r = record(json!({ "percentComplete": 0 }));
        assert_eq!(
            extract(&r, Column::PercentComplete.spec()),
            Cell::Number(0.0)
        );
    }

    #[test]
    fn dates_accept_millis_and_rfc3339() {
        let epoch = DateTime::from_timestamp_millis(1_000).unwrap();
        assert_eq!(to_timestamp(&json!(1000)), Some(epoch));
        assert_eq!(to_timestamp(&json!(1000.4)), Some(epoch));
        assert_eq!(to_timestamp(&json!("1000")), Some(epoch));
        assert_eq!(
            to_timestamp(&json!("1970-01-01T00:00:01Z")),
            Some(epoch)
        );
        assert_eq!(to_timestamp(&json!("yesterday")), None);
        assert_eq!(to_timestamp(&json!(true)), None);
        assert_eq!(to_timestamp(&json!(1e300)), None);
    }

    #[test]
    fn string_columns_render_scalars_as_text() {
        assert_eq!(coerce(&json!(7), ColumnKind::String), Cell::from("7"));
        assert_eq!(coerce(&json!(2.5), ColumnKind::String), Cell::from("2.5"));
        assert_eq!(coerce(&json!(true), ColumnKind::String), Cell::from("true"));
        assert_eq!(coerce(&json!([1, 2]), ColumnKind::String), Cell::Empty);
        assert_eq!(coerce(&json!({ "a": 1 }), ColumnKind::String), Cell::Empty);
    }

    #[test]
    fn number_columns_parse_numeric_text_and_drop_the_rest() {
        assert_eq!(coerce(&json!("50"), ColumnKind::Number), Cell::Number(50.0));
        assert_eq!(coerce(&json!(" 1.5 "), ColumnKind::Number), Cell::Number(1.5));
        assert_eq!(coerce(&json!(12), ColumnKind::Number), Cell::Number(12.0));
        assert_eq!(coerce(&json!("half"), ColumnKind::Number), Cell::Empty);
        assert_eq!(coerce(&json!("NaN"), ColumnKind::Number), Cell::Empty);
        assert_eq!(coerce(&json!(true), ColumnKind::Number), Cell::Empty);
        assert_eq!(coerce(&json!([50]), ColumnKind::Number), Cell::Empty);
    }

    #[test]
    fn mixed_record_matches_column_types() {
        let r = record(json!({
            "taskId": 7, "duration": "50", "percentComplete": true, "dependencies": 3
        }));
        assert_eq!(extract(&r, Column::TaskId.spec()), Cell::from("7"));
        assert_eq!(extract(&r, Column::Duration.spec()), Cell::Number(50.0));
        assert_eq!(extract(&r, Column::PercentComplete.spec()), Cell::Empty);
        assert_eq!(extract(&r, Column::Dependencies.spec()), Cell::from("3"));
    }
}
