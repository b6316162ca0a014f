// Copyright 2026 the Tasklane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gantt render directives.
//!
//! A [`GanttChartSpec`] owns the resolved styling and packages transformed rows into a
//! [`RenderSpec`]: the header row, the data rows, and the option tree the external chart
//! engine expects. Chart height grows with the number of tasks:
//! `track_height * rows + CHART_MARGIN`.

use chrono::{Datelike, Timelike};
use kurbo::Size;
use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};
use tasklane_core::{COLUMNS, Cell, ColumnSpec, TaskRow};
use tracing::debug;

use crate::{GanttStyle, Paint, ResolvedGanttStyle};

/// Vertical space reserved for the time axis, on top of the tracks.
pub const CHART_MARGIN: f64 = 50.0;

/// Chart engine type name.
pub const CHART_TYPE: &str = "Gantt";

/// Builds [`RenderSpec`]s from task rows.
#[derive(Clone, Debug, PartialEq)]
pub struct GanttChartSpec {
    /// Styling with all defaults applied.
    pub style: ResolvedGanttStyle,
    /// Fixed chart width; `None` lets the container decide.
    pub width: Option<f64>,
}

impl GanttChartSpec {
    /// Creates a spec from user styling.
    pub fn new(style: &GanttStyle) -> Self {
        Self {
            style: style.resolve(),
            width: None,
        }
    }

    /// Sets a fixed chart width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Total chart height for `row_count` tasks.
    pub fn height_for(&self, row_count: usize) -> f64 {
        #[allow(
            clippy::cast_precision_loss,
            reason = "row counts are far below 2^52"
        )]
        let rows = row_count as f64;
        self.style.track_height * rows + CHART_MARGIN
    }

    /// Packages `rows` for the chart engine.
    pub fn render(&self, rows: Vec<TaskRow>) -> RenderSpec {
        let s = &self.style;
        let options = ChartOptions {
            width: self.width,
            height: self.height_for(rows.len()),
            gantt: GanttOptions {
                critical_path_enabled: false,
                track_height: s.track_height,
                bar_height: s.bar_height,
                bar_corner_radius: s.bar_corner_radius,
                label_style: LabelStyle {
                    font_name: "inherit",
                    font_size: s.font_size,
                    font_color: s.font_color,
                },
                inner_grid_horiz_line: GridLine {
                    stroke: s.grid_line_color,
                    stroke_width: s.grid_line_width,
                },
                inner_grid_track: TrackFill {
                    fill: s.grid_track_color,
                },
                inner_grid_dark_track: TrackFill {
                    fill: s.grid_alternate_track_color,
                },
                sort_tasks: s.sort_tasks,
            },
        };
        debug!(rows = rows.len(), height = options.height, "packaged gantt chart");
        RenderSpec {
            header: &COLUMNS,
            rows,
            options,
        }
    }
}

/// Packages rows with the given styling, using the container width.
pub fn adapt(rows: Vec<TaskRow>, style: &GanttStyle) -> RenderSpec {
    GanttChartSpec::new(style).render(rows)
}

/// Everything the chart engine needs to draw one Gantt chart.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSpec {
    /// Header row: the column contract.
    pub header: &'static [ColumnSpec],
    /// Data rows, in input order.
    pub rows: Vec<TaskRow>,
    /// Chart engine options.
    pub options: ChartOptions,
}

impl RenderSpec {
    /// Returns `true` when there are no data rows (the table is header-only).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Chart size, using `available_width` when no fixed width was set.
    pub fn size(&self, available_width: f64) -> Size {
        Size::new(
            self.options.width.unwrap_or(available_width),
            self.options.height,
        )
    }
}

impl Serialize for RenderSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("RenderSpec", 3)?;
        st.serialize_field("chartType", CHART_TYPE)?;
        st.serialize_field(
            "data",
            &DataTable {
                header: self.header,
                rows: &self.rows,
            },
        )?;
        st.serialize_field("options", &self.options)?;
        st.end()
    }
}

/// Top-level chart options.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    /// Fixed width, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Total height.
    pub height: f64,
    /// Gantt-specific options.
    pub gantt: GanttOptions,
}

/// Gantt-specific chart engine options.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttOptions {
    /// Highlight the critical path; always off.
    pub critical_path_enabled: bool,
    /// Height of one task track.
    pub track_height: f64,
    /// Bar height.
    pub bar_height: f64,
    /// Bar corner radius.
    pub bar_corner_radius: f64,
    /// Task label styling.
    pub label_style: LabelStyle,
    /// Horizontal gridlines.
    pub inner_grid_horiz_line: GridLine,
    /// Even track fill.
    pub inner_grid_track: TrackFill,
    /// Odd track fill.
    pub inner_grid_dark_track: TrackFill,
    /// Task sorting, if configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_tasks: Option<bool>,
}

/// Task label styling.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelStyle {
    /// Font family.
    pub font_name: &'static str,
    /// Font size.
    pub font_size: f64,
    /// Font color.
    pub font_color: Paint,
}

/// Gridline stroke.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLine {
    /// Stroke color, if configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Paint>,
    /// Stroke width.
    pub stroke_width: f64,
}

/// Track background fill.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrackFill {
    /// Fill color.
    pub fill: Paint,
}

struct DataTable<'a> {
    header: &'a [ColumnSpec],
    rows: &'a [TaskRow],
}

impl Serialize for DataTable<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len() + 1))?;
        seq.serialize_element(&HeaderRow(self.header))?;
        for row in self.rows {
            seq.serialize_element(&DataRow(row))?;
        }
        seq.end()
    }
}

struct HeaderRow<'a>(&'a [ColumnSpec]);

impl Serialize for HeaderRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for spec in self.0 {
            seq.serialize_element(&HeaderCell(spec))?;
        }
        seq.end()
    }
}

struct HeaderCell<'a>(&'a ColumnSpec);

impl Serialize for HeaderCell<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("Column", 3)?;
        st.serialize_field("id", self.0.alias)?;
        st.serialize_field("label", self.0.label)?;
        st.serialize_field("type", self.0.kind.as_str())?;
        st.end()
    }
}

struct DataRow<'a>(&'a TaskRow);

impl Serialize for DataRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let cells = self.0.cells();
        let mut seq = serializer.serialize_seq(Some(cells.len()))?;
        for cell in cells {
            seq.serialize_element(&CellValue(cell))?;
        }
        seq.end()
    }
}

struct CellValue<'a>(&'a Cell);

impl Serialize for CellValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Cell::Empty => serializer.serialize_str(""),
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::Number(n) => serializer.serialize_f64(*n),
            // Chart engine date literal; months are zero-based.
            Cell::Date(d) => serializer.serialize_str(&format!(
                "Date({}, {}, {}, {}, {}, {}, {})",
                d.year(),
                d.month0(),
                d.day(),
                d.hour(),
                d.minute(),
                d.second(),
                d.timestamp_subsec_millis()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use serde_json::json;
    use tasklane_core::COLUMN_COUNT;

    use super::*;

    fn row(name: &str, start_ms: i64, end_ms: i64) -> TaskRow {
        TaskRow::new([
            Cell::from("id"),
            Cell::from(name),
            Cell::Date(DateTime::from_timestamp_millis(start_ms).unwrap()),
            Cell::Date(DateTime::from_timestamp_millis(end_ms).unwrap()),
        ])
    }

    #[test]
    fn height_is_tracks_plus_margin() {
        let spec = adapt(vec![row("a", 0, 1), row("b", 0, 1)], &GanttStyle::default());
        assert_eq!(spec.options.height, 25.0 * 2.0 + CHART_MARGIN);
        assert_eq!(spec.size(800.0), Size::new(800.0, 100.0));
    }

    #[test]
    fn empty_rows_give_header_only_table() {
        let spec = adapt(Vec::new(), &GanttStyle::default());
        assert!(spec.is_empty());
        assert_eq!(spec.options.height, CHART_MARGIN);
        let json = serde_json::to_value(&spec).unwrap();
        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].as_array().unwrap().len(), COLUMN_COUNT);
        assert_eq!(data[0][2], json!({ "id": "start", "label": "Task Start", "type": "date" }));
    }

    #[test]
    fn rows_serialize_in_contract_order() {
        let spec = adapt(vec![row("Build", 1_000, 86_401_000)], &GanttStyle::default());
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(
            json["data"][1],
            json!([
                "id",
                "Build",
                "Date(1970, 0, 1, 0, 0, 1, 0)",
                "Date(1970, 0, 2, 0, 0, 1, 0)",
                "",
                "",
                ""
            ])
        );
    }

    #[test]
    fn options_mirror_resolved_style() {
        let style = GanttStyle {
            grid_line_color: Some("black".to_owned()),
            ..GanttStyle::default()
        };
        let spec = GanttChartSpec::new(&style).with_width(640.0).render(Vec::new());
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["chartType"], "Gantt");
        assert_eq!(
            json["options"],
            json!({
                "width": 640.0,
                "height": 50.0,
                "gantt": {
                    "criticalPathEnabled": false,
                    "trackHeight": 25.0,
                    "barHeight": 24.0,
                    "barCornerRadius": 1.0,
                    "labelStyle": { "fontName": "inherit", "fontSize": 10.0, "fontColor": "inherit" },
                    "innerGridHorizLine": { "stroke": "black", "strokeWidth": 1.0 },
                    "innerGridTrack": { "fill": "white" },
                    "innerGridDarkTrack": { "fill": "white" }
                }
            })
        );
    }
}
