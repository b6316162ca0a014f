// Copyright 2026 the Tasklane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gantt chart packaging for Tasklane.
//!
//! This crate is the layer above `tasklane_transforms`:
//! - **Styling**: [`GanttStyle`] (user configuration, all optional) resolves into a
//!   fully-defaulted [`ResolvedGanttStyle`].
//! - **Render directives**: [`GanttChartSpec`] packages task rows, a header row and the
//!   engine option tree into a [`RenderSpec`] that serializes to the chart engine's JSON.
//! - **Pipeline**: [`GanttPipeline`] runs one poll cycle and reports a [`RenderState`].
//!
//! Drawing is out of scope; the chart engine consumes the serialized [`RenderSpec`].

mod chart_spec;
mod pipeline;
mod style;

pub use chart_spec::{
    CHART_MARGIN, CHART_TYPE, ChartOptions, GanttChartSpec, GanttOptions, GridLine, LabelStyle,
    RenderSpec, TrackFill, adapt,
};
pub use pipeline::{
    ERROR_TITLE, GanttPipeline, NO_DATA_MESSAGE, NO_DATA_TITLE, Notice, QueryPlan, RenderState,
};
pub use style::{
    DEFAULT_BAR_CORNER_RADIUS, DEFAULT_BAR_HEIGHT, DEFAULT_FONT_SIZE, DEFAULT_GRID_LINE_WIDTH,
    DEFAULT_TRACK_HEIGHT, GanttStyle, Paint, ResolvedGanttStyle,
};
