// Copyright 2026 the Tasklane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One render/poll cycle, end to end.
//!
//! A cycle has two halves separated by query execution, which the caller owns:
//! 1. [`GanttPipeline::plan`] validates the configuration and composes the query, and
//! 2. [`GanttPipeline::render`] turns the execution response into a [`RenderState`].
//!
//! Every outcome is data. Configuration problems stop the cycle before a query is composed;
//! bad records never stop it.

use serde::Serialize;
use tasklane_core::{Clock, RawRecord, SystemClock};
use tasklane_query::{
    NerdGraphRequest, NerdGraphResponse, QueryConfig, TimeRange, ValidationError, compose,
    validate_config,
};
use tasklane_transforms::RowTransformer;
use tracing::{debug, info};

use crate::{GanttChartSpec, GanttStyle, RenderSpec};

/// Title of configuration and query error notices.
pub const ERROR_TITLE: &str = "An error occurred";
/// Title of the empty-result notice.
pub const NO_DATA_TITLE: &str = "No chart data available";
/// Message of the empty-result notice.
pub const NO_DATA_MESSAGE: &str =
    "No events found -- do you have the correct event type and time range?";

/// A titled list of user-facing messages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Heading.
    pub title: String,
    /// Messages, one per problem.
    pub messages: Vec<String>,
}

impl Notice {
    /// Creates a notice.
    pub fn new(title: impl Into<String>, messages: Vec<String>) -> Self {
        Self {
            title: title.into(),
            messages,
        }
    }
}

/// What the caller should show for this cycle.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum RenderState {
    /// No account or query configured yet: show setup instructions.
    SetupRequired,
    /// The configuration is invalid.
    ConfigError(Notice),
    /// Query execution reported errors.
    QueryError(Notice),
    /// The query ran but produced no chartable rows.
    NoData(Notice),
    /// A chart to draw.
    Chart(RenderSpec),
}

impl From<ValidationError> for RenderState {
    fn from(err: ValidationError) -> Self {
        if err.is_setup_required() {
            Self::SetupRequired
        } else {
            Self::ConfigError(Notice::new(ERROR_TITLE, err.messages()))
        }
    }
}

/// The executable half of a cycle: what to send, and what to show above the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryPlan {
    /// Composed query text.
    pub nrql: String,
    /// Request body carrying the query.
    pub request: NerdGraphRequest,
    /// Time range description for the subheader, when the platform supplied a range.
    pub subheader: Option<String>,
}

/// Wires validation, composition, transformation and packaging for one chart.
#[derive(Clone, Debug)]
pub struct GanttPipeline<C = SystemClock> {
    transformer: RowTransformer<C>,
    chart: GanttChartSpec,
}

impl GanttPipeline {
    /// A pipeline reading the system clock.
    pub fn new(style: &GanttStyle) -> Self {
        Self::with_clock(style, SystemClock)
    }
}

impl<C: Clock> GanttPipeline<C> {
    /// A pipeline reading "now" from `clock`.
    pub fn with_clock(style: &GanttStyle, clock: C) -> Self {
        Self {
            transformer: RowTransformer::with_clock(clock),
            chart: GanttChartSpec::new(style),
        }
    }

    /// Sets a fixed chart width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.chart = self.chart.with_width(width);
        self
    }

    /// Validates `config` and composes the query for this cycle.
    ///
    /// `time_range` is the platform time picker's range; `filters` the dashboard filter clause.
    pub fn plan(
        &self,
        config: &QueryConfig,
        time_range: Option<&TimeRange>,
        filters: Option<&str>,
    ) -> Result<QueryPlan, ValidationError> {
        let valid = validate_config(config)?;
        let time_clause = time_range.and_then(TimeRange::to_clause);
        let nrql = compose(valid.config, time_clause.as_deref(), filters);
        info!(account_id = valid.account_id, query = %nrql, "planned gantt query");
        Ok(QueryPlan {
            request: NerdGraphRequest::new(valid.account_id, nrql.clone()),
            nrql,
            subheader: time_range.map(TimeRange::describe),
        })
    }

    /// Turns an execution response into what to show.
    pub fn render(&self, response: &NerdGraphResponse) -> RenderState {
        if response.has_errors() {
            let messages = response.error_messages();
            debug!(errors = messages.len(), "query execution reported errors");
            return RenderState::QueryError(Notice::new(ERROR_TITLE, messages));
        }
        self.render_records(&response.results())
    }

    /// Turns raw result records into what to show.
    pub fn render_records(&self, records: &[RawRecord]) -> RenderState {
        let rows = self.transformer.transform(records);
        if rows.is_empty() {
            return RenderState::NoData(Notice::new(
                NO_DATA_TITLE,
                vec![NO_DATA_MESSAGE.to_owned()],
            ));
        }
        RenderState::Chart(self.chart.render(rows))
    }

    /// Runs a whole cycle given an executor for the request.
    ///
    /// Validation failures short-circuit before `execute` is called.
    pub fn run<E>(
        &self,
        config: &QueryConfig,
        time_range: Option<&TimeRange>,
        filters: Option<&str>,
        execute: impl FnOnce(&NerdGraphRequest) -> Result<NerdGraphResponse, E>,
    ) -> Result<RenderState, E> {
        let plan = match self.plan(config, time_range, filters) {
            Ok(plan) => plan,
            Err(err) => return Ok(err.into()),
        };
        let response = execute(&plan.request)?;
        Ok(self.render(&response))
    }
}
