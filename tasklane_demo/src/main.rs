// Copyright 2026 the Tasklane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pipeline demo for Tasklane.
//!
//! Reads a fixture holding a query configuration, styling, platform context and a recorded
//! query response, runs one cycle, and prints the resulting render state as JSON.
//!
//! ```text
//! tasklane_demo [fixture.json]
//! ```
//!
//! Without an argument the bundled `fixtures/tasks.json` is used. Set `RUST_LOG=debug` to see
//! the composed query and row counts.

use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;
use tasklane_charts::{GanttPipeline, GanttStyle, RenderState};
use tasklane_query::{NerdGraphResponse, QueryConfig, TimeRange};
use tracing::info;
use tracing_subscriber::EnvFilter;

const BUNDLED_FIXTURE: &str = include_str!("../fixtures/tasks.json");

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Fixture {
    config: QueryConfig,
    style: GanttStyle,
    time_range: Option<TimeRange>,
    filters: Option<String>,
    response: NerdGraphResponse,
    width: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let fixture = load_fixture(std::env::args_os().nth(1).map(PathBuf::from))?;

    let mut pipeline = GanttPipeline::new(&fixture.style);
    if let Some(width) = fixture.width {
        pipeline = pipeline.with_width(width);
    }

    let state = match pipeline.plan(
        &fixture.config,
        fixture.time_range.as_ref(),
        fixture.filters.as_deref(),
    ) {
        Ok(plan) => {
            if let Some(subheader) = &plan.subheader {
                info!(%subheader, "time range");
            }
            info!(request = %serde_json::to_string(&plan.request)?, "request body");
            // The recorded response stands in for executing `plan.request`.
            pipeline.render(&fixture.response)
        }
        Err(err) => RenderState::from(err),
    };

    if let RenderState::Chart(spec) = &state {
        let size = spec.size(800.0);
        info!(
            rows = spec.row_count(),
            width = size.width,
            height = size.height,
            "chart ready"
        );
    }

    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

fn load_fixture(path: Option<PathBuf>) -> anyhow::Result<Fixture> {
    let text = match &path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading fixture {}", path.display()))?,
        None => BUNDLED_FIXTURE.to_owned(),
    };
    serde_json::from_str(&text).with_context(|| match &path {
        Some(path) => format!("parsing fixture {}", path.display()),
        None => "parsing bundled fixture".to_owned(),
    })
}
