// Copyright 2026 the Tasklane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query-side plumbing for Tasklane.
//!
//! This crate provides:
//! - [`validate`]/[`validate_config`]: a lenient substring check that a query assigns every
//!   mandatory column alias and does not fight the platform time picker,
//! - [`compose`]: assembly of the executable query from base text, time range and filters,
//! - [`TimeRange`]: the platform time picker range as a clause and as a subheader, and
//! - [`NerdGraphRequest`]/[`NerdGraphResponse`]: the GraphQL envelope around execution.
//!
//! Nothing here performs I/O.

mod compose;
mod config;
mod error;
mod nerdgraph;
mod time_range;
mod validate;

pub use compose::{FILTER_KEYWORD, compose};
pub use config::QueryConfig;
pub use error::ValidationError;
pub use nerdgraph::{
    GraphQlError, NRQL_RESULTS_DOCUMENT, NerdGraphRequest, NerdGraphResponse, NrqlVariables,
};
pub use time_range::{DEFAULT_RANGE_DESCRIPTION, TimeRange, relative_past};
pub use validate::{
    AliasSpelling, TIME_CLAUSE_KEYWORDS, ValidQuery, assigns_alias, has_time_clause, validate,
    validate_config,
};
