// Copyright 2026 the Tasklane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors reported before a query runs.

use tasklane_core::ColumnContract;
use thiserror::Error;

/// Configuration problems detected before any query is composed or executed.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// No account id or no query text was configured.
    #[error("Select an account and enter a query to populate the chart.")]
    MissingQueryInputs,

    /// The query brings its own time clause while the platform time picker is on.
    #[error(
        "Query includes multiple SINCE clauses; SINCE clauses are automatically calculated using the platform timepicker, so it isn't necessary to include one in your query string."
    )]
    DuplicateTimeClause,

    /// A mandatory column alias is never assigned by the query.
    #[error(
        "Query is missing the mandatory alias '{0}'. Mandatory aliases: {aliases}",
        aliases = ColumnContract.mandatory_aliases()
    )]
    MissingMandatoryAlias(&'static str),
}

impl ValidationError {
    /// `true` when the chart has not been set up yet, as opposed to being set up wrong.
    pub fn is_setup_required(&self) -> bool {
        matches!(self, Self::MissingQueryInputs)
    }

    /// User-facing messages for this error.
    pub fn messages(&self) -> Vec<String> {
        vec![self.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_alias_message_names_the_alias_and_the_full_list() {
        let err = ValidationError::MissingMandatoryAlias("end");
        assert_eq!(
            err.to_string(),
            "Query is missing the mandatory alias 'end'. \
             Mandatory aliases: taskId, taskName, start, end"
        );
        assert!(!err.is_setup_required());
        assert!(ValidationError::MissingQueryInputs.is_setup_required());
    }
}
