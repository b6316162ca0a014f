// Copyright 2026 the Tasklane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! User-facing query configuration.

use serde::{Deserialize, Serialize};

/// Query settings as stored by the visualization's configuration form.
///
/// Built fresh for each render/poll cycle; never persisted by this crate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryConfig {
    /// Account the query runs against.
    pub account_id: Option<u64>,
    /// Base query text.
    pub query: Option<String>,
    /// Let the platform time picker supply the `SINCE` clause.
    pub use_time_picker: bool,
    /// Append the dashboard's filter clause.
    pub enable_filters: bool,
}

impl QueryConfig {
    /// Creates a config for `query` against `account_id` with both toggles off.
    pub fn new(account_id: u64, query: impl Into<String>) -> Self {
        Self {
            account_id: Some(account_id),
            query: Some(query.into()),
            ..Self::default()
        }
    }

    /// Enables or disables the platform time picker.
    pub fn with_time_picker(mut self, enabled: bool) -> Self {
        self.use_time_picker = enabled;
        self
    }

    /// Enables or disables dashboard filters.
    pub fn with_filters(mut self, enabled: bool) -> Self {
        self.enable_filters = enabled;
        self
    }

    /// The base query, or `""` when unset.
    pub fn base_query(&self) -> &str {
        self.query.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_with_missing_fields() {
        let config: QueryConfig =
            serde_json::from_str(r#"{"accountId": 42, "useTimePicker": true}"#).unwrap();
        assert_eq!(config.account_id, Some(42));
        assert!(config.use_time_picker);
        assert!(!config.enable_filters);
        assert_eq!(config.base_query(), "");
    }
}
