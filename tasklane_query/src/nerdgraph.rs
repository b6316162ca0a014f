// Copyright 2026 the Tasklane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! GraphQL envelope for query execution.
//!
//! Executing the request (and polling it) is up to the caller. The query text travels as a
//! GraphQL variable, so it is never spliced into the GraphQL document itself.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tasklane_core::RawRecord;
use tracing::trace;

/// GraphQL document that runs one query and returns its raw results.
pub const NRQL_RESULTS_DOCUMENT: &str = "query($accountId: Int!, $nrql: Nrql!) { actor { account(id: $accountId) { nrql(query: $nrql) { results } } } }";

/// A GraphQL request body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NerdGraphRequest {
    /// GraphQL document.
    pub query: &'static str,
    /// Document variables.
    pub variables: NrqlVariables,
}

/// Variables for [`NRQL_RESULTS_DOCUMENT`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NrqlVariables {
    /// Account to query.
    pub account_id: u64,
    /// Composed query text.
    pub nrql: String,
}

impl NerdGraphRequest {
    /// Builds the request for a composed query.
    pub fn new(account_id: u64, nrql: impl Into<String>) -> Self {
        Self {
            query: NRQL_RESULTS_DOCUMENT,
            variables: NrqlVariables {
                account_id,
                nrql: nrql.into(),
            },
        }
    }
}

/// A GraphQL response body. Every level is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NerdGraphResponse {
    data: Option<ResponseData>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct ResponseData {
    actor: Option<Actor>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct Actor {
    account: Option<Account>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct Account {
    nrql: Option<NrqlResults>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
struct NrqlResults {
    results: Option<Vec<Value>>,
}

/// One entry of a GraphQL `errors` array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GraphQlError {
    /// Error message reported by the server.
    pub message: String,
}

impl NerdGraphResponse {
    /// Parses a response body.
    pub fn from_json(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// Messages of all reported GraphQL errors.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .flatten()
            .map(|e| e.message.clone())
            .collect()
    }

    /// Returns `true` if the server reported errors.
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|e| !e.is_empty())
    }

    /// The result records, in server order.
    ///
    /// Missing levels yield no records. Entries that are not objects are skipped.
    pub fn results(&self) -> Vec<RawRecord> {
        let Some(results) = self
            .data
            .as_ref()
            .and_then(|d| d.actor.as_ref())
            .and_then(|a| a.account.as_ref())
            .and_then(|a| a.nrql.as_ref())
            .and_then(|n| n.results.as_ref())
        else {
            return Vec::new();
        };
        results
            .iter()
            .filter_map(|entry| match entry {
                Value::Object(map) => Some(
                    map.iter()
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect::<RawRecord>(),
                ),
                other => {
                    trace!(entry = %other, "skipping non-object result entry");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_carries_query_as_variable() {
        let req = NerdGraphRequest::new(42, "SELECT \"x\" FROM Tasks");
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["variables"]["accountId"], 42);
        assert_eq!(body["variables"]["nrql"], "SELECT \"x\" FROM Tasks");
        assert!(
            !body["query"].as_str().unwrap().contains("FROM Tasks"),
            "query text must not be spliced into the document"
        );
    }

    #[test]
    fn results_are_extracted_in_order() {
        let resp = NerdGraphResponse::from_json(json!({
            "data": { "actor": { "account": { "nrql": { "results": [
                { "taskId": "a" },
                42,
                { "taskId": "b", "latest.start": 1000 }
            ] } } } }
        }))
        .unwrap();
        let records = resp.results();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["taskId"], "a");
        assert_eq!(records[1]["latest.start"], 1000);
        assert!(!resp.has_errors());
    }

    #[test]
    fn missing_levels_mean_no_results() {
        let resp = NerdGraphResponse::from_json(json!({ "data": { "actor": null } })).unwrap();
        assert!(resp.results().is_empty());
        let resp = NerdGraphResponse::from_json(json!({})).unwrap();
        assert!(resp.results().is_empty());
    }

    #[test]
    fn graphql_errors_are_collected() {
        let resp = NerdGraphResponse::from_json(json!({
            "data": null,
            "errors": [{ "message": "NRQL Syntax Error" }, { "path": ["actor"] }]
        }))
        .unwrap();
        assert!(resp.has_errors());
        assert_eq!(resp.error_messages(), ["NRQL Syntax Error", ""]);
    }
}
