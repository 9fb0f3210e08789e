//! Route Models
//!
//! Data structures rendered by the server into the route page.

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::RouteConfig;

/// One account's pending reading within a route.
///
/// The id is the account id used by the reading endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Display text (contract number and account holder)
    #[serde(default)]
    pub label: String,
    /// Only ever goes from false to true within a session
    #[serde(default)]
    pub completed: bool,
}

impl TaskItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            completed: false,
        }
    }

    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

/// Ordered worklist of accounts to visit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(rename = "routeId", deserialize_with = "string_or_number")]
    pub id: String,
    pub items: Vec<TaskItem>,
}

impl Route {
    pub fn new(id: impl Into<String>, items: Vec<TaskItem>) -> Self {
        Self { id: id.into(), items }
    }
}

/// JSON payload embedded in the page: the route plus optional endpoint config
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageSnapshot {
    #[serde(flatten)]
    pub route: Route,
    #[serde(default)]
    pub config: RouteConfig,
}

impl PageSnapshot {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

/// Templates render ids either as `"12"` or `12`; accept both.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
