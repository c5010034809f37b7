//! A query backend: a template set composed with list and aggregation strategies.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::templates::TemplateSet;

/// How list nodes are rendered when the template set asks for special handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ListStrategy {
    /// `(x="a" OR x="b")`
    OrExpansion,
    /// `x IN ("a" "b")`
    InOperator,
}

/// What to do with an aggregation the backend cannot express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum UnsupportedPolicy {
    /// Fail the rule.
    Fail,
    /// Drop the aggregation and keep the rest of the query.
    Empty,
}

/// How aggregation specs are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AggregationStrategy {
    /// A `stats` command followed by a `search` on its result.
    #[serde(rename_all = "camelCase")]
    Stats {
        on_near: UnsupportedPolicy,
        /// Grouped `count` becomes a distinct count.
        distinct_count_when_grouped: bool,
    },
    /// The backend has no aggregation support at all.
    Unsupported { on_aggregation: UnsupportedPolicy },
}

/// The shape of a backend's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum OutputKind {
    /// One query per rule.
    SingleQuery,
    /// All rules accumulated into one dashboard document.
    Dashboard,
}

/// Everything needed to render rules for one target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Backend {
    pub templates: TemplateSet,
    pub list_strategy: ListStrategy,
    pub aggregation_strategy: AggregationStrategy,
    pub output: OutputKind,
    /// Text placed before every query.
    #[serde(default)]
    pub query_prefix: Option<String>,
    /// Text placed after every query, before the projection.
    #[serde(default)]
    pub query_suffix: Option<String>,
}

/// Splunk search language tokens.
pub fn splunk_templates() -> TemplateSet {
    TemplateSet {
        and_token: " ".to_string(),
        or_token: " OR ".to_string(),
        not_token: "NOT ".to_string(),
        grouping_format: "({expr})".into(),
        list_grouping_format: "({values})".into(),
        list_separator: " ".to_string(),
        value_quote_format: "\"{value}\"".into(),
        field_absent_format: "NOT {field}=\"*\"".into(),
        field_present_format: "{field}=\"*\"".into(),
        key_value_format: "{field}={value}".into(),
        list_special_handling: true,
        list_in_format: "{field} IN {values}".into(),
    }
}

/// Plain Splunk searches. `near` fails, grouped counts are distinct counts.
pub fn splunk() -> Backend {
    Backend {
        templates: splunk_templates(),
        list_strategy: ListStrategy::OrExpansion,
        aggregation_strategy: AggregationStrategy::Stats {
            on_near: UnsupportedPolicy::Fail,
            distinct_count_when_grouped: true,
        },
        output: OutputKind::SingleQuery,
        query_prefix: None,
        query_suffix: None,
    }
}

/// Splunk dashboard panels. `near` is dropped, counts are kept as they are.
pub fn splunk_dashboard() -> Backend {
    Backend {
        templates: splunk_templates(),
        list_strategy: ListStrategy::OrExpansion,
        aggregation_strategy: AggregationStrategy::Stats {
            on_near: UnsupportedPolicy::Empty,
            distinct_count_when_grouped: false,
        },
        output: OutputKind::Dashboard,
        query_prefix: None,
        query_suffix: None,
    }
}
