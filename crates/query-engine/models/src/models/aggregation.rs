//! Statistical post-filters applied after a rule's main match.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The statistic computed over the matched events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AggregationFunction {
    Count,
    Sum,
    Min,
    Max,
    Avg,
    DistinctCount,
    /// Temporal proximity of other matches. Only some backends can express it.
    Near,
}

/// An aggregation such as "count of matches by host > 5".
///
/// `comparison_op` and `threshold` are passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AggregationSpec {
    pub function: AggregationFunction,
    #[serde(default)]
    pub aggfield: Option<String>,
    #[serde(default)]
    pub groupfield: Option<String>,
    pub comparison_op: String,
    pub threshold: Threshold,
}

/// The value an aggregate is compared against. Rendered as written.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum Threshold {
    Number(#[schemars(with = "f64")] serde_json::Number),
    Text(String),
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::Number(number) => write!(f, "{number}"),
            Threshold::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<&str> for Threshold {
    fn from(value: &str) -> Self {
        Threshold::Text(value.to_string())
    }
}

impl From<String> for Threshold {
    fn from(value: String) -> Self {
        Threshold::Text(value)
    }
}

impl From<i64> for Threshold {
    fn from(value: i64) -> Self {
        Threshold::Number(value.into())
    }
}

impl AggregationSpec {
    /// An ungrouped aggregation.
    pub fn new(
        function: AggregationFunction,
        aggfield: Option<String>,
        comparison_op: impl Into<String>,
        threshold: impl Into<Threshold>,
    ) -> Self {
        AggregationSpec {
            function,
            aggfield,
            groupfield: None,
            comparison_op: comparison_op.into(),
            threshold: threshold.into(),
        }
    }

    /// Group the aggregation by a field.
    pub fn grouped_by(mut self, groupfield: impl Into<String>) -> Self {
        self.groupfield = Some(groupfield.into());
        self
    }
}
