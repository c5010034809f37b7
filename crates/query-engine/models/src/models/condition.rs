//! The boolean condition tree of a detection rule.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A node of a rule's condition tree.
///
/// Trees are built by a rule parser and only ever read by the query engine.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ConditionNode {
    /// All children must match.
    And { children: Vec<ConditionNode> },
    /// At least one child must match.
    Or { children: Vec<ConditionNode> },
    /// The child must not match.
    Not { child: Box<ConditionNode> },
    /// A field compared against a single value, or checked for existence.
    Comparison {
        field: String,
        value: ComparisonValue,
    },
    /// A field compared against any of several values.
    List {
        field: String,
        values: Vec<serde_json::Value>,
    },
}

/// The right hand side of a comparison.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ComparisonValue {
    /// A literal value. A JSON `null` is read as `Absent`.
    Literal(serde_json::Value),
    /// The field must be missing.
    Absent,
    /// The field must be present, whatever its value.
    Present,
}

impl ConditionNode {
    /// Does this node combine other nodes?
    pub fn is_compound(&self) -> bool {
        matches!(self, ConditionNode::And { .. } | ConditionNode::Or { .. })
    }
}
