//! A parsed detection rule.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::aggregation::AggregationSpec;
use super::condition::ConditionNode;

/// A rule as produced by the rule parser.
///
/// A rule may hold several top-level conditions, each with its own optional aggregation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub title: String,
    pub conditions: Vec<ParsedCondition>,
    /// Fields to project in the output, if any were requested.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

/// One top-level condition expression of a rule.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCondition {
    pub search: ConditionNode,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<AggregationSpec>,
}

/// A rule file holds a single rule or a list of them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum RuleFile {
    Single(Box<Rule>),
    List(Vec<Rule>),
}

impl RuleFile {
    pub fn into_rules(self) -> Vec<Rule> {
        match self {
            RuleFile::Single(rule) => vec![*rule],
            RuleFile::List(rules) => rules,
        }
    }
}
