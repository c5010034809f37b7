//! Type definitions of the textual tokens and formats of a query backend.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::escape;

/// A format string with named placeholders such as `{field}`.
///
/// Placeholders are substituted in a single pass, substituted text is never scanned again.
/// Unknown placeholders are emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct Template(pub String);

impl Template {
    pub fn fill(&self, arguments: &[(&str, &str)]) -> String {
        let mut filled = String::with_capacity(self.0.len());
        let mut rest = self.0.as_str();
        while let Some(start) = rest.find('{') {
            filled.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let substitution = after.find('}').and_then(|end| {
                let name = &after[..end];
                arguments
                    .iter()
                    .find(|(placeholder, _)| *placeholder == name)
                    .map(|(_, value)| (end, *value))
            });
            match substitution {
                Some((end, value)) => {
                    filled.push_str(value);
                    rest = &after[end + 1..];
                }
                None => {
                    filled.push('{');
                    rest = after;
                }
            }
        }
        filled.push_str(rest);
        filled
    }
}

impl From<&str> for Template {
    fn from(value: &str) -> Self {
        Template(value.to_string())
    }
}

/// The tokens and formats a backend renders condition trees with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSet {
    pub and_token: String,
    pub or_token: String,
    pub not_token: String,
    /// Parenthesizes a sub-expression, `{expr}`.
    pub grouping_format: Template,
    /// Wraps a list of rendered values, `{values}`.
    pub list_grouping_format: Template,
    pub list_separator: String,
    /// Quotes an escaped value, `{value}`.
    pub value_quote_format: Template,
    /// `{field}` must be missing.
    pub field_absent_format: Template,
    /// `{field}` must be present.
    pub field_present_format: Template,
    /// `{field}` compared to `{value}`.
    pub key_value_format: Template,
    /// Render list nodes with the backend's list strategy instead of the generic list grouping.
    pub list_special_handling: bool,
    /// `{field}` is one of `{values}`.
    pub list_in_format: Template,
}

impl TemplateSet {
    pub fn group(&self, expr: &str) -> String {
        self.grouping_format.fill(&[("expr", expr)])
    }

    pub fn group_list(&self, values: &[String]) -> String {
        self.list_grouping_format
            .fill(&[("values", &values.join(&self.list_separator))])
    }

    /// Escape and quote a literal string.
    pub fn quote(&self, value: &str) -> String {
        self.value_quote_format
            .fill(&[("value", &escape::escape_value(value))])
    }

    pub fn key_value(&self, field: &str, value: &str) -> String {
        self.key_value_format
            .fill(&[("field", field), ("value", value)])
    }

    pub fn field_absent(&self, field: &str) -> String {
        self.field_absent_format.fill(&[("field", field)])
    }

    pub fn field_present(&self, field: &str) -> String {
        self.field_present_format.fill(&[("field", field)])
    }

    pub fn list_in(&self, field: &str, values: &[String]) -> String {
        self.list_in_format
            .fill(&[("field", field), ("values", &self.group_list(values))])
    }
}
