use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use query_engine_spl::spl::backend::{AggregationStrategy, UnsupportedPolicy};
use query_engine_spl::spl::templates::{Template, TemplateSet};

/// Replacements for individual templates of a backend preset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct TemplateOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub and_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub or_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grouping_format: Option<Template>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_grouping_format: Option<Template>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_separator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_quote_format: Option<Template>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_absent_format: Option<Template>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_present_format: Option<Template>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_value_format: Option<Template>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_special_handling: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_in_format: Option<Template>,
}

impl TemplateOverrides {
    pub fn is_empty(&self) -> bool {
        *self == TemplateOverrides::default()
    }

    /// Replace the templates of `templates` that are overridden.
    pub fn apply(self, templates: &mut TemplateSet) {
        fn set<T>(target: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *target = value;
            }
        }
        set(&mut templates.and_token, self.and_token);
        set(&mut templates.or_token, self.or_token);
        set(&mut templates.not_token, self.not_token);
        set(&mut templates.grouping_format, self.grouping_format);
        set(&mut templates.list_grouping_format, self.list_grouping_format);
        set(&mut templates.list_separator, self.list_separator);
        set(&mut templates.value_quote_format, self.value_quote_format);
        set(&mut templates.field_absent_format, self.field_absent_format);
        set(&mut templates.field_present_format, self.field_present_format);
        set(&mut templates.key_value_format, self.key_value_format);
        set(&mut templates.list_special_handling, self.list_special_handling);
        set(&mut templates.list_in_format, self.list_in_format);
    }
}

/// Adjustments to the aggregation behaviour of a backend preset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct AggregationOverrides {
    /// What to do with `near` aggregations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_near: Option<UnsupportedPolicy>,
    /// Render grouped counts as distinct counts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinct_count_when_grouped: Option<bool>,
}

impl AggregationOverrides {
    /// Adjust a strategy. Backends without aggregation support are left alone.
    pub fn apply(self, strategy: &mut AggregationStrategy) {
        if let AggregationStrategy::Stats {
            on_near,
            distinct_count_when_grouped,
        } = strategy
        {
            if let Some(policy) = self.on_near {
                *on_near = policy;
            }
            if let Some(substitute) = self.distinct_count_when_grouped {
                *distinct_count_when_grouped = substitute;
            }
        }
    }
}
