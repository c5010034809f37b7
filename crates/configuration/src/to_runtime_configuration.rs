//! Convert a parsed configuration into the runtime configuration.

use query_engine_spl::spl::templates::{Template, TemplateSet};

use crate::configuration::Configuration;
use crate::error::MakeRuntimeConfigurationError;
use crate::version1::ParsedConfiguration;

/// Resolve the backend preset, apply the configured adjustments and check the templates.
pub fn make_runtime_configuration(
    parsed_config: ParsedConfiguration,
) -> Result<Configuration, MakeRuntimeConfigurationError> {
    let mut backend = parsed_config.backend.preset();

    parsed_config.templates.apply(&mut backend.templates);
    if let Some(list_strategy) = parsed_config.list_strategy {
        backend.list_strategy = list_strategy;
    }
    if let Some(aggregation) = parsed_config.aggregation {
        aggregation.apply(&mut backend.aggregation_strategy);
    }
    backend.query_prefix = parsed_config.query_prefix;
    backend.query_suffix = parsed_config.query_suffix;

    check_templates(&backend.templates)?;

    Ok(Configuration {
        backend,
        field_mappings: parsed_config.field_mappings,
        dashboard: parsed_config.dashboard.unwrap_or_default(),
    })
}

/// Every template must mention the placeholders it is filled with.
fn check_templates(templates: &TemplateSet) -> Result<(), MakeRuntimeConfigurationError> {
    let required: [(&'static str, &Template, &[&'static str]); 7] = [
        ("groupingFormat", &templates.grouping_format, &["expr"]),
        ("listGroupingFormat", &templates.list_grouping_format, &["values"]),
        ("valueQuoteFormat", &templates.value_quote_format, &["value"]),
        ("fieldAbsentFormat", &templates.field_absent_format, &["field"]),
        ("fieldPresentFormat", &templates.field_present_format, &["field"]),
        ("keyValueFormat", &templates.key_value_format, &["field", "value"]),
        ("listInFormat", &templates.list_in_format, &["field", "values"]),
    ];
    for (template, value, placeholders) in required {
        for &placeholder in placeholders {
            if !value.0.contains(&format!("{{{placeholder}}}")) {
                return Err(MakeRuntimeConfigurationError::MissingPlaceholder {
                    template,
                    placeholder,
                });
            }
        }
    }
    Ok(())
}
