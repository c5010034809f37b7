//! Handle the translation of condition trees into search expressions.

use query_engine_models::models::{ComparisonValue, ConditionNode};
use query_engine_spl::spl::backend::ListStrategy;
use query_engine_spl::spl::templates::TemplateSet;

use crate::translation::error::Error;

/// Translate a condition tree into search text.
pub fn translate_expression(
    templates: &TemplateSet,
    list_strategy: ListStrategy,
    node: &ConditionNode,
) -> Result<String, Error> {
    match node {
        ConditionNode::And { children } => translate_junction(
            templates,
            list_strategy,
            children,
            &templates.and_token,
            |child| matches!(child, ConditionNode::Or { .. } | ConditionNode::Not { .. }),
        ),
        ConditionNode::Or { children } => translate_junction(
            templates,
            list_strategy,
            children,
            &templates.or_token,
            |child| matches!(child, ConditionNode::And { .. } | ConditionNode::Not { .. }),
        ),
        ConditionNode::Not { child } => {
            let expression = translate_expression(templates, list_strategy, child)?;
            if expression.is_empty() {
                Ok(expression)
            } else if child.is_compound() {
                Ok(format!("{}{}", templates.not_token, templates.group(&expression)))
            } else {
                Ok(format!("{}{}", templates.not_token, expression))
            }
        }
        ConditionNode::Comparison { field, value } => {
            translate_comparison(templates, field, value)
        }
        ConditionNode::List { field, values } => {
            translate_list(templates, list_strategy, field, values)
        }
    }
}

/// Join the children of an AND or OR node, grouping those that would otherwise bind wrongly.
/// Children that render to nothing are left out.
fn translate_junction(
    templates: &TemplateSet,
    list_strategy: ListStrategy,
    children: &[ConditionNode],
    token: &str,
    needs_grouping: impl Fn(&ConditionNode) -> bool,
) -> Result<String, Error> {
    let mut expressions = Vec::with_capacity(children.len());
    for child in children {
        let expression = translate_expression(templates, list_strategy, child)?;
        if expression.is_empty() {
            continue;
        }
        if needs_grouping(child) {
            expressions.push(templates.group(&expression));
        } else {
            expressions.push(expression);
        }
    }
    Ok(expressions.join(token))
}

fn translate_comparison(
    templates: &TemplateSet,
    field: &str,
    value: &ComparisonValue,
) -> Result<String, Error> {
    match value {
        ComparisonValue::Absent | ComparisonValue::Literal(serde_json::Value::Null) => {
            Ok(templates.field_absent(field))
        }
        ComparisonValue::Present => Ok(templates.field_present(field)),
        ComparisonValue::Literal(serde_json::Value::Bool(b)) => {
            Ok(templates.key_value(field, &templates.quote(&b.to_string())))
        }
        ComparisonValue::Literal(literal) => {
            Ok(templates.key_value(field, &translate_scalar(templates, field, literal)?))
        }
    }
}

/// Translate a list node, either through the backend's list strategy or as a generic list.
fn translate_list(
    templates: &TemplateSet,
    list_strategy: ListStrategy,
    field: &str,
    values: &[serde_json::Value],
) -> Result<String, Error> {
    let values = values
        .iter()
        .map(|value| translate_scalar(templates, field, value))
        .collect::<Result<Vec<_>, Error>>()?;

    if !templates.list_special_handling {
        return Ok(templates.key_value(field, &templates.group_list(&values)));
    }
    match list_strategy {
        ListStrategy::OrExpansion => {
            let comparisons: Vec<String> = values
                .iter()
                .map(|value| templates.key_value(field, value))
                .collect();
            Ok(templates.group(&comparisons.join(&templates.or_token)))
        }
        ListStrategy::InOperator => Ok(templates.list_in(field, &values)),
    }
}

/// Translate a string or a number. Strings are escaped and quoted, numbers are left bare.
fn translate_scalar(
    templates: &TemplateSet,
    field: &str,
    value: &serde_json::Value,
) -> Result<String, Error> {
    match value {
        serde_json::Value::String(s) => Ok(templates.quote(s)),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(Error::TypeConversion {
            field: field.to_string(),
            value: value.clone(),
        }),
    }
}
