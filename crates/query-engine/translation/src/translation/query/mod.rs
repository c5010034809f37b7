//! Translate a parsed rule.

pub mod aggregates;
pub mod fields;
pub mod filtering;

use query_engine_models::models::{FieldMapping, ParsedCondition, Rule};
use query_engine_spl::spl;
use query_engine_spl::spl::backend::Backend;

use crate::translation::dashboard::Dashboard;
use crate::translation::error::Error;

/// Translate a rule into a single query.
///
/// When a rule has several top-level conditions, every one of them is translated but only the
/// last one's query is returned. A rule without conditions has no query.
pub fn translate<M>(backend: &Backend, rule: &Rule, mapping: &M) -> Result<Option<String>, Error>
where
    M: FieldMapping + ?Sized,
{
    Ok(translate_queries(backend, rule, mapping)?.pop())
}

/// Translate a rule and add one panel per top-level condition to a dashboard.
///
/// All conditions are translated before the first panel is added, so a rule that fails leaves
/// the dashboard as it was.
pub fn translate_into_dashboard<M>(
    backend: &Backend,
    dashboard: &mut Dashboard,
    rule: &Rule,
    mapping: &M,
) -> Result<(), Error>
where
    M: FieldMapping + ?Sized,
{
    let queries = translate_queries(backend, rule, mapping)?;
    for query in &queries {
        dashboard.append_rule(&rule.title, query)?;
    }
    Ok(())
}

/// Translate every top-level condition of a rule into a complete query, in order.
pub fn translate_queries<M>(
    backend: &Backend,
    rule: &Rule,
    mapping: &M,
) -> Result<Vec<String>, Error>
where
    M: FieldMapping + ?Sized,
{
    let _span = tracing::info_span!("translate_rule", rule = %rule.title).entered();

    // an empty field list is the same as no field list.
    let projection = match rule.fields.as_deref() {
        None | Some([]) => None,
        Some(requested) => Some(spl::helpers::table_clause(&fields::translate_fields(
            requested, mapping,
        )?)),
    };

    rule.conditions
        .iter()
        .enumerate()
        .map(|(index, condition)| -> Result<String, Error> {
            let mut query = spl::string::SPL::new();
            query.append_optional(backend.query_prefix.as_deref());
            query.append_syntax(&translate_condition(backend, condition)?);
            query.append_optional(backend.query_suffix.as_deref());
            query.append_optional(projection.as_deref());

            tracing::debug!(condition = index, query = %query.spl, "translated condition");
            Ok(query.spl)
        })
        .collect()
}

/// Translate a condition's search and aggregation.
pub fn translate_condition(backend: &Backend, condition: &ParsedCondition) -> Result<String, Error> {
    let search =
        filtering::translate_expression(&backend.templates, backend.list_strategy, &condition.search)?;
    let aggregation =
        aggregates::translate(backend.aggregation_strategy, condition.aggregation.as_ref())?;
    Ok(search + &aggregation)
}
