//! Helpers for building the pipeline commands that follow a search.

use query_engine_models::models::AggregationFunction;

/// The `stats` name of an aggregation function. `near` has none.
pub fn stats_function_name(function: AggregationFunction) -> Option<&'static str> {
    match function {
        AggregationFunction::Count => Some("count"),
        AggregationFunction::Sum => Some("sum"),
        AggregationFunction::Min => Some("min"),
        AggregationFunction::Max => Some("max"),
        AggregationFunction::Avg => Some("avg"),
        AggregationFunction::DistinctCount => Some("dc"),
        AggregationFunction::Near => None,
    }
}

/// Compute a statistic as `val`, optionally per group, and filter on it.
pub fn stats_clause(
    function: &str,
    aggfield: Option<&str>,
    groupfield: Option<&str>,
    comparison_op: &str,
    threshold: &str,
) -> String {
    let aggfield = aggfield.unwrap_or_default();
    match groupfield {
        None => format!(" | stats {function}({aggfield}) as val | search val {comparison_op} {threshold}"),
        Some(groupfield) => format!(
            " | stats {function}({aggfield}) as val by {groupfield} | search val {comparison_op} {threshold}"
        ),
    }
}

/// Restrict the output to the given columns.
pub fn table_clause(columns: &[String]) -> String {
    format!(" | table {}", columns.join(","))
}
