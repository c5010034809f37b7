//! Handle aggregates translation.

use query_engine_models::models::{AggregationFunction, AggregationSpec};
use query_engine_spl::spl::backend::{AggregationStrategy, UnsupportedPolicy};
use query_engine_spl::spl::helpers;

use crate::translation::error::Error;

/// Translate the aggregation of a condition into the clause appended to its search.
/// No aggregation means no clause.
pub fn translate(
    strategy: AggregationStrategy,
    aggregation: Option<&AggregationSpec>,
) -> Result<String, Error> {
    let Some(aggregation) = aggregation else {
        return Ok(String::new());
    };

    match strategy {
        AggregationStrategy::Unsupported { on_aggregation } => {
            unsupported(on_aggregation, aggregation.function)
        }
        AggregationStrategy::Stats {
            on_near,
            distinct_count_when_grouped,
        } => {
            let function = match aggregation.function {
                AggregationFunction::Count
                    if distinct_count_when_grouped && aggregation.groupfield.is_some() =>
                {
                    AggregationFunction::DistinctCount
                }
                function => function,
            };
            match helpers::stats_function_name(function) {
                None => unsupported(on_near, function),
                Some(name) => Ok(helpers::stats_clause(
                    name,
                    aggregation.aggfield.as_deref(),
                    aggregation.groupfield.as_deref(),
                    &aggregation.comparison_op,
                    &aggregation.threshold.to_string(),
                )),
            }
        }
    }
}

fn unsupported(policy: UnsupportedPolicy, function: AggregationFunction) -> Result<String, Error> {
    let name = function_label(function);
    match policy {
        UnsupportedPolicy::Fail => Err(Error::UnsupportedFeature(name.to_string())),
        UnsupportedPolicy::Empty => {
            tracing::warn!(function = name, "dropping unsupported aggregation");
            Ok(String::new())
        }
    }
}

fn function_label(function: AggregationFunction) -> &'static str {
    match function {
        AggregationFunction::Count => "count",
        AggregationFunction::Sum => "sum",
        AggregationFunction::Min => "min",
        AggregationFunction::Max => "max",
        AggregationFunction::Avg => "avg",
        AggregationFunction::DistinctCount => "distinct_count",
        AggregationFunction::Near => "near",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use query_engine_spl::spl::backend;

    fn count_over_5() -> AggregationSpec {
        AggregationSpec::new(AggregationFunction::Count, None, ">", "5")
    }

    #[test]
    fn no_aggregation_is_no_clause() {
        assert_eq!(
            translate(backend::splunk().aggregation_strategy, None).unwrap(),
            ""
        );
    }

    #[test]
    fn ungrouped_count() {
        assert_eq!(
            translate(backend::splunk().aggregation_strategy, Some(&count_over_5())).unwrap(),
            " | stats count() as val | search val > 5"
        );
    }

    #[test]
    fn grouped_count_becomes_distinct_count() {
        let spec = count_over_5().grouped_by("host");
        assert_eq!(
            translate(backend::splunk().aggregation_strategy, Some(&spec)).unwrap(),
            " | stats dc() as val by host | search val > 5"
        );
        assert_eq!(
            translate(backend::splunk_dashboard().aggregation_strategy, Some(&spec)).unwrap(),
            " | stats count() as val by host | search val > 5"
        );
    }

    #[test]
    fn other_functions_pass_through() {
        let spec = AggregationSpec::new(
            AggregationFunction::Avg,
            Some("bytes_out".to_string()),
            ">=",
            "1024",
        )
        .grouped_by("dest");
        assert_eq!(
            translate(backend::splunk().aggregation_strategy, Some(&spec)).unwrap(),
            " | stats avg(bytes_out) as val by dest | search val >= 1024"
        );
    }

    #[test]
    fn numeric_thresholds_are_written_bare() {
        let spec: AggregationSpec = serde_json::from_value(serde_json::json!({
            "function": "max",
            "aggfield": "duration",
            "comparisonOp": ">",
            "threshold": 2.5
        }))
        .unwrap();
        assert_eq!(
            translate(backend::splunk().aggregation_strategy, Some(&spec)).unwrap(),
            " | stats max(duration) as val | search val > 2.5"
        );

        let spec = AggregationSpec::new(AggregationFunction::Count, None, ">", 5);
        assert_eq!(
            translate(backend::splunk().aggregation_strategy, Some(&spec)).unwrap(),
            " | stats count() as val | search val > 5"
        );
    }

    #[test]
    fn near_fails_or_degrades() {
        let spec = AggregationSpec::new(AggregationFunction::Near, None, ">", "0");
        match translate(backend::splunk().aggregation_strategy, Some(&spec)) {
            Err(Error::UnsupportedFeature(function)) => assert_eq!(function, "near"),
            other => panic!("expected an unsupported feature error, got {other:?}"),
        }
        assert_eq!(
            translate(backend::splunk_dashboard().aggregation_strategy, Some(&spec)).unwrap(),
            ""
        );
    }

    #[test]
    fn backends_without_aggregations() {
        let strategy = AggregationStrategy::Unsupported {
            on_aggregation: UnsupportedPolicy::Fail,
        };
        assert!(matches!(
            translate(strategy, Some(&count_over_5())),
            Err(Error::UnsupportedFeature(_))
        ));
    }
}
