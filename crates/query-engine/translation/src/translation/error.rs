//! Errors for rule translation.

use thiserror::Error;

/// A type for translation errors.
///
/// Every error aborts the translation of the current rule only.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Value {value} of field '{field}' must be a string or a number.")]
    TypeConversion {
        field: String,
        value: serde_json::Value,
    },
    #[error("Field mapping for '{field}' must resolve to a string or a list of strings, got {mapped}.")]
    FieldMappingType {
        field: String,
        mapped: serde_json::Value,
    },
    #[error("The '{0}' aggregation is not supported by this backend.")]
    UnsupportedFeature(String),
    #[error("The dashboard has already been finalized.")]
    DashboardFinalized,
}
