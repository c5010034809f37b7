//! Resolution of logical field names to physical column names.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Resolves a rule's logical field name.
///
/// A resolver answers with a JSON string (one column), a JSON list of strings (fan-out to several
/// columns) or, when misconfigured, anything else. Callers decide what to do with the latter.
pub trait FieldMapping {
    fn resolve_fieldname(&self, field: &str) -> serde_json::Value;
}

impl<F> FieldMapping for F
where
    F: Fn(&str) -> serde_json::Value,
{
    fn resolve_fieldname(&self, field: &str) -> serde_json::Value {
        self(field)
    }
}

/// A table of field mappings. Fields missing from the table map to themselves.
#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct FieldMappings(pub BTreeMap<String, serde_json::Value>);

impl FieldMappings {
    pub fn empty() -> Self {
        FieldMappings(BTreeMap::new())
    }
}

impl FieldMapping for FieldMappings {
    fn resolve_fieldname(&self, field: &str) -> serde_json::Value {
        match self.0.get(field) {
            Some(mapped) => mapped.clone(),
            None => serde_json::Value::String(field.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unmapped_fields_resolve_to_themselves() {
        let mappings = FieldMappings(BTreeMap::from([(
            "CommandLine".to_string(),
            json!("process.command_line"),
        )]));
        assert_eq!(
            mappings.resolve_fieldname("CommandLine"),
            json!("process.command_line")
        );
        assert_eq!(mappings.resolve_fieldname("Image"), json!("Image"));
    }

    #[test]
    fn closures_are_resolvers() {
        let upper = |field: &str| json!(field.to_uppercase());
        assert_eq!(upper.resolve_fieldname("host"), json!("HOST"));
    }
}
