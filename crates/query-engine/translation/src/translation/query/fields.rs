//! Handle the translation of requested output fields.

use query_engine_models::models::FieldMapping;

use crate::translation::error::Error;

/// Resolve requested logical fields to physical columns, in order.
/// A field that maps to a list fans out to all of its columns.
pub fn translate_fields<M>(fields: &[String], mapping: &M) -> Result<Vec<String>, Error>
where
    M: FieldMapping + ?Sized,
{
    let mut columns = Vec::with_capacity(fields.len());
    for field in fields {
        match mapping.resolve_fieldname(field) {
            serde_json::Value::String(column) => columns.push(column),
            serde_json::Value::Array(items) if items.iter().all(serde_json::Value::is_string) => {
                columns.extend(items.into_iter().filter_map(|item| match item {
                    serde_json::Value::String(column) => Some(column),
                    _ => None,
                }));
            }
            mapped => {
                return Err(Error::FieldMappingType {
                    field: field.clone(),
                    mapped,
                })
            }
        }
    }
    Ok(columns)
}
