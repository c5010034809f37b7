use std::fs;
use std::path::PathBuf;

use query_engine_models::models;
use query_engine_spl::spl::backend::{self, Backend};
use query_engine_translation::translation;

/// Read the rules of a golden file directory, along with its field mappings if it has any.
pub fn read_goldenfile(testname: &str) -> (Vec<models::Rule>, models::FieldMappings) {
    let _ = env_logger::builder().is_test(true).try_init();

    let directory = PathBuf::from("tests/goldenfiles").join(testname);

    let rules: models::RuleFile =
        serde_json::from_str(&fs::read_to_string(directory.join("rule.json")).unwrap()).unwrap();

    let mappings = match fs::read_to_string(directory.join("field_mappings.json")) {
        Ok(contents) => serde_json::from_str(&contents).unwrap(),
        Err(_) => models::FieldMappings::empty(),
    };

    (rules.into_rules(), mappings)
}

/// Translate the first rule of a golden file directory with the given backend.
pub fn test_translation(testname: &str, backend: &Backend) -> Result<String, translation::Error> {
    let (rules, mappings) = read_goldenfile(testname);
    let query = translation::query::translate(backend, &rules[0], &mappings)?;
    Ok(query.unwrap_or_default())
}

/// Translate the first rule of a golden file directory with the plain Splunk backend.
pub fn test_splunk_translation(testname: &str) -> Result<String, translation::Error> {
    test_translation(testname, &backend::splunk())
}
