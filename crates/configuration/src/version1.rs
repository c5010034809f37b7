//! Version 1 of the on-disk configuration.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::fs;

use query_engine_models::models::FieldMappings;
use query_engine_spl::spl::backend::ListStrategy;
use query_engine_translation::translation::dashboard::DashboardLayout;

use crate::error::{ParseConfigurationError, WriteParsedConfigurationError};
use crate::values::{AggregationOverrides, BackendName, TemplateOverrides};

pub const CONFIGURATION_FILENAME: &str = "configuration.json";
pub const CONFIGURATION_JSONSCHEMA_FILENAME: &str = "schema.json";

#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
pub enum Version {
    #[serde(rename = "1")]
    This,
}

/// The configuration as written by users: a backend preset, adjustments to it, and the field
/// mappings rules are translated with.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConfiguration {
    // Which version of the configuration format are we using
    pub version: Version,
    #[serde(rename = "$schema")]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub backend: BackendName,
    #[serde(default)]
    #[serde(skip_serializing_if = "TemplateOverrides::is_empty")]
    pub templates: TemplateOverrides,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_strategy: Option<ListStrategy>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<AggregationOverrides>,
    /// Text placed before every query.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_prefix: Option<String>,
    /// Text placed after every query, before the projection.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_suffix: Option<String>,
    /// Outer settings of dashboards. Only used by dashboard backends.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<DashboardLayout>,
    /// Logical field name to a physical column name, or a list of them.
    #[serde(default)]
    pub field_mappings: FieldMappings,
}

impl ParsedConfiguration {
    pub fn initial(backend: BackendName) -> Self {
        ParsedConfiguration {
            version: Version::This,
            schema: Some(CONFIGURATION_JSONSCHEMA_FILENAME.to_string()),
            backend,
            templates: TemplateOverrides::default(),
            list_strategy: None,
            aggregation: None,
            query_prefix: None,
            query_suffix: None,
            dashboard: match backend {
                BackendName::Splunk => None,
                BackendName::SplunkDashboard => Some(DashboardLayout::default()),
            },
            field_mappings: FieldMappings::empty(),
        }
    }
}

/// Parse the configuration format from a directory.
pub async fn parse_configuration(
    configuration_dir: impl AsRef<Path>,
) -> Result<ParsedConfiguration, ParseConfigurationError> {
    let configuration_file = configuration_dir.as_ref().join(CONFIGURATION_FILENAME);

    let configuration_file_contents =
        fs::read_to_string(&configuration_file)
            .await
            .map_err(|err| {
                ParseConfigurationError::IoErrorButStringified(format!(
                    "{}: {}",
                    &configuration_file.display(),
                    err
                ))
            })?;

    let parsed_config: ParsedConfiguration = serde_json::from_str(&configuration_file_contents)
        .map_err(|error| ParseConfigurationError::ParseError {
            file_path: configuration_file.clone(),
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        })?;

    tracing::debug!(
        file = %configuration_file.display(),
        backend = %parsed_config.backend,
        field_mappings = parsed_config.field_mappings.0.len(),
        "parsed configuration"
    );

    Ok(parsed_config)
}

/// Write the parsed configuration into a directory on disk, along with its JSON schema.
pub async fn write_parsed_configuration(
    parsed_config: ParsedConfiguration,
    out_dir: impl AsRef<Path>,
) -> Result<(), WriteParsedConfigurationError> {
    let configuration_file = out_dir.as_ref().to_owned().join(CONFIGURATION_FILENAME);
    fs::create_dir_all(out_dir.as_ref()).await?;

    // create the configuration file
    fs::write(
        configuration_file,
        serde_json::to_string_pretty(&parsed_config)
            .map_err(|e| WriteParsedConfigurationError::IoError(e.into()))?
            + "\n",
    )
    .await?;

    // create the jsonschema file
    let configuration_jsonschema_file_path = out_dir
        .as_ref()
        .to_owned()
        .join(CONFIGURATION_JSONSCHEMA_FILENAME);

    let output = schemars::schema_for!(ParsedConfiguration);
    fs::write(
        &configuration_jsonschema_file_path,
        serde_json::to_string_pretty(&output)
            .map_err(|e| WriteParsedConfigurationError::IoError(e.into()))?
            + "\n",
    )
    .await?;

    Ok(())
}
