//! Configuration for rule translation.

use query_engine_models::models::FieldMappings;
use query_engine_spl::spl::backend::Backend;
use query_engine_translation::translation::dashboard::DashboardLayout;

/// The 'Configuration' type collects all the information necessary to translate rules.
///
/// 'ParsedConfiguration' is what users write: a backend preset plus adjustments. Values of this
/// type are produced from a 'ParsedConfiguration' using 'make_runtime_configuration', which
/// resolves the preset and checks the resulting templates.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub backend: Backend,
    pub field_mappings: FieldMappings,
    pub dashboard: DashboardLayout,
}
