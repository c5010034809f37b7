use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use query_engine_spl::spl::backend::{self, Backend};

/// The preset a configuration starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum BackendName {
    /// One Splunk search per rule.
    #[default]
    Splunk,
    /// A Splunk dashboard with one panel per rule.
    SplunkDashboard,
}

impl BackendName {
    pub fn preset(self) -> Backend {
        match self {
            BackendName::Splunk => backend::splunk(),
            BackendName::SplunkDashboard => backend::splunk_dashboard(),
        }
    }
}

impl std::fmt::Display for BackendName {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BackendName::Splunk => write!(f, "splunk"),
            BackendName::SplunkDashboard => write!(f, "splunkDashboard"),
        }
    }
}
