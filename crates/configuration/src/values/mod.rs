mod backend_name;
mod overrides;

pub use backend_name::BackendName;
pub use overrides::{AggregationOverrides, TemplateOverrides};
