//! The detection-rule shapes handed to the query engine by a rule parser.

pub mod aggregation;
pub mod condition;
pub mod field_mapping;
pub mod rule;

// re-export without modules
pub use aggregation::*;
pub use condition::*;
pub use field_mapping::*;
pub use rule::*;
