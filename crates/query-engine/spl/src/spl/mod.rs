//! Backend templates and the low-level text of Splunk-style search queries.

pub mod backend;
pub mod escape;
pub mod helpers;
pub mod string;
pub mod templates;
