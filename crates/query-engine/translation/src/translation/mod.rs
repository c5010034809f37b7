//! Translate parsed detection rules into query text.

pub mod dashboard;
pub mod error;
pub mod query;

pub use error::Error;
