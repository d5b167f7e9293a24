//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and a macro for writing state
//! tables in code instead of loading them from a document.

pub mod configuration;
pub mod error;
pub mod macros;

pub use configuration::ConfigurationBuilder;
pub use error::BuildError;
