//! Settings parsing and validation
//!
//! This module handles discovery and parsing of npcolumns.yml settings files,
//! which carry connection defaults and the default realm, centricity and
//! group-by for columns mode.

pub mod parse;
pub mod schema;
pub mod types;

// Re-export main types
pub use parse::*;
pub use schema::*;
pub use types::*;
