//! CLI interface and argument parsing
//!
//! This module turns the process arguments into an [`Invocation`], runs the
//! columns command and maps the outcome onto an exit status.

pub mod app;
pub mod invocation;

// Re-export main types
pub use app::*;
pub use invocation::*;
