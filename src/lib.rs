//! npcolumns - list the report columns available on a NetProfiler appliance
//!
//! The `get_np_columns` binary connects to a NetProfiler, asks its reporting
//! API which columns exist for a realm, centricity and group-by, and prints
//! them as fixed-width tables. It can also list the group-bys, realms and
//! centricities the appliance knows about.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod netprofiler;
pub mod output;
pub mod runner;

// Re-export commonly used types
pub use error::{NpError, Result};

/// Current version of npcolumns
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
