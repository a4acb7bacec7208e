//! Column listing engine
//!
//! This module resolves what to list, queries the appliance through a
//! [`ReportingApi`](crate::netprofiler::ReportingApi), filters the result and
//! renders it.

pub mod columns;
pub mod filter;
pub mod selection;

// Re-export main types
pub use columns::*;
pub use filter::*;
pub use selection::*;
