//! Diagnostic logging
//!
//! Logs go to stderr so that stdout only ever carries tables.

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the verbosity flags (EnvFilter syntax)
pub const LOG_ENV_VAR: &str = "NPCOLUMNS_LOG";

/// Verbosity levels for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    Quiet = 1,
    #[default]
    Normal = 2,
    Verbose = 3,
}

impl Verbosity {
    /// Filter directive for this level
    pub fn directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "npcolumns=debug,warn",
        }
    }
}

/// Install the global tracing subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
