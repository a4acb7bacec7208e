//! Core configuration types
//!
//! This module defines the data structures that represent an npcolumns.yml settings file.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::netprofiler::DEFAULT_TIMEOUT;

/// Realm used when neither the command line nor the settings file names one
pub const DEFAULT_REALM: &str = "traffic_summary";

/// Group-by used when neither the command line nor the settings file names one
pub const DEFAULT_GROUPBY: &str = "hos";

/// Longest request timeout accepted, in seconds (one day)
pub const MAX_TIMEOUT_SECS: u64 = 86_400;

/// Top-level settings structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Port to connect to (defaults to the scheme's port)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Accept self-signed certificates
    #[serde(default)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// Selection defaults for columns mode
    #[serde(default)]
    pub defaults: SelectionDefaults,
}

/// Default realm, centricity and group-by
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SelectionDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centricity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groupby: Option<String>,
}

impl Settings {
    pub fn timeout(&self) -> Duration {
        self.timeout
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    pub fn realm(&self) -> &str {
        self.defaults.realm.as_deref().unwrap_or(DEFAULT_REALM)
    }

    pub fn groupby(&self) -> &str {
        self.defaults.groupby.as_deref().unwrap_or(DEFAULT_GROUPBY)
    }
}
