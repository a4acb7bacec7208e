//! Reporting API data model
//!
//! These types mirror the JSON documents returned by the NetProfiler
//! `/api/profiler/1.0/reporting` endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SelectionError;

/// A column that can be included in a report
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Column {
    /// Numeric column id
    pub id: u32,

    /// Symbolic id, e.g. `ID_CLI_HOST_IP`
    pub strid: String,

    /// Human readable label
    pub label: String,

    /// Whether this is a key or a value column
    #[serde(default)]
    pub category: Category,

    /// Column data type, e.g. `ipaddr`, `string`, `int`
    #[serde(rename = "type", default)]
    pub column_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
}

impl Column {
    /// Short column key derived from the symbolic id (`ID_CLI_HOST_IP` -> `cli_host_ip`)
    pub fn key(&self) -> String {
        self.strid
            .strip_prefix("ID_")
            .unwrap_or(&self.strid)
            .to_lowercase()
    }

    pub fn is_key(&self) -> bool {
        self.category == Category::Key
    }
}

/// Column category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Key,
    Value,
    #[default]
    #[serde(other)]
    Other,
}

/// A group-by category, e.g. `{"id": "hos", "name": "host"}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GroupBy {
    pub id: String,
    pub name: String,
}

/// A reporting realm
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Realm {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A centricity as advertised by the appliance
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CentricityInfo {
    pub id: String,
    pub name: String,
}

/// Reporting centricity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Centricity {
    Host,
    Interface,
}

impl Centricity {
    /// Three letter code used on the wire
    pub fn code(&self) -> &'static str {
        match self {
            Centricity::Host => "hos",
            Centricity::Interface => "int",
        }
    }
}

impl Default for Centricity {
    fn default() -> Self {
        Centricity::Host
    }
}

impl fmt::Display for Centricity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Centricity {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hos" | "host" => Ok(Centricity::Host),
            "int" | "interface" => Ok(Centricity::Interface),
            _ => Err(SelectionError::UnknownCentricity(s.to_string())),
        }
    }
}
