//! Error types for npcolumns

use reqwest::StatusCode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for npcolumns operations
pub type Result<T> = std::result::Result<T, NpError>;

/// Main error type for npcolumns
#[derive(Error, Debug)]
pub enum NpError {
    /// Settings file errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors talking to the appliance
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Realm, group-by, id or filter selection errors
    #[error("{0}")]
    Selection(#[from] SelectionError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Settings file discovery and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file '{0}' does not exist")]
    NotFound(PathBuf),

    #[error("Failed to read config file '{path}': {error}")]
    Read { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors returned by the NetProfiler reporting API client
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error talking to NetProfiler at {url}. {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("Authentication failed at {url} (HTTP {status})")]
    Authentication { url: String, status: StatusCode },

    #[error("HTTP {status} at {url}: {body}")]
    Http {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("Could not decode response from {url}. Body: {body}. {source}")]
    Decode {
        url: String,
        body: String,
        source: serde_json::Error,
    },

    #[error("Invalid appliance address '{0}'")]
    InvalidHost(String),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Errors resolving what the user asked to list
#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("Unknown realm '{name}' (available: {available})")]
    UnknownRealm { name: String, available: String },

    #[error("Unknown centricity '{0}' (expected host/hos or interface/int)")]
    UnknownCentricity(String),

    #[error("Unknown group-by '{name}' (available: {available})")]
    UnknownGroupBy { name: String, available: String },

    #[error("No columns match id(s): {0}")]
    UnknownColumns(String),

    #[error("Invalid column filter '{pattern}': {error}")]
    InvalidFilter { pattern: String, error: String },
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Specialized result type for selection operations
pub type SelectionResult<T> = std::result::Result<T, SelectionError>;
