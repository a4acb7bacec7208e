//! Settings validation

use crate::config::types::{Settings, MAX_TIMEOUT_SECS};
use crate::error::{ConfigError, ConfigResult};
use crate::netprofiler::Centricity;

/// Validate a settings file after parsing
pub fn validate_settings(settings: &Settings) -> ConfigResult<()> {
    match settings.timeout {
        Some(0) => {
            return Err(ConfigError::Invalid(
                "timeout must be greater than 0".to_string(),
            ))
        }
        Some(t) if t > MAX_TIMEOUT_SECS => {
            return Err(ConfigError::Invalid(format!(
                "timeout must be at most {} seconds",
                MAX_TIMEOUT_SECS
            )))
        }
        _ => {}
    }

    if settings.port == Some(0) {
        return Err(ConfigError::Invalid("port must be greater than 0".to_string()));
    }

    if let Some(centricity) = &settings.defaults.centricity {
        centricity
            .parse::<Centricity>()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    }

    for (name, value) in [
        ("realm", &settings.defaults.realm),
        ("groupby", &settings.defaults.groupby),
    ] {
        if matches!(value, Some(v) if v.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!(
                "defaults.{} must not be empty",
                name
            )));
        }
    }

    Ok(())
}

/// Default centricity from the settings file, if any
pub fn default_centricity(settings: &Settings) -> ConfigResult<Centricity> {
    match &settings.defaults.centricity {
        Some(c) => c
            .parse::<Centricity>()
            .map_err(|e| ConfigError::Invalid(e.to_string())),
        None => Ok(Centricity::default()),
    }
}
