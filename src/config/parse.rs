//! Settings file parsing and discovery

use crate::config::schema::validate_settings;
use crate::config::types::Settings;
use crate::error::{ConfigError, NpError};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming a settings file
pub const CONFIG_ENV_VAR: &str = "NPCOLUMNS_CONFIG";

/// Default settings file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["npcolumns.yml", "npcolumns.yaml"];

/// Find a settings file by searching the start directory and its parents
pub fn find_config_file_from(start_dir: PathBuf) -> Option<PathBuf> {
    let mut current_dir = start_dir;

    loop {
        for file_name in CONFIG_FILE_NAMES {
            let config_path = current_dir.join(file_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Settings file in the per-user configuration directory, if it exists
pub fn user_config_file() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "npcolumns")?;
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dirs.config_dir().join(name))
        .find(|path| path.is_file())
}

/// Work out which settings file to load.
///
/// An explicit path (from `--config` or the environment) must exist;
/// discovered files are optional.
pub fn locate_config(explicit: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    let explicit = explicit
        .map(Path::to_path_buf)
        .or_else(|| env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path));
        }
        return Ok(Some(path));
    }

    let discovered = env::current_dir()
        .ok()
        .and_then(find_config_file_from)
        .or_else(user_config_file);

    Ok(discovered)
}

/// Parse settings from a string
pub fn parse_settings(yaml: &str) -> Result<Settings, NpError> {
    if yaml.trim().is_empty() {
        return Ok(Settings::default());
    }

    let settings: Settings = serde_yaml::from_str(yaml)?;
    validate_settings(&settings)?;
    Ok(settings)
}

/// Parse a settings file from a path
pub fn parse_settings_file(path: &Path) -> Result<Settings, NpError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    parse_settings(&contents)
}

/// Load settings, falling back to built-in defaults when no file is found
pub fn load_settings(explicit: Option<&Path>) -> Result<(Settings, Option<PathBuf>), NpError> {
    match locate_config(explicit)? {
        Some(path) => {
            debug!("Loading settings from {}", path.display());
            let settings = parse_settings_file(&path)?;
            Ok((settings, Some(path)))
        }
        None => {
            debug!("No settings file found, using defaults");
            Ok((Settings::default(), None))
        }
    }
}
