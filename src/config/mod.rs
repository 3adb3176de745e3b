//! Configuration loading and management.

mod config_data;
mod config_update;
pub mod markers;

use std::fs;
use std::path::{Path, PathBuf};

pub use config_data::{Config, InterpreterConfig};
pub use config_update::{ConfigUpdate, InterpreterUpdate};

use crate::errors::{JangleError, Result};

/// Configuration file names, checked in this order in each directory.
const CONFIG_FILES: &[&str] = &["jangle.toml", ".jangle.toml"];

/// Finds the nearest configuration file at or above `start_dir`.
///
/// Each directory is checked before its parent.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    start_dir.ancestors().find_map(|dir| {
        CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Reads a configuration file, filling unset keys with defaults.
pub fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        JangleError::Config(format!("cannot read {}: {}", path.display(), e))
    })?;
    let update: ConfigUpdate = toml::from_str(&content)?;
    Ok(update.into())
}

/// Reads the configuration that applies to `start_dir`.
///
/// Without a configuration file anywhere above it, this is the default
/// configuration.
pub fn read_config(start_dir: &Path) -> Result<Config> {
    match find_config_file(start_dir) {
        Some(path) => {
            tracing::debug!("Using configuration {}", path.display());
            read_config_file(&path)
        }
        None => {
            tracing::debug!("No configuration found above {}", start_dir.display());
            Ok(Config::default())
        }
    }
}

/// Reads `explicit` when given, otherwise searches from `start_dir`.
///
/// An explicit file must exist; a searched one is optional.
pub fn load_config(start_dir: &Path, explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => read_config_file(path),
        None => read_config(start_dir),
    }
}
