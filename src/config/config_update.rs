//! Configuration update and merging.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::config_data::{Config, InterpreterConfig};

/// Partial configuration update that can be merged into a Config.
///
/// All fields are optional. Only specified fields will override the base config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigUpdate {
    /// Warn on block/chunk count mismatch.
    #[serde(default)]
    pub warn_on_mismatch: Option<bool>,

    /// Interpreter settings.
    #[serde(default)]
    pub interpreter: Option<InterpreterUpdate>,
}

/// Partial interpreter settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterpreterUpdate {
    #[serde(default)]
    pub candidates: Option<Vec<String>>,

    #[serde(default)]
    pub program: Option<PathBuf>,

    #[serde(default)]
    pub args: Option<Vec<String>>,
}

impl ConfigUpdate {
    /// Merges this update into a base configuration, returning a new Config.
    ///
    /// Consumes `self` so fields can be moved instead of cloned.
    pub fn merge_into(self, base: &Config) -> Config {
        Config {
            warn_on_mismatch: self.warn_on_mismatch.unwrap_or(base.warn_on_mismatch),
            interpreter: merge_interpreter(&base.interpreter, self.interpreter),
        }
    }
}

fn merge_interpreter(base: &InterpreterConfig, update: Option<InterpreterUpdate>) -> InterpreterConfig {
    match update {
        Some(u) => InterpreterConfig {
            candidates: u.candidates.unwrap_or_else(|| base.candidates.clone()),
            program: u.program.or_else(|| base.program.clone()),
            args: u.args.unwrap_or_else(|| base.args.clone()),
        },
        None => base.clone(),
    }
}

impl From<ConfigUpdate> for Config {
    fn from(update: ConfigUpdate) -> Self {
        update.merge_into(&Config::default())
    }
}
