//! Execution context for Jangle operations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::errors::Result;

use super::interpreter::{Interpreter, ProcessInterpreter};

/// Context for Jangle operations.
///
/// Holds the configuration and, optionally, a preselected interpreter. When
/// none is set the interpreter is located from the configuration on first
/// use, so commands that never run code never need one installed.
#[derive(Debug)]
pub struct Context {
    /// Configuration.
    pub config: Config,
    /// Base directory for relative paths.
    pub base_dir: PathBuf,
    interpreter: Option<Arc<dyn Interpreter>>,
}

impl Context {
    /// Creates a new context with the given configuration.
    pub fn new(config: Config, base_dir: PathBuf) -> Self {
        Self {
            config,
            base_dir,
            interpreter: None,
        }
    }

    /// Creates a context with default configuration.
    pub fn default_for_dir(base_dir: PathBuf) -> Self {
        Self::new(Config::default(), base_dir)
    }

    /// Creates a context for `base_dir`, reading `config_path` if given and
    /// otherwise the nearest configuration file.
    pub fn load(base_dir: PathBuf, config_path: Option<&Path>) -> Result<Self> {
        let config = crate::config::load_config(&base_dir, config_path)?;
        Ok(Self::new(config, base_dir))
    }

    /// Creates a context from the current directory.
    pub fn from_current_dir(config_path: Option<&Path>) -> Result<Self> {
        Self::load(std::env::current_dir()?, config_path)
    }

    /// Uses `interpreter` instead of locating one.
    pub fn with_interpreter<I: Interpreter + 'static>(mut self, interpreter: I) -> Self {
        self.interpreter = Some(Arc::new(interpreter));
        self
    }

    /// Returns the interpreter, locating it if none was preselected.
    pub fn interpreter(&self) -> Result<Arc<dyn Interpreter>> {
        match &self.interpreter {
            Some(interpreter) => Ok(Arc::clone(interpreter)),
            None => Ok(Arc::new(ProcessInterpreter::locate(&self.config.interpreter)?)),
        }
    }

    /// Resolves a path relative to the base directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}
