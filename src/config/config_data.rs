//! Configuration data structures.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure for Jangle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Warn when the transcript's block count differs from the chunk count.
    #[serde(default = "default_warn_on_mismatch")]
    pub warn_on_mismatch: bool,

    /// How to find and invoke the interpreter.
    #[serde(default)]
    pub interpreter: InterpreterConfig,
}

fn default_warn_on_mismatch() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            warn_on_mismatch: default_warn_on_mismatch(),
            interpreter: InterpreterConfig::default(),
        }
    }
}

/// Interpreter discovery and invocation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// Executable names probed on `PATH`, in order.
    #[serde(default = "default_candidates")]
    pub candidates: Vec<String>,

    /// Explicit executable; skips probing when set.
    #[serde(default)]
    pub program: Option<PathBuf>,

    /// Extra arguments passed to the interpreter.
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_candidates() -> Vec<String> {
    vec!["ijconsole".to_string(), "jconsole".to_string()]
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
            program: None,
            args: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.interpreter.candidates, vec!["ijconsole", "jconsole"]);
        assert!(config.interpreter.program.is_none());
        assert!(config.warn_on_mismatch);
    }

    #[test]
    fn test_partial_interpreter_table() {
        let config: Config = toml::from_str("[interpreter]\nargs = [\"-js\"]\n").unwrap();
        assert_eq!(config.interpreter.args, vec!["-js"]);
        assert_eq!(config.interpreter.candidates, vec!["ijconsole", "jconsole"]);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut config = Config::default();
        config.interpreter.program = Some(PathBuf::from("/opt/j/bin/jconsole"));
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }
}
