//! Error types for the Jangle system.

use thiserror::Error;

/// Main error type for Jangle operations.
#[derive(Error, Debug)]
pub enum JangleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No interpreter found on PATH (tried: {})", .candidates.join(", "))]
    InterpreterNotFound { candidates: Vec<String> },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Jangle operations.
pub type Result<T> = std::result::Result<T, JangleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpreter_not_found_message() {
        let err = JangleError::InterpreterNotFound {
            candidates: vec!["ijconsole".to_string(), "jconsole".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "No interpreter found on PATH (tried: ijconsole, jconsole)"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: JangleError = io.into();
        assert!(matches!(err, JangleError::Io(_)));
    }
}
