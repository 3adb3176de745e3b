//! Run command implementation.

use std::path::PathBuf;

use crate::errors::Result;
use crate::interface::{process, Context};

use super::helpers::{read_input, write_output};

/// Options for the run command.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Input document (stdin when absent).
    pub input: Option<PathBuf>,
    /// Output file (stdout when absent).
    pub output: Option<PathBuf>,
}

/// Tangles the document, runs it and writes the woven result.
pub fn run(ctx: &Context, options: RunOptions) -> Result<()> {
    let input = read_input(ctx, options.input.as_deref())?;
    let woven = process(ctx, &input)?;
    write_output(ctx, options.output.as_deref(), &woven)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::JangleError;
    use crate::test_utils::ScriptedInterpreter;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_run_basic() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("session.txt"), "Add:\n\n       1+1\n").unwrap();

        let ctx = Context::default_for_dir(dir.path().to_path_buf())
            .with_interpreter(ScriptedInterpreter::new("   2\n␞\n"));
        let options = RunOptions {
            input: Some(PathBuf::from("session.txt")),
            output: Some(PathBuf::from("woven.txt")),
        };
        run(&ctx, options).unwrap();

        let woven = fs::read_to_string(dir.path().join("woven.txt")).unwrap();
        assert_eq!(woven, "Add:\n\n       1+1\n    ┆ 2\u{a0}\n");
    }

    #[test]
    fn test_run_without_interpreter() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("session.txt"), "       1+1\n").unwrap();

        let mut ctx = Context::default_for_dir(dir.path().to_path_buf());
        ctx.config.interpreter.candidates = vec!["jangle-test-no-such-interpreter".to_string()];
        let options = RunOptions {
            input: Some(PathBuf::from("session.txt")),
            output: Some(PathBuf::from("woven.txt")),
        };
        let result = run(&ctx, options);

        assert!(matches!(result, Err(JangleError::InterpreterNotFound { .. })));
        assert!(!dir.path().join("woven.txt").exists());
    }
}
