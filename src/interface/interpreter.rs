//! External interpreter process.
//!
//! The interpreter is a plain text pipe: the whole script goes to stdin, the
//! whole of stdout comes back once the process exits. The [`Interpreter`]
//! trait keeps the pipeline independent of how that happens, so tests can
//! replay a canned transcript instead of spawning anything.

use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use crate::config::InterpreterConfig;
use crate::errors::{JangleError, Result};

/// Something that runs a tangled script and returns its transcript.
pub trait Interpreter: Send + Sync + std::fmt::Debug {
    /// Returns a short name for logging.
    fn name(&self) -> &str;

    /// Runs `script` to completion and returns everything it printed.
    fn execute(&self, script: &str) -> Result<String>;
}

/// Interpreter backed by a child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInterpreter {
    program: PathBuf,
    args: Vec<String>,
    name: String,
}

impl ProcessInterpreter {
    /// Creates an interpreter for a known executable.
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        let program = program.into();
        let name = program
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| program.display().to_string());
        Self {
            program,
            args,
            name,
        }
    }

    /// Resolves the executable from configuration.
    ///
    /// An explicit `program` wins. Otherwise the candidates are probed on
    /// `PATH` in order and the first hit is used.
    pub fn locate(config: &InterpreterConfig) -> Result<Self> {
        if let Some(program) = &config.program {
            return Ok(Self::new(program.clone(), config.args.clone()));
        }

        let path_env = std::env::var_os("PATH");
        for candidate in &config.candidates {
            if let Some(found) = find_executable(candidate, path_env.as_deref()) {
                tracing::debug!("Found interpreter {}", found.display());
                return Ok(Self::new(found, config.args.clone()));
            }
        }

        Err(JangleError::InterpreterNotFound {
            candidates: config.candidates.clone(),
        })
    }

    /// Returns the executable path.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Interpreter for ProcessInterpreter {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, script: &str) -> Result<String> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        // Feed stdin from a helper thread so a full stdout pipe can't stall us.
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| JangleError::Other("interpreter stdin was not captured".to_string()))?;
        let input = script.as_bytes().to_vec();
        let writer = thread::spawn(move || stdin.write_all(&input));

        let output = child.wait_with_output()?;

        match writer.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!("{} stopped reading its input: {}", self.name, e),
            Err(_) => tracing::warn!("{} input writer panicked", self.name),
        }

        if !output.status.success() {
            tracing::warn!(
                exit_code = ?output.status.code(),
                "{} exited unsuccessfully, using captured output",
                self.name
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Finds `candidate` in the directories of `path_env`.
///
/// A candidate containing a path separator is checked as given. Files that
/// can't be executed are skipped, so probing moves on to the next hit.
pub fn find_executable(candidate: &str, path_env: Option<&OsStr>) -> Option<PathBuf> {
    let direct = Path::new(candidate);
    if direct.components().count() > 1 {
        return is_executable(direct).then(|| direct.to_path_buf());
    }

    let path_env = path_env?;
    std::env::split_paths(path_env)
        .map(|dir| dir.join(candidate))
        .find(|p| is_executable(p))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
