//! Shared test utilities.

use std::io;
use std::sync::{Arc, Mutex};

use crate::errors::Result;
use crate::interface::Interpreter;
use crate::model::Chunk;

/// Interpreter that replays a fixed transcript and remembers the last script.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInterpreter {
    transcript: String,
    last_script: Arc<Mutex<Option<String>>>,
}

impl ScriptedInterpreter {
    /// Creates an interpreter that always answers with `transcript`.
    pub fn new(transcript: &str) -> Self {
        Self {
            transcript: transcript.to_string(),
            last_script: Arc::default(),
        }
    }

    /// Returns the script passed to the most recent `execute` call.
    pub fn last_script(&self) -> Option<String> {
        self.last_script.lock().unwrap().clone()
    }
}

impl Interpreter for ScriptedInterpreter {
    fn name(&self) -> &str {
        "scripted"
    }

    fn execute(&self, script: &str) -> Result<String> {
        *self.last_script.lock().unwrap() = Some(script.to_string());
        Ok(self.transcript.clone())
    }
}

/// Creates a chunk from string slices.
pub fn make_chunk(prose: &[&str], code: &[&str]) -> Chunk {
    Chunk::new(
        prose.iter().map(|s| s.to_string()).collect(),
        code.iter().map(|s| s.to_string()).collect(),
    )
}

/// Shared buffer the log capture writes into.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a thread-local subscriber and returns its warnings as text.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
    (result, logs)
}
