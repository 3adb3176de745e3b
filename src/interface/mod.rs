//! High-level interface for Jangle operations.

mod context;
mod interpreter;
mod pipeline;

pub use context::Context;
pub use interpreter::{find_executable, Interpreter, ProcessInterpreter};
pub use pipeline::{execute_document, process, weave_transcript};
