//! Jangle - Literate Programming for Interactive Sessions
//!
//! Documents mix prose with code blocks indented by exactly seven columns, the
//! way an interactive session looks when pasted into text. Jangle runs that
//! code and writes the output back under each block.
//!
//! # Features
//!
//! - **Tangle**: Extract the code blocks into a single interpreter script
//! - **Weave**: Merge a fresh transcript back into the document, replacing
//!   output from earlier runs
//! - **Strip**: Remove all woven output
//!
//! # Example
//!
//! ```no_run
//! use jangle::interface::{process, Context};
//!
//! let ctx = Context::from_current_dir(None).unwrap();
//! let woven = process(&ctx, "Sum:\n\n       +/ 1 2 3\n").unwrap();
//! println!("{}", woven);
//! ```

pub mod commands;
pub mod config;
pub mod errors;
pub mod interface;
pub mod model;
pub mod readers;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use errors::{JangleError, Result};
pub use interface::{Context, Interpreter, ProcessInterpreter};
pub use model::{Chunk, Document, OutputBlock};

// Re-export command options
pub use commands::{ChunksOptions, RunOptions, StripOptions, TangleOptions, WeaveOptions};
