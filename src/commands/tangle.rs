//! Tangle command implementation.

use std::path::PathBuf;

use crate::errors::Result;
use crate::interface::Context;
use crate::model::Document;

use super::helpers::{read_input, write_output};

/// Options for the tangle command.
#[derive(Debug, Clone, Default)]
pub struct TangleOptions {
    /// Input document (stdin when absent).
    pub input: Option<PathBuf>,
    /// Output file (stdout when absent).
    pub output: Option<PathBuf>,
}

/// Writes the interpreter script for a document without running it.
pub fn tangle(ctx: &Context, options: TangleOptions) -> Result<()> {
    let input = read_input(ctx, options.input.as_deref())?;
    let doc = Document::parse(&input);
    tracing::debug!(chunks = doc.len(), "tangling");
    write_output(ctx, options.output.as_deref(), &doc.tangle())
}
