//! Chunks command implementation.

use std::path::PathBuf;

use crate::errors::Result;
use crate::interface::Context;
use crate::model::Document;

use super::helpers::{read_input, write_output};

/// Options for the chunks command.
#[derive(Debug, Clone, Default)]
pub struct ChunksOptions {
    /// Input document (stdin when absent).
    pub input: Option<PathBuf>,
}

/// Prints the segmented document as JSON.
pub fn chunks(ctx: &Context, options: ChunksOptions) -> Result<()> {
    let input = read_input(ctx, options.input.as_deref())?;
    let json = chunks_json(&Document::parse(&input))?;
    write_output(ctx, None, &json)
}

fn chunks_json(doc: &Document) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc.chunks())?)
}
