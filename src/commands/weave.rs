//! Weave command implementation.

use std::fs;
use std::path::PathBuf;

use crate::errors::Result;
use crate::interface::{weave_transcript, Context};
use crate::model::Document;

use super::helpers::{read_input, write_output};

/// Options for the weave command.
#[derive(Debug, Clone, Default)]
pub struct WeaveOptions {
    /// Input document (stdin when absent).
    pub input: Option<PathBuf>,
    /// Saved interpreter transcript.
    pub transcript: PathBuf,
    /// Output file (stdout when absent).
    pub output: Option<PathBuf>,
}

/// Weaves a document against a transcript captured earlier.
pub fn weave(ctx: &Context, options: WeaveOptions) -> Result<()> {
    let input = read_input(ctx, options.input.as_deref())?;
    let transcript = fs::read_to_string(ctx.resolve_path(&options.transcript))?;
    let doc = Document::parse(&input);
    let woven = weave_transcript(ctx, &doc, &transcript);
    write_output(ctx, options.output.as_deref(), &woven)
}
