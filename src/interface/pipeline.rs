//! Tangle, execute and weave one document.

use crate::errors::Result;
use crate::model::{boundary_count, Document};

use super::context::Context;
use super::interpreter::Interpreter;

/// Weaves `doc` against a transcript, warning on a block count mismatch.
///
/// A mismatch is tolerated: chunks past the end of the transcript simply get
/// no output.
pub fn weave_transcript(ctx: &Context, doc: &Document, transcript: &str) -> String {
    if ctx.config.warn_on_mismatch {
        let boundaries = boundary_count(transcript);
        if boundaries != doc.len() {
            tracing::warn!(
                chunks = doc.len(),
                boundaries,
                "transcript does not match the document chunk for chunk"
            );
        }
    }
    doc.weave(transcript)
}

/// Runs the document's code and weaves the fresh output back in.
pub fn execute_document(ctx: &Context, doc: &Document, interpreter: &dyn Interpreter) -> Result<String> {
    let script = doc.tangle();
    tracing::debug!(
        chunks = doc.len(),
        code_chunks = doc.code_chunks(),
        "running {}",
        interpreter.name()
    );

    let transcript = interpreter.execute(&script)?;
    if transcript.trim().is_empty() {
        tracing::warn!("{} produced no output", interpreter.name());
    }

    Ok(weave_transcript(ctx, doc, &transcript))
}

/// Parses `input`, runs it through the context's interpreter and returns the
/// rewritten document text.
pub fn process(ctx: &Context, input: &str) -> Result<String> {
    let doc = Document::parse(input);
    let interpreter = ctx.interpreter()?;
    execute_document(ctx, &doc, interpreter.as_ref())
}
