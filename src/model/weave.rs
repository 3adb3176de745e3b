//! Weave algorithm: chunks plus a fresh transcript to document text.

use crate::config::markers::{format_output_line, is_boundary, PROMPT_PREFIX};

use super::document::Document;

/// Formatted output lines belonging to one chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBlock {
    lines: Vec<String>,
}

impl OutputBlock {
    /// Creates an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one raw transcript line.
    ///
    /// Only the first line of a block has the prompt echo stripped; later
    /// prints in the same chunk keep whatever prefix the interpreter gave them.
    pub fn push(&mut self, raw: &str) {
        let text = if self.lines.is_empty() {
            raw.strip_prefix(PROMPT_PREFIX).unwrap_or(raw)
        } else {
            raw
        };
        self.lines.push(format_output_line(text));
    }

    /// Returns the formatted lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns true if no output was captured.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Splits a transcript on boundary sentinels.
///
/// Blank lines are dropped. The result always has one more block than the
/// number of sentinels found; anything after the last sentinel lands in the
/// final block.
pub fn split_transcript(transcript: &str) -> Vec<OutputBlock> {
    let mut blocks = vec![OutputBlock::new()];

    for line in transcript.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if is_boundary(line) {
            blocks.push(OutputBlock::new());
        } else if let Some(current) = blocks.last_mut() {
            current.push(line);
        }
    }

    blocks
}

/// Renders the document with output from `transcript` after each chunk.
///
/// Blocks are matched to chunks by position. Chunks past the end of the
/// transcript get no output.
pub fn weave(doc: &Document, transcript: &str) -> String {
    let blocks = split_transcript(transcript);
    let mut lines: Vec<&str> = Vec::new();

    for (i, chunk) in doc.chunks().iter().enumerate() {
        lines.extend(chunk.lines());
        if let Some(block) = blocks.get(i) {
            lines.extend(block.lines().iter().map(String::as_str));
        }
    }

    lines.join("\n")
}

/// Number of boundary sentinels in a transcript.
pub fn boundary_count(transcript: &str) -> usize {
    transcript.lines().filter(|l| is_boundary(l)).count()
}
