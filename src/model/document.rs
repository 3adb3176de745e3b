//! A segmented literate document.

use std::fmt;

use serde::Serialize;

use super::chunk::Chunk;
use super::tangle::tangle;
use super::weave::weave;

/// An ordered sequence of chunks, built once from the input text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    chunks: Vec<Chunk>,
}

impl Document {
    /// Creates a document from already segmented chunks.
    pub fn new(chunks: Vec<Chunk>) -> Self {
        Self { chunks }
    }

    /// Segments raw document text.
    pub fn parse(input: &str) -> Self {
        crate::readers::parse_document(input)
    }

    /// Segments a sequence of lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        crate::readers::parse_lines(lines)
    }

    /// Returns the chunks in document order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Returns the number of chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns true if the document has no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Number of chunks that carry code.
    pub fn code_chunks(&self) -> usize {
        self.chunks.iter().filter(|c| c.has_code()).count()
    }

    /// Produces the executable script for this document.
    pub fn tangle(&self) -> String {
        tangle(self)
    }

    /// Renders the document with fresh output from `transcript`.
    pub fn weave(&self, transcript: &str) -> String {
        weave(self, transcript)
    }
}

/// Renders prose and code with all output removed.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for line in self.chunks.iter().flat_map(|c| c.lines()) {
            if !first {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
            first = false;
        }
        Ok(())
    }
}
