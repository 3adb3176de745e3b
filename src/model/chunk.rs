//! Prose/code chunk, the unit of segmentation.

use serde::Serialize;

/// A run of prose lines followed by the code lines that come after them.
///
/// Output lines are never part of a chunk; they are dropped on parse and
/// regenerated on weave.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Chunk {
    /// Prose lines, in document order.
    pub prose: Vec<String>,
    /// Code lines, verbatim including indentation.
    pub code: Vec<String>,
}

impl Chunk {
    /// Creates a chunk from prose and code lines.
    pub fn new(prose: Vec<String>, code: Vec<String>) -> Self {
        Self { prose, code }
    }

    /// Returns true if this chunk has any code.
    pub fn has_code(&self) -> bool {
        !self.code.is_empty()
    }

    /// Returns true if both prose and code are empty.
    pub fn is_empty(&self) -> bool {
        self.prose.is_empty() && self.code.is_empty()
    }

    /// Iterates over prose then code lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.prose.iter().chain(self.code.iter()).map(String::as_str)
    }
}
