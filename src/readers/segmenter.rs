//! Segmentation of classified lines into chunks.

use crate::model::{Chunk, Document};

use super::classifier::{classify, is_blocking};
use super::types::{LineKind, State};

/// Single-pass state machine turning lines into (prose, code) chunks.
///
/// Output lines from an earlier weave are recognized and thrown away, so the
/// resulting document only ever holds prose and code.
#[derive(Debug, Default)]
pub struct Segmenter {
    state: State,
    /// Whether the previous line blocks a code start on this one.
    blocking: bool,
    prose: Vec<String>,
    code: Vec<String>,
    chunks: Vec<Chunk>,
}

impl Segmenter {
    /// Creates a segmenter in the text state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Consumes one line of input.
    pub fn feed(&mut self, raw: &str) {
        let line = raw.trim_end_matches(['\r', '\n']);
        let kind = classify(line, self.state, self.blocking);
        let stored = line.trim_end().to_string();

        match (self.state, kind) {
            (State::Text, LineKind::CodeStart) => {
                self.code.push(stored);
                self.state = State::Code;
            }
            (State::Text, _) => self.prose.push(stored),

            (State::Code, LineKind::Output) => self.state = State::Output,
            (State::Code, LineKind::CodeContinuation) => self.code.push(stored),
            (State::Code, _) => {
                self.flush();
                self.prose.push(stored);
                self.state = State::Text;
            }

            (State::Output, LineKind::Output) => {}
            (State::Output, LineKind::CodeStart) => {
                self.flush();
                self.code.push(stored);
                self.state = State::Code;
            }
            (State::Output, _) => {
                self.flush();
                self.prose.push(stored);
                self.state = State::Text;
            }
        }

        self.blocking = is_blocking(line, self.state);
    }

    /// Flushes the remaining buffers and returns the document.
    pub fn finish(mut self) -> Document {
        if !self.prose.is_empty() || !self.code.is_empty() {
            self.flush();
        }
        tracing::debug!(chunks = self.chunks.len(), "segmented document");
        Document::new(self.chunks)
    }

    fn flush(&mut self) {
        let prose = std::mem::take(&mut self.prose);
        let code = std::mem::take(&mut self.code);
        self.chunks.push(Chunk::new(prose, code));
    }
}

/// Segments a whole document.
pub fn parse_document(input: &str) -> Document {
    parse_lines(input.lines())
}

/// Segments a sequence of lines.
pub fn parse_lines<I, S>(lines: I) -> Document
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut segmenter = Segmenter::new();
    for line in lines {
        segmenter.feed(line.as_ref());
    }
    segmenter.finish()
}
