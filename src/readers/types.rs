//! Type definitions for readers.

use serde::Serialize;

/// Segmenter state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum State {
    /// Reading prose.
    #[default]
    Text,
    /// Reading code lines.
    Code,
    /// Skipping output left by a previous weave.
    Output,
}

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LineKind {
    /// First line of a code block.
    CodeStart,
    /// Further line of the current code block.
    CodeContinuation,
    /// Output captured by an earlier weave.
    Output,
    /// Anything else.
    Prose,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        assert_eq!(State::default(), State::Text);
    }
}
