//! Line classification.
//!
//! Both functions here are pure. The one bit of history the classifier needs,
//! whether the previous line blocks entry into code mode, is owned by the
//! caller and passed in on every call.

use crate::config::markers::{is_output, CODE_CONTINUATION, CODE_START};

use super::types::{LineKind, State};

/// Classifies `line` given the segmenter's current state.
///
/// Code continuation is only recognized inside a code run and output only
/// inside a code or output run. A code start right after a blocking line is
/// prose: that keeps an indented bit of quoted text in the middle of a
/// paragraph from switching into code mode.
pub fn classify(line: &str, state: State, previous_blocking: bool) -> LineKind {
    match state {
        State::Text => {
            if !previous_blocking && CODE_START.is_match(line) {
                LineKind::CodeStart
            } else {
                LineKind::Prose
            }
        }
        State::Code => {
            if is_output(line) {
                LineKind::Output
            } else if CODE_CONTINUATION.is_match(line) {
                LineKind::CodeContinuation
            } else {
                LineKind::Prose
            }
        }
        State::Output => {
            if is_output(line) {
                LineKind::Output
            } else if CODE_START.is_match(line) {
                LineKind::CodeStart
            } else {
                LineKind::Prose
            }
        }
    }
}

/// Whether `line` blocks code mode on the line after it.
///
/// `state_after` is the segmenter state once `line` has been consumed. Only a
/// non-blank prose line that doesn't look like output blocks.
pub fn is_blocking(line: &str, state_after: State) -> bool {
    state_after == State::Text && !is_output(line) && !line.trim().is_empty()
}
