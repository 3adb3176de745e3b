//! Tangle algorithm: chunks to one interpreter script.

use crate::config::markers::{boundary_command, CLOSING_CONSTRUCT, EMPTY_ECHO};

use super::document::Document;

/// Serializes the code of every chunk into one script.
///
/// Each chunk's code is followed by a command printing the boundary sentinel,
/// so the transcript splits back into exactly one segment per chunk. When the
/// last code line of a chunk is not the end of a multi-line definition, an
/// empty echo goes in front of it to flush prompt noise left by the lines
/// before.
pub fn tangle(doc: &Document) -> String {
    let mut lines: Vec<String> = Vec::new();

    for chunk in doc.chunks() {
        lines.extend(chunk.code.iter().cloned());

        if let Some(last) = chunk.code.last() {
            if last.trim() != CLOSING_CONSTRUCT {
                lines.insert(lines.len() - 1, EMPTY_ECHO.to_string());
            }
        }

        lines.push(boundary_command());
    }

    lines.join("\n")
}
