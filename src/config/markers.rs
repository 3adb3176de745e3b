//! Literal markers shared by the classifier, tangler and weaver.
//!
//! These must stay bit-exact: documents woven by one version are re-read by
//! the next, so none of them are configurable.

use once_cell::sync::Lazy;
use regex::Regex;

/// Exactly seven columns of indentation, then content.
pub static CODE_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s{7}\S").unwrap());

/// Seven or more columns of indentation, then content.
pub static CODE_CONTINUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s{7,}\S").unwrap());

/// Woven output line: indent, tee glyph, text, terminator.
pub static OUTPUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s{4}┆ .*\x{A0}[\t\n\x0C\r ]*$").unwrap());

/// Output lines written before the terminator sentinel was introduced.
pub static LEGACY_OUTPUT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s{4}┆ ").unwrap());

/// Printed by the tangled script after every chunk.
pub const BOUNDARY_SENTINEL: char = '\u{241E}';

/// Indentation in front of each woven output line.
pub const OUTPUT_INDENT: &str = "    ";

/// Glyph that opens each woven output line.
pub const OUTPUT_TEE: &str = "┆ ";

/// Terminates each woven output line; the classifier keys on it.
pub const OUTPUT_TERMINATOR: char = '\u{A0}';

/// What the interpreter echoes in front of the first output line of a chunk.
pub const PROMPT_PREFIX: &str = "   ";

/// Trimmed content of the line that closes a multi-line definition.
pub const CLOSING_CONSTRUCT: &str = ")";

/// Interpreter command that prints an empty line.
pub const EMPTY_ECHO: &str = "echo ''";

/// Interpreter command that prints the boundary sentinel on its own line.
pub fn boundary_command() -> String {
    format!("echo '{}'", BOUNDARY_SENTINEL)
}

/// Returns true if the line carries the boundary sentinel.
pub fn is_boundary(line: &str) -> bool {
    line.contains(BOUNDARY_SENTINEL)
}

/// Returns true if the line is a woven output line.
///
/// The tee prefix is required either way, so prose that merely ends in a
/// no-break space is never taken for output.
pub fn is_output(line: &str) -> bool {
    OUTPUT.is_match(line) || LEGACY_OUTPUT.is_match(line)
}

/// Formats one line of interpreter output for the woven document.
pub fn format_output_line(text: &str) -> String {
    format!(
        "{}{}{}{}",
        OUTPUT_INDENT,
        OUTPUT_TEE,
        text.trim_end(),
        OUTPUT_TERMINATOR
    )
}
