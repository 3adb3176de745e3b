//! Readers for classifying and segmenting literate documents.

mod classifier;
mod segmenter;
mod types;

pub use classifier::{classify, is_blocking};
pub use segmenter::{parse_document, parse_lines, Segmenter};
pub use types::{LineKind, State};
