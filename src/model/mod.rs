//! Core model types for Jangle.

mod chunk;
mod document;
mod tangle;
mod weave;

pub use chunk::Chunk;
pub use document::Document;
pub use tangle::tangle;
pub use weave::{boundary_count, split_transcript, weave, OutputBlock};
