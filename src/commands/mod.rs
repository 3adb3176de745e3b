//! Command implementations.

pub mod chunks;
pub mod config;
mod helpers;
pub mod run;
pub mod strip;
pub mod tangle;
pub mod weave;

pub use chunks::{chunks, ChunksOptions};
pub use config::config;
pub use run::{run, RunOptions};
pub use strip::{strip, StripOptions};
pub use tangle::{tangle, TangleOptions};
pub use weave::{weave, WeaveOptions};
