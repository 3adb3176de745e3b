//! Strip command implementation.

use std::path::PathBuf;

use crate::errors::Result;
use crate::interface::Context;
use crate::model::Document;

use super::helpers::{read_input, write_output};

/// Options for the strip command.
#[derive(Debug, Clone, Default)]
pub struct StripOptions {
    /// Input document (stdin when absent).
    pub input: Option<PathBuf>,
    /// Output file (stdout when absent).
    pub output: Option<PathBuf>,
}

/// Writes the document with all woven output removed.
pub fn strip(ctx: &Context, options: StripOptions) -> Result<()> {
    let input = read_input(ctx, options.input.as_deref())?;
    let doc = Document::parse(&input);
    write_output(ctx, options.output.as_deref(), &doc.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_strip_removes_output() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("woven.txt"),
            "Sum:\n\n       +/ 1 2 3\n    ┆ 6\u{a0}\n\nEnd.\n",
        )
        .unwrap();

        let ctx = Context::default_for_dir(dir.path().to_path_buf());
        let options = StripOptions {
            input: Some(PathBuf::from("woven.txt")),
            output: Some(PathBuf::from("clean.txt")),
        };
        strip(&ctx, options).unwrap();

        let clean = fs::read_to_string(dir.path().join("clean.txt")).unwrap();
        assert_eq!(clean, "Sum:\n\n       +/ 1 2 3\n\nEnd.\n");
    }
}
