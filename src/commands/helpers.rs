//! Shared command helpers.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::interface::Context;

/// Reads the whole input document; `None` or `-` means stdin.
pub fn read_input(ctx: &Context, input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => Ok(fs::read_to_string(ctx.resolve_path(path))?),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Writes `text` as one block followed by a newline; `None` means stdout.
pub fn write_output(ctx: &Context, output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            let full_path: PathBuf = ctx.resolve_path(path);
            fs::write(&full_path, format!("{}\n", text))?;
            tracing::debug!("Wrote {}", full_path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", text)?;
            handle.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_roundtrip_through_files() {
        let dir = tempdir().unwrap();
        let ctx = Context::default_for_dir(dir.path().to_path_buf());

        write_output(&ctx, Some(Path::new("out.txt")), "a\nb").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("out.txt")).unwrap(), "a\nb\n");

        let text = read_input(&ctx, Some(Path::new("out.txt"))).unwrap();
        assert_eq!(text, "a\nb\n");
    }

    #[test]
    fn test_missing_input_is_error() {
        let dir = tempdir().unwrap();
        let ctx = Context::default_for_dir(dir.path().to_path_buf());
        assert!(read_input(&ctx, Some(Path::new("nope.txt"))).is_err());
    }
}
