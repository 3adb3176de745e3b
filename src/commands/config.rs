//! Config command implementation.

use crate::errors::Result;
use crate::interface::Context;

/// Prints the effective resolved configuration.
pub fn config(ctx: &Context) -> Result<()> {
    let toml_str = toml::to_string_pretty(&ctx.config)?;
    print!("{}", toml_str);
    Ok(())
}
