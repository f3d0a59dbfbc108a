//! Path command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;

pub fn execute(ctx: &Context) -> Result<()> {
    println!(
        "{} {}",
        ctx.config_file.display(),
        format!("({})", ctx.shell_type).dimmed()
    );
    Ok(())
}
