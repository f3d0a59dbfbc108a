//! Export command implementation

use anyhow::{Context as _, Result};
use colored::Colorize;
use std::path::Path;

use crate::cli::Context;
use crate::transfer::export_aliases;

pub fn execute(ctx: &Context, output: &Path) -> Result<()> {
    let aliases = ctx.manager().get_all_aliases()?;
    let msg = ctx.messages;

    std::fs::write(output, export_aliases(&aliases))
        .with_context(|| format!("Failed to write {}", output.display()))?;

    ctx.print_success(
        &msg.exported_aliases
            .replacen("{}", &aliases.len().to_string(), 1)
            .replacen("{}", &output.display().to_string().cyan().to_string(), 1),
    );

    Ok(())
}
