//! Update command implementation

use anyhow::Result;

use crate::cli::Context;

pub fn execute(ctx: &Context, name: &str, command: &str) -> Result<()> {
    let manager = ctx.manager();
    let msg = ctx.messages;

    ctx.backup_before_change()?;

    if !manager.update_alias(name, command)? {
        anyhow::bail!(msg.alias_not_found.replace("{}", name));
    }

    ctx.print_success(
        &msg.alias_updated
            .replacen("{}", name, 1)
            .replacen("{}", command, 1),
    );
    ctx.print_reload_hint();

    Ok(())
}
