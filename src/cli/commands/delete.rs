//! Delete command implementation

use anyhow::Result;

use crate::cli::Context;

pub fn execute(ctx: &Context, name: &str) -> Result<()> {
    let manager = ctx.manager();
    let msg = ctx.messages;

    ctx.backup_before_change()?;

    if !manager.remove_alias(name)? {
        anyhow::bail!(msg.alias_not_found.replace("{}", name));
    }

    ctx.print_success(&msg.alias_deleted.replace("{}", name));
    ctx.print_reload_hint();

    Ok(())
}
