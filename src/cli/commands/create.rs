//! Create command implementation

use anyhow::Result;

use crate::cli::Context;

pub fn execute(ctx: &Context, name: &str, command: &str, force: bool) -> Result<()> {
    let manager = ctx.manager();
    let msg = ctx.messages;

    ctx.backup_before_change()?;

    if manager.add_alias(name, command, force)? {
        ctx.print_success(
            &msg.alias_created
                .replacen("{}", name, 1)
                .replacen("{}", command, 1),
        );
        ctx.print_reload_hint();
    } else {
        ctx.print_warning(&msg.alias_exists.replace("{}", name));
    }

    Ok(())
}
