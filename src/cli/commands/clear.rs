//! Clear command implementation

use anyhow::Result;
use dialoguer::Confirm;

use crate::cli::Context;

pub fn execute(ctx: &Context, yes: bool) -> Result<()> {
    let msg = ctx.messages;

    if !yes
        && !Confirm::new()
            .with_prompt(
                msg.clear_prompt
                    .replace("{}", &ctx.config_file.display().to_string()),
            )
            .default(false)
            .interact()?
    {
        println!("{}", msg.cancelled);
        return Ok(());
    }

    ctx.backup_before_change()?;

    let removed = ctx.manager().clear_aliases()?;
    ctx.print_success(&msg.aliases_cleared.replace("{}", &removed.to_string()));
    if removed > 0 {
        ctx.print_reload_hint();
    }

    Ok(())
}
