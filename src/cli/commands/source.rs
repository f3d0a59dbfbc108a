//! Source command implementation
//!
//! A child process cannot change its parent shell, so this prints the reload
//! command for the user (or `eval`) to run.

use anyhow::Result;

use crate::cli::Context;

pub fn execute(ctx: &Context) -> Result<()> {
    println!("{}", ctx.shell_type.reload_command(&ctx.config_file));
    Ok(())
}
