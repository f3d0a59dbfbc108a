//! CLI command implementations

pub mod backup;
pub mod clear;
pub mod create;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod path;
pub mod source;
pub mod update;

use anyhow::Result;

use crate::cli::args::{Cli, Commands};
use crate::cli::Context;

/// Dispatch a parsed command line
pub fn execute(cli: &Cli) -> Result<()> {
    let ctx = Context::from_cli(cli)?;

    match &cli.command {
        Commands::Create {
            name,
            command,
            force,
        } => create::execute(&ctx, name, command, *force),
        Commands::List => list::execute(&ctx),
        Commands::Delete { name } => delete::execute(&ctx, name),
        Commands::Update { name, command } => update::execute(&ctx, name, command),
        Commands::Export { output } => export::execute(&ctx, output),
        Commands::Import { source, force } => import::execute(&ctx, source, *force),
        Commands::Clear { yes } => clear::execute(&ctx, *yes),
        Commands::Source => source::execute(&ctx),
        Commands::Path => path::execute(&ctx),
        Commands::Backup { backup_command } => backup::execute(&ctx, backup_command),
    }
}
