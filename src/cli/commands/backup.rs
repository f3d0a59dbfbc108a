//! Backup command implementation

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use crate::backup::BackupManager;
use crate::cli::args::BackupCommands;
use crate::cli::Context;

/// Execute the backup command
pub fn execute(ctx: &Context, backup_cmd: &BackupCommands) -> Result<()> {
    let backup_manager = ctx.get_backup_manager();

    match backup_cmd {
        BackupCommands::List => list_backups(ctx, &backup_manager),
        BackupCommands::Restore { id, yes } => restore_backup(ctx, &backup_manager, id, *yes),
        BackupCommands::Clean { keep } => clean_backups(ctx, &backup_manager, *keep),
    }
}

fn list_backups(ctx: &Context, manager: &BackupManager) -> Result<()> {
    let msg = ctx.messages;
    let backups = manager.list_backups()?;

    if backups.is_empty() {
        println!("{}", msg.no_backups_found.dimmed());
        return Ok(());
    }

    println!("{}", msg.backup_list_header.bold());
    println!();

    println!(
        "{:<40} {:<24} {}",
        "ID".bold().cyan(),
        "TIMESTAMP".bold().cyan(),
        "SIZE".bold().cyan()
    );
    println!("{}", "─".repeat(72).dimmed());

    for backup in &backups {
        println!(
            "{:<40} {:<24} {}",
            backup.id.white(),
            backup.timestamp.dimmed(),
            format_size(backup.size).dimmed()
        );
    }

    println!();
    println!("{}", format!("Total: {} backup(s)", backups.len()).dimmed());

    Ok(())
}

fn restore_backup(ctx: &Context, manager: &BackupManager, id: &str, yes: bool) -> Result<()> {
    let msg = ctx.messages;
    let Some(backup) = manager.get_backup(id)? else {
        anyhow::bail!(msg.backup_not_found.replace("{}", id));
    };

    println!(
        "Restoring backup: {} ({})",
        backup.id.cyan(),
        backup.timestamp.dimmed()
    );

    if !yes
        && !Confirm::new()
            .with_prompt(msg.restore_prompt)
            .default(false)
            .interact()?
    {
        println!("{}", msg.cancelled);
        return Ok(());
    }

    manager.restore_backup(&backup.id, &ctx.config_file)?;

    ctx.print_success(
        &msg.backup_restored
            .replacen("{}", &backup.id, 1)
            .replacen("{}", &ctx.config_file.display().to_string(), 1),
    );
    ctx.print_reload_hint();

    Ok(())
}

fn clean_backups(ctx: &Context, manager: &BackupManager, keep: usize) -> Result<()> {
    let removed = manager.cleanup_keep(keep)?;
    ctx.print_success(&ctx.messages.backups_cleaned.replace("{}", &removed.to_string()));
    Ok(())
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
