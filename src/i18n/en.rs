//! English language messages

use super::Messages;
use std::sync::OnceLock;

static EN_MESSAGES: OnceLock<Messages> = OnceLock::new();

pub fn messages() -> &'static Messages {
    EN_MESSAGES.get_or_init(|| Messages {
        // === General ===
        no_aliases_found: "No aliases found.",
        total_aliases: "Total: {} alias(es)",
        cancelled: "Cancelled.",

        // === Headers ===
        header_name: "NAME",
        header_command: "COMMAND",

        // === Create/Delete/Update ===
        alias_created: "Created alias '{}' = '{}'",
        alias_exists: "Alias '{}' already exists (use --force to overwrite)",
        alias_not_found: "Alias '{}' not found",
        alias_deleted: "Deleted alias '{}'",
        alias_updated: "Updated alias '{}' = '{}'",

        // === Clear ===
        clear_prompt: "Remove all managed aliases from {}?",
        aliases_cleared: "Removed {} alias(es)",

        // === Import/Export ===
        exported_aliases: "Exported {} alias(es) to {}",
        import_summary: "Imported {}, skipped {}, failed {}",
        import_line_failed: "Line {}: {}",
        import_line_skipped: "Line {}: '{}' already exists, skipped",
        import_ignored_lines: "Ignored {} line(s) without '='",

        // === Backup ===
        backup_restored: "Restored backup {} to {}",
        backup_not_found: "Backup not found: {}",
        backups_cleaned: "Removed {} old backup(s)",
        no_backups_found: "No backups found.",
        backup_list_header: "Available backups:",
        restore_prompt: "Restore this backup? The current file will be backed up first.",

        // === Reload Hint ===
        reload_hint: "Run '{}' to apply changes",
    })
}
