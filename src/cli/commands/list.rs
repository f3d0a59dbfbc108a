//! List command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;
use crate::utils::strings::truncate_display;

/// Get terminal width, defaulting to 80 if unable to detect
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Split the terminal width into (name, command) column widths
fn calculate_column_widths(term_width: usize, longest_name: usize) -> (usize, usize) {
    // "│ " prefix (2) + " │" suffix (2) + column gap (1)
    let fixed_overhead = 5;
    let available = term_width.saturating_sub(fixed_overhead);

    let name_width = longest_name.clamp(4, (available * 40 / 100).max(10));
    let command_width = available.saturating_sub(name_width + 1).max(10);

    (name_width, command_width)
}

pub fn execute(ctx: &Context) -> Result<()> {
    let aliases = ctx.manager().get_all_aliases()?;
    let msg = ctx.messages;

    if aliases.is_empty() {
        println!("{}", msg.no_aliases_found.dimmed());
        return Ok(());
    }

    let longest_name = aliases
        .names()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0);
    let (name_w, command_w) = calculate_column_widths(get_terminal_width(), longest_name);
    let content_width = name_w + 1 + command_w;

    println!(
        "┌─ {} {}",
        ctx.config_file.display().to_string().bold(),
        format!("({})", ctx.shell_type).dimmed()
    );
    println!(
        "│ {:<name_w$} {:<command_w$} │",
        msg.header_name.bold().cyan(),
        msg.header_command.bold().cyan(),
        name_w = name_w,
        command_w = command_w
    );
    println!("│ {} │", "─".repeat(content_width).dimmed());

    for alias in &aliases {
        println!(
            "│ {:<name_w$} {:<command_w$} │",
            truncate_display(&alias.name, name_w).green(),
            truncate_display(&alias.command, command_w),
            name_w = name_w,
            command_w = command_w
        );
    }

    println!("└{}┘", "─".repeat(content_width + 2).dimmed());
    println!(
        "{}",
        msg.total_aliases
            .replace("{}", &aliases.len().to_string())
            .dimmed()
    );

    Ok(())
}
