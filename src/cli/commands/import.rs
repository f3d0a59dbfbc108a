//! Import command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;
use crate::transfer::{import_aliases, ImportOutcome};
use crate::utils::http::{fetch_url, is_url};
use crate::utils::path::expand_tilde;

/// Read import content from a local file or an http(s) URL
fn read_source(source: &str) -> Result<String> {
    if is_url(source) {
        println!("Fetching from URL: {}", source.cyan());
        return Ok(fetch_url(source)?);
    }

    let path = expand_tilde(source);
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }
    Ok(std::fs::read_to_string(&path)?)
}

pub fn execute(ctx: &Context, source: &str, force: bool) -> Result<()> {
    let content = read_source(source)?;
    let msg = ctx.messages;

    ctx.backup_before_change()?;

    let report = import_aliases(&ctx.manager(), &content, force)?;

    for (entry, outcome) in &report.results {
        match outcome {
            ImportOutcome::Imported => {}
            ImportOutcome::Skipped => ctx.print_warning(
                &msg.import_line_skipped
                    .replacen("{}", &entry.line_number.to_string(), 1)
                    .replacen("{}", &entry.name, 1),
            ),
            ImportOutcome::Failed(reason) => ctx.print_error(
                &msg.import_line_failed
                    .replacen("{}", &entry.line_number.to_string(), 1)
                    .replacen("{}", reason, 1),
            ),
        }
    }

    if report.ignored > 0 {
        println!(
            "{}",
            msg.import_ignored_lines
                .replace("{}", &report.ignored.to_string())
                .dimmed()
        );
    }

    ctx.print_success(
        &msg.import_summary
            .replacen("{}", &report.imported().to_string(), 1)
            .replacen("{}", &report.skipped().to_string(), 1)
            .replacen("{}", &report.failed().to_string(), 1),
    );

    if report.imported() > 0 {
        ctx.print_reload_hint();
    }

    Ok(())
}
