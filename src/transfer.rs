//! Plain-text alias export and import
//!
//! The exchange format is one `name=command` pair per line, unquoted and
//! newline-terminated. On import, blank lines and lines without `=` are
//! ignored.

use crate::error::{AliasError, Result};
use crate::model::AliasSet;
use crate::section::SectionManager;

/// Render aliases in the exchange format
pub fn export_aliases(aliases: &AliasSet) -> String {
    let mut out = String::new();
    for alias in aliases {
        out.push_str(&alias.name);
        out.push('=');
        out.push_str(&alias.command);
        out.push('\n');
    }
    out
}

/// One usable line of an import file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEntry {
    /// 1-based line number in the source
    pub line_number: usize,
    pub name: String,
    pub command: String,
}

/// Parse the exchange format, dropping blank and malformed lines.
///
/// Returns the usable entries and the number of ignored lines.
pub fn parse_import(content: &str) -> (Vec<ImportEntry>, usize) {
    let mut entries = Vec::new();
    let mut ignored = 0;

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        match line.split_once('=') {
            Some((name, command)) => entries.push(ImportEntry {
                line_number: idx + 1,
                name: name.trim().to_string(),
                command: command.trim().to_string(),
            }),
            None if line.is_empty() => {}
            None => ignored += 1,
        }
    }

    (entries, ignored)
}

/// What happened to one imported line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported,
    /// Already present and not forced
    Skipped,
    Failed(String),
}

/// Per-line tally of an import run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub results: Vec<(ImportEntry, ImportOutcome)>,
    /// Non-empty lines without `=`
    pub ignored: usize,
}

impl ImportReport {
    fn count(&self, pred: impl Fn(&ImportOutcome) -> bool) -> usize {
        self.results.iter().filter(|(_, o)| pred(o)).count()
    }

    pub fn imported(&self) -> usize {
        self.count(|o| matches!(o, ImportOutcome::Imported))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, ImportOutcome::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ImportOutcome::Failed(_)))
    }
}

/// Import aliases from exchange-format text.
///
/// Names already present are skipped unless `force` is set. Lines rejected by
/// validation are recorded as failures and the import continues; I/O errors
/// and a malformed section abort it.
pub fn import_aliases(manager: &SectionManager, content: &str, force: bool) -> Result<ImportReport> {
    let (entries, ignored) = parse_import(content);
    let existing = manager.get_all_aliases()?;
    let mut report = ImportReport {
        results: Vec::with_capacity(entries.len()),
        ignored,
    };

    for entry in entries {
        if !force && existing.contains(&entry.name) {
            tracing::warn!(alias = %entry.name, "alias already exists, skipping import");
            report.results.push((entry, ImportOutcome::Skipped));
            continue;
        }

        let outcome = match manager.add_alias(&entry.name, &entry.command, force) {
            Ok(true) => ImportOutcome::Imported,
            Ok(false) => ImportOutcome::Skipped,
            Err(e @ AliasError::InvalidAliasName { .. })
            | Err(e @ AliasError::InvalidCommand { .. }) => {
                tracing::warn!(line = entry.line_number, error = %e, "import line rejected");
                ImportOutcome::Failed(e.to_string())
            }
            Err(e) => return Err(e),
        };
        report.results.push((entry, outcome));
    }

    Ok(report)
}
