//! Add, remove, update and list aliases inside the managed section
//!
//! Every call is one complete read-modify-write cycle: the file is read from
//! disk, the section is created in memory if absent, the change is applied and
//! the whole file is replaced with a single atomic write. Nothing is cached
//! between calls.

use std::path::{Path, PathBuf};

use super::{ConfigDocument, SectionRange};
use crate::error::{AliasError, Result};
use crate::formatter::{get_formatter, AliasFormatter};
use crate::model::{AliasSet, ShellType};
use crate::utils::path::{atomic_write, read_file_or_empty};
use crate::validator::AliasNameValidator;

/// Orchestrates alias operations on one config file for one shell
pub struct SectionManager {
    shell_type: ShellType,
    config_path: PathBuf,
    formatter: Box<dyn AliasFormatter>,
    validator: AliasNameValidator,
}

impl SectionManager {
    pub fn new(shell_type: ShellType, config_path: impl Into<PathBuf>) -> Self {
        Self {
            shell_type,
            config_path: config_path.into(),
            formatter: get_formatter(shell_type),
            validator: AliasNameValidator::default(),
        }
    }

    /// Replace the name validator (e.g. with a fixed command list in tests)
    pub fn with_validator(mut self, validator: AliasNameValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn shell_type(&self) -> ShellType {
        self.shell_type
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn validator(&self) -> &AliasNameValidator {
        &self.validator
    }

    fn load(&self) -> Result<ConfigDocument> {
        let text = read_file_or_empty(&self.config_path)?;
        Ok(ConfigDocument::parse(&text))
    }

    fn save(&self, doc: &ConfigDocument) -> Result<()> {
        atomic_write(&self.config_path, &doc.render())?;
        tracing::debug!(path = %self.config_path.display(), "rewrote config file");
        Ok(())
    }

    /// Persist a section created by `ensure_section` when the operation
    /// itself turned out to be a no-op
    fn save_if_created(&self, doc: &ConfigDocument, created: bool) -> Result<()> {
        if created {
            self.save(doc)?;
        }
        Ok(())
    }

    /// Indices of section lines declaring `name`, in file order
    fn declaring_lines(&self, doc: &ConfigDocument, range: SectionRange, name: &str) -> Vec<usize> {
        range
            .entries()
            .filter(|&idx| self.formatter.line_declares(&doc.lines()[idx], name))
            .collect()
    }

    fn check_command(&self, name: &str, command: &str) -> Result<()> {
        let reason = if command.trim().is_empty() {
            "command is empty"
        } else if command.contains('\n') || command.contains('\r') {
            "command must be a single line"
        } else {
            return Ok(());
        };
        Err(AliasError::InvalidCommand {
            name: name.to_string(),
            reason: reason.to_string(),
        })
    }

    /// Write `line` over the first declaration of `name` and drop any later
    /// declarations of the same name
    fn replace_in_place(&self, doc: &mut ConfigDocument, positions: &[usize], line: String) {
        let Some((&first, rest)) = positions.split_first() else {
            return;
        };
        doc.replace_line(first, line);
        for &idx in rest.iter().rev() {
            doc.remove_line(idx);
        }
    }

    /// All aliases in the managed section, in file order.
    ///
    /// Read-only: a missing file or a file without a section yields an empty set.
    /// Hand-edited declarations whose value cannot be parsed back (e.g. an
    /// unquoted multi-word `alias ll=ls -la`) are skipped here, although they
    /// still count as existing for `add_alias` and are removed by `clear_aliases`.
    pub fn get_all_aliases(&self) -> Result<AliasSet> {
        let doc = self.load()?;
        let Some(range) = doc.locate()? else {
            return Ok(AliasSet::new());
        };

        let mut aliases = AliasSet::new();
        for line in &doc.lines()[range.entries()] {
            if let Some(alias) = self.formatter.parse_alias_line(line) {
                aliases.insert(alias.name, alias.command);
            }
        }
        Ok(aliases)
    }

    /// Add an alias.
    ///
    /// Returns `Ok(false)` if the name already exists and `force` is false.
    /// With `force` the existing line is replaced where it stands.
    pub fn add_alias(&self, name: &str, command: &str, force: bool) -> Result<bool> {
        self.validator.validate(name)?;
        self.check_command(name, command)?;

        let mut doc = self.load()?;
        let (range, created) = doc.ensure_section()?;
        let positions = self.declaring_lines(&doc, range, name);
        let line = self.formatter.format_alias(name, command);

        if positions.is_empty() {
            doc.insert_line(range.end, line);
        } else if force {
            self.replace_in_place(&mut doc, &positions, line);
        } else {
            tracing::debug!(alias = name, "alias already exists, leaving it untouched");
            self.save_if_created(&doc, created)?;
            return Ok(false);
        }

        self.save(&doc)?;
        tracing::info!(alias = name, shell = %self.shell_type, "alias added");
        Ok(true)
    }

    /// Remove an alias. Returns `Ok(false)` if it was not found.
    pub fn remove_alias(&self, name: &str) -> Result<bool> {
        let mut doc = self.load()?;
        let (range, created) = doc.ensure_section()?;
        let positions = self.declaring_lines(&doc, range, name);

        if positions.is_empty() {
            self.save_if_created(&doc, created)?;
            return Ok(false);
        }

        for &idx in positions.iter().rev() {
            doc.remove_line(idx);
        }

        self.save(&doc)?;
        tracing::info!(alias = name, shell = %self.shell_type, "alias removed");
        Ok(true)
    }

    /// Point an existing alias at a new command, keeping its position.
    /// Returns `Ok(false)` if it was not found.
    ///
    /// The name is not validated: only names already declared in the section
    /// can match, and those were accepted when they were added.
    pub fn update_alias(&self, name: &str, new_command: &str) -> Result<bool> {
        self.check_command(name, new_command)?;

        let mut doc = self.load()?;
        let (range, created) = doc.ensure_section()?;
        let positions = self.declaring_lines(&doc, range, name);

        if positions.is_empty() {
            self.save_if_created(&doc, created)?;
            return Ok(false);
        }

        let line = self.formatter.format_alias(name, new_command);
        self.replace_in_place(&mut doc, &positions, line);

        self.save(&doc)?;
        tracing::info!(alias = name, shell = %self.shell_type, "alias updated");
        Ok(true)
    }

    /// Remove every alias declaration from the section in a single rewrite.
    /// Comments, blank lines and markers stay. Returns how many were removed.
    pub fn clear_aliases(&self) -> Result<usize> {
        let mut doc = self.load()?;
        let (range, created) = doc.ensure_section()?;

        let positions: Vec<usize> = range
            .entries()
            .filter(|&idx| self.formatter.declared_name(&doc.lines()[idx]).is_some())
            .collect();

        if positions.is_empty() {
            self.save_if_created(&doc, created)?;
            return Ok(0);
        }

        for &idx in positions.iter().rev() {
            doc.remove_line(idx);
        }

        self.save(&doc)?;
        tracing::info!(removed = positions.len(), "cleared managed aliases");
        Ok(positions.len())
    }
}
