//! Command execution context

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::backup::BackupManager;
use crate::cli::args::Cli;
use crate::i18n::{init_messages, Language, Messages};
use crate::model::{Config, ShellType};
use crate::section::SectionManager;
use crate::utils::shell_detect::get_shell_type;

/// Common context for command execution
pub struct Context {
    pub config: Config,
    pub shell_type: ShellType,
    pub config_file: PathBuf,
    pub messages: &'static Messages,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = crate::config::load_or_create_config()?;

        let lang: Language = config.ui.language.parse().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to English");
            Language::default()
        });
        let messages = init_messages(lang);

        let shell_type = get_shell_type(cli.shell.map(|s| s.into()), cli.file.as_deref())?;

        let config_file = cli
            .file
            .clone()
            .unwrap_or_else(|| config.shell_config_path(shell_type));

        tracing::debug!(
            shell = %shell_type,
            file = %config_file.display(),
            "resolved shell config"
        );

        Ok(Self {
            config,
            shell_type,
            config_file,
            messages,
        })
    }

    /// Section manager for the resolved config file
    pub fn manager(&self) -> SectionManager {
        SectionManager::new(self.shell_type, &self.config_file)
    }

    /// Get a BackupManager instance
    pub fn get_backup_manager(&self) -> BackupManager {
        BackupManager::new(self.shell_type, &self.config)
    }

    /// Back up the config file before it gets rewritten.
    ///
    /// Does nothing when backups are disabled or the file does not exist.
    pub fn backup_before_change(&self) -> Result<()> {
        if !self.config.backup.enabled || !self.config_file.exists() {
            return Ok(());
        }
        let path = self.get_backup_manager().create_backup(&self.config_file)?;
        tracing::info!(backup = %path.display(), "backed up config file");
        Ok(())
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print reload hint after modifying configuration
    pub fn print_reload_hint(&self) {
        let reload_cmd = self.shell_type.reload_command(&self.config_file);
        println!(
            "{} {}",
            "→".cyan(),
            self.messages
                .reload_hint
                .replace("{}", &reload_cmd)
                .dimmed()
        );
    }
}
