//! Backup management module
//!
//! Copies of a shell config file taken before aliaser rewrites it, stored as
//! `<backups>/<shell>/<timestamp>_<filename>.bak`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use time::macros::format_description;
use time::OffsetDateTime;

use crate::model::{Config, ShellType};
use crate::utils::path::atomic_write;

/// Backup entry information
#[derive(Debug, Clone)]
pub struct BackupEntry {
    pub id: String,
    pub path: PathBuf,
    pub timestamp: String,
    pub filename: String,
    pub size: u64,
}

/// Backup manager
pub struct BackupManager {
    backup_dir: PathBuf,
    max_count: usize,
}

impl BackupManager {
    pub fn new(shell_type: ShellType, config: &Config) -> Self {
        Self::with_dir(
            Config::backups_dir().join(shell_type.name()),
            config.backup.max_count,
        )
    }

    pub fn with_dir(backup_dir: impl Into<PathBuf>, max_count: usize) -> Self {
        Self {
            backup_dir: backup_dir.into(),
            max_count,
        }
    }

    /// Ensure backup directory exists
    fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.backup_dir)
            .with_context(|| format!("Failed to create {}", self.backup_dir.display()))?;
        Ok(())
    }

    /// Create a backup of the specified file and prune old ones
    pub fn create_backup(&self, source_file: &Path) -> Result<PathBuf> {
        self.ensure_dir()?;

        let timestamp = OffsetDateTime::now_utc().format(format_description!(
            "[year]-[month]-[day]_[hour][minute][second][subsecond digits:3]"
        ))?;

        let filename = source_file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "config".to_string());

        let backup_path = self.backup_dir.join(format!("{}_{}.bak", timestamp, filename));

        std::fs::copy(source_file, &backup_path)
            .with_context(|| format!("Failed to back up {}", source_file.display()))?;
        tracing::debug!(backup = %backup_path.display(), "created backup");

        self.cleanup_old_backups()?;

        Ok(backup_path)
    }

    /// List all backups, newest first
    pub fn list_backups(&self) -> Result<Vec<BackupEntry>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();

        for entry in std::fs::read_dir(&self.backup_dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().map(|e| e == "bak").unwrap_or(false) {
                let filename = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();

                let size = entry.metadata()?.len();

                // "<date>_<time>_<original filename>.bak"
                let timestamp = filename.split('_').take(2).collect::<Vec<_>>().join("_");
                let id = filename.trim_end_matches(".bak").to_string();

                entries.push(BackupEntry {
                    id,
                    path,
                    timestamp,
                    filename,
                    size,
                });
            }
        }

        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Ok(entries)
    }

    /// Get a specific backup by ID (or a unique part of its file name)
    pub fn get_backup(&self, id: &str) -> Result<Option<BackupEntry>> {
        let backups = self.list_backups()?;
        Ok(backups
            .into_iter()
            .find(|b| b.id == id || b.filename.contains(id)))
    }

    /// Restore a backup by ID, backing up the current state first
    pub fn restore_backup(&self, id: &str, target_file: &Path) -> Result<()> {
        let backup = self
            .get_backup(id)?
            .ok_or_else(|| anyhow::anyhow!("Backup not found: {}", id))?;

        if target_file.exists() {
            self.create_backup(target_file)?;
        }

        let content = std::fs::read_to_string(&backup.path)?;
        atomic_write(target_file, &content)?;

        Ok(())
    }

    /// Clean up old backups, keeping only the configured number
    pub fn cleanup_old_backups(&self) -> Result<usize> {
        self.cleanup_keep(self.max_count)
    }

    /// Clean up backups, keeping only the specified number
    pub fn cleanup_keep(&self, keep: usize) -> Result<usize> {
        let backups = self.list_backups()?;

        if backups.len() <= keep {
            return Ok(0);
        }

        let mut removed = 0;
        for backup in backups.into_iter().skip(keep) {
            std::fs::remove_file(&backup.path)?;
            removed += 1;
        }

        Ok(removed)
    }
}
