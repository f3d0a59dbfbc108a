//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::ShellType;
use crate::utils::path::expand_tilde;

/// Environment variable that relocates the aliaser config directory
pub const CONFIG_DIR_ENV: &str = "ALIASER_CONFIG_DIR";

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub backup: BackupConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

/// UI configuration options
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UiConfig {
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            language: default_language(),
        }
    }
}

/// Backup configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BackupConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_max_count")]
    pub max_count: usize,
}

fn default_true() -> bool {
    true
}

fn default_max_count() -> usize {
    20
}

impl Default for BackupConfig {
    fn default() -> Self {
        BackupConfig {
            enabled: true,
            max_count: default_max_count(),
        }
    }
}

/// Per-shell overrides for the managed config file
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PathsConfig {
    pub bash: Option<String>,
    pub zsh: Option<String>,
    pub fish: Option<String>,
}

impl PathsConfig {
    /// Override for the given shell, with `~` expanded
    pub fn override_for(&self, shell: ShellType) -> Option<PathBuf> {
        let raw = match shell {
            ShellType::Bash => self.bash.as_deref(),
            ShellType::Zsh => self.zsh.as_deref(),
            ShellType::Fish => self.fish.as_deref(),
        };
        raw.filter(|s| !s.trim().is_empty()).map(expand_tilde)
    }
}

impl Config {
    /// Get the aliaser configuration directory path
    pub fn config_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return PathBuf::from(dir);
        }

        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            })
            .join("aliaser")
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the backups directory path
    pub fn backups_dir() -> PathBuf {
        Self::config_dir().join("backups")
    }

    /// Load configuration from file, or return default if file doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Config file to manage for a shell: override from `[paths]` or the
    /// shell's resolution rule
    pub fn shell_config_path(&self, shell: ShellType) -> PathBuf {
        self.paths
            .override_for(shell)
            .unwrap_or_else(|| shell.default_config_path())
    }
}
