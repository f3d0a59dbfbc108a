//! Core data models for aliaser

mod alias;
mod config;
mod shell;

pub use alias::{Alias, AliasSet};
pub use config::{BackupConfig, Config, PathsConfig, UiConfig, CONFIG_DIR_ENV};
pub use shell::{ConfigLocator, ShellType};
