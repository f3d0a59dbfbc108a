//! aliaser - Shell Alias Manager
//!
//! Keeps user-defined aliases in a marked section of a bash, zsh or fish
//! startup file, leaving the rest of the file untouched.
//!
//! # Features
//!
//! - Create, list, update and delete aliases in the managed section
//! - Alias name validation (reserved words, existing commands)
//! - Export to and import from a plain `name=command` format, including URLs
//! - Atomic rewrites and automatic backups

pub mod backup;
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod i18n;
pub mod model;
pub mod section;
pub mod transfer;
pub mod utils;
pub mod validator;

pub use error::{AliasError, Result};
pub use formatter::{get_formatter, AliasFormatter};
pub use model::{Alias, AliasSet, Config, ShellType};
pub use section::SectionManager;
pub use validator::{is_valid_alias_name, AliasNameValidator};
