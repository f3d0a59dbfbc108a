//! Error types for aliaser
//!
//! "Not found" and "already exists" are not errors: the section manager
//! reports them as `Ok(false)`. Everything in here is a genuine failure.

use thiserror::Error;

/// Result type alias for aliaser operations
pub type Result<T> = std::result::Result<T, AliasError>;

/// Error types for aliaser operations
#[derive(Error, Debug)]
pub enum AliasError {
    /// Alias name rejected by the validator
    #[error("'{name}' is not a valid alias name: {reason}")]
    InvalidAliasName { name: String, reason: String },

    /// Alias command cannot be stored on a single declaration line
    #[error("Invalid command for alias '{name}': {reason}")]
    InvalidCommand { name: String, reason: String },

    /// Shell name outside bash, zsh and fish
    #[error("Unsupported shell: {0} (supported: bash, zsh, fish)")]
    UnsupportedDialect(String),

    /// Start marker without end marker (or the reverse)
    #[error("Managed alias section is corrupted near line {line}: {detail}")]
    MalformedSection { line: usize, detail: String },

    /// Calling shell could not be identified
    #[error("Could not detect your shell: {0}")]
    ShellDetectionFailure(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Fetching an import source over HTTP failed
    #[error("Failed to fetch import source: {0}")]
    Fetch(String),
}

impl AliasError {
    /// Process exit status the CLI should use for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            AliasError::InvalidAliasName { .. }
            | AliasError::InvalidCommand { .. }
            | AliasError::UnsupportedDialect(_) => 2,
            AliasError::MalformedSection { .. } => 3,
            AliasError::ShellDetectionFailure(_) => 4,
            AliasError::Io(_) | AliasError::Fetch(_) => 1,
        }
    }
}
