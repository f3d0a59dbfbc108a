//! Alias name validation
//!
//! A name is accepted only when it matches the identifier grammar, is not a
//! reserved word and does not shadow an executable on the search path.

mod reserved;

pub use reserved::{is_reserved_word, RESERVED_WORDS};

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{AliasError, Result};
use crate::utils::command_lookup::{CommandLookup, SearchPathLookup};

lazy_static! {
    /// Letters, digits, `_`, `.` and `-`; must not start with `.` or `-`
    static ref ALIAS_NAME_RE: Regex = Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.\-]*$").unwrap();
}

/// Why a name was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    IllegalCharacters,
    ReservedWord,
    ShadowsCommand,
}

impl Rejection {
    pub fn describe(&self) -> &'static str {
        match self {
            Rejection::Empty => "name is empty",
            Rejection::IllegalCharacters => {
                "only letters, digits, '_', '.' and '-' are allowed, and it must not start with '.' or '-'"
            }
            Rejection::ReservedWord => "it is a shell reserved word",
            Rejection::ShadowsCommand => "it would shadow an existing command",
        }
    }
}

/// Checks alias names against grammar, reserved words and the search path
pub struct AliasNameValidator {
    lookup: Box<dyn CommandLookup>,
}

impl AliasNameValidator {
    pub fn new(lookup: Box<dyn CommandLookup>) -> Self {
        Self { lookup }
    }

    /// Reason the name is rejected, or `None` if it is usable
    pub fn rejection(&self, name: &str) -> Option<Rejection> {
        if name.is_empty() {
            return Some(Rejection::Empty);
        }
        if !ALIAS_NAME_RE.is_match(name) {
            return Some(Rejection::IllegalCharacters);
        }
        if is_reserved_word(name) {
            return Some(Rejection::ReservedWord);
        }
        if self.lookup.command_exists(name) {
            return Some(Rejection::ShadowsCommand);
        }
        None
    }

    pub fn is_valid_alias_name(&self, name: &str) -> bool {
        self.rejection(name).is_none()
    }

    /// Like `is_valid_alias_name`, but as an `InvalidAliasName` error
    pub fn validate(&self, name: &str) -> Result<()> {
        match self.rejection(name) {
            None => Ok(()),
            Some(rejection) => Err(AliasError::InvalidAliasName {
                name: name.to_string(),
                reason: rejection.describe().to_string(),
            }),
        }
    }
}

impl Default for AliasNameValidator {
    fn default() -> Self {
        Self::new(Box::new(SearchPathLookup))
    }
}

/// Validate against the real search path
pub fn is_valid_alias_name(name: &str) -> bool {
    AliasNameValidator::default().is_valid_alias_name(name)
}
