//! fish alias syntax

use lazy_static::lazy_static;
use regex::Regex;

use super::{after_alias_keyword, escape_quoted, unescape_quoted, AliasFormatter};
use crate::model::{Alias, ShellType};

lazy_static! {
    /// Generated form: `alias name 'value'` with `\\` and `\'` escapes
    static ref ALIAS_FISH_RE: Regex =
        Regex::new(r#"^alias\s+(\S+)\s+'((?:[^'\\]|\\.)*)'\s*$"#).unwrap();

    /// Hand-written unquoted form: `alias name value` (single word)
    static ref ALIAS_FISH_BARE_RE: Regex =
        Regex::new(r#"^alias\s+(\S+)\s+([^\s"'\\]+)\s*$"#).unwrap();
}

/// fish alias formatter
#[derive(Default)]
pub struct FishFormatter;

impl FishFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl AliasFormatter for FishFormatter {
    fn format_alias(&self, name: &str, command: &str) -> String {
        format!("alias {} '{}'", name, escape_quoted(command, '\''))
    }

    fn declared_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        let rest = after_alias_keyword(line)?;
        let (name, _) = rest.split_once(char::is_whitespace)?;
        Some(name)
    }

    fn parse_alias_line(&self, line: &str) -> Option<Alias> {
        let line = line.trim();

        if let Some(caps) = ALIAS_FISH_RE.captures(line) {
            return Some(Alias::new(&caps[1], unescape_quoted(&caps[2], '\'')));
        }
        ALIAS_FISH_BARE_RE
            .captures(line)
            .map(|caps| Alias::new(&caps[1], &caps[2]))
    }

    fn shell_type(&self) -> ShellType {
        ShellType::Fish
    }
}
