//! Alias declaration syntax per shell dialect

mod fish;
mod posix;

pub use fish::FishFormatter;
pub use posix::PosixFormatter;

use crate::model::{Alias, ShellType};

/// Renders and recognizes alias declarations for one dialect
pub trait AliasFormatter {
    /// Render the declaration line for an alias
    fn format_alias(&self, name: &str, command: &str) -> String;

    /// Name declared by `line`, if it is an alias declaration in this dialect,
    /// whether or not its value can be parsed back
    fn declared_name<'a>(&self, line: &'a str) -> Option<&'a str>;

    /// True if `line` declares exactly `name`
    fn line_declares(&self, line: &str, name: &str) -> bool {
        !name.is_empty() && self.declared_name(line) == Some(name)
    }

    /// Split a declaration line back into name and unescaped command
    fn parse_alias_line(&self, line: &str) -> Option<Alias>;

    /// Get the shell type this formatter handles
    fn shell_type(&self) -> ShellType;
}

/// Get a formatter for the specified shell type
pub fn get_formatter(shell_type: ShellType) -> Box<dyn AliasFormatter> {
    match shell_type {
        ShellType::Bash | ShellType::Zsh => Box::new(PosixFormatter::new(shell_type)),
        ShellType::Fish => Box::new(FishFormatter::new()),
    }
}

pub fn format_alias(shell_type: ShellType, name: &str, command: &str) -> String {
    get_formatter(shell_type).format_alias(name, command)
}

pub fn line_declares(line: &str, name: &str, shell_type: ShellType) -> bool {
    get_formatter(shell_type).line_declares(line, name)
}

/// String-keyed variant for filtering contexts: an unknown dialect matches nothing
pub fn line_declares_str(line: &str, name: &str, dialect: &str) -> bool {
    dialect
        .parse::<ShellType>()
        .map(|shell| line_declares(line, name, shell))
        .unwrap_or(false)
}

pub fn parse_alias_line(line: &str, shell_type: ShellType) -> Option<Alias> {
    get_formatter(shell_type).parse_alias_line(line)
}

/// Text following `alias` and its whitespace, if the trimmed line starts with
/// the alias keyword
pub(crate) fn after_alias_keyword(line: &str) -> Option<&str> {
    let rest = line.trim().strip_prefix("alias")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim_start())
}

/// Backslash-escape `\` and `quote` for use inside `quote`-delimited text
pub(crate) fn escape_quoted(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    for c in value.chars() {
        if c == '\\' || c == quote {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Undo `escape_quoted`. A backslash before any other char is kept literally.
pub(crate) fn unescape_quoted(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next == '\\' || next == quote {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}
