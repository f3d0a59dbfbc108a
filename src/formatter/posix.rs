//! Alias syntax shared by bash and zsh

use lazy_static::lazy_static;
use regex::Regex;

use super::{after_alias_keyword, escape_quoted, unescape_quoted, AliasFormatter};
use crate::model::{Alias, ShellType};

lazy_static! {
    /// Generated form: `alias name="value"` with `\\` and `\"` escapes
    static ref ALIAS_DOUBLE_RE: Regex =
        Regex::new(r#"^alias\s+([^\s=]+)="((?:[^"\\]|\\.)*)"\s*$"#).unwrap();

    /// Hand-written single-quoted form: `alias name='value'` (no escapes)
    static ref ALIAS_SINGLE_RE: Regex =
        Regex::new(r#"^alias\s+([^\s=]+)='([^']*)'\s*$"#).unwrap();

    /// Hand-written unquoted form: `alias name=value` (single word)
    static ref ALIAS_BARE_RE: Regex =
        Regex::new(r#"^alias\s+([^\s=]+)=([^\s"'\\]+)\s*$"#).unwrap();
}

/// bash / zsh alias formatter
pub struct PosixFormatter {
    shell: ShellType,
}

impl PosixFormatter {
    pub fn new(shell: ShellType) -> Self {
        Self { shell }
    }
}

impl AliasFormatter for PosixFormatter {
    fn format_alias(&self, name: &str, command: &str) -> String {
        format!("alias {}=\"{}\"", name, escape_quoted(command, '"'))
    }

    fn declared_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        let rest = after_alias_keyword(line)?;
        let (name, _) = rest.split_once('=')?;
        (!name.is_empty() && !name.contains(char::is_whitespace)).then_some(name)
    }

    fn parse_alias_line(&self, line: &str) -> Option<Alias> {
        let line = line.trim();

        if let Some(caps) = ALIAS_DOUBLE_RE.captures(line) {
            return Some(Alias::new(&caps[1], unescape_quoted(&caps[2], '"')));
        }
        ALIAS_SINGLE_RE
            .captures(line)
            .or_else(|| ALIAS_BARE_RE.captures(line))
            .map(|caps| Alias::new(&caps[1], &caps[2]))
    }

    fn shell_type(&self) -> ShellType {
        self.shell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain() {
        let f = PosixFormatter::new(ShellType::Zsh);
        assert_eq!(f.format_alias("ll", "ls -la"), r#"alias ll="ls -la""#);
    }

    #[test]
    fn test_format_escapes_quotes_and_backslashes() {
        let f = PosixFormatter::new(ShellType::Bash);
        assert_eq!(
            f.format_alias("test", "echo 'hello'"),
            r#"alias test="echo 'hello'""#
        );
        assert_eq!(
            f.format_alias("test", r#"echo "quoted""#),
            r#"alias test="echo \"quoted\"""#
        );
        assert_eq!(
            f.format_alias("win", r"cd C:\Users"),
            r#"alias win="cd C:\\Users""#
        );
    }

    #[test]
    fn test_line_declares() {
        let f = PosixFormatter::new(ShellType::Bash);
        assert!(f.line_declares(r#"alias test="command""#, "test"));
        assert!(f.line_declares(r#"  alias   test="command"  "#, "test"));
        assert!(!f.line_declares(r#"alias other="command""#, "test"));
        assert!(!f.line_declares(r#"alias test2="command""#, "test"));
        assert!(!f.line_declares(r#"aliastest="command""#, "test"));
        assert!(!f.line_declares("# alias test=\"command\"", "test"));
        assert!(!f.line_declares(r#"alias test="command""#, ""));
    }

    #[test]
    fn test_parse_generated_line() {
        let f = PosixFormatter::new(ShellType::Zsh);
        let alias = f
            .parse_alias_line(r#"alias say="echo \"hi\" C:\\tmp \$HOME""#)
            .unwrap();
        assert_eq!(alias.name, "say");
        assert_eq!(alias.command, r#"echo "hi" C:\tmp \$HOME"#);
    }

    #[test]
    fn test_parse_single_quoted_line() {
        let f = PosixFormatter::new(ShellType::Bash);
        let alias = f.parse_alias_line("alias gs='git status'").unwrap();
        assert_eq!(alias, Alias::new("gs", "git status"));
    }

    #[test]
    fn test_parse_unquoted_line() {
        let f = PosixFormatter::new(ShellType::Bash);
        assert_eq!(f.parse_alias_line("alias ll=ls"), Some(Alias::new("ll", "ls")));
        assert!(f.parse_alias_line("alias ll=ls -la").is_none());
        assert_eq!(f.declared_name("alias ll=ls -la"), Some("ll"));
    }

    #[test]
    fn test_parse_rejects_foreign_lines() {
        let f = PosixFormatter::new(ShellType::Bash);
        assert!(f.parse_alias_line("# comment").is_none());
        assert!(f.parse_alias_line("").is_none());
        assert!(f.parse_alias_line("alias gs 'git status'").is_none());
        assert!(f.parse_alias_line(r#"alias broken="unterminated"#).is_none());
    }
}
