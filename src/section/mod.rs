//! Managed section of a shell config file
//!
//! The section is a block delimited by two fixed marker lines. Everything
//! outside the block belongs to the user and is written back byte for byte.
//!
//! ```text
//! # >>> aliaser managed aliases >>>
//! # Aliases managed by aliaser - DO NOT EDIT THIS SECTION MANUALLY
//! alias ll="ls -la"
//! # <<< aliaser managed aliases <<<
//! ```

pub mod manager;

pub use manager::SectionManager;

use std::ops::Range;
use std::path::Path;

use crate::error::{AliasError, Result};
use crate::utils::path::{atomic_write, read_file_or_empty};
use crate::utils::strings::split_lines_preserve_trailing;

pub const SECTION_START: &str = "# >>> aliaser managed aliases >>>";
pub const SECTION_END: &str = "# <<< aliaser managed aliases <<<";
pub const SECTION_COMMENT: &str =
    "# Aliases managed by aliaser - DO NOT EDIT THIS SECTION MANUALLY";

/// Line indices of the section markers; entries live strictly between them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRange {
    pub start: usize,
    pub end: usize,
}

impl SectionRange {
    /// Indices of the lines inside the section, markers excluded
    pub fn entries(&self) -> Range<usize> {
        self.start + 1..self.end
    }
}

fn is_marker(line: &str, marker: &str) -> bool {
    line.strip_suffix('\r').unwrap_or(line) == marker
}

/// Find the managed section in a sequence of lines.
///
/// The first start marker opens the section and the first end marker after
/// it closes it. Returns `Ok(None)` when there is no start marker; end markers
/// before it are not part of any section. A start marker without a following
/// end marker is `MalformedSection`. aliaser only ever writes one section, so
/// anything after the first one is left alone as ordinary content.
pub fn locate_lines<S: AsRef<str>>(lines: &[S]) -> Result<Option<SectionRange>> {
    let Some(start) = lines
        .iter()
        .position(|line| is_marker(line.as_ref(), SECTION_START))
    else {
        return Ok(None);
    };

    let end = lines[start + 1..]
        .iter()
        .position(|line| is_marker(line.as_ref(), SECTION_END))
        .map(|offset| start + 1 + offset)
        .ok_or_else(|| AliasError::MalformedSection {
            line: start + 1,
            detail: "start marker without end marker".to_string(),
        })?;

    Ok(Some(SectionRange { start, end }))
}

/// Find the managed section in a file's text
pub fn locate(text: &str) -> Result<Option<SectionRange>> {
    locate_lines(&split_lines_preserve_trailing(text))
}

/// A config file held as lines, able to reproduce untouched content exactly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl ConfigDocument {
    pub fn parse(text: &str) -> Self {
        Self {
            lines: split_lines_preserve_trailing(text)
                .into_iter()
                .map(String::from)
                .collect(),
            trailing_newline: text.ends_with('\n'),
        }
    }

    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        if self.trailing_newline && !self.lines.is_empty() {
            out.push('\n');
        }
        out
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn locate(&self) -> Result<Option<SectionRange>> {
        locate_lines(&self.lines)
    }

    /// Locate the section, appending an empty one if absent.
    ///
    /// The boolean is true when the section was created.
    pub fn ensure_section(&mut self) -> Result<(SectionRange, bool)> {
        match self.locate()? {
            Some(range) => Ok((range, false)),
            None => Ok((self.append_section(), true)),
        }
    }

    fn append_section(&mut self) -> SectionRange {
        if self.lines.last().is_some_and(|l| !l.trim().is_empty()) {
            self.lines.push(String::new());
        }

        let start = self.lines.len();
        self.lines.push(SECTION_START.to_string());
        self.lines.push(SECTION_COMMENT.to_string());
        self.lines.push(SECTION_END.to_string());
        self.trailing_newline = true;

        tracing::debug!(start_line = start + 1, "appended managed alias section");

        SectionRange {
            start,
            end: start + 2,
        }
    }

    pub(crate) fn insert_line(&mut self, idx: usize, line: String) {
        self.lines.insert(idx, line);
    }

    pub(crate) fn replace_line(&mut self, idx: usize, line: String) {
        self.lines[idx] = line;
    }

    pub(crate) fn remove_line(&mut self, idx: usize) -> String {
        self.lines.remove(idx)
    }
}

/// Make sure `path` contains a managed section.
///
/// Creates the file and its parent directories if needed. When a section is
/// already present nothing is written. Returns true if the file was changed.
pub fn ensure_section(path: &Path) -> Result<bool> {
    let text = read_file_or_empty(path)?;
    let mut doc = ConfigDocument::parse(&text);

    let (_, created) = doc.ensure_section()?;
    if created {
        atomic_write(path, &doc.render())?;
        tracing::debug!(path = %path.display(), "created managed alias section");
    }
    Ok(created)
}
