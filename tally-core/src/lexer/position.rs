//! Source position tracking
//!
//! A [`Position`] is a cursor over one source buffer. The scanner owns a
//! single live instance and moves it forward in place; diagnostics take a
//! [`Position::snapshot`] so the location stays frozen while the cursor
//! keeps moving.

use std::sync::Arc;

/// Cursor into a single source buffer
///
/// `offset`, `line` and `column` are all 0-based. A fresh position sits at
/// offset -1 ("before the first character") so that the first
/// [`advance`](Position::advance) lands on index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    offset: isize,
    line: usize,
    column: isize,
    filename: Arc<str>,
    source_text: Arc<str>,
}

impl Position {
    /// Create a position before the first character of `source_text`
    pub fn new(filename: impl Into<Arc<str>>, source_text: impl Into<Arc<str>>) -> Self {
        Self {
            offset: -1,
            line: 0,
            column: -1,
            filename: filename.into(),
            source_text: source_text.into(),
        }
    }

    /// Step forward one character
    ///
    /// `current` is the character being left behind, not the one stepped
    /// onto. Leaving a `'\n'` moves to column 0 of the next line. No bounds
    /// checking happens here; the caller stops advancing at end-of-input.
    pub fn advance(&mut self, current: Option<char>) -> &mut Self {
        self.offset += 1;
        self.column += 1;

        if current == Some('\n') {
            self.line += 1;
            self.column = 0;
        }

        self
    }

    /// Independent copy of this position
    ///
    /// Filename and source text stay shared; offset, line and column are
    /// unaffected by later advances of `self`.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Raw character offset, -1 before the first advance
    pub fn offset(&self) -> isize {
        self.offset
    }

    /// Character index, or `None` while still before the first character
    pub fn index(&self) -> Option<usize> {
        usize::try_from(self.offset).ok()
    }

    /// 0-based line
    pub fn line(&self) -> usize {
        self.line
    }

    /// 0-based column, -1 before the first advance
    pub fn column(&self) -> isize {
        self.column
    }

    /// 1-based line, as shown to users
    pub fn line_number(&self) -> usize {
        self.line + 1
    }

    /// 1-based column, as shown to users
    pub fn column_number(&self) -> usize {
        usize::try_from(self.column + 1).unwrap_or(0)
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Text of the line this position sits on, without its terminator
    pub fn line_text(&self) -> &str {
        self.source_text.split('\n').nth(self.line).unwrap_or("")
    }
}
