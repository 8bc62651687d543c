//! Lexer error types
//!
//! A [`LexError`] carries the error category, free-text details and two
//! frozen positions bounding the offending span.

use super::position::Position;
use thiserror::Error;

/// Error category
///
/// Open for extension; every kind aborts the whole tokenize call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Character no dispatch branch accepts
    IllegalCharacter(char),
    /// Numeral text the number parser rejects
    InvalidNumber(String),
}

impl ErrorKind {
    /// Human-readable category label
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::IllegalCharacter(_) => "Illegal Character",
            ErrorKind::InvalidNumber(_) => "Invalid Number",
        }
    }
}

/// Positioned lexical error
///
/// Display output:
///
/// ```text
/// Illegal Character : '@'
/// File <stdin>, line 1
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "{} : {} \nFile {}, line {}",
    .kind.name(),
    .details,
    .pos_start.filename(),
    .pos_start.line_number()
)]
pub struct LexError {
    pub kind: ErrorKind,
    pub details: String,
    pub pos_start: Position,
    pub pos_end: Position,
}

impl LexError {
    pub fn new(kind: ErrorKind, details: impl Into<String>, pos_start: Position, pos_end: Position) -> Self {
        Self {
            kind,
            details: details.into(),
            pos_start,
            pos_end,
        }
    }

    /// Illegal character error; details are the character in single quotes
    pub fn illegal_char(ch: char, pos_start: Position, pos_end: Position) -> Self {
        Self::new(ErrorKind::IllegalCharacter(ch), format!("'{}'", ch), pos_start, pos_end)
    }

    /// Numeral text that does not parse as a number
    pub fn invalid_number(text: &str, pos_start: Position, pos_end: Position) -> Self {
        Self::new(
            ErrorKind::InvalidNumber(text.to_string()),
            format!("'{}' is not a valid number", text),
            pos_start,
            pos_end,
        )
    }

    pub fn error_name(&self) -> &'static str {
        self.kind.name()
    }

    /// 1-based line of the error start
    pub fn line(&self) -> usize {
        self.pos_start.line_number()
    }

    /// 1-based column of the error start
    pub fn column(&self) -> usize {
        self.pos_start.column_number()
    }

    pub fn filename(&self) -> &str {
        self.pos_start.filename()
    }

    /// Diagnostic text, identical to `Display`
    pub fn as_string(&self) -> String {
        self.to_string()
    }
}
