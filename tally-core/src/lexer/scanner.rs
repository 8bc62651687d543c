//! Character-by-character scanner
//!
//! Drives a [`Position`] across the source buffer and classifies each
//! character by a fixed dispatch order:
//!
//! 1. space / tab: skipped
//! 2. ASCII digit: a numeral (see [`Lexer::make_number`])
//! 3. `+ - * / ( )`: single-character token
//! 4. anything else, newline included: illegal character, scanning stops

use std::sync::Arc;

use num_bigint::BigInt;
use tracing::{debug, trace};

use super::error::LexError;
use super::position::Position;
use super::token::{Token, TokenKind};

/// Scanner over one source buffer
///
/// Holds the only live [`Position`] for the buffer. Consumed by
/// [`tokenize`](Lexer::tokenize), so one lexer serves exactly one pass.
pub struct Lexer {
    chars: Vec<char>,
    position: Position,
    /// Character at the cursor, `None` once past the end
    current: Option<char>,
}

impl Lexer {
    /// Create a lexer with the first character already current
    pub fn new(filename: impl Into<Arc<str>>, source: impl Into<Arc<str>>) -> Self {
        let source: Arc<str> = source.into();
        let chars = source.chars().collect();

        let mut lexer = Self {
            chars,
            position: Position::new(filename, source),
            current: None,
        };
        lexer.advance();
        lexer
    }

    #[cfg(test)]
    fn position(&self) -> &Position {
        &self.position
    }

    #[cfg(test)]
    fn current_char(&self) -> Option<char> {
        self.current
    }

    /// Scan the whole buffer
    ///
    /// Stops at the first error; tokens produced before it are discarded.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        debug!(
            target: "tally::lexer",
            file = self.position.filename(),
            chars = self.chars.len(),
            "Starting tokenize"
        );

        let mut tokens = Vec::new();

        while let Some(c) = self.current {
            match c {
                ' ' | '\t' => self.advance(),
                // make_number leaves the cursor on the first character after the numeral
                '0'..='9' => {
                    let token = self.make_number()?;
                    trace!(target: "tally::lexer", token = %token, "Produced token");
                    tokens.push(token);
                }
                _ => match TokenKind::from_symbol(c) {
                    Some(kind) => {
                        let token = Token::new(kind);
                        trace!(target: "tally::lexer", token = %token, "Produced token");
                        tokens.push(token);
                        self.advance();
                    }
                    None => return Err(self.illegal_char(c)),
                },
            }
        }

        debug!(target: "tally::lexer", count = tokens.len(), "Tokenize completed");
        Ok(tokens)
    }

    /// Scan a numeral starting at the current digit
    ///
    /// Accepts digits and at most one point. A second point is left
    /// unconsumed for the main loop. No point yields `Int`, one point
    /// yields `Float`; both parse the accumulated text as-is, so `3.` is a
    /// valid float. Integers are arbitrary precision; a float too large for
    /// `f64` becomes infinity.
    fn make_number(&mut self) -> Result<Token, LexError> {
        let start = self.position.snapshot();
        let mut text = String::new();
        let mut dot_count = 0;

        while let Some(c) = self.current {
            if c == '.' {
                if dot_count == 1 {
                    break;
                }
                dot_count += 1;
                text.push('.');
            } else if c.is_ascii_digit() {
                text.push(c);
            } else {
                break;
            }
            self.advance();
        }

        if dot_count == 0 {
            text.parse::<BigInt>()
                .map(Token::int)
                .map_err(|_| LexError::invalid_number(&text, start, self.position.snapshot()))
        } else {
            text.parse::<f64>()
                .map(Token::float)
                .map_err(|_| LexError::invalid_number(&text, start, self.position.snapshot()))
        }
    }

    /// Step the cursor and refresh `current`
    fn advance(&mut self) {
        self.position.advance(self.current);
        self.current = self
            .position
            .index()
            .and_then(|index| self.chars.get(index).copied());
    }

    /// Build the error for `ch` at the cursor, stepping past it
    fn illegal_char(&mut self, ch: char) -> LexError {
        let pos_start = self.position.snapshot();
        self.advance();
        let pos_end = self.position.snapshot();

        debug!(
            target: "tally::lexer",
            ch = ?ch,
            line = pos_start.line_number(),
            column = pos_start.column_number(),
            "Illegal character"
        );

        LexError::illegal_char(ch, pos_start, pos_end)
    }
}
