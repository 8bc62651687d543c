//! Tally Core - Lexical scanner (pure logic, no IO)
//!
//! Contains the position tracker, token types and the scanner for the
//! Tally arithmetic expression language. Only operates on in-memory
//! buffers; every call builds its own state, so independent buffers can be
//! lexed concurrently.

pub mod lexer;

// Re-export common types
pub use num_bigint::BigInt;
pub use lexer::{render_tokens, ErrorKind, LexError, Lexer, Position, Token, TokenKind, TokenValue};

/// Tokenize `source_text`, reporting locations against `filename`
///
/// Returns every token, or the first lexical error with no tokens.
pub fn run(filename: &str, source_text: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(filename, source_text).tokenize()
}
