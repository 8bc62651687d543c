//! Tally lexer
//!
//! Turns source text into a flat token sequence for a parser to consume.
//! A lex pass either yields every token or a single positioned error.

pub mod error;
pub mod position;
pub mod scanner;
pub mod token;

pub use error::{ErrorKind, LexError};
pub use position::Position;
pub use scanner::Lexer;
pub use token::{render_tokens, Token, TokenKind, TokenValue};
