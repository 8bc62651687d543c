//! 测试辅助工具
//!
//! Shared helpers for the lexer integration tests

#![allow(dead_code)]

use tally_core::{run, LexError, Token, TokenKind};

/// Lex with the filename used by every integration test
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    run("<test>", source)
}

/// Token kinds of a source that must lex cleanly
pub fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source)
        .unwrap_or_else(|e| panic!("unexpected lex error for {:?}: {}", source, e))
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

/// Error of a source that must fail
pub fn lex_err(source: &str) -> LexError {
    match lex(source) {
        Ok(tokens) => panic!("expected error for {:?}, got {:?}", source, tokens),
        Err(e) => e,
    }
}
