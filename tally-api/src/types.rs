//! API 类型定义
//!
//! Output types of a lex run.

use serde::Serialize;
use tally_core::{render_tokens, Token, TokenKind};

/// Lex output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexOutput {
    /// Token sequence in source order
    pub tokens: Vec<Token>,
}

impl LexOutput {
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    /// `[INT:1, PLUS, INT:2]`
    pub fn render(&self) -> String {
        render_tokens(&self.tokens)
    }

    /// `{"tokens":[...]}`
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
