//! Token types

use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use std::fmt;

/// Token kind
///
/// Closed set; adding a kind is a deliberate language change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenKind {
    /// Digits without a point
    Int,
    /// Digits with exactly one point
    Float,
    Plus,
    Minus,
    Mul,
    Div,
    LParen,
    RParen,
}

impl TokenKind {
    /// Canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mul => "MUL",
            TokenKind::Div => "DIV",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
        }
    }

    /// Kind for a single-character operator or parenthesis
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Mul),
            '/' => Some(TokenKind::Div),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric payload of a number token
///
/// Integers are unbounded; any digit run is a valid `Int`.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Int(BigInt),
    Float(f64),
}

/// JSON numbers where they are exact, strings otherwise
///
/// An `Int` outside the `i64` range is written as its decimal string. A
/// non-finite `Float` is written as `"inf"`, `"-inf"` or `"NaN"`, since JSON
/// has no literal for it.
impl Serialize for TokenValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TokenValue::Int(n) => match i64::try_from(n) {
                Ok(small) => serializer.serialize_i64(small),
                Err(_) => serializer.collect_str(n),
            },
            TokenValue::Float(x) if x.is_finite() => serializer.serialize_f64(*x),
            TokenValue::Float(x) => serializer.collect_str(x),
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Int(n) => write!(f, "{}", n),
            // Debug keeps the trailing ".0" on whole floats
            TokenValue::Float(x) => write!(f, "{:?}", x),
        }
    }
}

/// A classified lexical unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Present only for `Int` and `Float`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<TokenValue>,
}

impl Token {
    /// Token without a payload
    pub fn new(kind: TokenKind) -> Self {
        Self { kind, value: None }
    }

    pub fn int(value: impl Into<BigInt>) -> Self {
        Self {
            kind: TokenKind::Int,
            value: Some(TokenValue::Int(value.into())),
        }
    }

    pub fn float(value: f64) -> Self {
        Self {
            kind: TokenKind::Float,
            value: Some(TokenValue::Float(value)),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}:{}", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Render a token sequence as `[INT:1, PLUS, INT:2]`
pub fn render_tokens(tokens: &[Token]) -> String {
    let parts: Vec<String> = tokens.iter().map(Token::to_string).collect();
    format!("[{}]", parts.join(", "))
}
