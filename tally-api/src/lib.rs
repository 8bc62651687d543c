//! Tally API - Lexing orchestration layer
//!
//! Provides the unified interface front ends call:
//! - Logged lex runs over an in-memory buffer
//! - Unified error handling (TallyError)
//! - Structured error reports (ErrorReport)
//!
//! No file IO happens here; callers hand over the source text.

use tracing::{debug, info};

pub mod error;
pub mod types;
pub use error::{ErrorKind, ErrorReport, LexError, TallyError};
pub use types::LexOutput;

// Re-export core types
pub use tally_core::{BigInt, Position, Token, TokenKind, TokenValue};

/// Lex `source`, reporting locations against `filename`
pub fn run(filename: &str, source: &str) -> Result<LexOutput, TallyError> {
    info!(target: "tally::api", filename, bytes = source.len(), "Starting lex");

    let tokens = tally_core::run(filename, source).map_err(|e| {
        debug!(
            target: "tally::api",
            error = e.error_name(),
            line = e.line(),
            column = e.column(),
            "Lex failed"
        );
        TallyError::from(e)
    })?;

    info!(target: "tally::api", tokens = tokens.len(), "Lex completed");
    Ok(LexOutput { tokens })
}
