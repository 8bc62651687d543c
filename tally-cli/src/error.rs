//! CLI 错误类型

use std::path::PathBuf;

use thiserror::Error;

/// Failures outside lexing itself
#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
