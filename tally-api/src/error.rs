//! API 错误类型
//!
//! Unified error type and structured error reports.

use serde::Serialize;
use thiserror::Error;

/// 词法错误（结构化）
pub use tally_core::{ErrorKind, LexError};

/// Tally error type
///
/// One variant per phase; only the lexer exists today.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TallyError {
    /// 词法分析错误（结构化）
    #[error("{0}")]
    Lexer(#[from] LexError),
}

impl TallyError {
    /// 获取错误行号（1-based）
    pub fn line(&self) -> Option<usize> {
        match self {
            TallyError::Lexer(e) => Some(e.line()),
        }
    }

    /// 获取错误列号（1-based）
    pub fn column(&self) -> Option<usize> {
        match self {
            TallyError::Lexer(e) => Some(e.column()),
        }
    }

    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            TallyError::Lexer(_) => "lexer",
        }
    }

    /// Source line the error starts on, for context printing
    pub fn source_line(&self) -> Option<&str> {
        match self {
            TallyError::Lexer(e) => Some(e.pos_start.line_text()),
        }
    }

    /// 转换为结构化错误报告
    ///
    /// The CLI prints it directly; tools serialize it to JSON.
    pub fn to_report(&self) -> ErrorReport {
        match self {
            TallyError::Lexer(e) => ErrorReport {
                phase: "lexer",
                error_name: e.error_name().to_string(),
                details: e.details.clone(),
                filename: e.filename().to_string(),
                line: Some(e.line()),
                column: Some(e.column()),
                message: e.to_string(),
            },
        }
    }
}

/// 结构化错误报告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    /// 错误阶段: lexer
    pub phase: &'static str,
    /// Category label, e.g. "Illegal Character"
    pub error_name: String,
    pub details: String,
    pub filename: String,
    /// 1-based
    pub line: Option<usize>,
    /// 1-based
    pub column: Option<usize>,
    /// Full rendered diagnostic
    pub message: String,
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl ErrorReport {
    /// JSON form for tool integration
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// 简洁格式（适合终端）
    pub fn to_short(&self) -> String {
        match (self.line, self.column) {
            (Some(line), Some(col)) => format!(
                "{}:{}:{}: {}: {}",
                self.filename, line, col, self.error_name, self.details
            ),
            _ => format!("{}: {}: {}", self.filename, self.error_name, self.details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexer_error(source: &str) -> TallyError {
        tally_core::run("main.tl", source).unwrap_err().into()
    }

    #[test]
    fn test_lexer_error_line_column() {
        let err = lexer_error("1 + ~");
        assert_eq!(err.phase(), "lexer");
        assert_eq!(err.line(), Some(1));
        assert_eq!(err.column(), Some(5));
    }

    #[test]
    fn test_display_is_lexer_rendering() {
        let err = lexer_error("@");
        assert_eq!(err.to_string(), "Illegal Character : '@' \nFile main.tl, line 1");
    }

    #[test]
    fn test_to_report() {
        let report = lexer_error("2 * x").to_report();

        assert_eq!(report.phase, "lexer");
        assert_eq!(report.error_name, "Illegal Character");
        assert_eq!(report.details, "'x'");
        assert_eq!(report.filename, "main.tl");
        assert_eq!(report.line, Some(1));
        assert_eq!(report.column, Some(5));
        assert_eq!(report.to_string(), "Illegal Character : 'x' \nFile main.tl, line 1");
    }

    #[test]
    fn test_report_to_short() {
        let report = lexer_error("2 * x").to_report();
        assert_eq!(report.to_short(), "main.tl:1:5: Illegal Character: 'x'");
    }

    #[test]
    fn test_report_to_json() {
        let json = lexer_error("?").to_report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["phase"], "lexer");
        assert_eq!(value["details"], "'?'");
        assert_eq!(value["line"], 1);
        assert_eq!(value["column"], 1);
    }

    #[test]
    fn test_source_line() {
        let err = lexer_error("1 + 2 # comment");
        assert_eq!(err.source_line(), Some("1 + 2 # comment"));
    }
}
