//! Tally Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Tally crates.

use serde::Deserialize;

/// Log verbosity, ordered from quietest to noisiest
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a level name, case-insensitive
    ///
    /// `silent` is accepted as an alias for `error` (only errors are reported).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Log output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Colored multi-line output (development)
    Pretty,
    /// Single-line output
    #[default]
    Compact,
    /// JSON lines (tool integration)
    Json,
}

/// Execution phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Api,
    Cli,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Api => "api",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("tally::{}", self.as_str())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level for every target
    pub global: LogLevel,
    /// Lexer level (None falls back to `global`)
    pub lexer: Option<LogLevel>,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            global: LogLevel::Warn,
            lexer: None,
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Effective level for a phase
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        match phase {
            Phase::Lexer => self.lexer.unwrap_or(self.global),
            Phase::Api | Phase::Cli => self.global,
        }
    }
}

/// How results are written to stdout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `[INT:1, PLUS, INT:2]` and the plain-text error rendering
    #[default]
    Text,
    /// Token array or error report as JSON
    Json,
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Print the offending source line under an error
    pub show_source: bool,
}

/// Project configuration, usually loaded from `tally.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_logging_config() {
        let cfg = LoggingConfig::default();
        assert_eq!(cfg.global, LogLevel::Warn);
        assert_eq!(cfg.lexer, None);
        assert_eq!(cfg.format, LogFormat::Compact);
    }

    #[test]
    fn test_level_for_falls_back_to_global() {
        let mut cfg = LoggingConfig::default();
        assert_eq!(cfg.level_for(Phase::Lexer), LogLevel::Warn);

        cfg.lexer = Some(LogLevel::Trace);
        assert_eq!(cfg.level_for(Phase::Lexer), LogLevel::Trace);
        assert_eq!(cfg.level_for(Phase::Cli), LogLevel::Warn);
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("silent"), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse("loud"), None);
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Debug < LogLevel::Trace);
    }

    #[test]
    fn test_phase_as_str() {
        assert_eq!(Phase::Lexer.as_str(), "lexer");
        assert_eq!(Phase::Cli.target(), "tally::cli");
    }

    #[test]
    fn test_deserialize_partial_config() {
        let json = r#"{ "logging": { "lexer": "trace" }, "output": { "format": "json" } }"#;
        let cfg: TallyConfig = serde_json::from_str(json).unwrap();

        assert_eq!(cfg.logging.global, LogLevel::Warn);
        assert_eq!(cfg.logging.lexer, Some(LogLevel::Trace));
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert!(!cfg.output.show_source);
    }

    #[test]
    fn test_deserialize_empty_config() {
        let cfg: TallyConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.output.format, OutputFormat::Text);
        assert_eq!(cfg.logging.format, LogFormat::Compact);
    }
}
