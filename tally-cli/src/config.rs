//! CLI 配置
//!
//! Loads the project file and folds command-line overrides into it.

use std::path::{Path, PathBuf};

use tally_config::{LogFormat, LogLevel, LoggingConfig, OutputFormat, Phase, TallyConfig};
use tracing::Level;
use tracing_subscriber::filter::Targets;

use crate::error::CliError;

/// Project file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "tally.json";

/// Command-line values that override the project file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub format: Option<OutputFormat>,
    pub log_level: Option<LogLevel>,
    pub log_format: Option<LogFormat>,
    pub show_source: bool,
}

/// Load configuration
///
/// An explicit path must exist. Without one, `tally.json` is used when
/// present and defaults otherwise.
pub fn load(explicit: Option<&Path>) -> Result<TallyConfig, CliError> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            if fallback.exists() {
                read_config(&fallback)
            } else {
                Ok(TallyConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<TallyConfig, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply command-line overrides
pub fn apply(mut config: TallyConfig, overrides: &Overrides) -> TallyConfig {
    if let Some(format) = overrides.format {
        config.output.format = format;
    }
    if let Some(level) = overrides.log_level {
        config.logging.global = level;
    }
    if let Some(format) = overrides.log_format {
        config.logging.format = format;
    }
    if overrides.show_source {
        config.output.show_source = true;
    }
    config
}

pub fn tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

/// Per-target filter for the subscriber
pub fn targets(logging: &LoggingConfig) -> Targets {
    let mut targets = Targets::new().with_default(tracing_level(logging.global));
    for phase in [Phase::Lexer, Phase::Api, Phase::Cli] {
        targets = targets.with_target(phase.target(), tracing_level(logging.level_for(phase)));
    }
    targets
}
