//! Tally CLI - Command line interface
//!
//! Tokenizes a source file, a single expression, or lines typed into the
//! interactive shell.

use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

mod config;
mod error;
mod logging;
mod platform;
mod shell;

use tally_config::{LogFormat, LogLevel, OutputFormat, TallyConfig};
use tracing::{debug, info};

use crate::config::Overrides;
use crate::error::CliError;
use crate::platform::write_error_with_source;

/// Filename reported for `--expr` input
const EXPR_FILENAME: &str = "<expr>";

#[derive(Parser, Debug)]
#[command(
    name = "tally",
    about = "Tally arithmetic language - tokenizer",
    version = "0.1.0"
)]
struct Cli {
    /// Source file to tokenize (omit for the interactive shell)
    #[arg(value_name = "FILE", conflicts_with = "expr")]
    file: Option<PathBuf>,

    /// Tokenize a single expression
    #[arg(short, long, value_name = "TEXT")]
    expr: Option<String>,

    /// Configuration file path (default: ./tally.json when present)
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Log output format
    #[arg(long, value_enum)]
    log_format: Option<LogFormatArg>,

    /// Print the offending source line under an error
    #[arg(long)]
    show_source: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            format: self.format.map(Into::into),
            log_level: self.log_level,
            log_format: self.log_format.map(Into::into),
            show_source: self.show_source,
        }
    }
}

/// Parse log level string
fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("unknown log level '{}'", s))
}

fn main() {
    let cli = Cli::parse();

    let code = match execute(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(code);
}

/// Run the selected front end, returning the exit status
fn execute(cli: Cli) -> Result<i32, CliError> {
    let config = config::apply(config::load(cli.config.as_deref())?, &cli.overrides());
    logging::init(&config.logging);
    debug!(target: "tally::cli", ?config, "Configuration resolved");

    let stdout = io::stdout();
    let stderr = io::stderr();

    match (cli.file, cli.expr) {
        (Some(path), _) => {
            info!(target: "tally::cli", path = %path.display(), "Tokenizing file");
            let source = std::fs::read_to_string(&path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            let filename = path.display().to_string();
            let ok = lex_and_emit(&filename, &source, &config, &mut stdout.lock(), &mut stderr.lock())?;
            Ok(exit_code(ok))
        }
        (None, Some(expr)) => {
            let ok = lex_and_emit(EXPR_FILENAME, &expr, &config, &mut stdout.lock(), &mut stderr.lock())?;
            Ok(exit_code(ok))
        }
        (None, None) => {
            shell::run(
                &mut io::stdin().lock(),
                &mut stdout.lock(),
                &mut stderr.lock(),
                &config,
            )?;
            Ok(0)
        }
    }
}

fn exit_code(ok: bool) -> i32 {
    if ok {
        0
    } else {
        1
    }
}

/// Lex one source unit and write the result
///
/// Tokens and JSON go to `out`; text diagnostics go to `err`. Returns
/// whether lexing succeeded.
pub(crate) fn lex_and_emit<O: Write, E: Write>(
    filename: &str,
    source: &str,
    config: &TallyConfig,
    out: &mut O,
    err: &mut E,
) -> Result<bool, CliError> {
    match tally_api::run(filename, source) {
        Ok(output) => {
            match config.output.format {
                OutputFormat::Text => writeln!(out, "{}", output.render())?,
                OutputFormat::Json => writeln!(out, "{}", output.to_json()?)?,
            }
            Ok(true)
        }
        Err(e) => {
            match config.output.format {
                OutputFormat::Text => write_error_with_source(err, &e, config.output.show_source)?,
                OutputFormat::Json => writeln!(out, "{}", e.to_report().to_json()?)?,
            }
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn emit(source: &str, config: &TallyConfig) -> (bool, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let ok = lex_and_emit("<test>", source, config, &mut out, &mut err).unwrap();
        (ok, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_expr_and_overrides() {
        let cli = Cli::try_parse_from([
            "tally",
            "-e",
            "1 + 2",
            "--format",
            "json",
            "--log-level",
            "silent",
            "--show-source",
        ])
        .unwrap();

        assert_eq!(cli.expr.as_deref(), Some("1 + 2"));
        let overrides = cli.overrides();
        assert_eq!(overrides.format, Some(OutputFormat::Json));
        assert_eq!(overrides.log_level, Some(LogLevel::Error));
        assert!(overrides.show_source);
    }

    #[test]
    fn test_file_conflicts_with_expr() {
        assert!(Cli::try_parse_from(["tally", "calc.tl", "-e", "1"]).is_err());
    }

    #[test]
    fn test_bad_log_level_rejected() {
        assert!(Cli::try_parse_from(["tally", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn test_emit_text_success() {
        let (ok, out, err) = emit("12 + 3.5", &TallyConfig::default());
        assert!(ok);
        assert_eq!(out, "[INT:12, PLUS, FLOAT:3.5]\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_emit_text_error() {
        let (ok, out, err) = emit("1 @ 2", &TallyConfig::default());
        assert!(!ok);
        assert!(out.is_empty());
        assert_eq!(err, "Illegal Character : '@' \nFile <test>, line 1\n");
    }

    #[test]
    fn test_emit_json() {
        let mut config = TallyConfig::default();
        config.output.format = OutputFormat::Json;

        let (ok, out, _) = emit("(1)", &config);
        assert!(ok);
        assert_eq!(
            out,
            "{\"tokens\":[{\"kind\":\"LPAREN\"},{\"kind\":\"INT\",\"value\":1},{\"kind\":\"RPAREN\"}]}\n"
        );

        let (ok, out, err) = emit("#", &config);
        assert!(!ok);
        assert!(err.is_empty());
        let report: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(report["error_name"], "Illegal Character");
        assert_eq!(report["details"], "'#'");
    }
}
