//! Interactive shell
//!
//! Reads one line at a time and tokenizes it. A lexical error is reported
//! and the shell keeps going; end-of-input ends the session.

use std::io::{BufRead, Write};

use tally_config::TallyConfig;
use tracing::debug;

use crate::error::CliError;
use crate::lex_and_emit;

const PROMPT: &str = "tally > ";

/// Filename reported for shell input
pub const SHELL_FILENAME: &str = "<stdin>";

pub fn run<R, O, E>(input: &mut R, out: &mut O, err: &mut E, config: &TallyConfig) -> Result<(), CliError>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let mut line = String::new();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        // the terminator is not part of the expression
        let text = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
        let ok = lex_and_emit(SHELL_FILENAME, text, config, out, err)?;
        debug!(target: "tally::cli", ok, "Shell line processed");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str) -> (String, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        run(&mut reader, &mut out, &mut err, &TallyConfig::default()).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_shell_lexes_each_line() {
        let (out, err) = session("1 + 2\n(3.5)\n");
        assert_eq!(out, "tally > [INT:1, PLUS, INT:2]\ntally > [LPAREN, FLOAT:3.5, RPAREN]\ntally > \n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_shell_continues_after_error() {
        let (out, err) = session("1 ? 2\r\n4\n");
        assert_eq!(out, "tally > tally > [INT:4]\ntally > \n");
        assert_eq!(err, "Illegal Character : '?' \nFile <stdin>, line 1\n");
    }

    #[test]
    fn test_shell_empty_line() {
        let (out, _) = session("\n");
        assert_eq!(out, "tally > []\ntally > \n");
    }

    #[test]
    fn test_shell_last_line_without_newline() {
        let (out, _) = session("7");
        assert_eq!(out, "tally > [INT:7]\ntally > \n");
    }
}
