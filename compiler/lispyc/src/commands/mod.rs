//! Command handlers for the `lispy` binary.
//!
//! Each submodule implements one command. Shared helpers live here.

mod eval;
mod repl;
mod run;

pub use eval::{eval_expr, eval_source};
pub use repl::{banner, eval_line, run_repl, PROMPT};
pub use run::{run_file, run_source};

use std::io::Write;

use lispy_parse::{ParseError, SyntaxNode};

use crate::report::write_parse_error;
use crate::CliError;

/// Read a source file, attaching the path to any I/O error.
pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}

/// Parse `source`, writing a report to `err` on failure.
pub(crate) fn parse_or_report(
    name: &str,
    source: &str,
    err: &mut impl Write,
) -> Result<SyntaxNode, CliError> {
    lispy_parse::parse(source).or_else(|error: ParseError| {
        write_parse_error(name, source, &error, &mut *err)?;
        Err(CliError::Parse {
            name: name.to_string(),
            error,
        })
    })
}
