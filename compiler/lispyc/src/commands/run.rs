//! The `run` command: evaluate a source file form by form.

use std::io::Write;

use lispy_eval::Interpreter;

use super::{parse_or_report, read_file};
use crate::CliError;

/// Run the file at `path` in a fresh interpreter.
pub fn run_file(path: &str) -> Result<(), CliError> {
    let source = read_file(path)?;
    let interp = Interpreter::new();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run_source(&interp, path, &source, &mut stdout.lock(), &mut stderr.lock())
}

/// Evaluate every top-level form of `source` in order against `interp`.
///
/// Only error results are printed (to `out`); other results are discarded.
/// Nothing is evaluated if the file does not parse.
pub fn run_source(
    interp: &Interpreter,
    name: &str,
    source: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), CliError> {
    let root = parse_or_report(name, source, err)?;
    tracing::debug!(file = name, forms = root.children().len(), "running file");

    for result in interp.eval_each(&root) {
        if result.is_error() {
            writeln!(out, "{result}")?;
        }
    }
    Ok(())
}
