//! The `eval` command: evaluate one expression given on the command line.

use std::io::Write;

use lispy_eval::{Interpreter, Value};

use super::parse_or_report;
use crate::CliError;

const EXPR_NAME: &str = "<expr>";

/// Evaluate `expr` in a fresh interpreter and print the result.
pub fn eval_expr(expr: &str) -> Result<(), CliError> {
    let interp = Interpreter::new();
    let stderr = std::io::stderr();
    let value = eval_source(&interp, expr, &mut stderr.lock())?;
    println!("{value}");
    Ok(())
}

/// Parse `expr` as a single line and evaluate it as one group.
pub fn eval_source(
    interp: &Interpreter,
    expr: &str,
    err: &mut impl Write,
) -> Result<Value, CliError> {
    let root = parse_or_report(EXPR_NAME, expr, err)?;
    Ok(interp.eval_node(&root))
}
