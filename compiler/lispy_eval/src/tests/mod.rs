//! End-to-end evaluator tests: source text in, printed value out.

#![allow(clippy::unwrap_used, clippy::expect_used)]


use crate::{Interpreter, Value};

/// Parse one REPL line and evaluate it against `interp`.
pub(crate) fn run(interp: &Interpreter, source: &str) -> Value {
    let root = lispy_parse::parse(source).expect("test source should parse");
    interp.eval_node(&root)
}

/// Evaluate each line in order in one interpreter; return the last result.
pub(crate) fn run_lines(interp: &Interpreter, lines: &[&str]) -> Value {
    let mut last = Value::unit();
    for line in lines {
        last = run(interp, line);
    }
    last
}

/// Evaluate a single line in a fresh interpreter and print the result.
pub(crate) fn show(source: &str) -> String {
    run(&Interpreter::new(), source).to_string()
}
