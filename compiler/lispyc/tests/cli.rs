//! Driver tests: whole programs through parse, read and evaluate.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use lispy_eval::{Interpreter, Value};
use lispyc::commands::{banner, eval_line, eval_source, run_source};
use lispyc::CliError;
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> (String, String) {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    let source = std::fs::read_to_string(&path).expect("fixture should exist");
    (path, source)
}

/// Run a fixture file; returns the interpreter, the result, stdout and stderr.
fn run_fixture(name: &str) -> (Interpreter, Result<(), CliError>, String, String) {
    let (path, source) = fixture(name);
    let interp = Interpreter::new();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = run_source(&interp, &path, &source, &mut out, &mut err);
    (
        interp,
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_prelude_file_defines_functions() {
    let (interp, result, out, err) = run_fixture("prelude.lspy");
    result.unwrap();
    assert_eq!(out, "");
    assert_eq!(err, "");

    assert_eq!(interp.env().lookup("total"), Value::number(123));
    assert_eq!(eval_line(&interp, "inc 41"), "42");
    assert_eq!(eval_line(&interp, "map inc {1 2 3}"), "{2 3 4}");
    assert_eq!(eval_line(&interp, "fact 10"), "3628800");
}

#[test]
fn test_file_prints_only_errors_and_keeps_going() {
    let (interp, result, out, _) = run_fixture("errors.lspy");
    result.unwrap();
    assert_eq!(
        out,
        "Error: division by zero\n\
         Error: function 'head' passed {} for argument 0\n\
         Error: unbound symbol 'undefined'\n"
    );
    // Forms after an error still run.
    assert_eq!(interp.env().lookup("y"), Value::number(2));
}

#[test]
fn test_unparsable_file_evaluates_nothing() {
    let (interp, result, out, err) = run_fixture("unbalanced.lspy");
    let Err(CliError::Parse { name, .. }) = &result else {
        panic!("expected parse error, got {result:?}");
    };
    assert!(name.ends_with("unbalanced.lspy"));
    assert_eq!(out, "");
    assert!(err.contains("expected `}` to close `{`, found `)`"), "{err}");
    assert!(interp.env().lookup("x").is_error());
}

#[test]
fn test_repl_lines_share_one_environment() {
    let interp = Interpreter::new();
    assert_eq!(eval_line(&interp, "def {x} 100"), "()");
    assert_eq!(eval_line(&interp, "def {y} 200"), "()");
    assert_eq!(eval_line(&interp, "+ x y"), "300");
    assert_eq!(eval_line(&interp, "list x y"), "{100 200}");
}

#[test]
fn test_repl_line_reports_parse_errors() {
    let interp = Interpreter::new();
    let shown = eval_line(&interp, "+ 1 )");
    assert!(shown.contains("unexpected `)` with no matching opener"), "{shown}");
    // The session survives.
    assert_eq!(eval_line(&interp, "+ 1 1"), "2");
}

#[test]
fn test_repl_prints_values() {
    let interp = Interpreter::new();
    assert_eq!(eval_line(&interp, ""), "()");
    assert_eq!(eval_line(&interp, "head"), "<builtin-function>");
    assert_eq!(eval_line(&interp, "fun {x} {* x 2}"), "(fun {x} {* x 2})");
    assert_eq!(eval_line(&interp, "{1 (2 3) {4}}"), "{1 (2 3) {4}}");
    assert_eq!(eval_line(&interp, "eval {head {1 2}}"), "{1}");
    assert_eq!(
        eval_line(&interp, "1 2"),
        "Error: first element is not a function: got Number, expected Function"
    );
}

#[test]
fn test_eval_source() {
    let interp = Interpreter::new();
    let mut err = Vec::new();
    let value = eval_source(&interp, "* 6 (- 10 3)", &mut err).unwrap();
    assert_eq!(value, Value::number(42));
    assert!(err.is_empty());

    let failed = eval_source(&interp, "(+ 1", &mut err);
    assert!(matches!(failed, Err(CliError::Parse { .. })));
    assert!(String::from_utf8(err).unwrap().contains("unclosed `(`"));
}

#[test]
fn test_banner() {
    let banner = banner();
    assert!(banner.starts_with(&format!("Lispy Version {}", env!("CARGO_PKG_VERSION"))));
    assert!(banner.contains("Press Ctrl+c to Exit"));
}

#[test]
fn test_exit_codes() {
    let parse = CliError::Parse {
        name: "x".into(),
        error: lispy_parse::parse(")").unwrap_err(),
    };
    assert_eq!(parse.exit_code(), 1);
    let read = CliError::Read {
        path: "missing.lspy".into(),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };
    assert_eq!(read.exit_code(), 2);
    assert!(read.to_string().starts_with("failed to read 'missing.lspy'"));
}
