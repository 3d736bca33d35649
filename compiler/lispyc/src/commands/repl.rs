//! Interactive read-eval-print loop.

use lispy_eval::Interpreter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::report::render_parse_error;
use crate::CliError;

pub const PROMPT: &str = "lispy> ";

const REPL_NAME: &str = "<repl>";

/// Startup lines printed before the first prompt.
pub fn banner() -> String {
    format!(
        "Lispy Version {}\nPress Ctrl+c to Exit\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// Evaluate one input line and return the text to print for it.
///
/// The whole line is one group, so `+ 1 2` means `(+ 1 2)`. A line that
/// does not parse yields its error report instead of a value.
pub fn eval_line(interp: &Interpreter, line: &str) -> String {
    match lispy_parse::parse(line) {
        Ok(root) => interp.eval_node(&root).to_string(),
        Err(error) => render_parse_error(REPL_NAME, line, &error)
            .trim_end()
            .to_string(),
    }
}

/// Run the REPL on the terminal until Ctrl-C or Ctrl-D.
pub fn run_repl() -> Result<(), CliError> {
    let mut editor = DefaultEditor::new()?;
    let interp = Interpreter::new();

    println!("{}", banner());

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                println!("{}", eval_line(&interp, &line));
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                tracing::debug!("repl exit");
                return Ok(());
            }
            Err(other) => return Err(other.into()),
        }
    }
}
