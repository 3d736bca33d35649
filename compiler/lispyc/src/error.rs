//! Driver errors.
//!
//! Evaluation never fails at this level (errors are values), so everything
//! here is about getting source in and results out.

use lispy_parse::ParseError;
use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The report has already been written by the time this is returned.
    #[error("could not parse '{name}'")]
    Parse {
        name: String,
        #[source]
        error: ParseError,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),

    #[error("line editor failed: {0}")]
    Readline(#[from] ReadlineError),
}

impl CliError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Parse { .. } => 1,
            CliError::Read { .. } | CliError::Write(_) | CliError::Readline(_) => 2,
        }
    }
}
