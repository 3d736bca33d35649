//! Parse error type.

use lispy_ir::{Span, SpanError};
use thiserror::Error;

/// Source text that could not be turned into a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected character `{ch}`")]
    UnexpectedChar { ch: char, span: Span },

    #[error("unclosed `{open}`")]
    UnclosedDelimiter { open: char, span: Span },

    #[error("unexpected `{close}` with no matching opener")]
    UnexpectedClose { close: char, span: Span },

    #[error("expected `{expected}` to close `{open}`, found `{found}`")]
    MismatchedClose {
        open: char,
        open_span: Span,
        expected: char,
        found: char,
        span: Span,
    },

    #[error("source too large: {0}")]
    SourceTooLarge(#[from] SpanError),
}

impl ParseError {
    /// Primary location of the error, if it has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::UnexpectedChar { span, .. }
            | ParseError::UnclosedDelimiter { span, .. }
            | ParseError::UnexpectedClose { span, .. }
            | ParseError::MismatchedClose { span, .. } => Some(*span),
            ParseError::SourceTooLarge(_) => None,
        }
    }

    /// Secondary location worth pointing at (the opener of a mismatched pair).
    pub fn related_span(&self) -> Option<Span> {
        match self {
            ParseError::MismatchedClose { open_span, .. } => Some(*open_span),
            _ => None,
        }
    }
}
