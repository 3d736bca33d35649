//! Lispy Parse - source text to syntax tree.
//!
//! Grammar:
//!
//! ```text
//! number : /-?[0-9]+/
//! symbol : /[a-zA-Z0-9_+\-*\/\\=<>!&]+/
//! group  : '(' expr* ')'
//! list   : '{' expr* '}'
//! expr   : number | symbol | group | list
//! root   : expr*
//! ```
//!
//! Whitespace separates tokens and `;` starts a comment running to the end
//! of the line. A number is tried before a symbol at every position, so
//! `1a` reads as the number `1` followed by the symbol `a`, while `a1` is a
//! single symbol.

mod error;
mod lexer;
mod parser;

pub use error::ParseError;
pub use lexer::{lex, Token, TokenKind};
pub use lispy_ir::{Span, SyntaxKind, SyntaxNode};

/// Parse a whole source string into a [`SyntaxKind::Root`] node.
pub fn parse(source: &str) -> Result<SyntaxNode, ParseError> {
    let tokens = lex(source)?;
    parser::Parser::new(source, &tokens).parse_root()
}
