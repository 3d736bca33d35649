//! Recursive-descent parser over the token stream.

use lispy_ir::{Span, SyntaxNode};
use lispy_stack::ensure_sufficient_stack;

use crate::lexer::{Token, TokenKind};
use crate::ParseError;

/// Which bracket pair a composite node was opened with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Delimiter {
    Paren,
    Brace,
}

impl Delimiter {
    fn open(self) -> char {
        match self {
            Delimiter::Paren => '(',
            Delimiter::Brace => '{',
        }
    }

    fn close(self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Brace => '}',
        }
    }

    fn closing_kind(self) -> TokenKind {
        match self {
            Delimiter::Paren => TokenKind::RParen,
            Delimiter::Brace => TokenKind::RBrace,
        }
    }
}

fn close_char(kind: TokenKind) -> char {
    if kind == TokenKind::RBrace {
        '}'
    } else {
        ')'
    }
}

pub(crate) struct Parser<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        Parser {
            source,
            tokens,
            pos: 0,
        }
    }

    /// Current token. The stream ends in `Eof`, which is never consumed.
    #[inline]
    fn current(&self) -> Token {
        self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    #[inline]
    fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn parse_root(mut self) -> Result<SyntaxNode, ParseError> {
        let mut children = Vec::new();
        loop {
            let token = self.current();
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::RParen | TokenKind::RBrace => {
                    return Err(ParseError::UnexpectedClose {
                        close: close_char(token.kind),
                        span: token.span,
                    });
                }
                _ => children.push(self.parse_expr()?),
            }
        }
        let end = self.current().span.end;
        Ok(SyntaxNode::root(children, Span::new(0, end)))
    }

    fn parse_expr(&mut self) -> Result<SyntaxNode, ParseError> {
        ensure_sufficient_stack(|| {
            let token = self.advance();
            match token.kind {
                TokenKind::Number => Ok(SyntaxNode::number(token.text(self.source), token.span)),
                TokenKind::Symbol => Ok(SyntaxNode::symbol(token.text(self.source), token.span)),
                TokenKind::LParen => self.parse_composite(Delimiter::Paren, token.span),
                TokenKind::LBrace => self.parse_composite(Delimiter::Brace, token.span),
                TokenKind::RParen | TokenKind::RBrace => Err(ParseError::UnexpectedClose {
                    close: close_char(token.kind),
                    span: token.span,
                }),
                // Callers check for Eof before descending.
                TokenKind::Eof => Err(ParseError::UnclosedDelimiter {
                    open: '(',
                    span: token.span,
                }),
            }
        })
    }

    fn parse_composite(
        &mut self,
        delimiter: Delimiter,
        open_span: Span,
    ) -> Result<SyntaxNode, ParseError> {
        let mut children = Vec::new();
        loop {
            let token = self.current();
            match token.kind {
                TokenKind::Eof => {
                    return Err(ParseError::UnclosedDelimiter {
                        open: delimiter.open(),
                        span: open_span,
                    });
                }
                kind if kind == delimiter.closing_kind() => {
                    self.advance();
                    let span = open_span.merge(token.span);
                    return Ok(match delimiter {
                        Delimiter::Paren => SyntaxNode::group(children, span),
                        Delimiter::Brace => SyntaxNode::list(children, span),
                    });
                }
                TokenKind::RParen | TokenKind::RBrace => {
                    return Err(ParseError::MismatchedClose {
                        open: delimiter.open(),
                        open_span,
                        expected: delimiter.close(),
                        found: close_char(token.kind),
                        span: token.span,
                    });
                }
                _ => children.push(self.parse_expr()?),
            }
        }
    }
}
