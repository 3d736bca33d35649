//! Tokenizer.
//!
//! Works on bytes: every token-forming character is ASCII, so byte offsets
//! double as char boundaries everywhere except inside comments, which are
//! skipped wholesale with `memchr`.

use lispy_ir::Span;

use crate::ParseError;

/// Token kinds. Literal text is recovered from the source by span.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LParen,
    RParen,
    LBrace,
    RBrace,
    Number,
    Symbol,
    Eof,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Source text covered by this token.
    #[inline]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.to_range()]
    }
}

/// Bytes that may appear in a symbol.
#[inline]
fn is_symbol_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'_' | b'+' | b'-' | b'*' | b'/' | b'\\' | b'=' | b'<' | b'>' | b'!' | b'&'
        )
}

struct Lexer<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Lexer {
            source,
            bytes: source.as_bytes(),
            pos: 0,
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    #[inline]
    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn span_from(&self, start: usize) -> Result<Span, ParseError> {
        Ok(Span::try_from_range(start..self.pos)?)
    }

    /// Skip whitespace and `;` comments.
    fn skip_trivia(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else if b == b';' {
                self.pos = match memchr::memchr(b'\n', &self.bytes[self.pos..]) {
                    Some(offset) => self.pos + offset + 1,
                    None => self.bytes.len(),
                };
            } else {
                break;
            }
        }
    }

    fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_trivia();
        let start = self.pos;

        let Some(b) = self.peek() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                span: self.span_from(start)?,
            });
        };

        let kind = match b {
            b'(' => {
                self.pos += 1;
                TokenKind::LParen
            }
            b')' => {
                self.pos += 1;
                TokenKind::RParen
            }
            b'{' => {
                self.pos += 1;
                TokenKind::LBrace
            }
            b'}' => {
                self.pos += 1;
                TokenKind::RBrace
            }
            b'0'..=b'9' => {
                self.eat_while(|b| b.is_ascii_digit());
                TokenKind::Number
            }
            b'-' if self.peek_at(1).is_some_and(|b| b.is_ascii_digit()) => {
                self.pos += 1;
                self.eat_while(|b| b.is_ascii_digit());
                TokenKind::Number
            }
            b if is_symbol_byte(b) => {
                self.eat_while(is_symbol_byte);
                TokenKind::Symbol
            }
            _ => {
                let ch = self.source[start..].chars().next().unwrap_or('\u{FFFD}');
                self.pos += ch.len_utf8();
                return Err(ParseError::UnexpectedChar {
                    ch,
                    span: self.span_from(start)?,
                });
            }
        };

        Ok(Token {
            kind,
            span: self.span_from(start)?,
        })
    }
}

/// Tokenize `source`. The returned stream always ends with an `Eof` token.
pub fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        tokens.push(token);
        if token.kind == TokenKind::Eof {
            tracing::trace!(count = tokens.len(), "lexed");
            return Ok(tokens);
        }
    }
}

#[cfg(test)]
mod tests;
