//! Syntax tree nodes.

use std::fmt;

use lispy_stack::ensure_sufficient_stack;

use crate::Span;

/// Kind tag of a [`SyntaxNode`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    /// Integer literal, e.g. `-42`. Text is the literal as written.
    Number,
    /// Symbol, e.g. `head` or `+`. Text is the name.
    Symbol,
    /// Parenthesized group `( ... )`.
    Group,
    /// Braced group `{ ... }`.
    List,
    /// Top-level sequence of expressions (a whole line or file).
    Root,
}

impl SyntaxKind {
    /// Whether nodes of this kind carry children rather than text.
    #[inline]
    pub fn is_composite(self) -> bool {
        matches!(self, SyntaxKind::Group | SyntaxKind::List | SyntaxKind::Root)
    }
}

/// A node of the parsed syntax tree.
///
/// Literal nodes have text and no children; composite nodes have children
/// and empty text. Nesting depth is unbounded: clone, comparison and debug
/// output grow the stack, and drop is iterative.
pub struct SyntaxNode {
    kind: SyntaxKind,
    span: Span,
    text: Box<str>,
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn number(text: impl Into<Box<str>>, span: Span) -> Self {
        Self::literal(SyntaxKind::Number, text.into(), span)
    }

    pub fn symbol(text: impl Into<Box<str>>, span: Span) -> Self {
        Self::literal(SyntaxKind::Symbol, text.into(), span)
    }

    pub fn group(children: Vec<SyntaxNode>, span: Span) -> Self {
        Self::composite(SyntaxKind::Group, children, span)
    }

    pub fn list(children: Vec<SyntaxNode>, span: Span) -> Self {
        Self::composite(SyntaxKind::List, children, span)
    }

    pub fn root(children: Vec<SyntaxNode>, span: Span) -> Self {
        Self::composite(SyntaxKind::Root, children, span)
    }

    fn literal(kind: SyntaxKind, text: Box<str>, span: Span) -> Self {
        SyntaxNode {
            kind,
            span,
            text,
            children: Vec::new(),
        }
    }

    fn composite(kind: SyntaxKind, children: Vec<SyntaxNode>, span: Span) -> Self {
        SyntaxNode {
            kind,
            span,
            text: Box::default(),
            children,
        }
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Literal text; empty for composite nodes.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Child nodes in source order; empty for literals.
    #[inline]
    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }
}

impl Clone for SyntaxNode {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| SyntaxNode {
            kind: self.kind,
            span: self.span,
            text: self.text.clone(),
            children: self.children.clone(),
        })
    }
}

impl PartialEq for SyntaxNode {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| {
            self.kind == other.kind
                && self.span == other.span
                && self.text == other.text
                && self.children == other.children
        })
    }
}

impl Eq for SyntaxNode {}

impl Drop for SyntaxNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// S-expression dump, e.g. `(root (group (symbol +) (number 1)))`.
impl fmt::Debug for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self.kind {
            SyntaxKind::Number => write!(f, "(number {})", self.text),
            SyntaxKind::Symbol => write!(f, "(symbol {})", self.text),
            SyntaxKind::Group | SyntaxKind::List | SyntaxKind::Root => {
                let tag = match self.kind {
                    SyntaxKind::Group => "group",
                    SyntaxKind::List => "list",
                    _ => "root",
                };
                write!(f, "({tag}")?;
                for child in &self.children {
                    write!(f, " {child:?}")?;
                }
                write!(f, ")")
            }
        })
    }
}
