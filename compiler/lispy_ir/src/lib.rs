//! Lispy IR - the syntax tree handed from the parser to the evaluator.
//!
//! ```text
//! source ──► lispy_parse ──► SyntaxNode ──► lispy_eval::reader ──► Value
//! ```
//!
//! The tree is read-only once built. Literals keep their source text
//! verbatim; converting number text to an integer is the reader's job so
//! that an out-of-range literal surfaces as an evaluation error rather than
//! a parse failure.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod syntax;

pub use span::{Span, SpanError};
pub use syntax::{SyntaxKind, SyntaxNode};
