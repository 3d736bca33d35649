//! Syntax tree to value tree.

use lispy_ir::{SyntaxKind, SyntaxNode};
use lispy_stack::ensure_sufficient_stack;

use crate::errors::invalid_number;
use crate::value::Value;

/// Convert a parsed node into an unevaluated value.
///
/// Parenthesized groups and the root become [`Value::Group`], braced groups
/// become [`Value::List`]. A number literal that does not fit in an `i64`
/// becomes an error value rather than failing the read.
pub fn read(node: &SyntaxNode) -> Value {
    ensure_sufficient_stack(|| match node.kind() {
        SyntaxKind::Number => read_number(node.text()),
        SyntaxKind::Symbol => Value::symbol(node.text()),
        SyntaxKind::Group | SyntaxKind::Root => Value::group(read_children(node)),
        SyntaxKind::List => Value::list(read_children(node)),
    })
}

fn read_number(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::error(invalid_number(text)),
    }
}

fn read_children(node: &SyntaxNode) -> Vec<Value> {
    node.children().iter().map(read).collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::errors::EvalErrorKind;
    use lispy_ir::Span;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_shapes() {
        let root = lispy_parse::parse("(+ 1 {x -2})").unwrap();
        assert_eq!(
            read(&root),
            Value::group(vec![Value::group(vec![
                Value::symbol("+"),
                Value::number(1),
                Value::list(vec![Value::symbol("x"), Value::number(-2)]),
            ])])
        );
    }

    #[test]
    fn test_read_out_of_range_number() {
        let node = SyntaxNode::number("99999999999999999999", Span::DUMMY);
        match read(&node) {
            Value::Error(err) => assert_eq!(
                err.kind,
                EvalErrorKind::InvalidNumber {
                    literal: "99999999999999999999".to_string()
                }
            ),
            other => panic!("expected error, got {other}"),
        }
    }

    #[test]
    fn test_read_extreme_numbers() {
        let min = SyntaxNode::number("-9223372036854775808", Span::DUMMY);
        assert_eq!(read(&min), Value::number(i64::MIN));
    }
}
