use super::*;

/// Depth of a right-nested list `(1 (1 (1 ...)))`, computed recursively.
#[derive(Debug)]
enum Nested {
    Leaf,
    Node(Box<Nested>),
}

fn build(depth: usize) -> Nested {
    let mut node = Nested::Leaf;
    for _ in 0..depth {
        node = Nested::Node(Box::new(node));
    }
    node
}

fn depth(node: &Nested) -> usize {
    ensure_sufficient_stack(|| match node {
        Nested::Leaf => 0,
        Nested::Node(inner) => depth(inner) + 1,
    })
}

fn unwind(node: Nested) {
    let mut node = node;
    while let Nested::Node(inner) = node {
        node = *inner;
    }
}

#[test]
fn test_shallow_nesting() {
    let tree = build(16);
    assert_eq!(depth(&tree), 16);
    unwind(tree);
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let tree = build(200_000);
    assert_eq!(depth(&tree), 200_000);
    unwind(tree);
}

#[test]
fn test_passes_result_through() {
    let result: Result<i64, &str> = ensure_sufficient_stack(|| Err("Division by zero"));
    assert_eq!(result, Err("Division by zero"));
}
