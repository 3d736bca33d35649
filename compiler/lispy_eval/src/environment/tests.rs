use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;

fn unbound(value: &Value) -> Option<&str> {
    match value {
        Value::Error(err) => match &err.kind {
            EvalErrorKind::UnknownSymbol { name } => Some(name),
            _ => None,
        },
        _ => None,
    }
}

#[test]
fn test_define_and_lookup() {
    let env = Environment::new();
    env.define_local("x", Value::number(42));
    assert_eq!(env.lookup("x"), Value::number(42));
}

#[test]
fn test_lookup_missing_is_error_value() {
    let env = Environment::new();
    assert_eq!(unbound(&env.lookup("nope")), Some("nope"));
}

#[test]
fn test_define_overwrites_within_frame() {
    let env = Environment::new();
    env.define_local("x", Value::number(1));
    env.define_local("x", Value::number(2));
    assert_eq!(env.lookup("x"), Value::number(2));
    assert_eq!(env.frame().borrow().len(), 1);
}

#[test]
fn test_lookup_walks_parents() {
    let global = Environment::new();
    global.define_local("x", Value::number(1));
    let child = global.child();
    let grandchild = child.child();
    assert_eq!(grandchild.lookup("x"), Value::number(1));
}

#[test]
fn test_child_shadows_parent() {
    let global = Environment::new();
    global.define_local("x", Value::number(1));
    let child = global.child();
    child.define_local("x", Value::number(2));

    assert_eq!(child.lookup("x"), Value::number(2));
    assert_eq!(global.lookup("x"), Value::number(1));
}

#[test]
fn test_define_global_from_nested_frame() {
    let global = Environment::new();
    let inner = global.child().child();
    inner.define_global("x", Value::number(5));

    assert_eq!(global.lookup("x"), Value::number(5));
    assert!(inner.frame().borrow().get("x").is_none());

    let sibling = global.child();
    assert_eq!(sibling.lookup("x"), Value::number(5));
}

#[test]
fn test_define_local_does_not_leak() {
    let global = Environment::new();
    let call = global.child();
    call.define_local("y", Value::number(5));

    assert_eq!(call.lookup("y"), Value::number(5));
    assert_eq!(unbound(&global.lookup("y")), Some("y"));
}

#[test]
fn test_lookup_returns_independent_copy() {
    let env = Environment::new();
    env.define_local("xs", Value::list(vec![Value::number(1)]));

    let before = env.lookup("xs");
    env.define_local("xs", Value::number(0));

    assert_eq!(before, Value::list(vec![Value::number(1)]));
    assert_eq!(env.lookup("xs"), Value::number(0));
}

#[test]
fn test_copy_is_independent_and_keeps_parent() {
    let global = Environment::new();
    let frame = global.child();
    frame.define_local("a", Value::number(1));

    let copy = frame.copy();
    copy.define_local("a", Value::number(2));
    copy.define_local("b", Value::number(3));

    assert_eq!(frame.lookup("a"), Value::number(1));
    assert!(unbound(&frame.lookup("b")).is_some());
    assert_eq!(copy.lookup("a"), Value::number(2));

    let copy_parent = copy.parent().unwrap_or_default();
    assert!(copy_parent.same_frame(&global));
    assert!(!copy.same_frame(&frame));
}

#[test]
fn test_is_global() {
    let global = Environment::new();
    assert!(global.is_global());
    assert!(!global.child().is_global());
    assert!(global.parent().is_none());
}

#[test]
fn test_scope_equality_ignores_parent() {
    let parent = LocalScope::new(Scope::new());
    let mut a = Scope::with_parent(parent);
    let mut b = Scope::new();
    a.define("x", Value::number(1));
    b.define("x", Value::number(1));
    assert_eq!(a, b);
    assert_eq!(a.len(), 1);
    assert_eq!(a.get("x"), Some(&Value::number(1)));
}
