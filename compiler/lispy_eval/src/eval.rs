//! Reduction and the call protocol.

use lispy_stack::ensure_sufficient_stack;

use crate::environment::Environment;
use crate::errors::{not_callable, too_many_arguments};
use crate::value::{Function, Lambda, Value};

/// Reduce `value` in `env`.
///
/// Symbols are looked up, groups are reduced and applied, and everything
/// else (numbers, errors, functions, quoted lists) is already a result.
pub fn eval(env: &Environment, value: Value) -> Value {
    ensure_sufficient_stack(|| match value {
        Value::Symbol(name) => env.lookup(&name),
        Value::Group(items) => eval_group(env, items.into_vec()),
        other => other,
    })
}

/// Reduce an evaluated group `( ... )`.
///
/// Every child is evaluated left to right, even after one of them yields an
/// error; only then is the first error (if any) returned in place of the
/// group. An empty group is its own value and a one-element group is the
/// value of its element. Otherwise the first child is applied to the rest.
pub fn eval_group(env: &Environment, items: Vec<Value>) -> Value {
    if items.is_empty() {
        return Value::group(items);
    }

    let mut items: Vec<Value> = items.into_iter().map(|item| eval(env, item)).collect();

    if let Some(index) = items.iter().position(Value::is_error) {
        return items.swap_remove(index);
    }

    if items.len() == 1 {
        return items.remove(0);
    }

    match items.remove(0) {
        Value::Function(func) => apply(env, func, items),
        other => {
            tracing::trace!(kind = %other.kind(), "head of group is not callable");
            Value::error(not_callable(other.kind()))
        }
    }
}

/// Apply `func` to already-evaluated arguments.
#[tracing::instrument(level = "debug", skip_all, fields(function = func.name(), args = args.len()))]
pub fn apply(env: &Environment, func: Function, args: Vec<Value>) -> Value {
    match func {
        Function::Builtin(builtin) => builtin.call(env, args),
        Function::Lambda(lambda) => call_lambda(env, *lambda, args),
    }
}

/// Bind arguments to the closure's pending formals, one pair at a time.
///
/// Running out of formals first is an error. Running out of arguments first
/// yields the closure itself with the remaining formals still pending
/// (partial application). When both run out together the body is evaluated
/// in the closure's frame, whose parent is the caller's environment, so free
/// names in the body fall back to whatever the call site can see.
///
/// The closure here is the evaluator's own copy (the result of evaluating
/// the group head), so binding into its frame never disturbs the value
/// stored under its name; each call, partial or recursive, has its own frame.
fn call_lambda(env: &Environment, mut lambda: Lambda, args: Vec<Value>) -> Value {
    let given = args.len();
    let total = lambda.formals.len();

    let mut formals = std::mem::take(&mut lambda.formals).into_iter();
    for arg in args {
        let Some(formal) = formals.next() else {
            return Value::error(too_many_arguments(given, total));
        };
        lambda.env.define(formal, arg);
    }
    lambda.formals = formals.collect();

    if !lambda.formals.is_empty() {
        tracing::trace!(pending = lambda.formals.len(), "partial application");
        return Value::Function(Function::Lambda(Box::new(lambda)));
    }

    let Lambda {
        env: mut frame,
        body,
        ..
    } = lambda;
    frame.set_parent(Some(env.frame().clone()));
    let call_env = Environment::from_scope(frame);
    eval(&call_env, Value::Group(body))
}
