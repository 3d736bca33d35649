//! Runtime values.
//!
//! A [`Value`] is a tree: each node exclusively owns its children and there
//! is no sharing between live values. `Clone` therefore is the deep copy the
//! environment hands out on every lookup, and `Drop` releases a whole
//! subtree exactly once.
//!
//! Children live in a [`Seq`], which owns the recursive parts of the tree:
//! cloning and comparing grow the stack as needed, and dropping flattens the
//! subtree onto a heap worklist, so arbitrarily deep values never overflow.

use std::fmt;
use std::ops::{Deref, DerefMut};

use lispy_stack::ensure_sufficient_stack;

use crate::builtins::Builtin;
use crate::environment::Scope;
use crate::errors::EvalError;

/// Discriminant of a [`Value`], used in error messages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Error,
    Number,
    Symbol,
    Function,
    Group,
    List,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Error => "Error",
            ValueKind::Number => "Number",
            ValueKind::Symbol => "Symbol",
            ValueKind::Function => "Function",
            ValueKind::Group => "Group",
            ValueKind::List => "List",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runtime value in the Lispy interpreter.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// First-class error. Terminates evaluation of the enclosing group.
    Error(EvalError),
    /// Fixed-width integer. Arithmetic wraps; division truncates toward zero.
    Number(i64),
    /// Name resolved through the environment when evaluated on its own.
    Symbol(String),
    /// Builtin or closure.
    Function(Function),
    /// Evaluated group `( ... )`: reduce every child, then apply the first
    /// to the rest.
    Group(Seq),
    /// Quoted list `{ ... }`. Data until explicitly unwrapped with `eval`.
    List(Seq),
}

/// Owned child sequence of a group, list or closure body.
///
/// Derefs to `Vec<Value>`. Use [`Seq::into_vec`] to take the children out.
#[derive(Default)]
pub struct Seq(Vec<Value>);

impl Seq {
    pub fn new() -> Self {
        Seq(Vec::new())
    }

    /// Move the children out, leaving nothing to drop here.
    pub fn into_vec(mut self) -> Vec<Value> {
        std::mem::take(&mut self.0)
    }
}

impl From<Vec<Value>> for Seq {
    #[inline]
    fn from(items: Vec<Value>) -> Self {
        Seq(items)
    }
}

impl Deref for Seq {
    type Target = Vec<Value>;

    #[inline]
    fn deref(&self) -> &Vec<Value> {
        &self.0
    }
}

impl DerefMut for Seq {
    #[inline]
    fn deref_mut(&mut self) -> &mut Vec<Value> {
        &mut self.0
    }
}

impl IntoIterator for Seq {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl Clone for Seq {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| Seq(self.0.clone()))
    }
}

impl PartialEq for Seq {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| self.0 == other.0)
    }
}

impl fmt::Debug for Seq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| f.debug_list().entries(self.0.iter()).finish())
    }
}

/// Releases the subtree iteratively. Nested sequences, closure bodies and
/// closure bindings are moved onto `pending` and emptied there, so each
/// value is dropped with no owned children left.
impl Drop for Seq {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.0);
        while let Some(value) = pending.pop() {
            match value {
                Value::Group(mut items) | Value::List(mut items) => {
                    pending.append(&mut items.0);
                }
                Value::Function(Function::Lambda(mut lambda)) => {
                    pending.append(&mut lambda.body.0);
                    pending.extend(lambda.env.drain_values());
                }
                _ => {}
            }
        }
    }
}

/// Something that can be applied to arguments.
#[derive(Clone, Debug, PartialEq)]
pub enum Function {
    /// Native primitive. Copying a builtin copies the reference.
    Builtin(Builtin),
    /// User closure created by `fun`.
    Lambda(Box<Lambda>),
}

impl Function {
    /// Name used in traces: the builtin's symbol, or `fun` for closures.
    pub fn name(&self) -> &'static str {
        match self {
            Function::Builtin(builtin) => builtin.name(),
            Function::Lambda(_) => "fun",
        }
    }
}

/// User-defined closure.
///
/// `formals` holds the parameters still waiting for an argument; supplying
/// some but not all of them moves those bindings into `env` and leaves the
/// rest here. `body` is the item sequence of the `{ ... }` body, evaluated
/// as a group once every formal is bound.
#[derive(Clone, Debug, PartialEq)]
pub struct Lambda {
    pub(crate) formals: Vec<String>,
    pub(crate) body: Seq,
    pub(crate) env: Scope,
}

impl Lambda {
    /// Closure over a fresh, empty frame.
    pub fn new(formals: Vec<String>, body: Vec<Value>) -> Self {
        Lambda {
            formals,
            body: Seq::from(body),
            env: Scope::new(),
        }
    }

    /// Parameters not yet bound.
    pub fn formals(&self) -> &[String] {
        &self.formals
    }

    pub fn body(&self) -> &[Value] {
        &self.body
    }

    /// Arguments bound so far by partial application.
    pub fn env(&self) -> &Scope {
        &self.env
    }
}

// Constructors

impl Value {
    #[inline]
    pub fn number(n: i64) -> Self {
        Value::Number(n)
    }

    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    #[inline]
    pub fn error(err: EvalError) -> Self {
        Value::Error(err)
    }

    #[inline]
    pub fn group(items: Vec<Value>) -> Self {
        Value::Group(Seq::from(items))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Seq::from(items))
    }

    /// The empty group `()`, returned by binding forms.
    #[inline]
    pub fn unit() -> Self {
        Value::Group(Seq::new())
    }

    #[inline]
    pub fn builtin(builtin: Builtin) -> Self {
        Value::Function(Function::Builtin(builtin))
    }

    #[inline]
    pub fn lambda(formals: Vec<String>, body: Vec<Value>) -> Self {
        Value::Function(Function::Lambda(Box::new(Lambda::new(formals, body))))
    }

    /// Truth value used by comparisons: `1` or `0`.
    #[inline]
    pub fn boolean(b: bool) -> Self {
        Value::Number(i64::from(b))
    }
}

// Queries

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Error(_) => ValueKind::Error,
            Value::Number(_) => ValueKind::Number,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::Function(_) => ValueKind::Function,
            Value::Group(_) => ValueKind::Group,
            Value::List(_) => ValueKind::List,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(name) => Some(name),
            _ => None,
        }
    }
}

// Printing

fn write_seq(f: &mut fmt::Formatter<'_>, open: char, items: &[Value], close: char) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "{close}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Value::Error(err) => write!(f, "Error: {err}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Symbol(name) => f.write_str(name),
            Value::Function(func) => write!(f, "{func}"),
            Value::Group(items) => write_seq(f, '(', items, ')'),
            Value::List(items) => write_seq(f, '{', items, '}'),
        })
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::Builtin(_) => f.write_str("<builtin-function>"),
            Function::Lambda(lambda) => {
                f.write_str("(fun {")?;
                f.write_str(&lambda.formals.join(" "))?;
                f.write_str("} ")?;
                write_seq(f, '{', &lambda.body, '}')?;
                f.write_str(")")
            }
        }
    }
}
