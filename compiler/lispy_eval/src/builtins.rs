//! Builtin functions.
//!
//! Each builtin receives the caller's environment and owns its argument
//! vector. It validates its own arity and argument kinds and reports
//! violations as error values; anything it does not fold into its result is
//! dropped on return, including on the error path.

use crate::environment::Environment;
use crate::errors::{
    binding_count_mismatch, division_by_zero, empty_list, wrong_arg_count, wrong_arg_type,
    wrong_element_type, EvalError,
};
use crate::eval::eval;
use crate::value::{Value, ValueKind};

type BuiltinResult = Result<Value, EvalError>;

/// Native primitive. Identity-comparable and `Copy`: duplicating a builtin
/// value only duplicates this tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    // List operations
    List,
    Head,
    Tail,
    Eval,
    Join,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Binding
    Def,
    Put,
    Fun,

    // Comparison
    Gt,
    Lt,
    Ge,
    Le,
    Eq,
    Ne,

    // Control
    If,
}

impl Builtin {
    /// Every builtin, in registration order.
    pub const ALL: [Builtin; 19] = [
        Builtin::List,
        Builtin::Head,
        Builtin::Tail,
        Builtin::Eval,
        Builtin::Join,
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
        Builtin::Def,
        Builtin::Put,
        Builtin::Fun,
        Builtin::Gt,
        Builtin::Lt,
        Builtin::Ge,
        Builtin::Le,
        Builtin::Eq,
        Builtin::Ne,
        Builtin::If,
    ];

    /// Symbol the builtin is bound to in the global environment.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::List => "list",
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::Eval => "eval",
            Builtin::Join => "join",
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Def => "def",
            Builtin::Put => "=",
            Builtin::Fun => "fun",
            Builtin::Gt => ">",
            Builtin::Lt => "<",
            Builtin::Ge => ">=",
            Builtin::Le => "<=",
            Builtin::Eq => "==",
            Builtin::Ne => "!=",
            Builtin::If => "if",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Builtin::ALL.into_iter().find(|b| b.name() == name)
    }

    /// Apply the builtin to an owned argument sequence.
    pub fn call(self, env: &Environment, args: Vec<Value>) -> Value {
        let name = self.name();
        let result = match self {
            Builtin::List => Ok(Value::list(args)),
            Builtin::Head => head(args),
            Builtin::Tail => tail(args),
            Builtin::Eval => eval_list(env, args),
            Builtin::Join => join(args),
            Builtin::Add | Builtin::Sub | Builtin::Mul | Builtin::Div => {
                arithmetic(self, args)
            }
            Builtin::Def => bind(name, args, |sym, value| env.define_global(sym, value)),
            Builtin::Put => bind(name, args, |sym, value| env.define_local(sym, value)),
            Builtin::Fun => lambda(args),
            Builtin::Gt | Builtin::Lt | Builtin::Ge | Builtin::Le => compare(self, args),
            Builtin::Eq => equality(name, args, true),
            Builtin::Ne => equality(name, args, false),
            Builtin::If => if_then_else(env, args),
        };
        result.unwrap_or_else(Value::Error)
    }
}

/// Bind every builtin in the global frame reachable from `env`.
pub fn register_builtins(env: &Environment) {
    for builtin in Builtin::ALL {
        env.define_global(builtin.name(), Value::builtin(builtin));
    }
    tracing::debug!(count = Builtin::ALL.len(), "registered builtins");
}

// Argument checks

fn expect_count(func: &'static str, args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(wrong_arg_count(func, expected, args.len()))
    }
}

fn expect_list(func: &'static str, index: usize, value: Value) -> Result<Vec<Value>, EvalError> {
    match value {
        Value::List(items) => Ok(items.into_vec()),
        other => Err(wrong_arg_type(func, index, ValueKind::List, other.kind())),
    }
}

fn expect_number(func: &'static str, index: usize, value: &Value) -> Result<i64, EvalError> {
    value
        .as_number()
        .ok_or_else(|| wrong_arg_type(func, index, ValueKind::Number, value.kind()))
}

/// Symbol names of a `{a b c}` list passed as argument `index`, in order.
fn expect_symbols(
    func: &'static str,
    index: usize,
    items: &[Value],
) -> Result<Vec<String>, EvalError> {
    items
        .iter()
        .enumerate()
        .map(|(element, item)| {
            item.as_symbol().map(str::to_owned).ok_or_else(|| {
                wrong_element_type(func, index, element, ValueKind::Symbol, item.kind())
            })
        })
        .collect()
}

/// Take the single argument of a one-argument builtin.
fn single(func: &'static str, args: Vec<Value>) -> Result<Value, EvalError> {
    expect_count(func, &args, 1)?;
    args.into_iter()
        .next()
        .ok_or_else(|| wrong_arg_count(func, 1, 0))
}

// List operations

fn head(args: Vec<Value>) -> BuiltinResult {
    let mut items = expect_list("head", 0, single("head", args)?)?;
    if items.is_empty() {
        return Err(empty_list("head", 0));
    }
    items.truncate(1);
    Ok(Value::list(items))
}

fn tail(args: Vec<Value>) -> BuiltinResult {
    let mut items = expect_list("tail", 0, single("tail", args)?)?;
    if items.is_empty() {
        return Err(empty_list("tail", 0));
    }
    items.remove(0);
    Ok(Value::list(items))
}

fn eval_list(env: &Environment, args: Vec<Value>) -> BuiltinResult {
    let items = expect_list("eval", 0, single("eval", args)?)?;
    Ok(eval(env, Value::group(items)))
}

fn join(args: Vec<Value>) -> BuiltinResult {
    if let Some((index, bad)) = args.iter().enumerate().find(|(_, v)| !matches!(v, Value::List(_))) {
        return Err(wrong_arg_type("join", index, ValueKind::List, bad.kind()));
    }
    let mut joined = Vec::new();
    for (index, arg) in args.into_iter().enumerate() {
        joined.extend(expect_list("join", index, arg)?);
    }
    Ok(Value::list(joined))
}

// Arithmetic

fn arithmetic(op: Builtin, args: Vec<Value>) -> BuiltinResult {
    let func = op.name();
    let numbers = args
        .iter()
        .enumerate()
        .map(|(index, arg)| expect_number(func, index, arg))
        .collect::<Result<Vec<i64>, _>>()?;

    let Some((&first, rest)) = numbers.split_first() else {
        return Err(wrong_arg_count(func, 1, 0));
    };

    if op == Builtin::Sub && rest.is_empty() {
        return Ok(Value::Number(first.wrapping_neg()));
    }

    let mut acc = first;
    for &y in rest {
        acc = match op {
            Builtin::Add => acc.wrapping_add(y),
            Builtin::Sub => acc.wrapping_sub(y),
            Builtin::Mul => acc.wrapping_mul(y),
            _ => {
                if y == 0 {
                    return Err(division_by_zero());
                }
                acc.wrapping_div(y)
            }
        };
    }
    Ok(Value::Number(acc))
}

// Binding

/// Shared body of `def` and `=`: `{names...}` followed by one value per name.
fn bind(
    func: &'static str,
    args: Vec<Value>,
    mut define: impl FnMut(String, Value),
) -> BuiltinResult {
    let mut args = args.into_iter();
    let Some(first) = args.next() else {
        return Err(wrong_arg_count(func, 1, 0));
    };
    let names = expect_symbols(func, 0, &expect_list(func, 0, first)?)?;
    let values: Vec<Value> = args.collect();
    if names.len() != values.len() {
        return Err(binding_count_mismatch(func, names.len(), values.len()));
    }
    for (name, value) in names.into_iter().zip(values) {
        define(name, value);
    }
    Ok(Value::unit())
}

fn lambda(args: Vec<Value>) -> BuiltinResult {
    expect_count("fun", &args, 2)?;
    let mut args = args.into_iter();
    let (Some(formals), Some(body)) = (args.next(), args.next()) else {
        return Err(wrong_arg_count("fun", 2, 0));
    };
    let formals = expect_list("fun", 0, formals)?;
    let body = expect_list("fun", 1, body)?;
    let formals = expect_symbols("fun", 0, &formals)?;
    Ok(Value::lambda(formals, body))
}

// Comparison

fn compare(op: Builtin, args: Vec<Value>) -> BuiltinResult {
    let func = op.name();
    expect_count(func, &args, 2)?;
    let a = expect_number(func, 0, &args[0])?;
    let b = expect_number(func, 1, &args[1])?;
    let result = match op {
        Builtin::Gt => a > b,
        Builtin::Lt => a < b,
        Builtin::Ge => a >= b,
        _ => a <= b,
    };
    Ok(Value::boolean(result))
}

fn equality(func: &'static str, args: Vec<Value>, want_equal: bool) -> BuiltinResult {
    expect_count(func, &args, 2)?;
    Ok(Value::boolean((args[0] == args[1]) == want_equal))
}

// Control

fn if_then_else(env: &Environment, args: Vec<Value>) -> BuiltinResult {
    expect_count("if", &args, 3)?;
    let mut args = args.into_iter();
    let (Some(cond), Some(then), Some(otherwise)) = (args.next(), args.next(), args.next()) else {
        return Err(wrong_arg_count("if", 3, 0));
    };
    let cond = expect_number("if", 0, &cond)?;
    let then = expect_list("if", 1, then)?;
    let otherwise = expect_list("if", 2, otherwise)?;
    let branch = if cond == 0 { otherwise } else { then };
    Ok(eval(env, Value::group(branch)))
}
