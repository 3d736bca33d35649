//! Evaluation errors.
//!
//! Errors are data: an [`EvalError`] travels inside [`Value::Error`] and is
//! printed by the REPL like any other result. `EvalErrorKind` keeps the
//! structured cause (function name, argument index, kinds involved) so
//! callers and tests can match on it instead of parsing messages.
//!
//! Construct errors through the factory functions below rather than by
//! hand; each one fills both the kind and the rendered message.
//!
//! [`Value::Error`]: crate::Value::Error

use std::fmt;

use crate::value::ValueKind;

/// Structured error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Arithmetic
    DivisionByZero,

    // Lookup
    UnknownSymbol {
        name: String,
    },

    // Application
    NotCallable {
        got: ValueKind,
    },
    TooManyArguments {
        given: usize,
        total: usize,
    },

    // Builtin argument checks
    ArgCount {
        func: &'static str,
        expected: usize,
        got: usize,
    },
    ArgType {
        func: &'static str,
        index: usize,
        expected: ValueKind,
        got: ValueKind,
    },
    /// An item inside a list argument has the wrong kind.
    ElementType {
        func: &'static str,
        index: usize,
        element: usize,
        expected: ValueKind,
        got: ValueKind,
    },
    EmptyList {
        func: &'static str,
        index: usize,
    },
    BindingCount {
        func: &'static str,
        symbols: usize,
        values: usize,
    },

    // Reader
    InvalidNumber {
        literal: String,
    },

    /// Free-form message.
    Custom {
        message: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),

            Self::UnknownSymbol { name } => write!(f, "unbound symbol '{name}'"),

            Self::NotCallable { got } => write!(
                f,
                "first element is not a function: got {got}, expected {}",
                ValueKind::Function
            ),
            Self::TooManyArguments { given, total } => write!(
                f,
                "function passed too many arguments: got {given}, expected {total}"
            ),

            Self::ArgCount {
                func,
                expected,
                got,
            } => write!(
                f,
                "function '{func}' passed incorrect number of arguments: got {got}, expected {expected}"
            ),
            Self::ArgType {
                func,
                index,
                expected,
                got,
            } => write!(
                f,
                "function '{func}' passed incorrect type for argument {index}: got {got}, expected {expected}"
            ),
            Self::ElementType {
                func,
                index,
                element,
                expected,
                got,
            } => write!(
                f,
                "function '{func}' passed incorrect type for element {element} of argument {index}: got {got}, expected {expected}"
            ),
            Self::EmptyList { func, index } => {
                write!(f, "function '{func}' passed {{}} for argument {index}")
            }
            Self::BindingCount {
                func,
                symbols,
                values,
            } => write!(
                f,
                "function '{func}' passed {symbols} symbols but {values} values"
            ),

            Self::InvalidNumber { literal } => write!(f, "invalid number '{literal}'"),

            Self::Custom { message } => f.write_str(message),
        }
    }
}

/// Evaluation error carried by `Value::Error`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Rendered form of `kind`.
    pub message: String,
}

impl EvalError {
    /// Error with a free-form message.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        EvalError {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

// Arithmetic

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

// Lookup

#[cold]
pub fn unknown_symbol(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownSymbol {
        name: name.to_string(),
    })
}

// Application

#[cold]
pub fn not_callable(got: ValueKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { got })
}

/// A closure received more arguments than it had formals left.
#[cold]
pub fn too_many_arguments(given: usize, total: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TooManyArguments { given, total })
}

// Builtin argument checks

#[cold]
pub fn wrong_arg_count(func: &'static str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArgCount {
        func,
        expected,
        got,
    })
}

#[cold]
pub fn wrong_arg_type(
    func: &'static str,
    index: usize,
    expected: ValueKind,
    got: ValueKind,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArgType {
        func,
        index,
        expected,
        got,
    })
}

#[cold]
pub fn wrong_element_type(
    func: &'static str,
    index: usize,
    element: usize,
    expected: ValueKind,
    got: ValueKind,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ElementType {
        func,
        index,
        element,
        expected,
        got,
    })
}

#[cold]
pub fn empty_list(func: &'static str, index: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyList { func, index })
}

/// `def`/`=` got a symbol list and a value count that disagree.
#[cold]
pub fn binding_count_mismatch(func: &'static str, symbols: usize, values: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BindingCount {
        func,
        symbols,
        values,
    })
}

// Reader

#[cold]
pub fn invalid_number(literal: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidNumber {
        literal: literal.to_string(),
    })
}
