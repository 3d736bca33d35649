#![deny(clippy::arithmetic_side_effects)]
//! Lispy Eval - the value model and evaluator.
//!
//! # Architecture
//!
//! - [`Value`]: closed sum type over errors, numbers, symbols, functions,
//!   evaluated groups `( ... )` and quoted lists `{ ... }`. Every value owns
//!   its children; `Clone` is the deep copy.
//! - [`Environment`]: chain of frames from the innermost call out to the
//!   parentless global frame, threaded explicitly through evaluation.
//! - [`Builtin`]: fixed enumeration of primitives, registered into the
//!   global frame once by [`register_builtins`].
//! - [`eval()`]/[`apply`]: recursive reduction and the call protocol,
//!   including partial application of closures.
//! - [`read`]: syntax tree to value tree.
//!
//! Failures never escape as Rust errors. They are ordinary
//! [`Value::Error`] values that propagate through enclosing groups.

mod builtins;
mod environment;
pub mod errors;
mod eval;
mod interpreter;
mod reader;
mod value;

pub use builtins::{register_builtins, Builtin};
pub use environment::{Environment, LocalScope, Scope};
pub use errors::{EvalError, EvalErrorKind};
pub use eval::{apply, eval, eval_group};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use reader::read;
pub use value::{Function, Lambda, Seq, Value, ValueKind};

#[cfg(test)]
mod tests;
