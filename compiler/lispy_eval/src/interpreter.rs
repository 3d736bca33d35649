//! Interpreter facade: a global environment plus read-and-evaluate helpers.

use lispy_ir::{SyntaxKind, SyntaxNode};

use crate::builtins::register_builtins;
use crate::environment::Environment;
use crate::eval::eval;
use crate::reader::read;
use crate::value::Value;

/// Builder for [`Interpreter`].
pub struct InterpreterBuilder {
    env: Option<Environment>,
    builtins: bool,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            env: None,
            builtins: true,
        }
    }

    /// Evaluate in an existing environment instead of a fresh global one.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Whether to bind the builtin functions (default: yes).
    #[must_use]
    pub fn builtins(mut self, enabled: bool) -> Self {
        self.builtins = enabled;
        self
    }

    pub fn build(self) -> Interpreter {
        let env = self.env.unwrap_or_default();
        if self.builtins {
            register_builtins(&env);
        }
        Interpreter { env }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the global environment that successive evaluations share.
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    /// Interpreter with a fresh global environment and every builtin bound.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Evaluate a value in the global environment.
    pub fn eval(&self, value: Value) -> Value {
        eval(&self.env, value)
    }

    /// Read and evaluate a node. A root node is evaluated as one group, the
    /// way a REPL line `+ 1 2` means `(+ 1 2)`.
    #[tracing::instrument(level = "debug", skip_all, fields(kind = ?node.kind()))]
    pub fn eval_node(&self, node: &SyntaxNode) -> Value {
        self.eval(read(node))
    }

    /// Evaluate each top-level expression of a root node separately, in
    /// order, as a source file is run. Other nodes yield one result.
    pub fn eval_each(&self, node: &SyntaxNode) -> Vec<Value> {
        if node.kind() == SyntaxKind::Root {
            node.children()
                .iter()
                .map(|child| self.eval_node(child))
                .collect()
        } else {
            vec![self.eval_node(node)]
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
