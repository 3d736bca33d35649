//! Chained environments.
//!
//! An [`Environment`] is a handle to one frame ([`Scope`]) whose parent link
//! leads outward to the global frame, the only frame without a parent.
//! Handles are cheap to clone and share the frame they point at; values
//! stored in a frame are never shared, and every lookup returns a deep copy.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::errors::unknown_symbol;
use crate::value::Value;

/// Single-threaded shared cell for frames.
///
/// Frames are reachable from several places at once: the global frame from
/// every active call frame, a call frame from nested calls made inside it.
/// All of that sharing happens on one thread, so `Rc` rather than `Arc`.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles point at the same cell.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

/// One frame of bindings plus an optional parent.
///
/// Names are unique within a frame: defining an existing name overwrites it.
/// `Clone` deep-copies the bindings and keeps the same parent reference.
#[derive(Clone, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    /// Empty frame with no parent.
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind or overwrite `name` in this frame.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Value bound in this frame only, ignoring parents.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn set_parent(&mut self, parent: Option<LocalScope<Scope>>) {
        self.parent = parent;
    }

    pub fn parent(&self) -> Option<&LocalScope<Scope>> {
        self.parent.as_ref()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Remove every binding, yielding the values.
    pub(crate) fn drain_values(&mut self) -> impl Iterator<Item = Value> + '_ {
        self.bindings.drain().map(|(_, value)| value)
    }
}

/// Frames compare by their own bindings; parents are not followed.
impl PartialEq for Scope {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("bindings", &self.bindings)
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

/// Handle to the innermost frame of an evaluation context.
#[derive(Clone, Debug)]
pub struct Environment {
    frame: LocalScope<Scope>,
}

impl Environment {
    /// Fresh global environment: one empty frame, no parent.
    pub fn new() -> Self {
        Environment {
            frame: LocalScope::new(Scope::new()),
        }
    }

    /// Wrap an existing frame (with whatever parent it already has).
    pub fn from_scope(scope: Scope) -> Self {
        Environment {
            frame: LocalScope::new(scope),
        }
    }

    /// New empty frame whose parent is this environment.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment::from_scope(Scope::with_parent(self.frame.clone()))
    }

    /// Handle to the enclosing frame, if any.
    pub fn parent(&self) -> Option<Environment> {
        self.frame
            .borrow()
            .parent()
            .map(|frame| Environment {
                frame: frame.clone(),
            })
    }

    /// Whether this is the outermost frame.
    pub fn is_global(&self) -> bool {
        self.frame.borrow().parent().is_none()
    }

    /// Whether both handles point at the same frame.
    pub fn same_frame(&self, other: &Environment) -> bool {
        self.frame.ptr_eq(&other.frame)
    }

    /// Frame handle, for attaching as another frame's parent.
    pub fn frame(&self) -> &LocalScope<Scope> {
        &self.frame
    }

    /// Outermost frame reachable from this one.
    fn global_frame(&self) -> LocalScope<Scope> {
        let mut frame = self.frame.clone();
        loop {
            let parent = frame.borrow().parent().cloned();
            match parent {
                Some(parent) => frame = parent,
                None => return frame,
            }
        }
    }

    /// Bind or overwrite `name` in this frame.
    pub fn define_local(&self, name: impl Into<String>, value: Value) {
        self.frame.borrow_mut().define(name, value);
    }

    /// Bind or overwrite `name` in the outermost frame.
    pub fn define_global(&self, name: impl Into<String>, value: Value) {
        let name = name.into();
        tracing::debug!(%name, "define global");
        self.global_frame().borrow_mut().define(name, value);
    }

    /// Copy of the value bound to `name` in the nearest frame that has it,
    /// or an unbound-symbol error value.
    pub fn lookup(&self, name: &str) -> Value {
        let mut frame = self.frame.clone();
        loop {
            let parent = {
                let scope = frame.borrow();
                if let Some(value) = scope.get(name) {
                    return value.clone();
                }
                scope.parent().cloned()
            };
            match parent {
                Some(parent) => frame = parent,
                None => return Value::error(unknown_symbol(name)),
            }
        }
    }

    /// Independent environment: same parent, deep copy of every binding.
    #[must_use]
    pub fn copy(&self) -> Self {
        Environment::from_scope(self.frame.borrow().clone())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
