use std::collections::{HashMap, HashSet};

use crate::interpreter::value::RuntimeValue;

/// Variable bindings for an evaluation session.
///
/// Bindings live in a stack of scopes. The bottom scope is global and is
/// never popped; lookups search from the innermost scope outwards.
///
/// The language itself only ever declares into the global scope. Embedders
/// that want temporary bindings open one with [`push_scope`](Self::push_scope)
/// and discard it with [`pop_scope`](Self::pop_scope).
#[derive(Debug, Clone)]
pub struct Environment {
    scopes: Vec<HashMap<String, RuntimeValue>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding a single empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![HashMap::new()] }
    }

    /// Binds `name` in the innermost scope.
    ///
    /// Returns the value previously bound to `name` in that same scope, if
    /// any. Callers that forbid redeclaration check
    /// [`contains_local`](Self::contains_local) first.
    pub fn declare(&mut self, name: &str, value: RuntimeValue) -> Option<RuntimeValue> {
        self.scopes.last_mut()?.insert(name.to_string(), value)
    }

    /// Looks `name` up, innermost scope first.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<RuntimeValue> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name)).copied()
    }

    /// Whether `name` is bound in the innermost scope.
    #[must_use]
    pub fn contains_local(&self, name: &str) -> bool {
        self.scopes.last().is_some_and(|scope| scope.contains_key(name))
    }

    /// Opens a new innermost scope.
    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Closes the innermost scope and drops its bindings.
    ///
    /// Returns `false` without doing anything when only the global scope is
    /// left.
    pub fn pop_scope(&mut self) -> bool {
        if self.scopes.len() > 1 {
            self.scopes.pop();
            return true;
        }
        false
    }

    /// Number of scopes, including the global one.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Number of distinct names currently visible.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.iter().flat_map(HashMap::keys).collect::<HashSet<_>>().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.iter().all(HashMap::is_empty)
    }
}
