use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::Value;

/// A single lexical scope: a mapping from name to value plus an optional
/// parent reference.
///
/// Blocks and calls create a child environment whose parent is the
/// surrounding one; the child is released when the block or call completes.
/// Function values keep a shared `Rc` to the environment active at their
/// declaration, which is what makes closures work. Only upward references
/// exist, so plain reference counting suffices.
#[derive(Debug, Default)]
pub struct Environment {
    values: HashMap<String, Value>,
    parent: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates a parentless environment. The interpreter creates exactly one
    /// of these: the global scope holding the built-in table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a child environment of `parent`.
    #[must_use]
    pub fn with_parent(parent: Rc<RefCell<Self>>) -> Self {
        Self { values: HashMap::new(),
               parent: Some(parent), }
    }

    /// Inserts `name` in this scope, overwriting any prior entry in the same
    /// scope. Redeclaration detection is the caller's job, via
    /// [`Environment::get_in_current`].
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Looks `name` up through this scope and its ancestors, returning the
    /// value from the nearest scope that defines it.
    ///
    /// # Example
    /// ```
    /// use borno::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// env.define("x", Value::Integer(10));
    ///
    /// assert_eq!(env.get("x"), Some(Value::Integer(10)));
    /// assert_eq!(env.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.values.get(name) {
            return Some(value.clone());
        }
        if let Some(ref parent) = self.parent {
            return parent.borrow().get(name);
        }
        None
    }

    /// Looks `name` up in this scope only, ignoring ancestors. Used by `ধরি`
    /// to detect same-scope redeclaration while still allowing shadowing of
    /// outer scopes.
    #[must_use]
    pub fn get_in_current(&self, name: &str) -> Option<Value> {
        self.values.get(name).cloned()
    }

    /// Writes `value` into the nearest enclosing scope that defines `name`.
    ///
    /// # Returns
    /// `true` when a defining scope was found, `false` when the name is
    /// undefined everywhere (the caller reports that as a runtime error).
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        if let std::collections::hash_map::Entry::Occupied(mut entry) =
            self.values.entry(name.to_string())
        {
            entry.insert(value);
            return true;
        }
        if let Some(ref parent) = self.parent {
            return parent.borrow_mut().assign(name, value);
        }
        false
    }
}
