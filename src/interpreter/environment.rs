use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A shared handle to an [`Environment`].
///
/// Environments are shared: every closure holds the environment it was
/// created in, and several closures may hold the same one. The handles form
/// a tree rooted at the outermost environment, and a frame lives for as long
/// as any holder of it does.
pub type Env = Rc<RefCell<Environment>>;

/// A lexical scope frame: name-to-value bindings plus an optional link to
/// the enclosing frame.
///
/// Lookups walk the chain of enclosing frames; writes always go to the
/// innermost frame, so an inner binding shadows an outer one without
/// touching it.
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates a new, empty outermost environment.
    #[must_use]
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: None, }))
    }

    /// Creates an empty environment enclosed by `outer`.
    ///
    /// Used when a function is applied: the call's frame is chained to the
    /// environment the function literal was evaluated in, which is what makes
    /// closures work.
    #[must_use]
    pub fn new_enclosed(outer: Env) -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(outer), }))
    }

    /// Looks up a name, walking outwards through enclosing frames.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let outer = Environment::new();
    /// outer.borrow_mut().set("x", Value::Integer(1));
    ///
    /// let inner = Environment::new_enclosed(outer);
    /// assert_eq!(inner.borrow().get("x"), Some(Value::Integer(1)));
    /// assert_eq!(inner.borrow().get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds a name in this frame, shadowing any enclosing binding.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}
