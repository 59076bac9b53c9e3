use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A lexical scope: a chain of name-to-value frames.
///
/// An `Environment` is a cheap handle over a shared frame. Frames form an
/// acyclic tree through parent references; lookup walks the chain from the
/// innermost frame outward, while binding always writes to the innermost
/// frame, so `let` shadows and there is no assignment-to-outer operation.
///
/// Closures hold a clone of the handle to the frame they were created in.
/// Because the frame is shared rather than copied, a binding issued after
/// the closure exists, including the `let` that binds the closure under
/// its own name, is visible to it.
#[derive(Debug, Clone)]
pub struct Environment {
    inner: Rc<RefCell<Frame>>,
}

#[derive(Debug)]
struct Frame {
    bindings: HashMap<String, Value>,
    parent:   Option<Environment>,
}

impl Environment {
    /// Creates an empty root environment.
    #[must_use]
    pub fn new() -> Self {
        Self { inner: Rc::new(RefCell::new(Frame { bindings: HashMap::new(),
                                                   parent:   None, })) }
    }

    /// Creates a fresh frame whose parent is this environment.
    ///
    /// Used for every function application: parameters are bound in the
    /// enclosed frame and the function body sees the captured chain behind
    /// it.
    #[must_use]
    pub fn enclose(&self) -> Self {
        Self { inner: Rc::new(RefCell::new(Frame { bindings: HashMap::new(),
                                                   parent:   Some(self.clone()), })) }
    }

    /// Looks up a name, innermost frame first.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let outer = Environment::new();
    /// outer.set("x".to_owned(), Value::from(1));
    ///
    /// let inner = outer.enclose();
    /// inner.set("x".to_owned(), Value::from(2));
    ///
    /// assert_eq!(inner.get("x"), Some(Value::from(2)));
    /// assert_eq!(outer.get("x"), Some(Value::from(1)));
    /// assert_eq!(inner.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        let parent = {
            let frame = self.inner.borrow();
            if let Some(value) = frame.bindings.get(name) {
                return Some(value.clone());
            }
            frame.parent.clone()
        };

        parent.and_then(|scope| scope.get(name))
    }

    /// Binds a name in the innermost frame, shadowing any ancestor
    /// binding of the same name.
    pub fn set(&self, name: String, value: Value) {
        self.inner.borrow_mut().bindings.insert(name, value);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
