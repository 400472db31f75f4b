use crate::builtin::Builtin;
use crate::procedure::Procedure;
use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A scope of bindings, optionally nested inside an outer scope.
///
/// Lookups fall back to the parent chain; `define` only ever touches the
/// local bindings so inner scopes shadow, never overwrite, outer ones.
pub struct Environment {
    syms: RefCell<HashMap<String, Value>>,
    outer: Option<Rc<Environment>>,
}

impl Environment {
    pub fn new(outer: Option<Rc<Environment>>) -> Environment {
        Environment{syms: RefCell::new(HashMap::new()), outer}
    }

    pub fn nested(outer: Rc<Environment>) -> Environment {
        Self::new(Some(outer))
    }

    /// A parentless scope holding the arithmetic builtins.
    pub fn root() -> Environment {
        let env = Self::new(None);
        for b in Builtin::ALL {
            env.define(b.symbol(), Value::Procedure(Procedure::Builtin(b)));
        }
        env
    }

    pub fn lookup(&self, name: &str) -> Option<Value> {
        let mut scope = Some(self);
        while let Some(env) = scope {
            if let Some(value) = env.syms.borrow().get(name) {
                return Some(value.clone());
            }
            scope = env.outer.as_deref();
        }
        None
    }

    pub fn define(&self, name: &str, value: Value) {
        tracing::trace!(symbol = name, %value, "define");
        self.syms.borrow_mut().insert(name.to_string(), value);
    }

    pub fn is_defined_locally(&self, name: &str) -> bool {
        self.syms.borrow().contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.syms.borrow().keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for Environment {
    fn default() -> Environment { Self::root() }
}

///////////////////////////////////////////////////////////////////////////////
