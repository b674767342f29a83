use crate::object::{EvalError, Result, RuntimeVal};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

// Children hold a strong reference to their parent.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Environment {
    store: HashMap<String, RuntimeVal>,
    constants: HashSet<String>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn new_enclosed(outer: Rc<RefCell<Environment>>) -> Self {
        Self {
            outer: Some(outer),
            ..Default::default()
        }
    }

    pub fn outer(&self) -> Option<&Rc<RefCell<Environment>>> {
        self.outer.as_ref()
    }

    pub fn declare(&mut self, name: &str, value: RuntimeVal, constant: bool) -> Result<RuntimeVal> {
        if self.store.contains_key(name) {
            return Err(EvalError::AlreadyDeclared {
                name: name.to_owned(),
            });
        }

        self.store.insert(name.to_owned(), value.clone());
        if constant {
            self.constants.insert(name.to_owned());
        }
        Ok(value)
    }

    pub fn assign(&mut self, name: &str, value: RuntimeVal) -> Result<RuntimeVal> {
        self.resolve(name, |owner| {
            if owner.constants.contains(name) {
                return Err(EvalError::ConstantReassignment {
                    name: name.to_owned(),
                });
            }

            owner.store.insert(name.to_owned(), value.clone());
            Ok(value)
        })
    }

    pub fn lookup(&self, name: &str) -> Result<RuntimeVal> {
        match self.store.get(name) {
            Some(value) => Ok(value.clone()),
            None => match &self.outer {
                Some(outer) => outer.borrow().lookup(name),
                None => Err(EvalError::IdentifierNotFound {
                    name: name.to_owned(),
                }),
            },
        }
    }

    // `f` runs against the nearest scope that binds `name`.
    pub fn resolve<T, F>(&mut self, name: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut Environment) -> Result<T>,
    {
        if self.store.contains_key(name) {
            return f(self);
        }

        match &self.outer {
            Some(outer) => outer.borrow_mut().resolve(name, f),
            None => Err(EvalError::IdentifierNotFound {
                name: name.to_owned(),
            }),
        }
    }

    pub fn is_constant(&self, name: &str) -> bool {
        self.constants.contains(name)
    }

    pub fn depth(&self) -> usize {
        match &self.outer {
            Some(outer) => 1 + outer.borrow().depth(),
            None => 1,
        }
    }
}
