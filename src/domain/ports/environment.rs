//! Environment port - named variable lookups
//!
//! Resolution never reads process state directly; the caller injects an
//! `Environment` so lookups are explicit and testable.

use std::collections::HashMap;

/// Source of environment variables
pub trait Environment {
    /// Raw value of `name`, if set
    fn var(&self, name: &str) -> Option<String>;

    /// Value of `name` if set and non-empty
    fn non_empty_var(&self, name: &str) -> Option<String> {
        self.var(name).filter(|value| !value.is_empty())
    }
}

/// Fixed set of variables (tests, embedding hosts)
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl Environment for MapEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}
