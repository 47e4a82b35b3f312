//! Variable bindings.
//!
//! A bare tag such as `<warn>` names a variable. The caller supplies the
//! table mapping each name to a ready-made escape string; the compiler only
//! reads it.
//!
//! ```
//! use ziyy_core::{Bindings, rgb_fg};
//!
//! let bindings = Bindings::new().with("warn", rgb_fg(255, 165, 0));
//! assert_eq!(bindings.resolve("warn"), Some("\x1b[38;2;255;165;0m"));
//! assert_eq!(bindings.resolve("nope"), None);
//! ```

use std::collections::HashMap;

/// Name → escape string table consulted for variable tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    variables: HashMap<String, String>,
}

impl Bindings {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines (or redefines) a variable.
    pub fn define(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Builder form of [`define`](Self::define).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.define(name, value);
        self
    }

    /// Resolves a variable name to its escape string, if defined.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Bindings {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.define(name, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Bindings {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut bindings = Bindings::new();
        bindings.extend(iter);
        bindings
    }
}
