//! Program state: a persistent mapping from variables to values.
//!
//! States are immutable values. Every update hands back a new state and
//! leaves the one it was derived from untouched, so earlier handles stay
//! valid for as long as anyone holds them.

use super::value::{Ident, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Lookup of a variable that has no binding in the state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Unbound variable '{name}'")]
pub struct UnboundVariable {
    pub name: Ident,
}

/// Mapping from variable names to their current values.
///
/// The bindings live behind a shared pointer and are copied on write:
/// cloning a state is O(1), and deriving a new state never mutates a map
/// another handle can observe.
///
/// # Example
///
/// ```rust
/// use whilesem::core::{State, Value};
///
/// let before = State::new().update("x", Value::Int(5));
/// let after = before.update("x", Value::Int(6));
///
/// assert_eq!(before.lookup("x").unwrap(), &Value::Int(5)); // unchanged
/// assert_eq!(after.lookup("x").unwrap(), &Value::Int(6));
/// assert!(after.lookup("y").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State {
    bindings: Arc<BTreeMap<Ident, Value>>,
}

impl State {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the value bound to `name`.
    ///
    /// Looking up an unbound name is an error, not a default value.
    pub fn lookup(&self, name: &str) -> Result<&Value, UnboundVariable> {
        self.bindings.get(name).ok_or_else(|| UnboundVariable {
            name: name.to_string(),
        })
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Bind `name` to `value`, returning a new state.
    ///
    /// This is a pure function: `self` is left exactly as it was.
    pub fn update(&self, name: impl Into<Ident>, value: Value) -> Self {
        self.clone().with(name, value)
    }

    /// Bind `name` to `value`, consuming this handle.
    ///
    /// Equivalent to [`State::update`], but when this is the only handle to
    /// the bindings they are reused instead of copied.
    pub fn with(mut self, name: impl Into<Ident>, value: Value) -> Self {
        Arc::make_mut(&mut self.bindings).insert(name.into(), value);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }
}

impl FromIterator<(Ident, Value)> for State {
    fn from_iter<I: IntoIterator<Item = (Ident, Value)>>(iter: I) -> Self {
        Self {
            bindings: Arc::new(iter.into_iter().collect()),
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
