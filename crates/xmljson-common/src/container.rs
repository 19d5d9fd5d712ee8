//! Output container with repeated-key coalescing.

use std::collections::HashSet;

use serde_json::{Map, Value};

/// A JSON object under construction.
///
/// Keys keep first-seen order. Storing a key a second time converts its slot
/// into an array of both values instead of overwriting, and later
/// occurrences are pushed onto that array. A value that was already an array
/// when first stored is kept as one item of the coalesced array, so
/// `[x, y]` followed by `z` gives `[[x, y], z]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    entries: Map<String, Value>,
    /// Keys whose slot is an array built by coalescing.
    coalesced: HashSet<String>,
}

impl Container {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, coalescing repeated keys into an array.
    pub fn append(&mut self, key: &str, value: Value) {
        match self.entries.get_mut(key) {
            None => {
                let _ = self.entries.insert(key.to_owned(), value);
            }
            Some(Value::Array(items)) if self.coalesced.contains(key) => items.push(value),
            Some(slot) => {
                let first = slot.take();
                *slot = Value::Array(vec![first, value]);
                let _ = self.coalesced.insert(key.to_owned());
            }
        }
    }

    /// Value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Finish building and return the underlying map.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.entries
    }
}

impl From<Container> for Value {
    fn from(container: Container) -> Self {
        Self::Object(container.into_map())
    }
}
