//! Per-scope generation context.

use indexmap::IndexMap;

use crate::generate::value::Value;

/// Already-generated sibling values for one in-progress object.
///
/// Built incrementally in declaration order; a `basedOn` reference can see
/// every field generated before it in its own scope plus everything its
/// ancestor scopes had generated when the nested object began. Child scopes
/// never write back up, and later ancestor fields are invisible: [`child`]
/// snapshots the parent at the moment of descent.
///
/// [`child`]: GenerationContext::child
#[derive(Debug, Clone, Default)]
pub struct GenerationContext {
    values: IndexMap<String, Value>,
}

impl GenerationContext {
    /// Empty root context for a new record.
    pub fn root() -> Self {
        Self::default()
    }

    /// Snapshot of this scope, used as the starting context of a nested
    /// object.
    pub fn child(&self) -> Self {
        self.clone()
    }

    pub fn insert(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// The referenced value, if it exists and is a non-empty string. This is
    /// the lookup `basedOn` consumers use: anything else falls back to
    /// independent generation.
    pub fn seed_str(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}
