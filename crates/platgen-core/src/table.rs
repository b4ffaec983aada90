//! Sorted projection of a default mapping.
//!
//! Every rendered artifact walks a [`GeneratedTable`], never the mapping
//! itself: hash-map iteration order is unspecified, and the generated text
//! must be byte-identical across runs.

use crate::key::{PlatformKey, WILDCARD};
use crate::mapping::DefaultMapping;

/// Non-wildcard entries sorted ascending by key, plus the wildcard value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTable<V> {
    entries: Vec<(String, V)>,
    fallback: Option<V>,
}

impl<V: Clone> GeneratedTable<V> {
    /// Project a mapping into a sorted table.
    pub fn from_mapping(mapping: &DefaultMapping<V>) -> Self {
        let mut entries: Vec<(String, V)> = mapping
            .iter()
            .filter(|(k, _)| *k != WILDCARD)
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        // Keys are distinct, so this order is total.
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        Self {
            entries,
            fallback: mapping.wildcard().cloned(),
        }
    }
}

impl<V> GeneratedTable<V> {
    /// Sorted `(key, value)` pairs, wildcard excluded.
    pub fn entries(&self) -> &[(String, V)] {
        &self.entries
    }

    /// Keys in table order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// The wildcard value, if the mapping had one.
    pub fn fallback(&self) -> Option<&V> {
        self.fallback.as_ref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keep only entries matching `keep`, preserving order and fallback.
    pub fn retain(mut self, mut keep: impl FnMut(&str, &V) -> bool) -> Self {
        self.entries.retain(|(k, v)| keep(k.as_str(), v));
        self
    }

    /// Exact-match lookup on a composed key, ignoring the wildcard.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .binary_search_by(|(k, _)| k.as_str().cmp(key))
            .ok()
            .map(|i| &self.entries[i].1)
    }

    /// Exact-match lookup on a composed key, falling back to the wildcard.
    pub fn lookup(&self, key: &str) -> Option<&V> {
        self.get(key).or(self.fallback.as_ref())
    }

    /// Lookup by structured platform key.
    pub fn resolve(&self, key: &PlatformKey) -> Option<&V> {
        self.lookup(&key.compose())
    }
}
