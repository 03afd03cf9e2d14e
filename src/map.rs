//! Ordered map type for document objects.
//!
//! [`Map`] wraps an [`IndexMap`] so objects remember insertion order for
//! inspection, while [`Map::sorted_iter`] gives the key order documents are
//! rendered in. Rendering never relies on insertion order: two maps with the
//! same entries produce the same bytes.
//!
//! ## Examples
//!
//! ```rust
//! use paramdoc::{Map, Value};
//!
//! let mut map = Map::new();
//! map.insert("name".to_string(), Value::from("api"));
//! map.insert("color".to_string(), Value::from("teal"));
//!
//! let keys: Vec<_> = map.sorted_iter().map(|(k, _)| k.as_str()).collect();
//! assert_eq!(keys, vec!["color", "name"]);
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to document values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map(IndexMap<String, crate::Value>);

impl Map {
    #[must_use]
    pub fn new() -> Self {
        Map(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Map(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned.
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }

    /// Returns the key-value pairs sorted by key.
    pub fn sorted_iter(&self) -> impl Iterator<Item = (&String, &crate::Value)> {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));
        entries.into_iter()
    }
}

impl From<HashMap<String, crate::Value>> for Map {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        Map(map.into_iter().collect())
    }
}

impl IntoIterator for Map {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, crate::Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        Map(IndexMap::from_iter(iter))
    }
}
