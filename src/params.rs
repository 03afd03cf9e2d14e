//! Parameter tables and the set of parameters a document actually referenced.
//!
//! A [`Params`] table maps a symbolic name to the literal string it stands
//! for. While a document is rendered, every string scalar equal to one of
//! those literals is replaced by the name, and the pair lands in a
//! [`Matched`] set so the notation adapter can declare it ahead of the body.
//!
//! ## Examples
//!
//! ```rust
//! use paramdoc::Params;
//!
//! let params: Params = [("color", "teal"), ("size", "xl")].into_iter().collect();
//! assert_eq!(params.len(), 2);
//! assert_eq!(params.get("color"), Some("teal"));
//! ```

use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};

/// Caller-supplied mapping from parameter name to literal value.
///
/// Iteration is in name order, which makes the reverse index deterministic
/// when two parameters share a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Params(BTreeMap::new())
    }

    /// Inserts a parameter, returning the previous literal for `name` if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Builds the literal-to-name index used for substitution.
    ///
    /// When several parameters share one literal, the name that sorts first wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use paramdoc::Params;
    ///
    /// let params: Params = [("b", "same"), ("a", "same")].into_iter().collect();
    /// let index = params.reverse_index();
    /// assert_eq!(index.get("same").map(String::as_str), Some("a"));
    /// ```
    #[must_use]
    pub fn reverse_index(&self) -> HashMap<String, String> {
        let mut index = HashMap::with_capacity(self.0.len());
        for (name, value) in &self.0 {
            index.entry(value.clone()).or_insert_with(|| name.clone());
        }
        index
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Params(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<HashMap<String, String>> for Params {
    fn from(map: HashMap<String, String>) -> Self {
        Params(map.into_iter().collect())
    }
}

/// Parameters referenced by a rendered document, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matched(IndexMap<String, String>);

impl Matched {
    #[must_use]
    pub fn new() -> Self {
        Matched(IndexMap::new())
    }

    /// Records a hit. A name already present keeps its original position.
    pub fn record(&mut self, name: &str, value: &str) {
        if !self.0.contains_key(name) {
            self.0.insert(name.to_string(), value.to_string());
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `(name, value)` pairs in the order they were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
