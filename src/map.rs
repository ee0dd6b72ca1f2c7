//! Key-ordered map type for object nodes.
//!
//! This module provides [`NodeMap`], a wrapper around [`IndexMap`] that keeps its
//! entries sorted by key. Object nodes iterate in ascending key order, and a sorted
//! `IndexMap` gives both ordered iteration and positional access, which is what
//! [`Cursor`](crate::Cursor) needs to step through an object in either direction.
//!
//! ## Examples
//!
//! ```rust
//! use conftree::{Node, NodeMap};
//!
//! let mut map = NodeMap::new();
//! map.insert("port".to_string(), Node::from(8080));
//! map.insert("host".to_string(), Node::from("localhost"));
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["host", "port"]);
//! ```

use crate::Node;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::mem;

/// A map of string keys to nodes, iterated in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeMap(IndexMap<String, Node>);

impl NodeMap {
    /// Creates an empty `NodeMap`.
    #[must_use]
    pub fn new() -> Self {
        NodeMap(IndexMap::new())
    }

    /// Creates an empty `NodeMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        NodeMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, keeping the keys sorted.
    ///
    /// An existing key keeps its position and has its value replaced; the old value
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conftree::{Node, NodeMap};
    ///
    /// let mut map = NodeMap::new();
    /// assert!(map.insert("key".to_string(), Node::from(1)).is_none());
    /// assert_eq!(map.insert("key".to_string(), Node::from(2)), Some(Node::from(1)));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: String, value: Node) -> Option<Node> {
        match self.0.binary_search_keys(&key) {
            Ok(index) => Some(mem::replace(&mut self.0[index], value)),
            Err(index) => {
                self.0.shift_insert(index, key, value);
                None
            }
        }
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.0.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.0.get_mut(key)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes `key`, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Node> {
        self.0.shift_remove(key)
    }

    /// Returns the entry at `index` in key order.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<(&String, &Node)> {
        self.0.get_index(index)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns an iterator over the keys, in ascending order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Node> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in key order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Node> {
        self.0.values()
    }

    pub(crate) fn values_mut(&mut self) -> indexmap::map::ValuesMut<'_, String, Node> {
        self.0.values_mut()
    }

    /// Returns an iterator over the key-value pairs, in key order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Node> {
        self.0.iter()
    }
}

impl From<BTreeMap<String, Node>> for NodeMap {
    fn from(map: BTreeMap<String, Node>) -> Self {
        // Already sorted.
        NodeMap(map.into_iter().collect())
    }
}

impl From<HashMap<String, Node>> for NodeMap {
    fn from(map: HashMap<String, Node>) -> Self {
        map.into_iter().collect()
    }
}

impl IntoIterator for NodeMap {
    type Item = (String, Node);
    type IntoIter = indexmap::map::IntoIter<String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a NodeMap {
    type Item = (&'a String, &'a Node);
    type IntoIter = indexmap::map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Node)> for NodeMap {
    fn from_iter<T: IntoIterator<Item = (String, Node)>>(iter: T) -> Self {
        let mut map = IndexMap::from_iter(iter);
        map.sort_keys();
        NodeMap(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_keys_sorted() {
        let mut map = NodeMap::new();
        for key in ["delta", "alpha", "charlie", "bravo"] {
            map.insert(key.to_string(), Node::from(key));
        }
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["alpha", "bravo", "charlie", "delta"]);
        assert_eq!(map.get_index(0).map(|(k, _)| k.as_str()), Some("alpha"));
    }

    #[test]
    fn test_reverse_order_inserts_land_in_place() {
        let mut map = NodeMap::new();
        for i in (0..500).rev() {
            map.insert(format!("key{:04}", i), Node::from(i));
        }
        assert_eq!(map.len(), 500);
        for i in [0usize, 1, 250, 499] {
            let (key, value) = map.get_index(i).unwrap();
            assert_eq!(key, &format!("key{:04}", i));
            assert_eq!(value.value_as::<usize>().unwrap(), i);
        }
        let keys: Vec<_> = map.keys().cloned().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_insert_between_existing_keys() {
        let mut map = NodeMap::new();
        map.insert("c".to_string(), Node::from(3));
        map.insert("a".to_string(), Node::from(1));
        map.insert("b".to_string(), Node::from(2));
        assert_eq!(map.get_index(1).map(|(k, _)| k.as_str()), Some("b"));
        assert_eq!(map.insert("b".to_string(), Node::from(20)), Some(Node::from(2)));
        assert_eq!(map.get_index(1).map(|(_, v)| v.clone()), Some(Node::from(20)));
    }

    #[test]
    fn test_replace_does_not_duplicate() {
        let mut map = NodeMap::new();
        map.insert("b".to_string(), Node::from(1));
        map.insert("a".to_string(), Node::from(2));
        let old = map.insert("b".to_string(), Node::from(3));
        assert_eq!(old, Some(Node::from(1)));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("b"), Some(&Node::from(3)));
    }

    #[test]
    fn test_remove_preserves_order() {
        let map: NodeMap = ["c", "a", "b"]
            .into_iter()
            .map(|k| (k.to_string(), Node::new()))
            .collect();
        let mut map = map;
        assert!(map.remove("b").is_some());
        assert!(map.remove("missing").is_none());
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_equality_ignores_insertion_history() {
        let mut left = NodeMap::new();
        left.insert("x".to_string(), Node::from(1));
        left.insert("y".to_string(), Node::from(2));

        let mut right = NodeMap::new();
        right.insert("y".to_string(), Node::from(2));
        right.insert("x".to_string(), Node::from(1));

        assert_eq!(left, right);
    }
}
