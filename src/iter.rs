//! Iteration over a node's children.
//!
//! Every node can be iterated the same way whatever its shape:
//!
//! - **array**: the elements, in order
//! - **object**: the values, in ascending key order
//! - **value**: the node itself, once
//! - **null**: nothing
//!
//! [`Cursor`] is the bidirectional position type behind this. It can be compared,
//! moved in both directions and measured, and it reports out-of-range moves as
//! errors. [`Iter`] and [`IterMut`] are the standard iterator adapters.
//!
//! ## Examples
//!
//! ```rust
//! use conftree::node;
//!
//! let config = node!({ "b": "2", "a": "1" });
//! let values: Vec<String> = config.iter().map(|n| n.to_string()).collect();
//! assert_eq!(values, vec!["1", "2"]);
//!
//! let mut cursor = config.begin();
//! assert_eq!(cursor.key(), Some("a"));
//! cursor.move_next()?;
//! cursor.move_next()?;
//! assert_eq!(cursor, config.end());
//! assert!(cursor.get().is_err());
//! # Ok::<(), conftree::Error>(())
//! ```

use crate::node::{Kind, NodeMut};
use crate::{Error, Node, Result};
use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::ptr;

/// Cursor state, one variant per payload layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Position {
    /// Null and value nodes: 0 is the node itself, 1 is past the end.
    Scalar(usize),
    Array(usize),
    /// Rank in key order.
    Object(usize),
}

impl Position {
    const fn offset(self) -> usize {
        match self {
            Position::Scalar(n) | Position::Array(n) | Position::Object(n) => n,
        }
    }

    const fn with_offset(self, offset: usize) -> Self {
        match self {
            Position::Scalar(_) => Position::Scalar(offset),
            Position::Array(_) => Position::Array(offset),
            Position::Object(_) => Position::Object(offset),
        }
    }
}

/// A bidirectional position over the children of a node.
///
/// Obtained from [`Node::begin`] and [`Node::end`]. Two cursors are equal when they
/// point into the same node at the same position; cursors over different nodes are
/// never equal and have no ordering.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    node: &'a Node,
    position: Position,
}

impl<'a> Cursor<'a> {
    fn begin(node: &'a Node) -> Self {
        let position = match &node.kind {
            Kind::Null => Position::Scalar(1),
            Kind::Value(_) => Position::Scalar(0),
            Kind::Array(_) => Position::Array(0),
            Kind::Object(_) => Position::Object(0),
        };
        Cursor { node, position }
    }

    fn end(node: &'a Node) -> Self {
        let position = match &node.kind {
            Kind::Null | Kind::Value(_) => Position::Scalar(1),
            Kind::Array(items) => Position::Array(items.len()),
            Kind::Object(map) => Position::Object(map.len()),
        };
        Cursor { node, position }
    }

    fn first(&self) -> usize {
        Cursor::begin(self.node).position.offset()
    }

    fn last(&self) -> usize {
        Cursor::end(self.node).position.offset()
    }

    /// The node being iterated.
    #[must_use]
    pub fn node(&self) -> &'a Node {
        self.node
    }

    /// Returns `true` when the cursor is one past the last child.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position.offset() >= self.last()
    }

    /// Returns the child under the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when the cursor is at the end.
    pub fn get(&self) -> Result<&'a Node> {
        let offset = self.position.offset();
        let child = match (&self.node.kind, self.position) {
            (Kind::Value(_), Position::Scalar(0)) => Some(self.node),
            (Kind::Array(items), Position::Array(i)) => items.get(i),
            (Kind::Object(map), Position::Object(i)) => map.get_index(i).map(|(_, value)| value),
            _ => None,
        };
        child.ok_or_else(|| Error::out_of_range(offset, self.node.len()))
    }

    /// Returns the key under the cursor when iterating an object.
    #[must_use]
    pub fn key(&self) -> Option<&'a str> {
        match (&self.node.kind, self.position) {
            (Kind::Object(map), Position::Object(i)) => {
                map.get_index(i).map(|(key, _)| key.as_str())
            }
            _ => None,
        }
    }

    /// Advances to the next child.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when already at the end; the cursor is unchanged.
    pub fn move_next(&mut self) -> Result<()> {
        let offset = self.position.offset();
        if offset >= self.last() {
            return Err(Error::out_of_range(offset, self.node.len()));
        }
        self.position = self.position.with_offset(offset + 1);
        Ok(())
    }

    /// Steps back to the previous child.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when already at the beginning; the cursor is
    /// unchanged.
    pub fn move_prev(&mut self) -> Result<()> {
        let offset = self.position.offset();
        if offset <= self.first() {
            return Err(Error::out_of_range(offset, self.node.len()));
        }
        self.position = self.position.with_offset(offset - 1);
        Ok(())
    }

    /// Signed distance from `origin` to `self`, in children.
    ///
    /// Returns `None` when the cursors belong to different nodes.
    #[must_use]
    pub fn offset_from(&self, origin: &Cursor<'_>) -> Option<isize> {
        if !self.same_range(origin) {
            return None;
        }
        let to = isize::try_from(self.position.offset()).ok()?;
        let from = isize::try_from(origin.position.offset()).ok()?;
        Some(to - from)
    }

    fn same_range(&self, other: &Cursor<'_>) -> bool {
        ptr::eq(self.node, other.node)
            && std::mem::discriminant(&self.position) == std::mem::discriminant(&other.position)
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.node, other.node) && self.position == other.position
    }
}

impl Eq for Cursor<'_> {}

impl PartialOrd for Cursor<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.same_range(other) {
            return None;
        }
        Some(self.position.offset().cmp(&other.position.offset()))
    }
}

/// Iterator over a node's children, yielding `&Node`.
///
/// Created by [`Node::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    front: Cursor<'a>,
    back: Cursor<'a>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.get().ok()?;
        self.front.move_next().ok()?;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.position.offset() - self.front.position.offset();
        (remaining, Some(remaining))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<&'a Node> {
        if self.front == self.back {
            return None;
        }
        self.back.move_prev().ok()?;
        self.back.get().ok()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

enum IterMutInner<'a> {
    Scalar(Option<&'a mut Node>),
    Array(std::slice::IterMut<'a, Node>),
    Object(indexmap::map::ValuesMut<'a, String, Node>),
}

/// Iterator over a node's children, yielding [`NodeMut`] handles.
///
/// Created by [`Node::iter_mut`].
pub struct IterMut<'a> {
    inner: IterMutInner<'a>,
}

impl<'a> Iterator for IterMut<'a> {
    type Item = NodeMut<'a>;

    fn next(&mut self) -> Option<NodeMut<'a>> {
        let node = match &mut self.inner {
            IterMutInner::Scalar(node) => node.take(),
            IterMutInner::Array(items) => items.next(),
            IterMutInner::Object(values) => values.next(),
        };
        node.map(NodeMut::new)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match &self.inner {
            IterMutInner::Scalar(node) => usize::from(node.is_some()),
            IterMutInner::Array(items) => items.len(),
            IterMutInner::Object(values) => values.len(),
        };
        (remaining, Some(remaining))
    }
}

impl<'a> DoubleEndedIterator for IterMut<'a> {
    fn next_back(&mut self) -> Option<NodeMut<'a>> {
        let node = match &mut self.inner {
            IterMutInner::Scalar(node) => node.take(),
            IterMutInner::Array(items) => items.next_back(),
            IterMutInner::Object(values) => values.next_back(),
        };
        node.map(NodeMut::new)
    }
}

impl ExactSizeIterator for IterMut<'_> {}

impl FusedIterator for IterMut<'_> {}

/// Iterator over an object's `(key, value)` pairs in key order.
///
/// Empty for every other shape. Created by [`Node::entries`].
#[derive(Clone, Debug)]
pub struct Entries<'a> {
    inner: Option<indexmap::map::Iter<'a, String, Node>>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a str, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .as_mut()?
            .next()
            .map(|(key, value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.inner.as_ref().map_or(0, ExactSizeIterator::len);
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .as_mut()?
            .next_back()
            .map(|(key, value)| (key.as_str(), value))
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl Node {
    /// Cursor at the first child (the node itself for a scalar).
    ///
    /// For a null node `begin() == end()`.
    #[must_use]
    pub fn begin(&self) -> Cursor<'_> {
        Cursor::begin(self)
    }

    /// Cursor one past the last child.
    #[must_use]
    pub fn end(&self) -> Cursor<'_> {
        Cursor::end(self)
    }

    /// Iterates over the children. See the [module documentation](crate::iter).
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            front: self.begin(),
            back: self.end(),
        }
    }

    /// Iterates mutably over the children.
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        if self.is_value() {
            return IterMut {
                inner: IterMutInner::Scalar(Some(self)),
            };
        }
        let inner = match &mut self.kind {
            Kind::Array(items) => IterMutInner::Array(items.iter_mut()),
            Kind::Object(map) => IterMutInner::Object(map.values_mut()),
            Kind::Null | Kind::Value(_) => IterMutInner::Scalar(None),
        };
        IterMut { inner }
    }

    /// Iterates over an object's entries in key order.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inner: self.as_object().map(|map| map.iter()),
        }
    }

    /// Iterates over an object's keys in ascending order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.entries().map(|(key, _)| key)
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = &'a Node;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Node {
    type Item = NodeMut<'a>;
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> IterMut<'a> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_range_is_empty() {
        let node = Node::new();
        assert_eq!(node.begin(), node.end());
        assert_eq!(node.iter().count(), 0);
        let mut cursor = node.begin();
        assert!(cursor.move_next().is_err());
        assert!(cursor.move_prev().is_err());
    }

    #[test]
    fn test_value_yields_itself_once() {
        let node = Node::from("x");
        let items: Vec<_> = node.iter().collect();
        assert_eq!(items.len(), 1);
        assert!(ptr::eq(items[0], &node));
        assert_eq!(node.end().offset_from(&node.begin()), Some(1));
    }

    #[test]
    fn test_cursors_over_distinct_nodes_never_compare() {
        let a = Node::from(vec![Node::from(1)]);
        let b = a.clone();
        assert_ne!(a.begin(), b.begin());
        assert_eq!(a.begin().partial_cmp(&b.begin()), None);
        assert_eq!(a.begin().offset_from(&b.begin()), None);
    }

    #[test]
    fn test_double_ended() {
        let node = Node::from_iter((1..=4).map(Node::from));
        let reversed: Vec<String> = node.iter().rev().map(ToString::to_string).collect();
        assert_eq!(reversed, vec!["4", "3", "2", "1"]);

        let mut iter = node.iter();
        assert_eq!(iter.next().map(ToString::to_string).as_deref(), Some("1"));
        assert_eq!(iter.next_back().map(ToString::to_string).as_deref(), Some("4"));
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn test_iter_mut_on_value_keeps_parent() {
        let mut root = Node::new();
        root.push("a").unwrap();
        let root_id = root.id();
        {
            let child = root.at_mut(0).unwrap();
            let parent = child.parent();
            assert_eq!(parent, Some(root_id));
        }
        for mut child in root.at_mut(0).unwrap().iter_mut() {
            child.set("b");
        }
        assert_eq!(root[0], "b");
        assert_eq!(root[0].parent(), Some(root_id));
    }
}
