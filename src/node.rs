//! The tree value type.
//!
//! This module provides [`Node`], a single value type that is always exactly one of
//! four shapes:
//!
//! - **null**: nothing at all
//! - **value**: a scalar kept as its canonical text and parsed on demand
//! - **array**: an ordered sequence of owned child nodes
//! - **object**: owned child nodes keyed by unique strings, kept in key order
//!
//! ## Ownership and parents
//!
//! A node owns its subtree. Each node also carries a stable [`NodeId`] and the id of
//! the node that contains it. The parent relation is a handle, not a reference: it
//! never keeps anything alive and it survives vector growth or moves. Resolve it
//! against a root with [`Node::find`] or [`Node::parent_in`].
//!
//! Every node placed into a container has its parent handle set to that container.
//! Copies ([`Clone`], [`Node::copy_with_parent`], [`Node::assign`]) allocate fresh ids
//! for the whole copied subtree, so they never point back into the source tree.
//!
//! ## Lazy promotion
//!
//! A null node turns into an array on the first [`push`](Node::push) or
//! [`insert_at`](Node::insert_at), and into an object on the first
//! [`insert`](Node::insert) or [`get_or_insert`](Node::get_or_insert). Those are the
//! only implicit shape changes; any other shape mismatch is an
//! [`Error::TypeMismatch`].
//!
//! ## Examples
//!
//! ```rust
//! use conftree::Node;
//!
//! let mut root = Node::new();
//! root.get_or_insert("port")?.set(8080);
//! root.get_or_insert("hosts")?.push("alpha")?;
//!
//! assert!(root.is_object());
//! assert_eq!(root.at("port")?.value_as::<u16>()?, 8080);
//! assert_eq!(root["hosts"][0], "alpha");
//! # Ok::<(), conftree::Error>(())
//! ```

use crate::convert::{FromScalar, ToScalar};
use crate::index::Index;
use crate::{Error, NodeMap, Result};
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a node, used for the parent relation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    fn next() -> Self {
        NodeId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The four shapes a [`Node`] can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Null,
    Value,
    Array,
    Object,
}

impl Shape {
    /// Returns the lowercase name used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Shape::Null => "null",
            Shape::Value => "value",
            Shape::Array => "array",
            Shape::Object => "object",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) enum Kind {
    #[default]
    Null,
    Value(String),
    Array(Vec<Node>),
    Object(NodeMap),
}

impl Kind {
    pub(crate) const fn shape(&self) -> Shape {
        match self {
            Kind::Null => Shape::Null,
            Kind::Value(_) => Shape::Value,
            Kind::Array(_) => Shape::Array,
            Kind::Object(_) => Shape::Object,
        }
    }
}

/// A node of a configuration tree.
///
/// Equality is structural: ids and parent handles are ignored, and objects compare
/// by key set regardless of how they were built.
///
/// # Examples
///
/// ```rust
/// use conftree::Node;
///
/// let mut list = Node::new();
/// list.push("a")?;
/// list.push("b")?;
///
/// assert!(list.is_array());
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.at(1)?.as_str(), Some("b"));
/// # Ok::<(), conftree::Error>(())
/// ```
#[derive(Debug)]
pub struct Node {
    id: NodeId,
    parent: Option<NodeId>,
    pub(crate) kind: Kind,
}

impl Node {
    /// Creates a null root node.
    #[must_use]
    pub fn new() -> Self {
        Self::from_kind(None, Kind::Null)
    }

    /// Creates a scalar node holding `text` verbatim.
    #[must_use]
    pub fn value(text: impl Into<String>) -> Self {
        Self::from_kind(None, Kind::Value(text.into()))
    }

    /// Creates an empty array node.
    #[must_use]
    pub fn array() -> Self {
        Self::from_kind(None, Kind::Array(Vec::new()))
    }

    /// Creates an empty object node.
    #[must_use]
    pub fn object() -> Self {
        Self::from_kind(None, Kind::Object(NodeMap::new()))
    }

    /// Creates a scalar node from any value with a scalar text form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conftree::Node;
    ///
    /// assert_eq!(Node::from_scalar(&false).as_str(), Some("false"));
    /// assert_eq!(Node::from_scalar(&-7i64).as_str(), Some("-7"));
    /// ```
    #[must_use]
    pub fn from_scalar<T: ToScalar + ?Sized>(value: &T) -> Self {
        Self::value(value.to_scalar())
    }

    /// Creates a null node whose parent handle is `parent`.
    ///
    /// The new node is not inserted anywhere; `parent` only records where it belongs.
    #[must_use]
    pub fn child_of(parent: &Node) -> Self {
        Self::from_kind(Some(parent.id), Kind::Null)
    }

    fn from_kind(parent: Option<NodeId>, kind: Kind) -> Self {
        let mut node = Node {
            id: NodeId::next(),
            parent,
            kind,
        };
        node.adopt_children();
        node
    }

    /// Deep-copies this node with `parent` as the copy's parent handle.
    ///
    /// Every node of the copy gets a fresh id and every parent handle inside the copy
    /// points at the copy's own nodes.
    #[must_use]
    pub fn copy_with_parent(&self, parent: Option<NodeId>) -> Self {
        let id = NodeId::next();
        Node {
            id,
            parent,
            kind: self.copy_kind(id),
        }
    }

    /// Deep-copies this node as a child of `parent`. See [`Node::copy_with_parent`].
    #[must_use]
    pub fn copy_into(&self, parent: &Node) -> Self {
        self.copy_with_parent(Some(parent.id))
    }

    fn copy_kind(&self, owner: NodeId) -> Kind {
        match &self.kind {
            Kind::Null => Kind::Null,
            Kind::Value(text) => Kind::Value(text.clone()),
            Kind::Array(items) => Kind::Array(
                items
                    .iter()
                    .map(|item| item.copy_with_parent(Some(owner)))
                    .collect(),
            ),
            Kind::Object(map) => Kind::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.copy_with_parent(Some(owner))))
                    .collect(),
            ),
        }
    }

    /// Points the parent handle of every direct child at `self`.
    fn adopt_children(&mut self) {
        let id = self.id;
        match &mut self.kind {
            Kind::Array(items) => items.iter_mut().for_each(|item| item.parent = Some(id)),
            Kind::Object(map) => map.values_mut().for_each(|value| value.parent = Some(id)),
            Kind::Null | Kind::Value(_) => {}
        }
    }

    fn adopt(&self, mut child: Node) -> Node {
        child.parent = Some(self.id);
        child
    }

    fn detach(mut node: Node) -> Node {
        node.parent = None;
        node
    }

    /// Returns this node's identity.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the identity of the enclosing node, or `None` for a root.
    #[inline]
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns `true` if the node sits inside a container.
    #[inline]
    #[must_use]
    pub const fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Returns which of the four shapes the node currently holds.
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.kind.shape()
    }

    /// Returns `true` if the node is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self.kind, Kind::Null)
    }

    /// Returns `true` if the node is a scalar value.
    #[inline]
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self.kind, Kind::Value(_))
    }

    /// Returns `true` if the node is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self.kind, Kind::Array(_))
    }

    /// Returns `true` if the node is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self.kind, Kind::Object(_))
    }

    /// If the node is a scalar, returns its text. Otherwise returns `None`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            Kind::Value(text) => Some(text),
            _ => None,
        }
    }

    /// If the node is an array, returns its elements. Otherwise returns `None`.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Node]> {
        match &self.kind {
            Kind::Array(items) => Some(items),
            _ => None,
        }
    }

    /// If the node is an object, returns its entries. Otherwise returns `None`.
    #[must_use]
    pub fn as_object(&self) -> Option<&NodeMap> {
        match &self.kind {
            Kind::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Converts the scalar text to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the node is not a scalar, and
    /// [`Error::Conversion`] if the text does not parse as `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conftree::Node;
    ///
    /// assert_eq!(Node::from("42").value_as::<i32>()?, 42);
    /// assert!(Node::from("true").value_as::<bool>()?);
    /// assert!(Node::array().value_as::<String>().is_err());
    /// # Ok::<(), conftree::Error>(())
    /// ```
    pub fn value_as<T: FromScalar>(&self) -> Result<T> {
        match &self.kind {
            Kind::Value(text) => T::from_scalar(text),
            other => Err(Error::type_mismatch("convert", other.shape())),
        }
    }

    /// Looks up a child by position (arrays) or key (objects).
    ///
    /// Never changes the node's shape and never inserts.
    ///
    /// # Errors
    ///
    /// - [`Error::OutOfRange`] for an index at or past the end of an array
    /// - [`Error::KeyNotFound`] for a missing object key
    /// - [`Error::TypeMismatch`] when the index kind does not fit the shape
    pub fn at<I: Index>(&self, index: I) -> Result<&Node> {
        index.index_into(self)
    }

    /// Mutable counterpart of [`Node::at`].
    ///
    /// # Errors
    ///
    /// Same as [`Node::at`].
    pub fn at_mut<I: Index>(&mut self, index: I) -> Result<NodeMut<'_>> {
        index.index_into_mut(self).map(NodeMut::new)
    }

    /// Non-failing lookup; `None` wherever [`Node::at`] would fail.
    #[must_use]
    pub fn get<I: Index>(&self, index: I) -> Option<&Node> {
        index.index_into(self).ok()
    }

    /// Returns the child stored under `key`, inserting a null child first if the key
    /// is absent. A null node is promoted to an empty object.
    ///
    /// Calling it again with the same key returns the same entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the node is a scalar or an array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conftree::Node;
    ///
    /// let mut root = Node::new();
    /// root.get_or_insert("x")?.set("1");
    ///
    /// assert!(root.is_object());
    /// assert_eq!(root.at("x")?.value_as::<i32>()?, 1);
    /// assert!(root.at("y").is_err());
    /// # Ok::<(), conftree::Error>(())
    /// ```
    pub fn get_or_insert(&mut self, key: &str) -> Result<NodeMut<'_>> {
        let id = self.id;
        let map = self.object_for_write("get_or_insert")?;
        if !map.contains_key(key) {
            map.insert(key.to_string(), Node::from_kind(Some(id), Kind::Null));
        }
        map.get_mut(key)
            .map(NodeMut::new)
            .ok_or_else(|| Error::key_not_found(key))
    }

    fn array_for_write(&mut self, operation: &'static str) -> Result<&mut Vec<Node>> {
        if self.is_null() {
            self.kind = Kind::Array(Vec::new());
        }
        match &mut self.kind {
            Kind::Array(items) => Ok(items),
            other => Err(Error::type_mismatch(operation, other.shape())),
        }
    }

    fn object_for_write(&mut self, operation: &'static str) -> Result<&mut NodeMap> {
        if self.is_null() {
            self.kind = Kind::Object(NodeMap::new());
        }
        match &mut self.kind {
            Kind::Object(map) => Ok(map),
            other => Err(Error::type_mismatch(operation, other.shape())),
        }
    }

    /// Appends a node. A null node is promoted to an empty array.
    ///
    /// Passing an owned `Node` moves it in; passing `&Node` appends a deep copy.
    /// Scalars (`&str`, numbers, `bool`, ...) are converted to value nodes first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the node is a scalar or an object.
    pub fn push(&mut self, node: impl Into<Node>) -> Result<()> {
        let child = self.adopt(node.into());
        self.array_for_write("push")?.push(child);
        Ok(())
    }

    /// Inserts a node before position `index`; `index == len()` appends.
    /// A null node is promoted to an empty array when `index` is 0.
    ///
    /// # Errors
    ///
    /// - [`Error::TypeMismatch`] if the node is a scalar or an object
    /// - [`Error::OutOfRange`] if `index > len()`
    pub fn insert_at(&mut self, index: usize, node: impl Into<Node>) -> Result<()> {
        let len = match &self.kind {
            Kind::Null => 0,
            Kind::Array(items) => items.len(),
            other => return Err(Error::type_mismatch("insert at index", other.shape())),
        };
        if index > len {
            return Err(Error::out_of_range(index, len));
        }
        let child = self.adopt(node.into());
        self.array_for_write("insert at index")?.insert(index, child);
        Ok(())
    }

    /// Inserts or replaces the child under `key`. A null node is promoted to an empty
    /// object.
    ///
    /// The replaced child, if any, is returned detached from this tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the node is a scalar or an array.
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<Node>) -> Result<Option<Node>> {
        let child = self.adopt(node.into());
        let replaced = self.object_for_write("insert with key")?.insert(key.into(), child);
        Ok(replaced.map(Node::detach))
    }

    /// Removes and returns the element at `index`, detached from this tree.
    ///
    /// # Errors
    ///
    /// - [`Error::TypeMismatch`] if the node is not an array
    /// - [`Error::OutOfRange`] if `index >= len()`
    pub fn remove_at(&mut self, index: usize) -> Result<Node> {
        match &mut self.kind {
            Kind::Array(items) if index < items.len() => Ok(Node::detach(items.remove(index))),
            Kind::Array(items) => Err(Error::out_of_range(index, items.len())),
            other => Err(Error::type_mismatch("remove at index", other.shape())),
        }
    }

    /// Removes the entry under `key`, returning it detached. An absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the node is not an object.
    pub fn remove(&mut self, key: &str) -> Result<Option<Node>> {
        match &mut self.kind {
            Kind::Object(map) => Ok(map.remove(key).map(Node::detach)),
            other => Err(Error::type_mismatch("remove with key", other.shape())),
        }
    }

    /// Number of children: 0 for null, 1 for a scalar, the element or entry count for
    /// containers.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.kind {
            Kind::Null => 0,
            Kind::Value(_) => 1,
            Kind::Array(items) => items.len(),
            Kind::Object(map) => map.len(),
        }
    }

    /// `true` for null, `false` for a scalar, container emptiness otherwise.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.kind {
            Kind::Null => true,
            Kind::Value(_) => false,
            Kind::Array(items) => items.is_empty(),
            Kind::Object(map) => map.is_empty(),
        }
    }

    /// Empties an array or object in place, keeping its shape.
    ///
    /// Clearing a null node does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for a scalar, which has nothing to clear.
    pub fn clear(&mut self) -> Result<()> {
        match &mut self.kind {
            Kind::Null => Ok(()),
            Kind::Array(items) => {
                items.clear();
                Ok(())
            }
            Kind::Object(map) => {
                map.clear();
                Ok(())
            }
            Kind::Value(_) => Err(Error::type_mismatch("clear", Shape::Value)),
        }
    }

    /// Replaces this node's subtree with a deep copy of `source`'s subtree.
    ///
    /// This node keeps its id and parent; the copied children are parented here.
    pub fn assign(&mut self, source: &Node) {
        self.kind = source.copy_kind(self.id);
    }

    /// Replaces this node's subtree with `value`'s, moving it without copying.
    ///
    /// This node keeps its id and parent; the moved children are parented here.
    pub fn set(&mut self, value: impl Into<Node>) {
        self.kind = value.into().kind;
        self.adopt_children();
    }

    /// Exchanges the subtrees of two nodes. Each node keeps its own id and parent.
    pub fn swap(&mut self, other: &mut Node) {
        std::mem::swap(&mut self.kind, &mut other.kind);
        self.adopt_children();
        other.adopt_children();
    }

    /// Finds the node with identity `id` in this subtree, including `self`.
    #[must_use]
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        match &self.kind {
            Kind::Array(items) => items.iter().find_map(|item| item.find(id)),
            Kind::Object(map) => map.values().find_map(|value| value.find(id)),
            Kind::Null | Kind::Value(_) => None,
        }
    }

    /// Mutable counterpart of [`Node::find`].
    pub fn find_mut(&mut self, id: NodeId) -> Option<NodeMut<'_>> {
        self.find_node_mut(id).map(NodeMut::new)
    }

    fn find_node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if self.id == id {
            return Some(self);
        }
        match &mut self.kind {
            Kind::Array(items) => items.iter_mut().find_map(|item| item.find_node_mut(id)),
            Kind::Object(map) => map.values_mut().find_map(|value| value.find_node_mut(id)),
            Kind::Null | Kind::Value(_) => None,
        }
    }

    /// Resolves this node's parent handle inside the tree rooted at `root`.
    #[must_use]
    pub fn parent_in<'a>(&self, root: &'a Node) -> Option<&'a Node> {
        self.parent.and_then(|parent| root.find(parent))
    }

    /// Counts the nodes of this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + match &self.kind {
            Kind::Null | Kind::Value(_) => 0,
            Kind::Array(items) => items.iter().map(Node::node_count).sum(),
            Kind::Object(map) => map.values().map(Node::node_count).sum(),
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy as a new root: fresh ids throughout, no parent.
impl Clone for Node {
    fn clone(&self) -> Self {
        self.copy_with_parent(None)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Node {}

impl PartialEq<str> for Node {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Node {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Null => f.write_str("null"),
            Kind::Value(text) => f.write_str(text),
            Kind::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Kind::Object(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl<I: Index> std::ops::Index<I> for Node {
    type Output = Node;

    /// Panicking lookup; use [`Node::at`] for the checked form.
    fn index(&self, index: I) -> &Node {
        match index.index_into(self) {
            Ok(node) => node,
            Err(err) => panic!("{}", err),
        }
    }
}

/// A mutable handle to a node inside a tree.
///
/// Dereferences to [`Node`]. When the handle is dropped the node's parent handle is
/// restored, so replacing the node wholesale (`*handle = other`) still leaves it
/// correctly parented.
#[derive(Debug)]
pub struct NodeMut<'a> {
    node: &'a mut Node,
    parent: Option<NodeId>,
}

impl<'a> NodeMut<'a> {
    pub(crate) fn new(node: &'a mut Node) -> Self {
        let parent = node.parent;
        NodeMut { node, parent }
    }
}

impl Deref for NodeMut<'_> {
    type Target = Node;

    fn deref(&self) -> &Node {
        self.node
    }
}

impl DerefMut for NodeMut<'_> {
    fn deref_mut(&mut self) -> &mut Node {
        self.node
    }
}

impl Drop for NodeMut<'_> {
    fn drop(&mut self) {
        self.node.parent = self.parent;
    }
}

impl From<&Node> for Node {
    fn from(node: &Node) -> Self {
        node.clone()
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::value(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::value(value)
    }
}

impl From<&String> for Node {
    fn from(value: &String) -> Self {
        Node::value(value.as_str())
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::from_scalar(&value)
                }
            }
        )*
    };
}

impl_from_scalar!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, BigInt
);

impl From<DateTime<Utc>> for Node {
    fn from(value: DateTime<Utc>) -> Self {
        Node::from_scalar(&value)
    }
}

/// `None` becomes a null node.
impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Node::new, Into::into)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::from_kind(None, Kind::Array(items))
    }
}

impl From<NodeMap> for Node {
    fn from(map: NodeMap) -> Self {
        Node::from_kind(None, Kind::Object(map))
    }
}

impl FromIterator<Node> for Node {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Node::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl FromIterator<(String, Node)> for Node {
    fn from_iter<T: IntoIterator<Item = (String, Node)>>(iter: T) -> Self {
        Node::from(iter.into_iter().collect::<NodeMap>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_null_root() {
        let node = Node::default();
        assert!(node.is_null());
        assert!(!node.has_parent());
        assert_eq!(node.shape(), Shape::Null);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Node::new();
        let b = Node::new();
        assert_ne!(a.id(), b.id());
        assert_eq!(a, b);
    }

    #[test]
    fn test_child_of_records_parent() {
        let parent = Node::object();
        let child = Node::child_of(&parent);
        assert!(child.is_null());
        assert_eq!(child.parent(), Some(parent.id()));
    }

    #[test]
    fn test_from_vec_adopts_elements() {
        let list = Node::from(vec![Node::from(1), Node::from(2)]);
        for item in list.as_array().unwrap() {
            assert_eq!(item.parent(), Some(list.id()));
        }
    }

    #[test]
    fn test_failed_insert_at_does_not_promote() {
        let mut node = Node::new();
        assert!(matches!(
            node.insert_at(1, "x"),
            Err(Error::OutOfRange { index: 1, len: 0 })
        ));
        assert!(node.is_null());
    }

    #[test]
    fn test_node_mut_restores_parent_after_overwrite() {
        let mut root = Node::new();
        root.push("a").unwrap();
        {
            let mut slot = root.at_mut(0).unwrap();
            *slot = Node::from("b");
        }
        assert_eq!(root[0], "b");
        assert_eq!(root[0].parent(), Some(root.id()));
    }

    #[test]
    fn test_display() {
        let mut node = Node::new();
        node.insert("b", vec![Node::from(1), Node::new()]).unwrap();
        node.insert("a", "x").unwrap();
        assert_eq!(node.to_string(), "{a: x, b: [1, null]}");
    }

    #[test]
    fn test_node_count() {
        let mut node = Node::new();
        node.push(vec![Node::from(1), Node::from(2)]).unwrap();
        node.push("x").unwrap();
        assert_eq!(node.node_count(), 5);
    }

    #[test]
    fn test_option_conversion() {
        assert!(Node::from(None::<i32>).is_null());
        assert_eq!(Node::from(Some(3)), Node::from(3));
    }
}
