//! Positional and keyed lookup.
//!
//! [`Index`] is implemented for `usize` (array positions) and for string keys
//! (object entries), so [`Node::at`](crate::Node::at) and the `[]` operator accept
//! either.

use crate::node::Kind;
use crate::{Error, Node, Result};

/// A type that can select a child of a [`Node`].
///
/// This trait is sealed; it is implemented for `usize`, `str`, `String` and
/// references to those.
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn index_into<'a>(&self, node: &'a Node) -> Result<&'a Node>;

    #[doc(hidden)]
    fn index_into_mut<'a>(&self, node: &'a mut Node) -> Result<&'a mut Node>;
}

impl Index for usize {
    fn index_into<'a>(&self, node: &'a Node) -> Result<&'a Node> {
        match &node.kind {
            Kind::Array(items) => items
                .get(*self)
                .ok_or_else(|| Error::out_of_range(*self, items.len())),
            other => Err(Error::type_mismatch("index with a position", other.shape())),
        }
    }

    fn index_into_mut<'a>(&self, node: &'a mut Node) -> Result<&'a mut Node> {
        match &mut node.kind {
            Kind::Array(items) => {
                let len = items.len();
                items
                    .get_mut(*self)
                    .ok_or_else(|| Error::out_of_range(*self, len))
            }
            other => Err(Error::type_mismatch("index with a position", other.shape())),
        }
    }
}

impl Index for str {
    fn index_into<'a>(&self, node: &'a Node) -> Result<&'a Node> {
        match &node.kind {
            Kind::Object(map) => map.get(self).ok_or_else(|| Error::key_not_found(self)),
            other => Err(Error::type_mismatch("index with a key", other.shape())),
        }
    }

    fn index_into_mut<'a>(&self, node: &'a mut Node) -> Result<&'a mut Node> {
        match &mut node.kind {
            Kind::Object(map) => map.get_mut(self).ok_or_else(|| Error::key_not_found(self)),
            other => Err(Error::type_mismatch("index with a key", other.shape())),
        }
    }
}

impl Index for String {
    fn index_into<'a>(&self, node: &'a Node) -> Result<&'a Node> {
        self.as_str().index_into(node)
    }

    fn index_into_mut<'a>(&self, node: &'a mut Node) -> Result<&'a mut Node> {
        self.as_str().index_into_mut(node)
    }
}

impl<T: Index + ?Sized> Index for &T {
    fn index_into<'a>(&self, node: &'a Node) -> Result<&'a Node> {
        (**self).index_into(node)
    }

    fn index_into_mut<'a>(&self, node: &'a mut Node) -> Result<&'a mut Node> {
        (**self).index_into_mut(node)
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T: Sealed + ?Sized> Sealed for &T {}
}
