//! # conftree
//!
//! A self-describing tree for configuration-like data, with typed scalar conversion
//! and JSON ingestion.
//!
//! ## What is in the tree?
//!
//! A single type, [`Node`], that is always one of four shapes:
//!
//! - **null**: empty, the shape of a fresh node
//! - **value**: a scalar stored as text and parsed on demand
//! - **array**: an ordered list of child nodes
//! - **object**: child nodes under unique string keys, kept in key order
//!
//! Scalars stay text until you ask for a type, so nothing is lost between loading a
//! document and reading it: `"8080"` can be read as `u16`, `i64`, `f64` or `String`.
//!
//! ## Key Features
//!
//! - **One interface for four shapes**: lookup, mutation and iteration work the same
//!   way whatever the node holds
//! - **Explicit promotion**: a null node becomes an array or an object on the first
//!   fitting insertion, never silently otherwise
//! - **Parent tracking**: every node knows its container through a stable id handle
//! - **Strict typed conversion**: locale independent, whole-text numeric parsing
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! ### Building a tree by hand
//!
//! ```rust
//! use conftree::Node;
//!
//! let mut root = Node::new();
//! root.push("a")?;
//! root.push("b")?;
//!
//! assert!(root.is_array());
//! assert_eq!(root.len(), 2);
//! assert_eq!(root[0].value_as::<String>()?, "a");
//! # Ok::<(), conftree::Error>(())
//! ```
//!
//! ### Loading JSON
//!
//! ```rust
//! use conftree::from_json_str;
//!
//! let tree = from_json_str(r#"{"server": {"port": 8080, "tls": true}}"#)?;
//! let server = tree.at("server")?;
//!
//! assert_eq!(server.at("port")?.value_as::<u16>()?, 8080);
//! assert!(server.at("tls")?.value_as::<bool>()?);
//! # Ok::<(), conftree::Error>(())
//! ```
//!
//! ### Walking a tree
//!
//! ```rust
//! use conftree::node;
//!
//! let config = node!({ "zeta": 1, "alpha": 2 });
//! let keys: Vec<&str> = config.keys().collect();
//! assert_eq!(keys, vec!["alpha", "zeta"]);
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - All indexing is bounds-checked; checked accessors return [`Result`]
//! - A failing mutation leaves the tree unchanged
//! - The tree is not synchronized: share `&Node` freely, mutate through one `&mut`

#[macro_use]
mod macros;

pub mod convert;
pub mod de;
pub mod error;
pub mod index;
pub mod iter;
pub mod json;
pub mod map;
pub mod node;
pub mod options;
pub mod source;

pub use convert::{FromScalar, ToScalar};
pub use error::{Error, Result};
pub use index::Index;
pub use iter::{Cursor, Entries, Iter, IterMut};
pub use json::{JsonBuilder, TreeBuilder};
pub use map::NodeMap;
pub use node::{Node, NodeId, NodeMut, Shape};
pub use options::JsonOptions;
pub use source::{FileSource, StringSource, TextSource};

use std::io;
use std::path::Path;

/// Builds a tree from JSON text with default [`JsonOptions`].
///
/// # Errors
///
/// Returns [`Error::Json`] if the text is not valid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_json_str(text: &str) -> Result<Node> {
    JsonBuilder::new().build(text)
}

/// Builds a tree from JSON bytes.
///
/// # Errors
///
/// Returns [`Error::Json`] if the bytes are not valid UTF-8 JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_json_slice(bytes: &[u8]) -> Result<Node> {
    JsonBuilder::new().build_slice(bytes)
}

/// Builds a tree from JSON read out of an I/O stream.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, or [`Error::Json`] for invalid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_json_reader<R: io::Read>(mut reader: R) -> Result<Node> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(Error::io)?;
    from_json_str(&text)
}

/// Builds a tree from a JSON file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the path is missing, not a regular file or unreadable,
/// or [`Error::Json`] for invalid JSON.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Node> {
    JsonBuilder::new().load(&FileSource::new(path.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor as IoCursor;

    #[test]
    fn test_from_json_slice_and_reader() {
        let from_slice = from_json_slice(b"[1, 2]").unwrap();
        let from_reader = from_json_reader(IoCursor::new("[1, 2]")).unwrap();
        assert_eq!(from_slice, from_reader);
        assert_eq!(from_slice.len(), 2);
    }

    #[test]
    fn test_from_json_slice_rejects_invalid_utf8() {
        assert!(matches!(
            from_json_slice(&[0xff, 0xfe]),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
