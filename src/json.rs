//! Building trees from JSON text.
//!
//! [`TreeBuilder`] is the boundary between raw text and the tree: it turns the text
//! of a document into a root [`Node`] using nothing but the public construction and
//! mutation API. [`JsonBuilder`] is the JSON implementation:
//!
//! - arrays become array nodes, element by element
//! - objects become object nodes, key by key
//! - strings, numbers, booleans and `null` become scalar nodes holding their JSON
//!   literal (see [`JsonOptions`] for the alternatives)
//!
//! ## Examples
//!
//! ```rust
//! use conftree::{JsonBuilder, StringSource, TreeBuilder};
//!
//! let source = StringSource::new(r#"{"port": 8080, "hosts": ["a", "b"]}"#);
//! let tree = JsonBuilder::new().load(&source)?;
//!
//! assert_eq!(tree["port"].value_as::<u16>()?, 8080);
//! assert_eq!(tree["hosts"].len(), 2);
//! assert_eq!(tree["hosts"][0], "\"a\"");
//! # Ok::<(), conftree::Error>(())
//! ```

use crate::source::TextSource;
use crate::{Error, JsonOptions, Node, Result};
use serde_json::value::RawValue;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Produces a root [`Node`] from the text of a document.
pub trait TreeBuilder {
    /// Builds a tree from `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not a valid document for this format.
    fn build(&self, text: &str) -> Result<Node>;

    /// Reads `source` and builds a tree from its text.
    ///
    /// # Errors
    ///
    /// Returns the source's I/O error unchanged, or the build error.
    fn load(&self, source: &dyn TextSource) -> Result<Node> {
        let text = source.read_text()?;
        self.build(&text)
    }
}

/// Builds trees from JSON documents.
///
/// Scalars are taken from the document text as written, so numbers keep their exact
/// digits (`123456789012345678901234567890`, `1e3`, `1.50`) whatever their magnitude.
#[derive(Clone, Debug, Default)]
pub struct JsonBuilder {
    options: JsonOptions,
}

impl JsonBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: JsonOptions) -> Self {
        JsonBuilder { options }
    }

    #[must_use]
    pub fn options(&self) -> &JsonOptions {
        &self.options
    }

    /// Builds a tree from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the bytes are not valid UTF-8 JSON.
    pub fn build_slice(&self, bytes: &[u8]) -> Result<Node> {
        let raw: &RawValue = serde_json::from_slice(bytes)?;
        self.build_root(raw)
    }

    fn build_root(&self, raw: &RawValue) -> Result<Node> {
        let root = self.convert(raw, 0)?;
        debug!(shape = %root.shape(), nodes = root.node_count(), "built tree from JSON");
        Ok(root)
    }

    fn convert(&self, raw: &RawValue, depth: usize) -> Result<Node> {
        let text = raw.get();
        match text.as_bytes().first() {
            Some(b'[') => {
                let depth = self.enter(depth)?;
                let items: Vec<&RawValue> = serde_json::from_str(text)?;
                trace!(len = items.len(), depth, "converting JSON array");
                let mut node = Node::array();
                for item in items {
                    node.push(self.convert(item, depth)?)?;
                }
                Ok(node)
            }
            Some(b'{') => {
                let depth = self.enter(depth)?;
                // Sorted up front, so every insert appends.
                let entries: BTreeMap<String, &RawValue> = serde_json::from_str(text)?;
                trace!(len = entries.len(), depth, "converting JSON object");
                let mut node = Node::object();
                for (key, value) in entries {
                    node.insert(key, self.convert(value, depth)?)?;
                }
                Ok(node)
            }
            Some(b'"') if self.options.raw_strings => {
                Ok(Node::value(serde_json::from_str::<String>(text)?))
            }
            Some(b'n') if !self.options.null_as_value => Ok(Node::new()),
            _ => Ok(Node::value(text)),
        }
    }

    fn enter(&self, depth: usize) -> Result<usize> {
        let depth = depth + 1;
        match self.options.max_depth {
            Some(max) if depth > max => Err(Error::custom(format!(
                "JSON nesting exceeds the maximum depth of {}",
                max
            ))),
            _ => Ok(depth),
        }
    }
}

impl TreeBuilder for JsonBuilder {
    fn build(&self, text: &str) -> Result<Node> {
        let raw: &RawValue = serde_json::from_str(text)?;
        self.build_root(raw)
    }
}
