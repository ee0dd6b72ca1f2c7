//! Configuration options for JSON ingestion.
//!
//! [`JsonOptions`] controls how [`JsonBuilder`](crate::JsonBuilder) maps JSON scalars
//! onto scalar nodes.
//!
//! ## Examples
//!
//! ```rust
//! use conftree::{JsonBuilder, JsonOptions, TreeBuilder};
//!
//! let text = r#"{"name": "conf", "extra": null}"#;
//!
//! // Default: JSON literals are kept verbatim, quotes included
//! let tree = JsonBuilder::new().build(text).unwrap();
//! assert_eq!(tree["name"], "\"conf\"");
//! assert_eq!(tree["extra"], "null");
//!
//! // Decoded strings and null-shaped nulls
//! let options = JsonOptions::new().with_raw_strings(true).with_null_as_value(false);
//! let tree = JsonBuilder::with_options(options).build(text).unwrap();
//! assert_eq!(tree["name"], "conf");
//! assert!(tree["extra"].is_null());
//! ```

/// Options for building trees from JSON.
///
/// # Examples
///
/// ```rust
/// use conftree::JsonOptions;
///
/// let options = JsonOptions::new().with_max_depth(8);
/// assert_eq!(options.max_depth, Some(8));
/// assert!(!options.raw_strings);
/// assert!(options.null_as_value);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonOptions {
    /// Store strings as their decoded content instead of their quoted JSON literal.
    pub raw_strings: bool,
    /// Store JSON `null` as a scalar `"null"` rather than a null-shaped node.
    pub null_as_value: bool,
    /// Maximum number of nested arrays and objects; `None` means unlimited.
    pub max_depth: Option<usize>,
}

impl Default for JsonOptions {
    fn default() -> Self {
        JsonOptions {
            raw_strings: false,
            null_as_value: true,
            max_depth: None,
        }
    }
}

impl JsonOptions {
    /// Creates default options: verbatim literals, `null` as a scalar, no depth limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_raw_strings(mut self, raw_strings: bool) -> Self {
        self.raw_strings = raw_strings;
        self
    }

    #[must_use]
    pub fn with_null_as_value(mut self, null_as_value: bool) -> Self {
        self.null_as_value = null_as_value;
        self
    }

    /// Limits container nesting. A depth of 1 allows a flat array or object.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}
