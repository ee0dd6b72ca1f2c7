//! Error types for tree access, mutation, conversion and ingestion.
//!
//! Every fallible operation in this crate returns [`Result`], and every failure is
//! reported to the immediate caller. Failing mutations leave the tree untouched.
//!
//! ## Error Categories
//!
//! - **Type Mismatches**: the operation is not valid for the node's current shape
//! - **Out of Range**: an index or cursor position outside the valid bounds
//! - **Missing Keys**: a read-only keyed lookup that found nothing
//! - **Conversion Errors**: scalar text that does not parse as the requested type
//! - **I/O and JSON Errors**: failures at the ingestion boundary
//!
//! ## Examples
//!
//! ```rust
//! use conftree::{Error, Node};
//!
//! let node = Node::from("not a number");
//! let err = node.value_as::<i32>().unwrap_err();
//! assert!(matches!(err, Error::Conversion { .. }));
//! assert!(err.to_string().contains("not a number"));
//! ```

use crate::node::Shape;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The operation is not valid for the node's current shape.
    #[error("cannot {operation} on a node of type {shape}")]
    TypeMismatch {
        operation: &'static str,
        shape: Shape,
    },

    /// An index or cursor position lies outside the valid bounds.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A read-only keyed lookup missed.
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// Scalar text could not be converted to the requested type.
    #[error("failed to convert {text:?} to type \"{target}\"")]
    Conversion { text: String, target: &'static str },

    /// The text source could not produce its content.
    #[error("IO error: {0}")]
    Io(String),

    /// The JSON document is malformed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a type mismatch error for `operation` attempted on a node of `shape`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conftree::{Error, Shape};
    ///
    /// let err = Error::type_mismatch("push", Shape::Value);
    /// assert_eq!(err.to_string(), "cannot push on a node of type value");
    /// ```
    pub fn type_mismatch(operation: &'static str, shape: Shape) -> Self {
        Error::TypeMismatch { operation, shape }
    }

    /// Creates an out-of-range error.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Error::OutOfRange { index, len }
    }

    /// Creates a missing-key error.
    pub fn key_not_found(key: &str) -> Self {
        Error::KeyNotFound(key.to_string())
    }

    /// Creates a conversion error naming the offending text and the target type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conftree::Error;
    ///
    /// let err = Error::conversion("1.5", "u8");
    /// assert!(err.to_string().contains("\"u8\""));
    /// ```
    pub fn conversion(text: &str, target: &'static str) -> Self {
        Error::Conversion {
            text: text.to_string(),
            target,
        }
    }

    /// Creates an I/O error for text sources that cannot produce their content.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conftree::Error;
    ///
    /// let err = Error::io(format!("file does not exist: {}", "app.json"));
    /// assert_eq!(err.to_string(), "IO error: file does not exist: app.json");
    /// ```
    pub fn io<T: fmt::Display>(msg: T) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_their_context() {
        let err = Error::out_of_range(3, 2);
        assert_eq!(err.to_string(), "index 3 out of range for length 2");

        let err = Error::key_not_found("port");
        assert_eq!(err.to_string(), "key not found: \"port\"");

        let err = Error::conversion("abc", "i32");
        assert_eq!(err.to_string(), "failed to convert \"abc\" to type \"i32\"");
    }

    #[test]
    fn test_io_accepts_any_display() {
        let source = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        assert!(matches!(Error::io(source), Error::Io(ref msg) if msg == "disk gone"));
        assert!(matches!(Error::io("plain"), Error::Io(ref msg) if msg == "plain"));
    }

    #[test]
    fn test_serde_custom() {
        let err = <Error as serde::de::Error>::custom("boom");
        assert!(matches!(err, Error::Custom(ref msg) if msg == "boom"));
    }
}
