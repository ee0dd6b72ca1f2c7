//! Text sources for ingestion.
//!
//! A [`TextSource`] produces the complete text of a document. The tree builders in
//! [`json`](crate::json) consume it without caring where it came from.

use crate::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Produces the complete textual content to ingest.
pub trait TextSource {
    /// Returns the whole text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the content cannot be produced.
    fn read_text(&self) -> Result<String>;
}

/// A source that hands out a string it already holds. Mostly useful in tests.
///
/// # Examples
///
/// ```rust
/// use conftree::{StringSource, TextSource};
///
/// let source = StringSource::new("[1, 2]");
/// assert_eq!(source.read_text().unwrap(), "[1, 2]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringSource {
    text: String,
}

impl StringSource {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        StringSource { text: text.into() }
    }
}

impl TextSource for StringSource {
    fn read_text(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

/// A source that reads a regular file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for FileSource {
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the path does not exist, is not a regular file, or
    /// cannot be read as UTF-8 text.
    fn read_text(&self) -> Result<String> {
        let path = self.path.display();
        let metadata = fs::metadata(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::io(format!("file does not exist: {}", path)),
            _ => Error::io(format!("cannot access {}: {}", path, e)),
        })?;
        if !metadata.is_file() {
            return Err(Error::io(format!("path is not a file: {}", path)));
        }
        let text = fs::read_to_string(&self.path)
            .map_err(|e| Error::io(format!("failed to read {}: {}", path, e)))?;
        debug!(path = %path, bytes = text.len(), "read text source");
        Ok(text)
    }
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn read_text(&self) -> Result<String> {
        (**self).read_text()
    }
}
