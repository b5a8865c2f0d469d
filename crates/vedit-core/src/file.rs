//! Document files — raw load/save pass-through.
//!
//! The engine treats loaded text as an opaque char sequence: nothing here
//! detects or converts line endings, and nothing is validated beyond UTF-8
//! decoding. A `Document` is a directory plus a file name; both must be
//! non-empty before any disk access is attempted.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to touch, load or save a document.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("document directory is empty")]
    MissingDir,

    #[error("document name is empty")]
    MissingName,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type FileResult<T> = Result<T, FileError>;

/// A file on disk identified by directory and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    dir: PathBuf,
    name: String,
}

impl Document {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full path of the document.
    ///
    /// # Errors
    ///
    /// [`FileError::MissingDir`] or [`FileError::MissingName`] if either part
    /// is empty.
    pub fn path(&self) -> FileResult<PathBuf> {
        if self.dir.as_os_str().is_empty() {
            return Err(FileError::MissingDir);
        }
        if self.name.is_empty() {
            return Err(FileError::MissingName);
        }
        Ok(self.dir.join(&self.name))
    }

    /// Create the file if it does not exist. Existing content is kept.
    ///
    /// # Errors
    ///
    /// Missing path parts or any I/O failure.
    pub fn touch(&self) -> FileResult<()> {
        let path = self.path()?;
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        tracing::debug!(path = %path.display(), "document touched");
        Ok(())
    }

    /// Read the whole file as text.
    ///
    /// # Errors
    ///
    /// Missing path parts, I/O failure, or content that is not UTF-8.
    pub fn load(&self) -> FileResult<String> {
        let path = self.path()?;
        let text = fs::read_to_string(&path)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "document loaded");
        Ok(text)
    }

    /// Write `text` to the file, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Missing path parts or any I/O failure.
    pub fn save(&self, text: &str) -> FileResult<()> {
        let path = self.path()?;
        fs::write(&path, text)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "document saved");
        Ok(())
    }
}
