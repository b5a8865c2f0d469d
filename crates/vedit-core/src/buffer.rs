//! Text buffer — the fundamental unit of text storage.
//!
//! A `TextBuffer` wraps a [`ropey::Rope`] and exposes editing in terms of
//! linear char offsets. The cursor is not stored here; the buffer only knows
//! how to splice text in and cut ranges out.
//!
//! # Design choices
//!
//! - **ropey** provides O(log n) insert/delete at any offset and maintains the
//!   line-break index incrementally, so line lookups never go stale.
//!
//! - **Offsets are char offsets**, not byte offsets. Byte offsets never leak
//!   into the public API.
//!
//! - **Only `\n` breaks lines.** The rope is built with ropey's CR and Unicode
//!   line-break recognition disabled, so `\r` is an ordinary character and
//!   joining the lines with `\n` always reproduces the buffer.

use ropey::Rope;

use crate::error::{EditError, EditResult};

/// A text buffer backed by a rope.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    rope: Rope,
    modified: bool,
}

impl TextBuffer {
    // -- Construction -------------------------------------------------------

    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            modified: false,
        }
    }

    /// Create a buffer holding `text`. The buffer starts unmodified.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            modified: false,
        }
    }

    // -- Text access --------------------------------------------------------

    /// The underlying rope.
    #[inline]
    #[must_use]
    pub const fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Total character count (Unicode scalar values, not bytes).
    #[inline]
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// True when the buffer contains no text.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// The char at `offset`, or `None` at or past the end.
    #[must_use]
    pub fn char_at(&self, offset: usize) -> Option<char> {
        (offset < self.rope.len_chars()).then(|| self.rope.char(offset))
    }

    /// Copy the half-open range `[start, end)` into a `String`.
    ///
    /// # Errors
    ///
    /// [`EditError::OutOfRange`] if `start > end` or `end > len_chars()`.
    pub fn slice(&self, start: usize, end: usize) -> EditResult<String> {
        let len = self.rope.len_chars();
        if end > len {
            return Err(EditError::OutOfRange { offset: end, len });
        }
        if start > end {
            return Err(EditError::OutOfRange { offset: start, len });
        }
        Ok(self.rope.slice(start..end).to_string())
    }

    /// Collect all text into a `String`.
    #[must_use]
    pub fn contents(&self) -> String {
        self.rope.to_string()
    }

    // -- Editing ------------------------------------------------------------

    /// Splice `text` in at `offset`. Returns the number of chars inserted.
    ///
    /// # Errors
    ///
    /// [`EditError::OutOfRange`] if `offset > len_chars()`.
    pub fn insert(&mut self, offset: usize, text: &str) -> EditResult<usize> {
        let len = self.rope.len_chars();
        if offset > len {
            return Err(EditError::OutOfRange { offset, len });
        }
        if text.is_empty() {
            return Ok(0);
        }
        self.rope.insert(offset, text);
        self.modified = true;
        Ok(self.rope.len_chars() - len)
    }

    /// Remove the half-open range `[start, end)`.
    ///
    /// Returns `Ok(false)` without touching the buffer when `start >= end`
    /// (an empty or inverted range is a no-op, not an error), and `Ok(true)`
    /// when text was removed.
    ///
    /// # Errors
    ///
    /// [`EditError::OutOfRange`] if `end > len_chars()`.
    pub fn delete(&mut self, start: usize, end: usize) -> EditResult<bool> {
        if start >= end {
            return Ok(false);
        }
        let len = self.rope.len_chars();
        if end > len {
            return Err(EditError::OutOfRange { offset: end, len });
        }
        self.rope.remove(start..end);
        self.modified = true;
        Ok(true)
    }

    /// Replace the whole content. The buffer is considered freshly loaded,
    /// so the modified flag is cleared.
    pub fn replace_all(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.modified = false;
    }

    // -- Metadata -----------------------------------------------------------

    /// True if the buffer has been edited since it was created, loaded, or
    /// last marked saved.
    #[inline]
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    /// Mark the buffer as saved (not modified).
    #[inline]
    pub const fn mark_saved(&mut self) {
        self.modified = false;
    }
}

impl std::fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}
