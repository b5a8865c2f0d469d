//! Line index — line boundaries derived from the buffer.
//!
//! Lines are the maximal runs of chars between `\n` characters. They are never
//! stored separately from the text: every answer here comes from the rope's own
//! line-break metadata, which ropey keeps up to date on every edit. Lookups are
//! O(log n) and purely positional, so repeated line content can never confuse
//! the start/end computation.
//!
//! Invariants, for any buffer:
//!
//! - `line_count() >= 1` (an empty buffer has one empty line)
//! - `lines().join("\n") == contents()`
//! - `line_end(n) + 1 == line_start(n + 1)` for every line but the last

use crate::buffer::TextBuffer;
use crate::error::{EditError, EditResult};

impl TextBuffer {
    /// Total number of lines. Always at least 1. A buffer ending with `\n`
    /// has a trailing empty line.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.rope().len_lines()
    }

    /// Every line, without its `\n` terminator.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.rope()
            .lines()
            .map(|line| {
                let mut text = line.to_string();
                if text.ends_with('\n') {
                    text.pop();
                }
                text
            })
            .collect()
    }

    /// Text of one line, without its `\n` terminator.
    ///
    /// # Errors
    ///
    /// [`EditError::LineOutOfRange`] if `line >= line_count()`.
    pub fn line(&self, line: usize) -> EditResult<String> {
        let start = self.line_start(line)?;
        let end = self.line_end(line)?;
        Ok(self.rope().slice(start..end).to_string())
    }

    /// Offset of the first char of `line`.
    ///
    /// # Errors
    ///
    /// [`EditError::LineOutOfRange`] if `line >= line_count()`.
    pub fn line_start(&self, line: usize) -> EditResult<usize> {
        self.check_line(line)?;
        Ok(self.rope().line_to_char(line))
    }

    /// Offset just past the last content char of `line`, i.e. the offset of
    /// its `\n` (or the buffer length for the last line).
    ///
    /// # Errors
    ///
    /// [`EditError::LineOutOfRange`] if `line >= line_count()`.
    pub fn line_end(&self, line: usize) -> EditResult<usize> {
        self.check_line(line)?;
        if line + 1 < self.line_count() {
            // The next line starts right after this line's `\n`.
            Ok(self.rope().line_to_char(line + 1) - 1)
        } else {
            Ok(self.len_chars())
        }
    }

    /// Number of content chars in `line` (excluding the `\n`).
    ///
    /// # Errors
    ///
    /// [`EditError::LineOutOfRange`] if `line >= line_count()`.
    pub fn line_len(&self, line: usize) -> EditResult<usize> {
        Ok(self.line_end(line)? - self.line_start(line)?)
    }

    /// The line containing `offset`. An offset equal to the buffer length
    /// belongs to the last line.
    ///
    /// # Errors
    ///
    /// [`EditError::OutOfRange`] if `offset > len_chars()`.
    pub fn line_of(&self, offset: usize) -> EditResult<usize> {
        let len = self.len_chars();
        if offset > len {
            return Err(EditError::OutOfRange { offset, len });
        }
        Ok(self.rope().char_to_line(offset))
    }

    fn check_line(&self, line: usize) -> EditResult<()> {
        let line_count = self.line_count();
        if line < line_count {
            Ok(())
        } else {
            Err(EditError::LineOutOfRange { line, line_count })
        }
    }
}
