//! Cursor — a single insertion point and its movement primitives.
//!
//! The cursor is stored as a linear char offset into the buffer, never as a
//! `(line, col)` pair. The line/column view is derived on demand through the
//! line index, so it cannot fall out of sync with the text.
//!
//! Like the buffer, the cursor does not own or reference the text: the buffer
//! is passed to every method that needs it. Every movement clamps into
//! `[0, len]`, so navigation never produces an error.
//!
//! # Vertical movement
//!
//! Up/down keep the current column. When the target line is shorter the
//! cursor snaps to that line's end rather than wrapping onto the next line.
//! There is no remembered "sticky" column: a second move starts from wherever
//! the first one landed.

use crate::buffer::TextBuffer;
use crate::error::EditResult;
use crate::position::Position;

/// A cursor in a text buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    offset: usize,
}

impl Cursor {
    /// A cursor at offset 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { offset: 0 }
    }

    /// A cursor at `offset`, clamped into `buf`.
    #[must_use]
    pub fn at(offset: usize, buf: &TextBuffer) -> Self {
        Self {
            offset: offset.min(buf.len_chars()),
        }
    }

    /// Current char offset.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Derive `(line, col)` from the offset.
    #[must_use]
    pub fn position(&self, buf: &TextBuffer) -> Position {
        offset_to_position(buf, self.offset)
    }

    // -- Direct positioning -------------------------------------------------

    /// Move to `pos`, clamped into `[0, len]`. Negative targets land on 0.
    pub fn move_to(&mut self, pos: isize, buf: &TextBuffer) {
        self.offset = usize::try_from(pos).map_or(0, |p| p.min(buf.len_chars()));
    }

    /// Move by `delta` chars, clamped into `[0, len]`.
    pub fn move_by(&mut self, delta: isize, buf: &TextBuffer) {
        let target = if delta.is_negative() {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta.unsigned_abs())
        };
        self.offset = target.min(buf.len_chars());
    }

    /// Re-clamp after the buffer shrank underneath the cursor.
    pub fn clamp(&mut self, buf: &TextBuffer) {
        self.offset = self.offset.min(buf.len_chars());
    }

    // -- Horizontal movement ------------------------------------------------

    /// One char back. Crosses onto the previous line at column 0.
    pub fn move_left(&mut self, buf: &TextBuffer) {
        self.move_by(-1, buf);
    }

    /// One char forward. Crosses onto the next line at end of line.
    pub fn move_right(&mut self, buf: &TextBuffer) {
        self.move_by(1, buf);
    }

    /// First column of the current line.
    pub fn move_to_line_start(&mut self, buf: &TextBuffer) {
        let line = offset_to_position(buf, self.offset).line;
        self.offset = buf.line_start(line).unwrap_or(0);
    }

    /// Past the last content char of the current line.
    pub fn move_to_line_end(&mut self, buf: &TextBuffer) {
        let line = offset_to_position(buf, self.offset).line;
        self.offset = buf.line_end(line).unwrap_or_else(|_| buf.len_chars());
    }

    // -- Vertical movement --------------------------------------------------

    /// Same column on the previous line. Returns `false` (and leaves the
    /// cursor alone) on the first line.
    pub fn move_up(&mut self, buf: &TextBuffer) -> bool {
        let pos = offset_to_position(buf, self.offset);
        if pos.line == 0 {
            return false;
        }
        self.offset = clamped_offset(buf, Position::new(pos.line - 1, pos.col));
        true
    }

    /// Same column on the next line. Returns `false` (and leaves the cursor
    /// alone) on the last line.
    pub fn move_down(&mut self, buf: &TextBuffer) -> bool {
        let pos = offset_to_position(buf, self.offset);
        if pos.line + 1 >= buf.line_count() {
            return false;
        }
        self.offset = clamped_offset(buf, Position::new(pos.line + 1, pos.col));
        true
    }
}

// ---------------------------------------------------------------------------
// Coordinate conversion
// ---------------------------------------------------------------------------

/// Map a char offset to `(line, col)`. Offsets past the end are treated as
/// the end of the buffer.
#[must_use]
pub fn offset_to_position(buf: &TextBuffer, offset: usize) -> Position {
    let offset = offset.min(buf.len_chars());
    let line = buf.rope().char_to_line(offset);
    Position::new(line, offset - buf.rope().line_to_char(line))
}

/// Map `(line, col)` back to a char offset.
///
/// The column is clamped to the line's length, so a column past the end of a
/// short line lands at its end.
///
/// # Errors
///
/// [`EditError::LineOutOfRange`](crate::EditError::LineOutOfRange) if the
/// line does not exist.
pub fn position_to_offset(buf: &TextBuffer, pos: Position) -> EditResult<usize> {
    let start = buf.line_start(pos.line)?;
    let end = buf.line_end(pos.line)?;
    Ok(start + pos.col.min(end - start))
}

/// [`position_to_offset`] for a line already known to exist.
fn clamped_offset(buf: &TextBuffer, pos: Position) -> usize {
    position_to_offset(buf, pos).unwrap_or_else(|_| buf.len_chars())
}
