//! Editor — the engine state object.
//!
//! An `Editor` owns one [`TextBuffer`], one [`Cursor`] and one [`Viewport`]
//! and keeps them consistent. It has no rendering or windowing dependency:
//! a front end feeds it decoded [`Command`]s and reads back the visible lines
//! and the cursor position.
//!
//! # Invariants
//!
//! After every public method returns:
//!
//! - `0 <= cursor <= buffer.len_chars()`
//! - the cursor's line is inside
//!   `[scroll_offset, scroll_offset + visible_line_count)`
//!
//! Every edit and every movement ends with [`adjust_scroll`](Editor::adjust_scroll),
//! so inserting a line break at the bottom of the viewport scrolls just like
//! moving the cursor there would.
//!
//! # Errors
//!
//! Internally generated requests (arrow keys, backspace at the start of the
//! buffer) are clamped and never fail. Externally supplied offsets (an
//! absolute move or a range delete) are checked, and an offset outside
//! `[0, len]` is reported as [`EditError::OutOfRange`] with the state left
//! untouched.

use std::ops::Range;

use crate::buffer::TextBuffer;
use crate::command::{Command, Direction};
use crate::cursor::Cursor;
use crate::display::{char_col_to_display_col, expand_tabs};
use crate::error::{EditError, EditResult};
use crate::file::{Document, FileResult};
use crate::options::Options;
use crate::position::Position;
use crate::viewport::Viewport;

/// The editing engine: buffer, cursor and viewport in one place.
#[derive(Debug, Clone)]
pub struct Editor {
    buffer: TextBuffer,
    cursor: Cursor,
    viewport: Viewport,
    tab_width: usize,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    // -- Construction -------------------------------------------------------

    /// An empty editor with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// An empty editor configured by `opts`.
    #[must_use]
    pub fn with_options(opts: Options) -> Self {
        Self {
            buffer: TextBuffer::new(),
            cursor: Cursor::new(),
            viewport: Viewport::new(opts.visible_lines),
            tab_width: opts.tab_width.max(1),
        }
    }

    /// An editor holding `text`, cursor at 0.
    #[must_use]
    pub fn from_text(text: &str, opts: Options) -> Self {
        let mut editor = Self::with_options(opts);
        editor.load(text);
        editor
    }

    // -- Configuration ------------------------------------------------------

    /// The options currently in effect.
    #[must_use]
    pub const fn options(&self) -> Options {
        Options {
            visible_lines: self.viewport.visible_lines(),
            tab_width: self.tab_width,
        }
    }

    /// Replace the options, re-scrolling for the new viewport height.
    pub fn set_options(&mut self, opts: Options) {
        self.tab_width = opts.tab_width.max(1);
        self.set_visible_line_count(opts.visible_lines);
    }

    /// Tell the engine how many lines the renderer can show.
    pub fn set_visible_line_count(&mut self, lines: usize) {
        let cursor_line = self.cursor_position().line;
        self.viewport.resize(lines, cursor_line);
    }

    // -- Text access --------------------------------------------------------

    #[inline]
    #[must_use]
    pub const fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Whole buffer text.
    #[must_use]
    pub fn contents(&self) -> String {
        self.buffer.contents()
    }

    /// Every line of the buffer, split on `\n`.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.buffer.lines()
    }

    /// Cursor as a linear char offset.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor.offset()
    }

    /// True once the text differs from what was last loaded or saved.
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.buffer.is_modified()
    }

    // -- Editing ------------------------------------------------------------

    /// Insert `text` at the cursor and move the cursor past it.
    pub fn insert(&mut self, text: &str) {
        let at = self.cursor.offset();
        match self.buffer.insert(at, text) {
            Ok(inserted) => {
                tracing::trace!(at, inserted, "insert");
                self.cursor = Cursor::at(at + inserted, &self.buffer);
                self.adjust_scroll();
            }
            Err(err) => self.resync_cursor(err),
        }
    }

    /// Insert a line break at the cursor.
    pub fn new_line(&mut self) {
        self.insert("\n");
    }

    /// Remove `[start, end)` and put the cursor at `start`.
    ///
    /// An empty or inverted range (`start >= end`) is a no-op.
    ///
    /// # Errors
    ///
    /// [`EditError::OutOfRange`] if `end` is past the end of the buffer.
    pub fn delete(&mut self, start: usize, end: usize) -> EditResult<()> {
        match self.buffer.delete(start, end) {
            Ok(true) => {
                tracing::trace!(start, end, "delete");
                self.cursor = Cursor::at(start, &self.buffer);
                self.adjust_scroll();
                Ok(())
            }
            Ok(false) => Ok(()),
            Err(err) => {
                tracing::warn!(start, end, %err, "delete rejected");
                Err(err)
            }
        }
    }

    /// Delete the char before the cursor. No-op at offset 0.
    pub fn backspace(&mut self) {
        let at = self.cursor.offset();
        let Some(prev) = at.checked_sub(1) else {
            return;
        };
        if let Err(err) = self.delete(prev, at) {
            self.resync_cursor(err);
        }
    }

    /// Delete the char under the cursor. No-op at the end of the buffer.
    pub fn delete_forward(&mut self) {
        let at = self.cursor.offset();
        if self.buffer.char_at(at).is_none() {
            return;
        }
        if let Err(err) = self.delete(at, at + 1) {
            self.resync_cursor(err);
        }
    }

    /// A cursor-relative edit failed, so the cursor no longer fits the
    /// buffer. Clamp it back in and re-scroll.
    fn resync_cursor(&mut self, err: EditError) {
        tracing::warn!(%err, cursor = self.cursor.offset(), "cursor outside buffer, clamping");
        self.cursor.clamp(&self.buffer);
        self.adjust_scroll();
    }

    // -- Navigation ---------------------------------------------------------

    /// Move the cursor to `pos`, clamped into `[0, len]`.
    pub fn move_cursor(&mut self, pos: isize) {
        self.cursor.move_to(pos, &self.buffer);
        self.adjust_scroll();
    }

    /// Move the cursor to an externally supplied offset.
    ///
    /// # Errors
    ///
    /// [`EditError::OutOfRange`] if `offset > len`; the cursor does not move.
    pub fn move_to(&mut self, offset: usize) -> EditResult<()> {
        let len = self.buffer.len_chars();
        if offset > len {
            let err = EditError::OutOfRange { offset, len };
            tracing::warn!(%err, "move rejected");
            return Err(err);
        }
        self.cursor = Cursor::at(offset, &self.buffer);
        self.adjust_scroll();
        Ok(())
    }

    pub fn move_left(&mut self) {
        self.cursor.move_left(&self.buffer);
        self.adjust_scroll();
    }

    pub fn move_right(&mut self) {
        self.cursor.move_right(&self.buffer);
        self.adjust_scroll();
    }

    /// Move to the same column on the previous line. No-op on line 0.
    pub fn move_up(&mut self) {
        if self.cursor.move_up(&self.buffer) {
            self.adjust_scroll();
        }
    }

    /// Move to the same column on the next line. No-op on the last line.
    pub fn move_down(&mut self) {
        if self.cursor.move_down(&self.buffer) {
            self.adjust_scroll();
        }
    }

    pub fn move_line_start(&mut self) {
        self.cursor.move_to_line_start(&self.buffer);
        self.adjust_scroll();
    }

    pub fn move_line_end(&mut self) {
        self.cursor.move_to_line_end(&self.buffer);
        self.adjust_scroll();
    }

    /// One arrow-key step.
    pub fn move_direction(&mut self, dir: Direction) {
        match dir {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
        }
    }

    // -- Dispatch -----------------------------------------------------------

    /// Execute one decoded command.
    ///
    /// # Errors
    ///
    /// [`EditError::OutOfRange`] from [`Command::MoveTo`] or
    /// [`Command::Delete`] with offsets past the end of the buffer. All
    /// other commands always succeed.
    pub fn apply(&mut self, cmd: Command) -> EditResult<()> {
        if cmd.is_edit() {
            tracing::trace!(?cmd, "edit command");
        }
        match cmd {
            Command::Insert(text) => self.insert(&text),
            Command::NewLine => self.new_line(),
            Command::MoveTo(offset) => return self.move_to(offset),
            Command::Move(dir) => self.move_direction(dir),
            Command::LineStart => self.move_line_start(),
            Command::LineEnd => self.move_line_end(),
            Command::DeleteBackward => self.backspace(),
            Command::DeleteForward => self.delete_forward(),
            Command::Delete { start, end } => return self.delete(start, end),
        }
        Ok(())
    }

    // -- Viewport -----------------------------------------------------------

    /// Scroll so the cursor's line is visible. Returns `true` if the scroll
    /// offset changed. Called after every cursor-affecting operation.
    pub fn adjust_scroll(&mut self) -> bool {
        let line = self.cursor_position().line;
        self.viewport.ensure_visible(line)
    }

    /// Index of the first visible line.
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.viewport.scroll_offset()
    }

    /// Viewport capacity in lines.
    #[must_use]
    pub const fn visible_line_count(&self) -> usize {
        self.viewport.visible_lines()
    }

    /// Line numbers to draw.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        self.viewport.visible_range(self.buffer.line_count())
    }

    /// Text of the lines in [`visible_range`](Self::visible_range).
    #[must_use]
    pub fn visible_lines(&self) -> Vec<String> {
        self.visible_range()
            .filter_map(|n| self.buffer.line(n).ok())
            .collect()
    }

    /// Visible lines with tabs expanded to the configured tab width.
    #[must_use]
    pub fn display_lines(&self) -> Vec<String> {
        self.visible_range()
            .filter_map(|n| self.buffer.line(n).ok())
            .map(|line| expand_tabs(&line, self.tab_width))
            .collect()
    }

    // -- Cursor queries -----------------------------------------------------

    /// The cursor as `(line, col)` in buffer coordinates.
    #[must_use]
    pub fn cursor_position(&self) -> Position {
        self.cursor.position(&self.buffer)
    }

    /// The cursor as `(row, col)` relative to the viewport. Always `Some`
    /// while the scroll invariant holds.
    #[must_use]
    pub fn cursor_in_view(&self) -> Option<Position> {
        self.viewport.to_view(self.cursor_position())
    }

    /// Display column of the cursor (tabs expanded, wide chars doubled).
    #[must_use]
    pub fn cursor_display_col(&self) -> usize {
        let pos = self.cursor_position();
        let line = self.buffer.rope().line(pos.line);
        char_col_to_display_col(line.chars(), pos.col, self.tab_width)
    }

    // -- Persistence --------------------------------------------------------

    /// Replace the whole buffer. Cursor and scroll return to 0.
    pub fn load(&mut self, text: &str) {
        self.buffer.replace_all(text);
        self.cursor = Cursor::new();
        self.viewport.reset();
        tracing::debug!(chars = self.buffer.len_chars(), "buffer loaded");
    }

    /// Load the content of `doc` into the buffer.
    ///
    /// # Errors
    ///
    /// Any [`FileError`](crate::FileError) from reading the document. The
    /// buffer is unchanged on failure.
    pub fn load_document(&mut self, doc: &Document) -> FileResult<()> {
        let text = doc.load()?;
        self.load(&text);
        Ok(())
    }

    /// Write the buffer to `doc` and mark it saved.
    ///
    /// # Errors
    ///
    /// Any [`FileError`](crate::FileError) from writing the document.
    pub fn save_document(&mut self, doc: &Document) -> FileResult<()> {
        doc.save(&self.buffer.contents())?;
        self.buffer.mark_saved();
        Ok(())
    }
}
