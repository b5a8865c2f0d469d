//! Viewport — the window of lines presented to the renderer.
//!
//! A `Viewport` holds only scroll state: the first visible line and how many
//! lines fit. It does not own the buffer or cursor; callers pass the cursor's
//! line in after every cursor-affecting operation and the viewport scrolls the
//! minimum distance needed to keep that line on screen.
//!
//! ```text
//!   buffer lines        viewport (visible_lines = 4)
//!   ┌──────────┐
//!   │ line 0   │
//!   │ line 1   │  ◀── scroll_offset
//!   │ line 2   │   │
//!   │ line 3   │   │  cursor line must be in here
//!   │ line 4   │  ─┘
//!   │ line 5   │
//!   └──────────┘
//! ```

use std::ops::Range;

use crate::position::Position;

/// Default number of visible lines when the renderer has not said otherwise.
pub const DEFAULT_VISIBLE_LINES: usize = 20;

/// Vertical scroll state for one view of a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// First visible buffer line (0-indexed).
    scroll_offset: usize,

    /// Number of lines the renderer can show. Never 0.
    visible_lines: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBLE_LINES)
    }
}

impl Viewport {
    /// A viewport scrolled to the top. A capacity of 0 is raised to 1 so the
    /// cursor line always has somewhere to be.
    #[must_use]
    pub fn new(visible_lines: usize) -> Self {
        Self {
            scroll_offset: 0,
            visible_lines: visible_lines.max(1),
        }
    }

    // -- Accessors ----------------------------------------------------------

    /// First visible buffer line.
    #[inline]
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Capacity of the viewport in lines.
    #[inline]
    #[must_use]
    pub const fn visible_lines(&self) -> usize {
        self.visible_lines
    }

    /// True when `line` is inside `[scroll_offset, scroll_offset + visible_lines)`.
    #[inline]
    #[must_use]
    pub const fn contains(&self, line: usize) -> bool {
        line >= self.scroll_offset && line < self.scroll_offset.saturating_add(self.visible_lines)
    }

    /// Lines to draw: `[scroll_offset, min(scroll_offset + visible_lines,
    /// line_count))`. Empty if the buffer shrank above the scroll offset.
    #[must_use]
    pub fn visible_range(&self, line_count: usize) -> Range<usize> {
        let end = self
            .scroll_offset
            .saturating_add(self.visible_lines)
            .min(line_count);
        self.scroll_offset.min(end)..end
    }

    /// Translate a buffer position into viewport coordinates: the row is
    /// relative to the first visible line. `None` when the line is scrolled
    /// out of view.
    #[must_use]
    pub const fn to_view(&self, pos: Position) -> Option<Position> {
        if self.contains(pos.line) {
            Some(Position::new(pos.line - self.scroll_offset, pos.col))
        } else {
            None
        }
    }

    // -- Scrolling ----------------------------------------------------------

    /// Scroll the minimum amount that brings `cursor_line` into view.
    /// Returns `true` if the scroll offset changed.
    pub fn ensure_visible(&mut self, cursor_line: usize) -> bool {
        let before = self.scroll_offset;

        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset.saturating_add(self.visible_lines) {
            self.scroll_offset = cursor_line - self.visible_lines + 1;
        }

        if self.scroll_offset != before {
            tracing::trace!(
                from = before,
                to = self.scroll_offset,
                cursor_line,
                "viewport scrolled"
            );
        }
        self.scroll_offset != before
    }

    /// Change the capacity (minimum 1) and re-scroll around `cursor_line`.
    pub fn resize(&mut self, visible_lines: usize, cursor_line: usize) {
        self.visible_lines = visible_lines.max(1);
        self.ensure_visible(cursor_line);
    }

    /// Jump back to the first line.
    pub const fn reset(&mut self) {
        self.scroll_offset = 0;
    }
}
