//! `(line, col)` coordinates of the cursor.
//!
//! The editor never stores a `Position`. The cursor lives as a char offset and
//! a `Position` is recomputed from the line index whenever a caller asks for
//! one, so it can never drift out of sync with the buffer.

use std::fmt;

/// Line and column, both counted from 0.
///
/// `col` counts chars from the line start. In `"naïve"` the `'v'` is at
/// column 3, and column 5 sits after the last char.
///
/// Field order makes the derived ordering line-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Status-bar form, counted from 1: `Ln 3, Col 8`.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ln {}, Col {}", self.line + 1, self.col + 1)
    }
}
