//! Decoded editing commands.
//!
//! The input layer turns key events (and their modifiers) into one of these
//! values once. The engine never looks at key names: it dispatches with an
//! exhaustive `match` over [`Command`].

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// A decoded request for the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    /// Insert text at the cursor.
    Insert(String),

    /// Insert a line break at the cursor.
    NewLine,

    /// Move the cursor to an absolute char offset. Offsets past the end of
    /// the buffer are rejected, not clamped.
    MoveTo(usize),

    /// Move the cursor one step.
    Move(Direction),

    /// Jump to the first column of the cursor's line (Home).
    LineStart,

    /// Jump past the last char of the cursor's line (End).
    LineEnd,

    /// Delete the char before the cursor (Backspace).
    DeleteBackward,

    /// Delete the char under the cursor (Delete).
    DeleteForward,

    /// Delete the half-open range `[start, end)`.
    Delete { start: usize, end: usize },
}

impl Command {
    /// Shorthand for [`Command::Insert`].
    #[must_use]
    pub fn insert(text: impl Into<String>) -> Self {
        Self::Insert(text.into())
    }

    /// True for commands that can change the buffer text.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::Insert(_)
                | Self::NewLine
                | Self::DeleteBackward
                | Self::DeleteForward
                | Self::Delete { .. }
        )
    }
}

impl From<Direction> for Command {
    fn from(dir: Direction) -> Self {
        Self::Move(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_shorthand() {
        assert_eq!(Command::insert("hi"), Command::Insert("hi".to_string()));
    }

    #[test]
    fn direction_converts_to_move() {
        assert_eq!(Command::from(Direction::Up), Command::Move(Direction::Up));
    }

    #[test]
    fn edit_classification() {
        assert!(Command::insert("x").is_edit());
        assert!(Command::NewLine.is_edit());
        assert!(Command::DeleteBackward.is_edit());
        assert!(Command::Delete { start: 0, end: 1 }.is_edit());
        assert!(!Command::Move(Direction::Left).is_edit());
        assert!(!Command::MoveTo(3).is_edit());
        assert!(!Command::LineEnd.is_edit());
    }
}
