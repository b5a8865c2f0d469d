//! Error types for the editing engine.
//!
//! Nothing in the core is fatal. Every variant here is a reported, recoverable
//! rejection of a malformed request: the engine state is left exactly as it
//! was before the call.

use thiserror::Error;

/// Rejected edit or navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    /// An externally supplied char offset lies outside `[0, len]`.
    #[error("offset {offset} is out of range for a buffer of {len} chars")]
    OutOfRange { offset: usize, len: usize },

    /// A line number at or past the line count.
    #[error("line {line} is out of range (buffer has {line_count} lines)")]
    LineOutOfRange { line: usize, line_count: usize },
}

pub type EditResult<T> = Result<T, EditError>;
