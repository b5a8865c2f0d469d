//! # vedit-core — the editing engine behind vedit
//!
//! This crate owns the editable state of one document and nothing else: no
//! windows, no fonts, no key codes. A front end decodes its input into
//! [`Command`]s, hands them to an [`Editor`], and reads back the visible lines
//! and the cursor position to draw.
//!
//! - **[`buffer`]** — `TextBuffer` wrapping a rope, edited by char offset
//! - **[`lines`]** — the line index: `\n`-delimited line boundaries
//! - **[`cursor`]** — the insertion point and its movement primitives
//! - **[`viewport`]** — the scrolling window that follows the cursor
//! - **[`editor`]** — the state object tying the three together
//! - **[`command`]** — the closed set of decoded commands
//! - **[`display`]** — tab expansion and display-column mapping
//! - **[`options`]** — engine configuration
//! - **[`file`]** — raw load/save of document text
//! - **[`position`]** — the derived `(line, col)` coordinate
//!
//! The engine is single-threaded and synchronous. Every call runs to
//! completion; callers that share an `Editor` across threads must bring their
//! own synchronisation.

pub mod buffer;
pub mod command;
pub mod cursor;
pub mod display;
pub mod editor;
pub mod error;
pub mod file;
pub mod lines;
pub mod options;
pub mod position;
pub mod viewport;

pub use buffer::TextBuffer;
pub use command::{Command, Direction};
pub use editor::Editor;
pub use error::{EditError, EditResult};
pub use file::{Document, FileError, FileResult};
pub use options::{OptionError, Options};
pub use position::Position;
