//! End-to-end editing sessions driven through `Editor::apply`.
//!
//! These exercise the engine the way a front end does: a stream of decoded
//! commands in, visible lines and cursor position out.

use pretty_assertions::assert_eq;
use vedit_core::{Command, Direction, EditError, Editor, Options, Position};

fn editor_with(text: &str, visible_lines: usize) -> Editor {
    Editor::from_text(
        text,
        Options {
            visible_lines,
            ..Options::default()
        },
    )
}

fn thirty_lines() -> String {
    (1..=30)
        .map(|n| format!("row {n:02}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn check_invariants(ed: &Editor, context: &str) {
    let len = ed.buffer().len_chars();
    assert!(ed.cursor() <= len, "{context}: cursor {} > len {len}", ed.cursor());

    let line = ed.cursor_position().line;
    let top = ed.scroll_offset();
    assert!(
        line >= top && line < top.saturating_add(ed.visible_line_count()),
        "{context}: cursor line {line} outside [{top}, {})",
        top.saturating_add(ed.visible_line_count())
    );
    assert!(ed.cursor_in_view().is_some(), "{context}");
    assert_eq!(ed.lines().join("\n"), ed.contents(), "{context}");
}

// -- Scenarios -------------------------------------------------------------

#[test]
fn typing_into_an_empty_buffer() {
    let mut ed = Editor::new();
    ed.apply(Command::insert("hello")).unwrap();
    assert_eq!(ed.contents(), "hello");
    assert_eq!(ed.cursor(), 5);
}

#[test]
fn arrow_down_keeps_column() {
    let mut ed = editor_with("ab\ncd", 20);
    ed.apply(Command::MoveTo(1)).unwrap();
    ed.apply(Command::Move(Direction::Down)).unwrap();
    assert_eq!(ed.cursor(), 4);
    assert_eq!(ed.cursor_position(), Position::new(1, 1));
}

#[test]
fn backspace_at_end() {
    let mut ed = editor_with("abc", 20);
    ed.apply(Command::MoveTo(3)).unwrap();
    ed.apply(Command::DeleteBackward).unwrap();
    assert_eq!(ed.contents(), "ab");
    assert_eq!(ed.cursor(), 2);
}

#[test]
fn jumping_deep_into_a_long_buffer_scrolls() {
    let mut ed = editor_with(&thirty_lines(), 20);
    let target = ed.buffer().line_start(25).unwrap();
    ed.apply(Command::MoveTo(target)).unwrap();

    assert_eq!(ed.scroll_offset(), 6);
    let visible = ed.visible_lines();
    assert_eq!(visible.len(), 20);
    assert_eq!(visible.first().map(String::as_str), Some("row 07"));
    assert_eq!(visible.last().map(String::as_str), Some("row 26"));
}

#[test]
fn inverted_delete_changes_nothing() {
    let mut ed = editor_with("abcdefgh", 20);
    ed.apply(Command::MoveTo(2)).unwrap();
    ed.apply(Command::Delete { start: 5, end: 3 }).unwrap();
    assert_eq!(ed.contents(), "abcdefgh");
    assert_eq!(ed.cursor(), 2);

    // Also on a buffer shorter than the bounds.
    let mut ed = editor_with("ab", 20);
    ed.apply(Command::Delete { start: 5, end: 3 }).unwrap();
    assert_eq!(ed.contents(), "ab");
}

// -- Properties ------------------------------------------------------------

#[test]
fn delete_then_reinsert_restores_buffer() {
    let text = "first line\nsecond\n\tthird 日本\nlast";
    let len = text.chars().count();

    for start in 0..=len {
        for end in start..=len {
            let mut ed = editor_with(text, 3);
            let slice = ed.buffer().slice(start, end).unwrap();

            ed.apply(Command::Delete { start, end }).unwrap();
            ed.apply(Command::Insert(slice.clone())).unwrap();

            assert_eq!(ed.contents(), text, "range {start}..{end}");
            assert_eq!(ed.cursor(), start + slice.chars().count(), "range {start}..{end}");
            check_invariants(&ed, "round trip");
        }
    }
}

#[test]
fn clamped_moves_land_on_the_ends() {
    let mut ed = editor_with("abc\ndef", 20);
    for pos in [-1, -2, -1000, isize::MIN] {
        ed.move_cursor(pos);
        assert_eq!(ed.cursor(), 0);
    }
    for pos in [8, 9, 1000, isize::MAX] {
        ed.move_cursor(pos);
        assert_eq!(ed.cursor(), 7);
    }
}

#[test]
fn vertical_moves_at_the_edges_change_nothing() {
    let mut ed = editor_with(&thirty_lines(), 20);
    ed.apply(Command::MoveTo(3)).unwrap();
    let before = (ed.cursor(), ed.scroll_offset(), ed.contents());
    ed.apply(Command::Move(Direction::Up)).unwrap();
    assert_eq!((ed.cursor(), ed.scroll_offset(), ed.contents()), before);

    ed.move_cursor(isize::MAX);
    ed.apply(Command::LineStart).unwrap();
    let before = (ed.cursor(), ed.scroll_offset(), ed.contents());
    ed.apply(Command::Move(Direction::Down)).unwrap();
    assert_eq!((ed.cursor(), ed.scroll_offset(), ed.contents()), before);
}

#[test]
fn external_offsets_past_the_end_are_reported() {
    let mut ed = editor_with("abc", 20);
    ed.apply(Command::MoveTo(1)).unwrap();

    assert_eq!(
        ed.apply(Command::MoveTo(4)),
        Err(EditError::OutOfRange { offset: 4, len: 3 })
    );
    assert_eq!(
        ed.apply(Command::Delete { start: 2, end: 4 }),
        Err(EditError::OutOfRange { offset: 4, len: 3 })
    );
    assert_eq!(ed.contents(), "abc");
    assert_eq!(ed.cursor(), 1);
}

/// Deterministic command stream (xorshift) so failures are reproducible.
struct Script(u64);

impl Script {
    fn advance(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn command(&mut self, len: usize) -> Command {
        let len = u64::try_from(len).unwrap();
        match self.advance() % 12 {
            0 | 1 => Command::insert("xy"),
            2 | 3 => Command::NewLine,
            4 => Command::Move(Direction::Left),
            5 => Command::Move(Direction::Right),
            6 => Command::Move(Direction::Up),
            7 => Command::Move(Direction::Down),
            8 => Command::DeleteBackward,
            9 => Command::DeleteForward,
            10 => Command::MoveTo(usize::try_from(self.advance() % (len + 1)).unwrap()),
            _ => {
                let a = usize::try_from(self.advance() % (len + 1)).unwrap();
                let b = usize::try_from(self.advance() % (len + 1)).unwrap();
                Command::Delete { start: a, end: b }
            }
        }
    }
}

#[test]
fn invariants_hold_across_a_long_session() {
    for (seed, visible) in [(0x9E37_79B9_7F4A_7C15_u64, 4), (42, 1), (7, 20)] {
        let mut ed = editor_with("", visible);
        let mut script = Script(seed);

        for step in 0..2_000 {
            let cmd = script.command(ed.buffer().len_chars());
            let label = format!("seed {seed:#x} step {step} {cmd:?}");
            ed.apply(cmd).unwrap();
            check_invariants(&ed, &label);
        }
    }
}

#[test]
fn resizing_the_viewport_keeps_the_cursor_visible() {
    let mut ed = editor_with(&thirty_lines(), 20);
    ed.move_cursor(isize::MAX);
    for visible in [1, 2, 5, 29, 30, 100, usize::MAX, 3] {
        ed.set_visible_line_count(visible);
        check_invariants(&ed, &format!("visible {visible}"));
    }
}

#[test]
fn display_output_for_the_renderer() {
    let mut ed = Editor::from_text("\tfn main() {}\n", Options::parse("ts=2 vl=5").unwrap());
    ed.apply(Command::LineEnd).unwrap();

    assert_eq!(ed.display_lines(), vec!["  fn main() {}", ""]);
    assert_eq!(ed.cursor_position(), Position::new(0, 13));
    assert_eq!(ed.cursor_display_col(), 14);
    assert_eq!(ed.cursor_in_view(), Some(Position::new(0, 13)));
}
