//! Display-column mapping for the renderer.
//!
//! The buffer counts columns in chars. A renderer counts cells: tabs expand to
//! the next tab stop and wide (CJK) characters take two cells. These helpers
//! do that translation without knowing anything about fonts or pixels.

use unicode_width::UnicodeWidthChar;

/// Default tab stop width.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Convert a char column to a display column.
///
/// Walks `chars` up to `char_col`, expanding tabs to the next multiple of
/// `tab_width` and counting wide characters as two cells. Stops early at a
/// `\n` or when the characters run out.
#[must_use]
pub fn char_col_to_display_col<I: Iterator<Item = char>>(
    chars: I,
    char_col: usize,
    tab_width: usize,
) -> usize {
    let tab_w = tab_width.max(1);
    let mut display_col = 0;

    for (i, ch) in chars.enumerate() {
        if i >= char_col {
            break;
        }
        match ch {
            '\n' => break,
            '\t' => display_col = (display_col / tab_w + 1) * tab_w,
            _ => display_col += ch.width().unwrap_or(0),
        }
    }

    display_col
}

/// Replace each tab with spaces up to the next tab stop.
#[must_use]
pub fn expand_tabs(line: &str, tab_width: usize) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }

    let tab_w = tab_width.max(1);
    let mut out = String::with_capacity(line.len() + tab_w);
    let mut display_col = 0;

    for ch in line.chars() {
        if ch == '\t' {
            let next_stop = (display_col / tab_w + 1) * tab_w;
            out.extend(std::iter::repeat_n(' ', next_stop - display_col));
            display_col = next_stop;
        } else {
            out.push(ch);
            display_col += ch.width().unwrap_or(0);
        }
    }

    out
}
