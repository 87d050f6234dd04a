//! Cursor position and horizontal scrolling for the single-line InputBox.
//!
//! `CursorState` owns the cursor byte offset. All methods take `buffer: &str`
//! explicitly; the text is owned by `InputBox`.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Byte offset of the cursor, always on a char boundary.
pub(super) struct CursorState {
    pub pos: usize,
}

/// The slice of the buffer that fits on screen.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct Window {
    pub start: usize,
    pub end: usize,
    /// Cursor column relative to the window start.
    pub cursor_col: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self { pos: 0 }
    }

    /// Move to the end of `buffer` (after the buffer was replaced from outside).
    pub fn move_to_end(&mut self, buffer: &str) {
        self.pos = buffer.len();
    }

    pub fn left(&mut self, buffer: &str) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos = prev_char_boundary(buffer, self.pos);
        true
    }

    pub fn right(&mut self, buffer: &str) -> bool {
        if self.pos >= buffer.len() {
            return false;
        }
        self.pos = next_char_boundary(buffer, self.pos);
        true
    }

    /// Compute which part of `buffer` to show in `width` columns so the cursor
    /// stays visible. One column is kept free for the cursor at the end.
    pub fn window(&self, buffer: &str, width: u16) -> Window {
        let width = width as usize;
        if width == 0 {
            return Window { start: self.pos, end: self.pos, cursor_col: 0 };
        }

        let before = &buffer[..self.pos];
        let mut start = 0;
        while start < before.len() && before[start..].width() >= width {
            start = next_char_boundary(buffer, start);
        }

        let mut end = start;
        let mut used = 0;
        for (offset, ch) in buffer[start..].char_indices() {
            let w = ch.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            end = start + offset + ch.len_utf8();
        }

        Window {
            start,
            end,
            cursor_col: buffer[start..self.pos].width() as u16,
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
