//! # InputBox Component
//!
//! The URL field with its `shorten` button.
//!
//! ## Responsibilities
//!
//! - Capture text input (single line; pasted newlines are dropped)
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Emit `Submit` on Enter
//! - Draw the placeholder, the focus cursor, and the `shorten` button
//!
//! ## State Management
//!
//! The buffer mirrors `InputSession::current_text`. Edits happen here first and
//! are reported as `InputEvent::Changed(text)`; the event loop turns that into
//! `Action::TextChanged`. When the core changes the text on its own (after a
//! submission clears it), `sync()` pulls the new value back in.

mod cursor;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::BORDER;
use crate::tui::components::button::{button_span, button_width};
use crate::tui::event::TuiEvent;

use cursor::{CursorState, next_char_boundary, prev_char_boundary};

pub const PLACEHOLDER: &str = "Please enter a long URL...";
const SUBMIT_LABEL: &str = "shorten";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Text changed; carries the whole new value
    Changed(String),
    /// Enter pressed. Whether anything gets submitted is the core's call.
    Submit,
}

/// Text input component.
///
/// # Props
///
/// - `focused`: whether keystrokes go here (draws the cursor)
/// - `attached`: the history panel hangs below, so the bottom border is open
///
/// # State
///
/// - `buffer`: current text
/// - `cursor`: cursor byte offset
/// - `submit_area`: where the `shorten` button was last drawn
pub struct InputBox {
    pub buffer: String,
    pub focused: bool,
    pub attached: bool,
    pub submit_area: Rect,
    cursor: CursorState,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    /// Rows taken by the box (border + text line + border)
    pub const HEIGHT: u16 = 3;

    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: false,
            attached: false,
            submit_area: Rect::default(),
            cursor: CursorState::new(),
        }
    }

    /// Adopt `text` from the core if it differs (e.g. cleared after submit).
    pub fn sync(&mut self, text: &str) {
        if self.buffer != text {
            self.buffer = text.to_string();
            self.cursor.move_to_end(&self.buffer);
        }
    }

    fn insert_str(&mut self, text: &str) -> Option<InputEvent> {
        let clean: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
        if clean.is_empty() {
            return None;
        }
        self.buffer.insert_str(self.cursor.pos, &clean);
        self.cursor.pos += clean.len();
        Some(InputEvent::Changed(self.buffer.clone()))
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let borders = if self.attached {
            Borders::TOP | Borders::LEFT | Borders::RIGHT
        } else {
            Borders::ALL
        };
        let border_color = if self.focused { Color::White } else { BORDER };
        let block = Block::default()
            .borders(borders)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let submit_width = button_width(SUBMIT_LABEL);
        let [text_area, _gap, submit_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(submit_width),
        ])
        .areas(inner);
        self.submit_area = submit_area;

        if self.buffer.is_empty() {
            let placeholder = Paragraph::new(PLACEHOLDER)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC));
            frame.render_widget(placeholder, text_area);
        }

        let window = self.cursor.window(&self.buffer, text_area.width);
        if !self.buffer.is_empty() {
            let visible = &self.buffer[window.start..window.end];
            frame.render_widget(Span::raw(visible.to_string()), text_area);
        }

        frame.render_widget(button_span(SUBMIT_LABEL, true), submit_area);

        if self.focused {
            frame.set_cursor_position(Position::new(text_area.x + window.cursor_col, text_area.y));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => self.insert_str(c.encode_utf8(&mut [0; 4])),
            TuiEvent::Paste(text) => self.insert_str(text),
            TuiEvent::Backspace => {
                if self.cursor.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                Some(InputEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Delete => {
                if self.cursor.pos >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                Some(InputEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::CursorLeft => {
                self.cursor.left(&self.buffer);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor.right(&self.buffer);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor.pos = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor.move_to_end(&self.buffer);
                None
            }
            TuiEvent::Submit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}
