//! Button rendering helpers shared by the input, panel and latest-result row.

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::state::RenderModel;
use crate::tui::components::BUTTON;

/// What a Copy button looks like right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyButtonState {
    Ready,
    /// Write in flight. Disabled.
    Busy,
    /// Indicator showing. Disabled.
    Copied,
}

impl CopyButtonState {
    pub fn from_model(model: &RenderModel) -> Self {
        if model.is_copy_feedback_active {
            CopyButtonState::Copied
        } else if model.is_copy_busy {
            CopyButtonState::Busy
        } else {
            CopyButtonState::Ready
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CopyButtonState::Ready | CopyButtonState::Busy => "Copy",
            CopyButtonState::Copied => "Copied!",
        }
    }

    pub fn enabled(self) -> bool {
        self == CopyButtonState::Ready
    }
}

/// `[label]`, dimmed when disabled.
pub fn button_span(label: &str, enabled: bool) -> Span<'static> {
    let style = if enabled {
        Style::default().fg(BUTTON).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(BUTTON).add_modifier(Modifier::DIM)
    };
    Span::styled(format!("[{label}]"), style)
}

/// Columns taken by `button_span(label, _)`.
pub fn button_width(label: &str) -> u16 {
    label.width() as u16 + 2
}

/// Cut `text` to at most `max_width` columns, ending in "…" if anything was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        // Leave one column for the ellipsis
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
