//! # Latest Result Component
//!
//! One row under the input showing the most recent submission and a Copy
//! button. Hidden until something has been submitted. Deleting history
//! entries does not affect it.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::tui::component::Component;
use crate::tui::components::button::{CopyButtonState, button_span, button_width, truncate_to_width};

/// Persistent state: where the Copy button was last drawn.
#[derive(Debug, Default)]
pub struct LatestResultState {
    pub copy_button: Option<Rect>,
}

impl LatestResultState {
    pub fn hits_copy(&self, column: u16, row: u16) -> bool {
        self.copy_button
            .is_some_and(|rect| rect.contains(Position::new(column, row)))
    }
}

/// Transient render wrapper.
pub struct LatestResult<'a> {
    state: &'a mut LatestResultState,
    url: Option<&'a str>,
    copy_state: CopyButtonState,
}

impl<'a> LatestResult<'a> {
    /// Rows taken by the component (text line with a blank line above and below)
    pub const HEIGHT: u16 = 3;

    pub fn new(
        state: &'a mut LatestResultState,
        url: Option<&'a str>,
        copy_state: CopyButtonState,
    ) -> Self {
        Self {
            state,
            url,
            copy_state,
        }
    }
}

impl Component for LatestResult<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.copy_button = None;
        let Some(url) = self.url else {
            return;
        };

        let [_, line, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let label = self.copy_state.label();
        let [_pad, url_area, copy_area, _end] = Layout::horizontal([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(button_width(label)),
            Constraint::Length(1),
        ])
        .areas(line);

        let shown = truncate_to_width(url, url_area.width.saturating_sub(1) as usize);
        frame.render_widget(
            Span::styled(shown, Style::default().add_modifier(Modifier::BOLD)),
            url_area,
        );
        frame.render_widget(button_span(label, self.copy_state.enabled()), copy_area);
        self.state.copy_button = Some(copy_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(state: &mut LatestResultState, url: Option<&str>, copy_state: CopyButtonState) -> String {
        let backend = TestBackend::new(50, LatestResult::HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| LatestResult::new(state, url, copy_state).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_hidden_without_result() {
        let mut state = LatestResultState::default();
        let text = draw(&mut state, None, CopyButtonState::Ready);
        assert!(text.trim().is_empty());
        assert!(state.copy_button.is_none());
        assert!(!state.hits_copy(0, 1));
    }

    #[test]
    fn test_shows_url_and_copy_button() {
        let mut state = LatestResultState::default();
        let text = draw(&mut state, Some("https://example.com/b"), CopyButtonState::Ready);
        assert!(text.contains("https://example.com/b"));
        assert!(text.contains("[Copy]"));

        let button = state.copy_button.unwrap();
        assert_eq!(button.y, 1);
        assert!(state.hits_copy(button.x, 1));
        assert!(!state.hits_copy(0, 1));
    }

    #[test]
    fn test_copied_label() {
        let mut state = LatestResultState::default();
        let text = draw(&mut state, Some("https://example.com/b"), CopyButtonState::Copied);
        assert!(text.contains("[Copied!]"));
    }
}
