//! # History Panel Component
//!
//! Dropdown under the input listing past submissions, newest first. Each row
//! has a Copy and a Delete button.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `HistoryPanelState` lives in `TuiState` (selection, scroll, hit rects)
//! - `HistoryPanel` is created each frame with borrowed state and props
//!
//! Positions recorded in the hit rects are the positions at render time. A
//! click can arrive after the history changed; the core treats stale
//! positions as no-ops.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Clear};

use crate::tui::component::Component;
use crate::tui::components::BORDER;
use crate::tui::components::button::{CopyButtonState, button_span, button_width, truncate_to_width};

const DELETE_LABEL: &str = "Delete";

/// Rows shown before the panel scrolls.
pub const MAX_VISIBLE_ROWS: usize = 6;

/// What a click in the panel landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelHit {
    Copy(usize),
    Delete(usize),
    Row(usize),
}

#[derive(Debug, Clone, Copy)]
struct RowHit {
    position: usize,
    row: Rect,
    copy: Rect,
    delete: Rect,
}

/// Persistent state for the history panel.
#[derive(Debug, Default)]
pub struct HistoryPanelState {
    /// Keyboard selection (Up/Down), as a history position
    pub selected: Option<usize>,
    /// First visible position
    pub offset: usize,
    /// Where the panel was last drawn (None = not drawn)
    pub area: Option<Rect>,
    rows: Vec<RowHit>,
}

impl HistoryPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows needed to draw `entries` (bottom border included).
    pub fn height_for(entries: usize) -> u16 {
        entries.min(MAX_VISIBLE_ROWS) as u16 + 1
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        });
    }

    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => i.saturating_sub(1),
            None => len - 1,
        });
    }

    /// Keep the selection inside `len` entries after a delete.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            self.offset = 0;
        } else if let Some(i) = self.selected {
            self.selected = Some(i.min(len - 1));
        }
        self.offset = self.offset.min(len.saturating_sub(1));
    }

    /// Forget selection and hit rects (panel closed).
    pub fn reset(&mut self) {
        self.selected = None;
        self.offset = 0;
        self.clear_hits();
    }

    pub fn clear_hits(&mut self) {
        self.area = None;
        self.rows.clear();
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<PanelHit> {
        let position = Position::new(column, row);
        self.rows.iter().find_map(|hit| {
            if hit.copy.contains(position) {
                Some(PanelHit::Copy(hit.position))
            } else if hit.delete.contains(position) {
                Some(PanelHit::Delete(hit.position))
            } else if hit.row.contains(position) {
                Some(PanelHit::Row(hit.position))
            } else {
                None
            }
        })
    }

    fn scroll_into_view(&mut self, visible_rows: usize) {
        let Some(selected) = self.selected else {
            return;
        };
        if selected < self.offset {
            self.offset = selected;
        } else if visible_rows > 0 && selected >= self.offset + visible_rows {
            self.offset = selected + 1 - visible_rows;
        }
    }
}

/// Transient render wrapper for the history panel.
pub struct HistoryPanel<'a> {
    state: &'a mut HistoryPanelState,
    entries: &'a [String],
    copy_state: CopyButtonState,
}

impl<'a> HistoryPanel<'a> {
    pub fn new(
        state: &'a mut HistoryPanelState,
        entries: &'a [String],
        copy_state: CopyButtonState,
    ) -> Self {
        Self {
            state,
            entries,
            copy_state,
        }
    }
}

impl Component for HistoryPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.rows.clear();
        self.state.area = Some(area);

        // Drawn over whatever is below the input
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let visible_rows = inner.height as usize;
        self.state.clamp(self.entries.len());
        self.state.scroll_into_view(visible_rows);

        let copy_label = self.copy_state.label();
        let copy_enabled = self.copy_state.enabled();

        let rows = self
            .entries
            .iter()
            .enumerate()
            .skip(self.state.offset)
            .take(visible_rows);

        for (line, (position, url)) in rows.enumerate() {
            let row = Rect::new(inner.x, inner.y + line as u16, inner.width, 1);
            let [url_area, copy_area, _gap, delete_area] = Layout::horizontal([
                Constraint::Min(0),
                Constraint::Length(button_width(copy_label)),
                Constraint::Length(1),
                Constraint::Length(button_width(DELETE_LABEL)),
            ])
            .areas(row);

            let url_style = if self.state.selected == Some(position) {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            let shown = truncate_to_width(url, url_area.width.saturating_sub(1) as usize);
            frame.render_widget(Span::styled(shown, url_style), url_area);
            frame.render_widget(button_span(copy_label, copy_enabled), copy_area);
            frame.render_widget(button_span(DELETE_LABEL, true), delete_area);

            self.state.rows.push(RowHit {
                position,
                row,
                copy: copy_area,
                delete: delete_area,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn urls(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://example.com/{i}")).collect()
    }

    fn draw(
        state: &mut HistoryPanelState,
        entries: &[String],
        copy_state: CopyButtonState,
        width: u16,
        height: u16,
    ) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| HistoryPanel::new(state, entries, copy_state).render(f, f.area()))
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
    fn test_height_for_caps_rows() {
        assert_eq!(HistoryPanelState::height_for(1), 2);
        assert_eq!(HistoryPanelState::height_for(50), MAX_VISIBLE_ROWS as u16 + 1);
    }

    #[test]
    fn test_render_rows_and_buttons() {
        let entries = urls(2);
        let mut state = HistoryPanelState::new();
        let text = draw(&mut state, &entries, CopyButtonState::Ready, 60, 3);

        assert!(text.contains("https://example.com/0"));
        assert!(text.contains("https://example.com/1"));
        assert!(text.contains("[Copy]"));
        assert!(text.contains("[Delete]"));
        assert_eq!(state.rows.len(), 2);
    }

    #[test]
    fn test_render_copied_label_while_active() {
        let entries = urls(1);
        let mut state = HistoryPanelState::new();
        let text = draw(&mut state, &entries, CopyButtonState::Copied, 60, 2);
        assert!(text.contains("[Copied!]"));
    }

    #[test]
    fn test_hit_test_buttons_and_rows() {
        let entries = urls(2);
        let mut state = HistoryPanelState::new();
        draw(&mut state, &entries, CopyButtonState::Ready, 60, 3);

        let second = state.rows[1];
        assert_eq!(
            state.hit_test(second.copy.x, second.copy.y),
            Some(PanelHit::Copy(1))
        );
        assert_eq!(
            state.hit_test(second.delete.x + 2, second.delete.y),
            Some(PanelHit::Delete(1))
        );
        assert_eq!(
            state.hit_test(second.row.x, second.row.y),
            Some(PanelHit::Row(1))
        );
        // Bottom border is inside the panel but hits nothing
        assert_eq!(state.hit_test(5, 2), None);
    }

    #[test]
    fn test_clear_hits() {
        let entries = urls(1);
        let mut state = HistoryPanelState::new();
        draw(&mut state, &entries, CopyButtonState::Ready, 60, 2);
        state.clear_hits();
        assert_eq!(state.hit_test(1, 0), None);
        assert!(state.area.is_none());
    }

    #[test]
    fn test_selection_moves_and_clamps() {
        let mut state = HistoryPanelState::new();
        state.select_next(3);
        assert_eq!(state.selected, Some(0));
        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.selected, Some(2));
        state.select_prev(3);
        assert_eq!(state.selected, Some(1));

        state.clamp(1);
        assert_eq!(state.selected, Some(0));
        state.clamp(0);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_select_prev_from_nothing_picks_last() {
        let mut state = HistoryPanelState::new();
        state.select_prev(4);
        assert_eq!(state.selected, Some(3));
    }

    #[test]
    fn test_scrolls_to_selected_row() {
        let entries = urls(10);
        let mut state = HistoryPanelState::new();
        state.selected = Some(8);
        // 3 rows of content + bottom border
        let text = draw(&mut state, &entries, CopyButtonState::Ready, 60, 4);

        assert!(text.contains("https://example.com/8"));
        assert!(!text.contains("https://example.com/0"));
        assert_eq!(state.offset, 6);
        assert_eq!(state.rows.first().map(|r| r.position), Some(6));
    }
}
