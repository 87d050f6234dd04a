//! # TitleBar Component
//!
//! The "shortyshorty" header. Clicking it goes to Home.
//!
//! ## Sizes
//!
//! On Home the header is tall: the name sits on the middle of three rows. On
//! About it collapses to a single row, so the page text gets the space.
//!
//! TitleBar is purely presentational apart from `link_area`, which records
//! where the name was drawn so the event loop can hit-test clicks against it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::Page;
use crate::tui::component::Component;
use crate::tui::components::ACCENT;

pub const TITLE: &str = "shortyshorty";

/// Header component.
///
/// # Props
///
/// - `page`: the active route, picks the tall or compact layout
///
/// # State
///
/// - `link_area`: where the title was last drawn
pub struct TitleBar {
    pub page: Page,
    pub link_area: Rect,
}

impl TitleBar {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            link_area: Rect::default(),
        }
    }

    /// Rows the header needs on `page`.
    pub fn height(page: Page) -> u16 {
        match page {
            Page::Home => 3,
            Page::About => 1,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line_area = match self.page {
            Page::Home => {
                let [_, middle, _] = Layout::vertical([
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ])
                .areas(area);
                middle
            }
            Page::About => area,
        };

        let style = match self.page {
            Page::Home => Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            Page::About => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        };

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(TITLE, style))).alignment(Alignment::Center),
            line_area,
        );

        let width = (TITLE.width() as u16).min(line_area.width);
        let x = line_area.x + (line_area.width - width) / 2;
        self.link_area = Rect::new(x, line_area.y, width, line_area.height.min(1));
    }
}
