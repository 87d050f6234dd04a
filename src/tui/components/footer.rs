//! # Footer Component
//!
//! A single link: "About" while on Home, "Home" while on About.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::Page;
use crate::tui::component::Component;
use crate::tui::components::MUTED;

pub struct Footer {
    pub page: Page,
    pub link_area: Rect,
}

impl Footer {
    pub const HEIGHT: u16 = 1;

    pub fn new(page: Page) -> Self {
        Self {
            page,
            link_area: Rect::default(),
        }
    }

    /// Text of the link for the current page.
    pub fn label(page: Page) -> &'static str {
        match page {
            Page::Home => "About",
            Page::About => "Home",
        }
    }
}

impl Component for Footer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let label = Self::label(self.page);
        let style = Style::default().fg(MUTED).add_modifier(Modifier::UNDERLINED);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(label, style))).alignment(Alignment::Center),
            area,
        );

        let width = (label.width() as u16).min(area.width);
        let x = area.x + (area.width - width) / 2;
        self.link_area = Rect::new(x, area.y, width, area.height.min(1));
    }
}
