//! # About Page Component
//!
//! Static text, centered in the body.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;

#[derive(Default)]
pub struct AboutPage;

impl AboutPage {
    pub fn new() -> Self {
        Self
    }

    fn lines() -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                "About",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from("Paste a long URL, press Enter, copy the result."),
            Line::from("Past URLs stay in the dropdown until you quit."),
            Line::default(),
            Line::from(Span::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }
}

impl Component for AboutPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = Self::lines();
        let [text_area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, text_area);
    }
}
