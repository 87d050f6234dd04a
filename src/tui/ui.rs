use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};

use crate::Page;
use crate::core::state::RenderModel;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    AboutPage, CopyButtonState, Footer, HistoryPanel, HistoryPanelState, InputBox, LatestResult,
    TitleBar,
};

/// Widest the Home column gets on large terminals.
const MAX_CONTENT_WIDTH: u16 = 72;

/// Clickable areas from the last frame. Empty rects never match.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HitRegions {
    /// The input box (submit button included)
    pub input: Rect,
    /// Everything the Home view owns: input, open panel, latest-result row.
    /// Clicks outside it dismiss the panel.
    pub home: Rect,
    pub header_link: Rect,
    pub footer_link: Rect,
}

/// Draw one frame from `model`. Core state is never read directly.
pub fn draw_ui(frame: &mut Frame, model: &RenderModel, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([
        Length(TitleBar::height(tui.page)),
        Min(0),
        Length(Footer::HEIGHT),
    ]);
    let [header_area, body_area, footer_area] = layout.areas(frame.area());

    let mut hits = HitRegions::default();

    let mut title_bar = TitleBar::new(tui.page);
    title_bar.render(frame, header_area);
    hits.header_link = title_bar.link_area;

    match tui.page {
        Page::Home => draw_home(frame, body_area, model, tui, &mut hits),
        Page::About => {
            tui.history_panel.clear_hits();
            tui.latest.copy_button = None;
            AboutPage::new().render(frame, body_area);
        }
    }

    let mut footer = Footer::new(tui.page);
    footer.render(frame, footer_area);
    hits.footer_link = footer.link_area;

    tui.hits = hits;
    if let Some(binding) = &tui.home_binding {
        binding.set_region(hits.home);
    }
}

fn draw_home(
    frame: &mut Frame,
    area: Rect,
    model: &RenderModel,
    tui: &mut TuiState,
    hits: &mut HitRegions,
) {
    use Constraint::{Length, Min};

    let [column] = Layout::horizontal([Length(area.width.min(MAX_CONTENT_WIDTH))])
        .flex(Flex::Center)
        .areas(area);
    let [_, input_area, latest_area, _] = Layout::vertical([
        Length(1),
        Length(InputBox::HEIGHT),
        Length(LatestResult::HEIGHT),
        Min(0),
    ])
    .areas(column);

    let copy_state = CopyButtonState::from_model(model);
    let panel_visible = model.panel_visible;

    tui.input_box.attached = panel_visible;
    tui.input_box.render(frame, input_area);

    LatestResult::new(&mut tui.latest, model.latest_result.as_deref(), copy_state)
        .render(frame, latest_area);

    let mut home = input_area;
    if model.latest_result.is_some() {
        home = home.union(latest_area);
    }

    // The panel hangs off the input and covers whatever is below it
    if panel_visible {
        let top = input_area.bottom();
        let room = area.bottom().saturating_sub(top);
        let height = HistoryPanelState::height_for(model.history.len()).min(room);
        let panel_area = Rect::new(input_area.x, top, input_area.width, height);
        HistoryPanel::new(&mut tui.history_panel, &model.history, copy_state)
            .render(frame, panel_area);
        home = home.union(panel_area);
    } else {
        tui.history_panel.clear_hits();
    }

    hits.input = input_area;
    hits.home = home;
}
