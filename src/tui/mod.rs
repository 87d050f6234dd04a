//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Background Work
//!
//! Clipboard writes and the feedback reset timer run as tokio tasks. They send
//! their result back over an `mpsc` channel, and the loop drains it after
//! every batch of terminal events. Core state is therefore only ever touched
//! from this thread, one action at a time.
//!
//! Outside-click dismissal does not go through the channel. The binding only
//! raises a flag, and the click handler applies the dismissal before routing
//! the rest of that click, so later events in the same batch see it.
//!
//! ## Redraw Strategy
//!
//! Draws only after something happened (terminal event or channel action).
//! While a copy cycle is running the poll timeout drops to 100ms so the
//! "Copied!" label clears close to on time; otherwise it idles at 500ms.

mod component;
mod components;
mod event;
pub mod outside_click;
mod ui;

use log::{debug, info, warn};
use std::cell::Cell;
use std::io::stdout;
use std::rc::Rc;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::layout::Position;

use crate::core::action::{Action, CopyTarget, Effect, update};
use crate::core::clipboard::{Clipboard, MemoryClipboard, SystemClipboard, expire_after, write_and_report};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, RenderModel};
use crate::tui::component::EventHandler;
use crate::tui::components::{HistoryPanelState, InputBox, InputEvent, LatestResultState, PanelHit};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::outside_click::{OutsideClickDetector, OutsideClickGuard};
use crate::tui::ui::HitRegions;
use crate::{ClipboardBackend, Page};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub page: Page,
    // Persistent component states
    pub input_box: InputBox,
    pub history_panel: HistoryPanelState,
    pub latest: LatestResultState,
    /// Clickable areas from the last frame
    pub hits: HitRegions,
    pub outside_click: OutsideClickDetector,
    /// Alive while Home is mounted
    pub home_binding: Option<OutsideClickGuard>,
    /// Raised by the Home binding, taken by the click handler
    outside_dismissed: Rc<Cell<bool>>,
}

impl TuiState {
    pub fn new(page: Page) -> Self {
        let mut tui = Self {
            page,
            input_box: InputBox::new(),
            history_panel: HistoryPanelState::new(),
            latest: LatestResultState::default(),
            hits: HitRegions::default(),
            outside_click: OutsideClickDetector::new(),
            home_binding: None,
            outside_dismissed: Rc::new(Cell::new(false)),
        };
        if page == Page::Home {
            tui.mount_home();
        }
        tui
    }

    /// Bind outside-click dismissal for the Home view. The region is filled in
    /// after the first draw.
    fn mount_home(&mut self) {
        let dismissed = Rc::clone(&self.outside_dismissed);
        let guard = self
            .outside_click
            .bind(Default::default(), move || dismissed.set(true));
        self.home_binding = Some(guard);
    }

    fn unmount_home(&mut self) {
        self.home_binding = None;
        self.outside_dismissed.set(false);
        self.input_box.focused = false;
        self.history_panel.reset();
        self.latest.copy_button = None;
    }

    /// Pull core state into the component states before drawing.
    pub fn sync(&mut self, model: &RenderModel) {
        self.input_box.sync(&model.current_text);
        if model.panel_visible {
            self.history_panel.clamp(model.history.len());
        } else {
            self.history_panel.reset();
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Build the clipboard for the configured backend.
pub fn build_clipboard(backend: ClipboardBackend) -> Arc<dyn Clipboard> {
    match backend {
        ClipboardBackend::System => Arc::new(SystemClipboard::new()),
        ClipboardBackend::Memory => Arc::new(MemoryClipboard::new()),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let clipboard = build_clipboard(config.clipboard_backend);
    info!("Using {} clipboard", clipboard.name());
    let mut app = App::from_config(clipboard, &config);

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut tui = TuiState::new(config.start_page);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            let model = app.render_model();
            tui.sync(&model);
            terminal.draw(|f| ui::draw_ui(f, &model, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if app.copy_feedback.is_busy() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, event, &tx) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Copy results, reset timers
        match drain_actions(&mut app, &rx, &tx) {
            (_, true) => break,
            (true, false) => needs_redraw = true,
            (false, false) => {}
        }
    }

    ratatui::restore();
    info!("Exiting");
    Ok(())
}

/// Run `action` through the core and carry out the effect. Returns `true` to quit.
fn dispatch(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    match update(app, action) {
        Effect::None => false,
        Effect::Quit => true,
        Effect::CopyToClipboard { text, cycle } => {
            spawn_copy(app.clipboard.clone(), text, cycle, tx.clone());
            false
        }
        Effect::ScheduleFeedbackReset { cycle, after } => {
            spawn_feedback_reset(after, cycle, tx.clone());
            false
        }
    }
}

/// Apply everything queued on the channel. Returns (anything applied, quit).
fn drain_actions(
    app: &mut App,
    rx: &mpsc::Receiver<Action>,
    tx: &mpsc::Sender<Action>,
) -> (bool, bool) {
    let mut applied = false;
    while let Ok(action) = rx.try_recv() {
        applied = true;
        debug!("Event loop received: {:?}", action);
        if dispatch(app, action, tx) {
            return (applied, true);
        }
    }
    (applied, false)
}

fn spawn_copy(clipboard: Arc<dyn Clipboard>, text: String, cycle: u64, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        let action = write_and_report(clipboard, text, cycle).await;
        if tx.send(action).is_err() {
            warn!("Failed to send copy result (cycle {cycle}): receiver dropped");
        }
    });
}

fn spawn_feedback_reset(after: Duration, cycle: u64, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        let action = expire_after(after, cycle).await;
        if tx.send(action).is_err() {
            warn!("Failed to send feedback reset (cycle {cycle}): receiver dropped");
        }
    });
}

/// Switch pages. Leaving Home releases its outside-click binding.
fn navigate(app: &mut App, tui: &mut TuiState, page: Page, tx: &mpsc::Sender<Action>) -> bool {
    if tui.page == page {
        return false;
    }
    info!("Navigating to {page:?}");
    tui.page = page;
    match page {
        Page::Home => {
            tui.mount_home();
            dispatch(app, Action::PageActivated(true), tx)
        }
        Page::About => {
            tui.unmount_home();
            dispatch(app, Action::PageActivated(false), tx)
        }
    }
}

fn focus_input(app: &mut App, tui: &mut TuiState, tx: &mpsc::Sender<Action>) -> bool {
    tui.input_box.focused = true;
    dispatch(app, Action::Focused, tx)
}

/// Handle one terminal event. Returns `true` to quit.
fn handle_event(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match event {
        TuiEvent::ForceQuit => return dispatch(app, Action::Quit, tx),
        TuiEvent::ToggleAbout => {
            let page = tui.page.toggled();
            return navigate(app, tui, page, tx);
        }
        TuiEvent::Resize => return false,
        TuiEvent::MouseDown(column, row) => return handle_click(app, tui, column, row, tx),
        _ => {}
    }

    if tui.page != Page::Home {
        return false;
    }

    match event {
        TuiEvent::FocusInput => focus_input(app, tui, tx),
        TuiEvent::Escape => {
            tui.input_box.focused = false;
            dispatch(app, Action::OutsideDismiss, tx)
        }
        TuiEvent::CursorUp | TuiEvent::CursorDown => {
            if app.panel_visible() {
                let len = app.history.len();
                if event == TuiEvent::CursorUp {
                    tui.history_panel.select_prev(len);
                } else {
                    tui.history_panel.select_next(len);
                }
            }
            false
        }
        TuiEvent::CopySelected => {
            let target = match tui.history_panel.selected {
                Some(position) if app.panel_visible() => CopyTarget::Entry(position),
                _ => CopyTarget::Latest,
            };
            dispatch(app, Action::CopyRequested(target), tx)
        }
        TuiEvent::DeleteSelected => match tui.history_panel.selected {
            Some(position) if app.panel_visible() => {
                dispatch(app, Action::DeleteRequested(position), tx)
            }
            _ => false,
        },
        _ => {
            // Typing into an unfocused field focuses it first
            if !tui.input_box.focused {
                if !matches!(event, TuiEvent::InputChar(_) | TuiEvent::Paste(_)) {
                    return false;
                }
                if focus_input(app, tui, tx) {
                    return true;
                }
            }
            match tui.input_box.handle_event(&event) {
                Some(InputEvent::Changed(text)) => dispatch(app, Action::TextChanged(text), tx),
                Some(InputEvent::Submit) => dispatch(app, Action::Submitted, tx),
                None => false,
            }
        }
    }
}

fn handle_click(
    app: &mut App,
    tui: &mut TuiState,
    column: u16,
    row: u16,
    tx: &mpsc::Sender<Action>,
) -> bool {
    let position = Position::new(column, row);

    // Dismiss first, so the rest of this click and any later event see it
    tui.outside_click.pointer_down(column, row);
    if tui.outside_dismissed.take() {
        tui.input_box.focused = false;
        if dispatch(app, Action::OutsideDismiss, tx) {
            return true;
        }
    }

    if tui.hits.header_link.contains(position) {
        return navigate(app, tui, Page::Home, tx);
    }
    if tui.hits.footer_link.contains(position) {
        let page = tui.page.toggled();
        return navigate(app, tui, page, tx);
    }
    if tui.page != Page::Home {
        return false;
    }
    if !tui.hits.home.contains(position) {
        return false;
    }

    // The panel is drawn on top, so it wins over the latest row beneath it
    if let Some(area) = tui.history_panel.area
        && area.contains(position)
    {
        return match tui.history_panel.hit_test(column, row) {
            Some(PanelHit::Copy(i)) => dispatch(app, Action::CopyRequested(CopyTarget::Entry(i)), tx),
            Some(PanelHit::Delete(i)) => dispatch(app, Action::DeleteRequested(i), tx),
            Some(PanelHit::Row(i)) => {
                tui.history_panel.selected = Some(i);
                false
            }
            None => false,
        };
    }
    if tui.latest.hits_copy(column, row) {
        return dispatch(app, Action::CopyRequested(CopyTarget::Latest), tx);
    }
    if tui.input_box.submit_area.contains(position) {
        return dispatch(app, Action::Submitted, tx);
    }
    if tui.hits.input.contains(position) {
        return focus_input(app, tui, tx);
    }
    false
}
