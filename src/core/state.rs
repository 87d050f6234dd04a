//! # Application State
//!
//! Core state for shorty. Domain state only, no TUI-specific types.
//! Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── clipboard: Arc<dyn Clipboard>  // where copies go
//! ├── session: InputSession          // field text + panel open flag
//! ├── history: HistoryStore          // submitted URLs, newest first
//! ├── latest_result: Option<String>  // last submission, survives deletes
//! ├── copy_feedback: CopyFeedback    // "copied" indicator + busy flag
//! ├── feedback_delay: Duration       // how long the indicator stays up
//! └── is_active_view: bool           // is the Home page mounted
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;
use std::time::Duration;

use crate::core::action::CopyTarget;
use crate::core::clipboard::{Clipboard, CopyFeedback};
use crate::core::config::ResolvedConfig;
use crate::core::history::HistoryStore;
use crate::core::session::InputSession;

pub struct App {
    pub clipboard: Arc<dyn Clipboard>,
    pub session: InputSession,
    pub history: HistoryStore,
    pub latest_result: Option<String>,
    pub copy_feedback: CopyFeedback,
    pub feedback_delay: Duration,
    pub is_active_view: bool,
}

/// Everything the presentation layer needs to draw the Home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub current_text: String,
    pub is_panel_open: bool,
    pub history: Vec<String>,
    pub latest_result: Option<String>,
    pub is_copy_feedback_active: bool,
    /// A copy is in flight or the indicator is showing. Copy buttons are off.
    pub is_copy_busy: bool,
    /// Open AND non-empty. An open panel with no history renders nothing.
    pub panel_visible: bool,
}

impl App {
    pub fn new(clipboard: Arc<dyn Clipboard>, feedback_delay: Duration) -> Self {
        Self {
            clipboard,
            session: InputSession::new(),
            history: HistoryStore::new(),
            latest_result: None,
            copy_feedback: CopyFeedback::new(),
            feedback_delay,
            is_active_view: true,
        }
    }

    pub fn from_config(clipboard: Arc<dyn Clipboard>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(clipboard, config.feedback_delay);
        app.is_active_view = config.start_page == crate::Page::Home;
        app
    }

    pub fn panel_visible(&self) -> bool {
        self.session.is_panel_open && !self.history.is_empty()
    }

    /// The string a copy button refers to, if it still exists.
    pub fn copy_text(&self, target: CopyTarget) -> Option<String> {
        match target {
            CopyTarget::Entry(position) => self.history.get(position).map(str::to_string),
            CopyTarget::Latest => self.latest_result.clone(),
        }
    }

    pub fn render_model(&self) -> RenderModel {
        RenderModel {
            current_text: self.session.current_text.clone(),
            is_panel_open: self.session.is_panel_open,
            history: self.history.entries().to_vec(),
            latest_result: self.latest_result.clone(),
            is_copy_feedback_active: self.copy_feedback.is_active(),
            is_copy_busy: self.copy_feedback.is_busy(),
            panel_visible: self.panel_visible(),
        }
    }
}
