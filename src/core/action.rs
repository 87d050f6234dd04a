//! # Actions
//!
//! Everything that can happen in shorty becomes an `Action`.
//! User presses Enter? That's `Action::Submitted`.
//! Clipboard write finishes? That's `Action::CopySucceeded { cycle }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the caller should
//! start. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! `update()` plays the part of the input session controller: it binds the
//! text field, submission, panel state, history and copy feedback into one
//! flow.

use std::time::Duration;

use log::{debug, info, warn};

use crate::core::clipboard::ClipboardError;
use crate::core::state::App;

/// Which copy button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    /// A row in the history panel, by its rendered position.
    Entry(usize),
    /// The latest result shown under the input.
    Latest,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // User intents
    TextChanged(String),
    Focused,
    Submitted,
    OutsideDismiss,
    CopyRequested(CopyTarget),
    DeleteRequested(usize),

    // Async continuations
    CopySucceeded { cycle: u64 },
    CopyFailed { cycle: u64, error: ClipboardError },
    CopyFeedbackExpired { cycle: u64 },

    // Router
    PageActivated(bool),
    Quit,
}

/// I/O the event loop should start after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Write `text` to the clipboard for copy cycle `cycle`.
    CopyToClipboard { text: String, cycle: u64 },
    /// Start the one-shot timer that turns the indicator off.
    ScheduleFeedbackReset { cycle: u64, after: Duration },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::TextChanged(text) => {
            app.session.set_text(text);
            Effect::None
        }
        Action::Focused => {
            app.session.open_panel();
            Effect::None
        }
        Action::Submitted => {
            match app.session.take_submission() {
                Some(url) => {
                    info!("Submitted {url}");
                    app.history.prepend(url.clone());
                    app.latest_result = Some(url);
                }
                None => debug!("Ignoring blank submission"),
            }
            Effect::None
        }
        Action::OutsideDismiss => {
            if app.session.close_panel() {
                debug!("History panel dismissed");
            }
            Effect::None
        }
        Action::DeleteRequested(position) => {
            debug!("Delete button clicked (position {position})");
            app.history.remove_at(position);
            Effect::None
        }
        Action::CopyRequested(target) => {
            let Some(text) = app.copy_text(target) else {
                debug!("Nothing to copy for {target:?}");
                return Effect::None;
            };
            match app.copy_feedback.try_begin() {
                Some(cycle) => Effect::CopyToClipboard { text, cycle },
                None => {
                    debug!("Copy suppressed, feedback cycle still running");
                    Effect::None
                }
            }
        }
        Action::CopySucceeded { cycle } => {
            if app.copy_feedback.succeed(cycle) {
                info!("Copied to clipboard (cycle {cycle})");
                Effect::ScheduleFeedbackReset {
                    cycle,
                    after: app.feedback_delay,
                }
            } else {
                Effect::None
            }
        }
        Action::CopyFailed { cycle, error } => {
            // Logged only; the user sees the button re-enable and nothing else
            warn!("Failed to copy to clipboard (cycle {cycle}): {error}");
            app.copy_feedback.fail(cycle);
            Effect::None
        }
        Action::CopyFeedbackExpired { cycle } => {
            if app.copy_feedback.expire(cycle) {
                debug!("Copy feedback expired (cycle {cycle})");
            }
            Effect::None
        }
        Action::PageActivated(active) => {
            app.is_active_view = active;
            if !active {
                app.session.close_panel();
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clipboard::DEFAULT_FEEDBACK_DELAY;
    use crate::test_support::test_app;

    fn type_and_submit(app: &mut App, text: &str) {
        update(app, Action::Focused);
        update(app, Action::TextChanged(text.to_string()));
        update(app, Action::Submitted);
    }

    /// Drive a copy through to the active indicator, returning its cycle.
    fn copy_succeeds(app: &mut App, target: CopyTarget) -> u64 {
        let Effect::CopyToClipboard { cycle, .. } = update(app, Action::CopyRequested(target))
        else {
            panic!("Expected CopyToClipboard effect");
        };
        update(app, Action::CopySucceeded { cycle });
        cycle
    }

    #[test]
    fn test_text_change_replaces_text() {
        let mut app = test_app();
        update(&mut app, Action::TextChanged("abc".to_string()));
        update(&mut app, Action::TextChanged("  ".to_string()));
        assert_eq!(app.session.current_text, "  ");
    }

    #[test]
    fn test_focus_opens_panel() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Focused);
        assert_eq!(effect, Effect::None);
        assert!(app.session.is_panel_open);
        // Open but empty: nothing to render yet
        assert!(!app.panel_visible());
    }

    #[test]
    fn test_submit_records_history_and_latest() {
        let mut app = test_app();
        type_and_submit(&mut app, "  https://example.com/a  ");

        assert_eq!(app.history.entries(), ["https://example.com/a"]);
        assert_eq!(app.latest_result.as_deref(), Some("https://example.com/a"));
        assert_eq!(app.session.current_text, "");
        assert!(!app.session.is_panel_open);
    }

    #[test]
    fn test_blank_submit_is_inert() {
        let mut app = test_app();
        type_and_submit(&mut app, "https://example.com/a");
        update(&mut app, Action::Focused);

        for blank in ["", "   ", "\t\n"] {
            update(&mut app, Action::TextChanged(blank.to_string()));
            let before = app.render_model();
            update(&mut app, Action::Submitted);
            assert_eq!(app.render_model(), before);
            assert!(app.session.is_panel_open);
        }
    }

    #[test]
    fn test_outside_dismiss_keeps_text() {
        let mut app = test_app();
        update(&mut app, Action::Focused);
        update(&mut app, Action::TextChanged("https://half-typ".to_string()));

        update(&mut app, Action::OutsideDismiss);
        assert!(!app.session.is_panel_open);
        assert_eq!(app.session.current_text, "https://half-typ");

        // Already closed: no-op
        update(&mut app, Action::OutsideDismiss);
        assert!(!app.session.is_panel_open);
        assert_eq!(app.session.current_text, "https://half-typ");
    }

    #[test]
    fn test_delete_does_not_touch_latest() {
        let mut app = test_app();
        type_and_submit(&mut app, "https://example.com/a");
        update(&mut app, Action::DeleteRequested(0));
        assert!(app.history.is_empty());
        assert_eq!(app.latest_result.as_deref(), Some("https://example.com/a"));
    }

    #[test]
    fn test_stale_delete_is_noop() {
        let mut app = test_app();
        type_and_submit(&mut app, "https://example.com/a");
        update(&mut app, Action::DeleteRequested(3));
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn test_copy_latest_emits_effect() {
        let mut app = test_app();
        type_and_submit(&mut app, "https://example.com/a");
        let effect = update(&mut app, Action::CopyRequested(CopyTarget::Latest));
        assert_eq!(
            effect,
            Effect::CopyToClipboard {
                text: "https://example.com/a".to_string(),
                cycle: 1
            }
        );
        // In flight: not active yet, but busy
        assert!(!app.copy_feedback.is_active());
        assert!(app.copy_feedback.is_busy());
    }

    #[test]
    fn test_copy_entry_resolves_by_position() {
        let mut app = test_app();
        type_and_submit(&mut app, "https://example.com/a");
        type_and_submit(&mut app, "https://example.com/b");
        let effect = update(&mut app, Action::CopyRequested(CopyTarget::Entry(1)));
        assert!(matches!(
            effect,
            Effect::CopyToClipboard { ref text, .. } if text == "https://example.com/a"
        ));
    }

    #[test]
    fn test_copy_with_nothing_to_copy() {
        let mut app = test_app();
        assert_eq!(
            update(&mut app, Action::CopyRequested(CopyTarget::Latest)),
            Effect::None
        );
        assert_eq!(
            update(&mut app, Action::CopyRequested(CopyTarget::Entry(0))),
            Effect::None
        );
        assert!(!app.copy_feedback.is_busy());
    }

    #[test]
    fn test_copy_success_schedules_reset() {
        let mut app = test_app();
        type_and_submit(&mut app, "https://example.com/a");
        let Effect::CopyToClipboard { cycle, .. } =
            update(&mut app, Action::CopyRequested(CopyTarget::Latest))
        else {
            panic!("Expected CopyToClipboard effect");
        };

        let effect = update(&mut app, Action::CopySucceeded { cycle });
        assert_eq!(
            effect,
            Effect::ScheduleFeedbackReset {
                cycle,
                after: DEFAULT_FEEDBACK_DELAY
            }
        );
        assert!(app.render_model().is_copy_feedback_active);

        update(&mut app, Action::CopyFeedbackExpired { cycle });
        assert!(!app.render_model().is_copy_feedback_active);
    }

    #[test]
    fn test_second_copy_suppressed_while_active() {
        let mut app = test_app();
        type_and_submit(&mut app, "https://example.com/a");
        let cycle = copy_succeeds(&mut app, CopyTarget::Latest);

        assert_eq!(
            update(&mut app, Action::CopyRequested(CopyTarget::Entry(0))),
            Effect::None
        );

        update(&mut app, Action::CopyFeedbackExpired { cycle });
        assert!(matches!(
            update(&mut app, Action::CopyRequested(CopyTarget::Entry(0))),
            Effect::CopyToClipboard { .. }
        ));
    }

    #[test]
    fn test_second_copy_suppressed_while_in_flight() {
        let mut app = test_app();
        type_and_submit(&mut app, "https://example.com/a");
        update(&mut app, Action::CopyRequested(CopyTarget::Latest));
        assert_eq!(
            update(&mut app, Action::CopyRequested(CopyTarget::Latest)),
            Effect::None
        );
    }

    #[test]
    fn test_copy_failure_leaves_indicator_off() {
        let mut app = test_app();
        type_and_submit(&mut app, "https://example.com/a");
        let Effect::CopyToClipboard { cycle, .. } =
            update(&mut app, Action::CopyRequested(CopyTarget::Latest))
        else {
            panic!("Expected CopyToClipboard effect");
        };

        let effect = update(
            &mut app,
            Action::CopyFailed {
                cycle,
                error: ClipboardError::Occupied,
            },
        );
        assert_eq!(effect, Effect::None);
        assert!(!app.copy_feedback.is_active());
        // Controls re-enable after a failure
        assert!(!app.copy_feedback.is_busy());
    }

    #[test]
    fn test_history_changes_during_active_feedback() {
        let mut app = test_app();
        type_and_submit(&mut app, "https://example.com/a");
        let cycle = copy_succeeds(&mut app, CopyTarget::Entry(0));

        // Disjoint state: editing history doesn't disturb the indicator
        type_and_submit(&mut app, "https://example.com/b");
        update(&mut app, Action::DeleteRequested(1));
        assert!(app.copy_feedback.is_active());

        update(&mut app, Action::CopyFeedbackExpired { cycle });
        assert!(!app.copy_feedback.is_active());
        assert_eq!(app.history.entries(), ["https://example.com/b"]);
    }

    #[test]
    fn test_leaving_page_closes_panel() {
        let mut app = test_app();
        type_and_submit(&mut app, "https://example.com/a");
        update(&mut app, Action::Focused);
        assert!(app.panel_visible());

        update(&mut app, Action::PageActivated(false));
        assert!(!app.is_active_view);
        assert!(!app.panel_visible());

        update(&mut app, Action::PageActivated(true));
        assert!(app.is_active_view);
        assert!(!app.session.is_panel_open);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
