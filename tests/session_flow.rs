use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use shorty::core::action::{Action, CopyTarget, Effect, update};
use shorty::core::clipboard::{
    Clipboard, ClipboardError, MemoryClipboard, expire_after, write_and_report,
};
use shorty::core::state::App;
use tokio_test::assert_ok;

// ============================================================================
// Helper Functions
// ============================================================================

struct DeniedClipboard;

#[async_trait]
impl Clipboard for DeniedClipboard {
    fn name(&self) -> &str {
        "denied"
    }

    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("permission denied".to_string()))
    }
}

fn submit(app: &mut App, text: &str) {
    assert_eq!(update(app, Action::TextChanged(text.to_string())), Effect::None);
    assert_eq!(update(app, Action::Submitted), Effect::None);
}

/// Carry a copy request through to the point where the indicator is on.
/// Returns the reset delay the core asked for.
async fn copy(app: &mut App, target: CopyTarget) -> Option<(u64, Duration)> {
    let Effect::CopyToClipboard { text, cycle } = update(app, Action::CopyRequested(target)) else {
        return None;
    };
    let report = write_and_report(app.clipboard.clone(), text, cycle).await;
    match update(app, report) {
        Effect::ScheduleFeedbackReset { cycle, after } => Some((cycle, after)),
        _ => None,
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_submit_delete_copy_scenario() {
    let clipboard = Arc::new(MemoryClipboard::new());
    let mut app = App::new(clipboard.clone(), Duration::from_millis(2000));

    submit(&mut app, "https://a.example/long");
    submit(&mut app, "https://b.example/long");
    assert_eq!(
        app.history.entries(),
        ["https://b.example/long", "https://a.example/long"]
    );

    // Remove "a"; the latest result is untouched
    update(&mut app, Action::DeleteRequested(1));
    assert_eq!(app.history.entries(), ["https://b.example/long"]);
    assert_eq!(app.latest_result.as_deref(), Some("https://b.example/long"));

    let (cycle, after) = copy(&mut app, CopyTarget::Latest).await.unwrap();
    assert_eq!(after, Duration::from_millis(2000));
    assert_eq!(clipboard.contents().as_deref(), Some("https://b.example/long"));
    assert!(app.render_model().is_copy_feedback_active);

    // Copy buttons are dead while the indicator shows
    assert_eq!(
        update(&mut app, Action::CopyRequested(CopyTarget::Entry(0))),
        Effect::None
    );

    let start = tokio::time::Instant::now();
    let expired = expire_after(after, cycle).await;
    assert!(start.elapsed() >= Duration::from_millis(2000));
    update(&mut app, expired);
    assert!(!app.render_model().is_copy_feedback_active);

    // And usable again afterwards
    assert!(copy(&mut app, CopyTarget::Entry(0)).await.is_some());
}

#[tokio::test]
async fn test_denied_clipboard_is_silent() {
    let mut app = App::new(Arc::new(DeniedClipboard), Duration::from_millis(2000));
    submit(&mut app, "https://example.com");

    assert!(copy(&mut app, CopyTarget::Latest).await.is_none());

    let model = app.render_model();
    assert!(!model.is_copy_feedback_active);
    assert_eq!(model.history, ["https://example.com"]);
    assert_eq!(model.latest_result.as_deref(), Some("https://example.com"));
}

#[tokio::test]
async fn test_memory_clipboard_round_trip() {
    let clipboard = MemoryClipboard::new();
    assert_ok!(clipboard.write_text("https://example.com").await);
    assert_eq!(clipboard.contents().as_deref(), Some("https://example.com"));
}

#[test]
fn test_stale_delete_after_shrink() {
    let mut app = App::new(Arc::new(MemoryClipboard::new()), Duration::from_millis(2000));
    submit(&mut app, "a");
    submit(&mut app, "b");

    // Two clicks rendered against the same two-row list
    update(&mut app, Action::DeleteRequested(1));
    update(&mut app, Action::DeleteRequested(1));

    assert_eq!(app.history.entries(), ["b"]);
}

#[test]
fn test_blank_submission_is_ignored() {
    let mut app = App::new(Arc::new(MemoryClipboard::new()), Duration::from_millis(2000));
    update(&mut app, Action::Focused);
    submit(&mut app, "   ");

    let model = app.render_model();
    assert!(model.history.is_empty());
    assert_eq!(model.latest_result, None);
    assert_eq!(model.current_text, "   ");
    assert!(model.is_panel_open);
    assert!(!model.panel_visible);
}
