//! # Clipboard and Copy Feedback
//!
//! Copying is the only operation that suspends. A copy cycle looks like this:
//!
//! ```text
//!  CopyRequested ──► try_begin() ──► write_and_report() ──► CopySucceeded ──► expire_after() ──► CopyFeedbackExpired
//!                    Idle→InFlight   (tokio task)            InFlight→Active   (tokio timer)       Active→Idle
//!                                         │
//!                                         └──────────────► CopyFailed (logged) InFlight→Idle
//! ```
//!
//! The async halves live here as plain futures that resolve to an [`Action`];
//! the TUI spawns them and feeds the result back through `update()`. State
//! only changes inside the reducer, so a continuation can never race a
//! keystroke.
//!
//! Only one cycle runs at a time. `CopyFeedback::try_begin` refuses to start
//! while a copy is in flight or the indicator is still showing, so there is
//! never more than one reset timer alive.

use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use crate::core::action::Action;

/// How long the "copied" indicator stays up by default.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(2000);

/// Errors a clipboard backend can report. None of them reach the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard on this platform/session (e.g. no display server).
    Unavailable(String),
    /// Another process holds the clipboard and access was refused.
    Occupied,
    /// The backend failed for some other reason.
    Backend(String),
    /// The blocking worker running the copy panicked or was cancelled.
    TaskFailed(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "clipboard unavailable: {msg}"),
            ClipboardError::Occupied => write!(f, "clipboard occupied by another process"),
            ClipboardError::Backend(msg) => write!(f, "clipboard error: {msg}"),
            ClipboardError::TaskFailed(msg) => write!(f, "clipboard task failed: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        match err {
            arboard::Error::ClipboardNotSupported => {
                ClipboardError::Unavailable("not supported on this platform".to_string())
            }
            arboard::Error::ClipboardOccupied => ClipboardError::Occupied,
            other => ClipboardError::Backend(other.to_string()),
        }
    }
}

/// Write-text capability. Fallible, and asynchronous from the caller's view.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Returns the name of the backend.
    fn name(&self) -> &str;

    /// Put `text` on the clipboard.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The OS clipboard via `arboard`.
///
/// A fresh handle is opened per copy on a blocking thread. On X11 arboard hands
/// the selection over to the clipboard manager when the handle drops.
#[derive(Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    fn name(&self) -> &str {
        "system"
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_string();

        // arboard blocks (X11 round trips), keep it off the runtime threads
        tokio::task::spawn_blocking(move || -> Result<(), ClipboardError> {
            let mut clipboard = arboard::Clipboard::new()?;
            clipboard.set_text(text)?;
            Ok(())
        })
        .await
        .map_err(|e| ClipboardError::TaskFailed(e.to_string()))?
    }
}

/// In-process clipboard. Holds the last copied string.
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last string written, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    fn name(&self) -> &str {
        "memory"
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|_| ClipboardError::Backend("memory clipboard poisoned".to_string()))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum CopyPhase {
    #[default]
    Idle,
    /// Write issued, result not back yet.
    InFlight,
    /// Copy succeeded, indicator showing, reset timer running.
    Active,
}

/// The "copied" indicator plus the busy flag that keeps copy cycles from
/// overlapping.
///
/// Every cycle gets a number. Continuations carry it back, and anything that
/// doesn't match the current cycle is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    phase: CopyPhase,
    cycle: u64,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the "copied" indicator is showing.
    pub fn is_active(&self) -> bool {
        self.phase == CopyPhase::Active
    }

    /// True while a copy is in flight or the indicator is showing.
    /// Copy controls are disabled for the whole time.
    pub fn is_busy(&self) -> bool {
        self.phase != CopyPhase::Idle
    }

    /// Start a new cycle. Returns its number, or `None` if one is running.
    pub fn try_begin(&mut self) -> Option<u64> {
        if self.is_busy() {
            return None;
        }
        self.cycle += 1;
        self.phase = CopyPhase::InFlight;
        Some(self.cycle)
    }

    /// The write for `cycle` succeeded. Returns `true` if the indicator turned on
    /// (and the reset timer should start).
    pub fn succeed(&mut self, cycle: u64) -> bool {
        if self.phase != CopyPhase::InFlight || cycle != self.cycle {
            debug!("Dropping stale copy success (cycle {cycle})");
            return false;
        }
        self.phase = CopyPhase::Active;
        true
    }

    /// The write for `cycle` failed. The indicator never turns on.
    pub fn fail(&mut self, cycle: u64) {
        if self.phase == CopyPhase::InFlight && cycle == self.cycle {
            self.phase = CopyPhase::Idle;
        }
    }

    /// The reset timer for `cycle` fired. Returns `true` if the indicator
    /// turned off.
    pub fn expire(&mut self, cycle: u64) -> bool {
        if self.phase != CopyPhase::Active || cycle != self.cycle {
            debug!("Dropping stale feedback reset (cycle {cycle})");
            return false;
        }
        self.phase = CopyPhase::Idle;
        true
    }
}

/// Write `text` and report the outcome as an action for `cycle`.
pub async fn write_and_report(clipboard: Arc<dyn Clipboard>, text: String, cycle: u64) -> Action {
    debug!(
        "Copying {} bytes via {} clipboard (cycle {cycle})",
        text.len(),
        clipboard.name()
    );
    match clipboard.write_text(&text).await {
        Ok(()) => Action::CopySucceeded { cycle },
        Err(error) => Action::CopyFailed { cycle, error },
    }
}

/// One-shot reset timer for the indicator of `cycle`.
pub async fn expire_after(delay: Duration, cycle: u64) -> Action {
    tokio::time::sleep(delay).await;
    Action::CopyFeedbackExpired { cycle }
}
