//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::core::clipboard::{
    Clipboard, ClipboardError, DEFAULT_FEEDBACK_DELAY, MemoryClipboard,
};

/// A clipboard that always refuses, like a browser denying clipboard access.
pub struct FailingClipboard;

#[async_trait]
impl Clipboard for FailingClipboard {
    fn name(&self) -> &str {
        "failing"
    }

    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("no clipboard in tests".to_string()))
    }
}

/// Creates a test App backed by an in-memory clipboard.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(MemoryClipboard::new()), DEFAULT_FEEDBACK_DELAY)
}
