//! # Input Session
//!
//! The live (uncommitted) text of the URL field and whether the history panel
//! is open. Created empty and closed; lives as long as the page session.

/// Text field value plus panel visibility flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSession {
    pub current_text: String,
    pub is_panel_open: bool,
}

impl InputSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the field value. No validation at this layer.
    pub fn set_text(&mut self, text: String) {
        self.current_text = text;
    }

    pub fn open_panel(&mut self) {
        self.is_panel_open = true;
    }

    /// Close the panel, keeping whatever was typed so far.
    ///
    /// Returns `true` if the panel was open.
    pub fn close_panel(&mut self) -> bool {
        std::mem::replace(&mut self.is_panel_open, false)
    }

    /// Commit the current text if it is non-blank.
    ///
    /// On success returns the trimmed text, clears the field and closes the
    /// panel. Blank input leaves the session untouched.
    pub fn take_submission(&mut self) -> Option<String> {
        let trimmed = self.current_text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let submitted = trimmed.to_string();
        self.current_text.clear();
        self.is_panel_open = false;
        Some(submitted)
    }
}
