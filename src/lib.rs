//! shorty library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Where copied URLs go.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    /// The OS clipboard (X11/Wayland, macOS pasteboard, Windows clipboard).
    #[default]
    System,
    /// An in-process buffer. Useful over SSH or without a display server.
    Memory,
}

/// Top-level pages picked by the router in the layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    About,
}

impl Page {
    /// The other page (what the footer link points at).
    pub fn toggled(self) -> Self {
        match self {
            Page::Home => Page::About,
            Page::About => Page::Home,
        }
    }
}
