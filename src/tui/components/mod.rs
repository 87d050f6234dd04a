//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: the "shortyshorty" header, linking back to Home
//! - `Footer`: the About/Home link
//! - `AboutPage`: static text for the About route
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state and record their clickable areas:
//! - `InputBox`: single-line URL field with a `shorten` button
//! - `HistoryPanel`: dropdown of past submissions with Copy/Delete buttons
//! - `LatestResult`: the last submission with its own Copy button
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into `App`.
//! They never mutate core state: clicks are hit-tested by the event loop
//! against the rects recorded during render, and turned into `Action`s.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file, palette)
//! ├── button.rs         (button spans, copy button state, truncation)
//! ├── title_bar.rs      (header)
//! ├── footer.rs         (router link)
//! ├── about.rs          (About page)
//! ├── history_panel.rs  (dropdown)
//! ├── latest_result.rs  (latest submission row)
//! └── input_box/        (text field + cursor)
//! ```

use ratatui::style::Color;

pub mod about;
pub mod button;
pub mod footer;
pub mod history_panel;
pub mod input_box;
pub mod latest_result;
pub mod title_bar;

pub use about::AboutPage;
pub use button::CopyButtonState;
pub use footer::Footer;
pub use history_panel::{HistoryPanel, HistoryPanelState, PanelHit};
pub use input_box::{InputBox, InputEvent};
pub use latest_result::{LatestResult, LatestResultState};
pub use title_bar::TitleBar;

/// Header text
pub const ACCENT: Color = Color::Rgb(0xbf, 0x53, 0x3b);
/// Buttons
pub const BUTTON: Color = Color::Rgb(0xd9, 0x96, 0x7e);
/// Footer link
pub const MUTED: Color = Color::Rgb(0x67, 0x59, 0x62);
/// Borders
pub const BORDER: Color = Color::Gray;
