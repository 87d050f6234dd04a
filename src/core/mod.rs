//! # Core Application Logic
//!
//! This module contains shorty's interaction logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (App)          │
//!                    │  • Action (intents)     │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │ Clipboard  │      │   Config   │
//!     │  Adapter   │      │  backends  │      │  (toml)    │
//!     │ (ratatui)  │      │ (arboard)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all session state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`session`]: Input field text and the history panel's open flag
//! - [`history`]: Submitted URLs, most recent first
//! - [`clipboard`]: Clipboard backends and the "copied" feedback cycle
//! - [`config`]: `~/.shorty/config.toml` loading and resolution

pub mod action;
pub mod clipboard;
pub mod config;
pub mod history;
pub mod session;
pub mod state;
