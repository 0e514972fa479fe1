//! UI widgets for the TUI.
//!
//! This module provides:
//! - [`Pane`] - Bordered block with focus styling
//! - [`InputForm`] - Add/edit form
//! - [`TimelineWidget`] - Day axis with event cards
//! - [`FooterHints`] - Bottom keybinding hints
//! - [`HelpOverlay`] - Keybinding reference
//! - [`TextInputState`] - Cursor state for the description field

mod footer_hints;
mod help;
mod input_form;
mod pane;
mod text_input;
mod timeline;

pub use footer_hints::{hints_for_focus, FooterHints, KeyHint};
pub use help::{centered_fixed, HelpOverlay};
pub use input_form::{InputForm, PLACEHOLDER};
pub use pane::Pane;
pub use text_input::TextInputState;
pub use timeline::{TimelineWidget, EMPTY_MESSAGE};
