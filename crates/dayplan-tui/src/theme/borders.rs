//! Border sets for Unicode and ASCII fallback.
//!
//! Supports `NO_COLOR` environment variable by using ASCII borders.

use dayplan_engine::IconStyle;
use ratatui::symbols::border;

/// Border set based on icon style.
#[derive(Debug, Clone)]
pub struct BorderSet {
    style: IconStyle,
}

impl Default for BorderSet {
    fn default() -> Self {
        Self::new(IconStyle::default())
    }
}

impl BorderSet {
    /// Create a new border set with the specified style.
    pub fn new(style: IconStyle) -> Self {
        Self { style }
    }

    /// Normal (unfocused) borders - rounded for Unicode, plain for ASCII.
    pub fn normal(&self) -> border::Set {
        match self.style {
            IconStyle::Nerd | IconStyle::Unicode => border::ROUNDED,
            IconStyle::Ascii => border::PLAIN,
        }
    }

    /// Focused borders - thick for Unicode, double for ASCII.
    pub fn focused(&self) -> border::Set {
        match self.style {
            IconStyle::Nerd | IconStyle::Unicode => border::THICK,
            IconStyle::Ascii => border::DOUBLE,
        }
    }

    /// Pick the set for a pane's focus state.
    pub fn for_focus(&self, focused: bool) -> border::Set {
        if focused {
            self.focused()
        } else {
            self.normal()
        }
    }
}
