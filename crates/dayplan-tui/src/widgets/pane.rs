//! Bordered pane shared by the form and the timeline.
//!
//! Supports focused/unfocused states with different border styles.

use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};

use crate::theme::{BorderSet, Theme};

/// Builder for a titled, focus-aware block.
pub struct Pane<'a> {
    title: &'a str,
    focused: bool,
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> Pane<'a> {
    /// Create a new pane.
    pub fn new(title: &'a str, theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            title,
            focused: false,
            theme,
            borders,
        }
    }

    /// Set whether the pane is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Build the block.
    pub fn block(self) -> Block<'a> {
        let (border_color, title_color) = if self.focused {
            (self.theme.border_focused, self.theme.primary)
        } else {
            (self.theme.border, self.theme.subtext)
        };

        Block::default()
            .borders(Borders::ALL)
            .border_set(self.borders.for_focus(self.focused))
            .border_style(Style::default().fg(border_color))
            .title(self.title)
            .title_style(Style::default().fg(title_color))
            .style(Style::default().bg(self.theme.base))
    }
}
