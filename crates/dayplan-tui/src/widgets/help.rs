//! Help overlay listing every keybinding.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use super::Pane;
use crate::theme::{BorderSet, Theme};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "General",
        &[
            ("Tab / Shift+Tab", "Next/prev field"),
            ("Enter", "Add or save"),
            ("Esc", "Cancel edit"),
            ("?", "Toggle this help"),
            ("q / Ctrl+C", "Quit"),
        ],
    ),
    (
        "Time field",
        &[
            ("Up/Down", "Adjust hour or minute"),
            ("Left/Right", "Pick hour or minute"),
            ("n", "Reset to now"),
        ],
    ),
    (
        "Timeline",
        &[
            ("j/k or Up/Down", "Select event"),
            ("x or Space", "Toggle done"),
            ("e or Enter", "Edit"),
            ("d or Delete", "Delete"),
        ],
    ),
];

const KEY_COLUMN: usize = 18;

/// Create a centered rect with fixed dimensions.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Help overlay drawn over the whole screen.
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay.
    pub fn new(theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self { theme, borders }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (i, (heading, keys)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(
                format!(" {heading}"),
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )));
            for (key, action) in *keys {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("   {key:<KEY_COLUMN$}"),
                        Style::default().fg(self.theme.text),
                    ),
                    Span::styled(*action, Style::default().fg(self.theme.subtext)),
                ]));
            }
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " [Press ? or Esc to close]",
            Style::default().fg(self.theme.muted),
        )));
        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
        let overlay_area = centered_fixed(48, height, area);

        Clear.render(overlay_area, buf);

        let block = Pane::new(" Help ", self.theme, self.borders)
            .focused(true)
            .block()
            .style(Style::default().bg(self.theme.overlay));
        Paragraph::new(lines).block(block).render(overlay_area, buf);
    }
}
