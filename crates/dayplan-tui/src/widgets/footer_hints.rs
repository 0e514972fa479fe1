//! Footer status bar widget.
//!
//! Format: `Add │ Description            [Enter] add │ [Tab] focus │ [?] help`
//!
//! Components:
//! - Form mode (Add/Edit)
//! - Focused field (Time/Description/Timeline)
//! - Hints for the focused field, right-aligned

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::app::Focus;
use crate::text::visual_width;
use crate::theme::Theme;

/// A single keybinding hint.
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The key or key combination (e.g., "Tab", "Ctrl+C").
    pub key: String,
    /// The action description (e.g., "focus", "quit").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Footer status bar widget.
pub struct FooterHints<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
    focus: Option<Focus>,
    editing: bool,
}

impl<'a> FooterHints<'a> {
    /// Create a new footer hints widget.
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self {
            hints,
            theme,
            focus: None,
            editing: false,
        }
    }

    /// Set focused field to display.
    #[must_use]
    pub fn focus(mut self, focus: Focus) -> Self {
        self.focus = Some(focus);
        self
    }

    /// Set whether an edit is in progress.
    #[must_use]
    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sep = || Span::styled(" │ ", Style::default().fg(self.theme.muted));

        // Left side: Mode │ Focus
        let (mode, mode_color) = if self.editing {
            ("Edit", self.theme.warning)
        } else {
            ("Add", self.theme.subtext)
        };
        let mut left_spans = vec![
            Span::raw(" "),
            Span::styled(mode, Style::default().fg(mode_color)),
        ];
        if let Some(focus) = self.focus {
            left_spans.push(sep());
            left_spans.push(Span::styled(
                focus.label(),
                Style::default().fg(self.theme.primary),
            ));
        }

        // Right side: hints
        let mut right_spans = Vec::new();
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                right_spans.push(sep());
            }
            right_spans.push(Span::styled("[", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                hint.key.as_str(),
                Style::default().fg(self.theme.primary),
            ));
            right_spans.push(Span::styled("] ", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                hint.action.as_str(),
                Style::default().fg(self.theme.subtext),
            ));
        }
        right_spans.push(Span::raw(" "));

        let width_of = |spans: &[Span<'_>]| -> usize {
            spans.iter().map(|s| visual_width(&s.content)).sum()
        };
        let left_width = width_of(&left_spans);
        let right_width = width_of(&right_spans);
        let total_width = area.width as usize;

        // Drop hints entirely rather than wrap when too narrow
        if left_width + right_width <= total_width {
            let padding = total_width - left_width - right_width;
            left_spans.push(Span::raw(" ".repeat(padding)));
            left_spans.extend(right_spans);
        }

        Paragraph::new(Line::from(left_spans))
            .style(Style::default().bg(self.theme.surface))
            .render(area, buf);
    }
}

/// Hints for the focused field.
#[must_use]
pub fn hints_for_focus(focus: Focus, editing: bool) -> Vec<KeyHint> {
    let mut hints = match focus {
        Focus::Time => vec![
            KeyHint::new("↑↓", "adjust"),
            KeyHint::new("←→", "hour/min"),
            KeyHint::new("n", "now"),
        ],
        Focus::Description => {
            let primary = if editing { "save" } else { "add" };
            vec![KeyHint::new("Enter", primary)]
        }
        Focus::Timeline => vec![
            KeyHint::new("j/k", "select"),
            KeyHint::new("x", "done"),
            KeyHint::new("e", "edit"),
            KeyHint::new("d", "delete"),
        ],
    };

    if editing {
        hints.push(KeyHint::new("Esc", "cancel"));
    }
    hints.push(KeyHint::new("Tab", "focus"));
    hints.push(KeyHint::new("?", "help"));
    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::buffer_to_string;

    #[test]
    fn test_key_hint_creation() {
        let hint = KeyHint::new("Tab", "focus");
        assert_eq!(hint.key, "Tab");
        assert_eq!(hint.action, "focus");
    }

    #[test]
    fn test_hints_for_description() {
        let hints = hints_for_focus(Focus::Description, false);
        assert!(hints.iter().any(|h| h.key == "Enter" && h.action == "add"));
        assert!(hints.iter().any(|h| h.key == "?" && h.action == "help"));
        assert!(!hints.iter().any(|h| h.key == "Esc"));

        let hints = hints_for_focus(Focus::Description, true);
        assert!(hints.iter().any(|h| h.key == "Enter" && h.action == "save"));
        assert!(hints.iter().any(|h| h.key == "Esc" && h.action == "cancel"));
    }

    #[test]
    fn test_hints_for_timeline() {
        let hints = hints_for_focus(Focus::Timeline, false);
        for key in ["j/k", "x", "e", "d", "Tab"] {
            assert!(hints.iter().any(|h| h.key == key), "missing {key}");
        }
    }

    #[test]
    fn test_footer_render() {
        let theme = Theme::default();
        let hints = vec![KeyHint::new("Tab", "focus"), KeyHint::new("?", "help")];
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        FooterHints::new(&hints, &theme)
            .focus(Focus::Timeline)
            .render(area, &mut buf);

        assert_eq!(
            buffer_to_string(&buf),
            " Add │ Timeline  [Tab] focus │ [?] help"
        );
    }

    #[test]
    fn test_footer_drops_hints_when_narrow() {
        let theme = Theme::default();
        let hints = hints_for_focus(Focus::Timeline, true);
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        FooterHints::new(&hints, &theme)
            .focus(Focus::Timeline)
            .editing(true)
            .render(area, &mut buf);

        let text = buffer_to_string(&buf);
        assert!(text.starts_with(" Edit │ Timeline"));
        assert!(!text.contains('['));
    }
}
