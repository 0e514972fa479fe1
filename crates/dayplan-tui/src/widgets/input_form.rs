//! Add/edit form: time field, description field, primary button.

use dayplan_engine::Mode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::Pane;
use crate::app::{App, Focus, TimeSegment};

/// Placeholder shown in an empty description field.
pub const PLACEHOLDER: &str = "Enter event description";

const CURSOR: &str = "█";
const INDENT: &str = "  ";

/// Form pane for drafting and editing events.
pub struct InputForm<'a> {
    app: &'a App,
}

impl<'a> InputForm<'a> {
    /// Create a form over the app state.
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    fn title(&self) -> &'static str {
        if self.app.is_editing() {
            " Edit Event "
        } else {
            " Add Event "
        }
    }

    fn label(&self, text: &'static str, field: Focus) -> Line<'static> {
        let style = if self.app.focus == field {
            Style::default()
                .fg(self.app.theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.app.theme.subtext)
        };
        Line::from(Span::styled(text, style))
    }

    fn time_line(&self) -> Line<'static> {
        let theme = &self.app.theme;
        let time = self.app.scheduler.draft().time;
        let focused = self.app.focus == Focus::Time;

        let segment_style = |segment: TimeSegment| {
            if focused && self.app.time_segment == segment {
                Style::default()
                    .fg(theme.base)
                    .bg(theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            }
        };

        let mut spans = vec![
            Span::raw(INDENT),
            Span::styled(format!("{:02}", time.hour()), segment_style(TimeSegment::Hour)),
            Span::styled(":", Style::default().fg(theme.text)),
            Span::styled(
                format!("{:02}", time.minute()),
                segment_style(TimeSegment::Minute),
            ),
        ];
        if focused {
            spans.push(Span::styled(
                "  ↑↓ adjust · n now",
                Style::default().fg(theme.muted),
            ));
        }
        Line::from(spans)
    }

    fn description_line(&self, width: usize) -> Line<'static> {
        let theme = &self.app.theme;
        let focused = self.app.focus == Focus::Description;
        let input = &self.app.description;

        let mut spans = vec![Span::raw(INDENT)];
        if input.is_empty() {
            if focused {
                spans.push(Span::styled(CURSOR, Style::default().fg(theme.primary)));
            }
            spans.push(Span::styled(PLACEHOLDER, Style::default().fg(theme.muted)));
            return Line::from(spans);
        }

        let field_width = width.saturating_sub(INDENT.len());
        if focused {
            let (before, after) = input.visible_parts(field_width);
            spans.push(Span::styled(before, Style::default().fg(theme.text)));
            spans.push(Span::styled(CURSOR, Style::default().fg(theme.primary)));
            spans.push(Span::styled(after, Style::default().fg(theme.text)));
        } else {
            spans.push(Span::styled(
                crate::text::fit_width(input.content(), field_width),
                Style::default().fg(theme.text),
            ));
        }
        Line::from(spans)
    }

    fn button_line(&self) -> Line<'static> {
        let theme = &self.app.theme;
        let icons = &self.app.icons;
        let label = if self.app.is_editing() {
            format!("[ {} Save ]", icons.save())
        } else {
            format!("[ {} Add ]", icons.add())
        };
        Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                label,
                Style::default()
                    .fg(theme.primary)
                    .bg(theme.surface)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Enter", Style::default().fg(theme.muted)),
        ])
    }

    fn status_lines(&self) -> Vec<Line<'static>> {
        let theme = &self.app.theme;
        let store = self.app.scheduler.store();
        let mut lines = Vec::new();

        if let Mode::Editing(id) = self.app.scheduler.mode() {
            lines.push(Line::from(Span::styled(
                format!("{INDENT}Editing event {id} · Esc to cancel"),
                Style::default().fg(theme.warning),
            )));
        }

        let noun = if store.len() == 1 { "event" } else { "events" };
        lines.push(Line::from(Span::styled(
            format!(
                "{INDENT}{} {noun} · {} done",
                store.len(),
                store.completed_count()
            ),
            Style::default().fg(theme.subtext),
        )));
        lines
    }
}

impl Widget for InputForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = matches!(self.app.focus, Focus::Time | Focus::Description);
        let block = Pane::new(self.title(), &self.app.theme, &self.app.borders)
            .focused(focused)
            .block();
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            self.label("Time", Focus::Time),
            self.time_line(),
            Line::default(),
            self.label("Description", Focus::Description),
            self.description_line(inner.width as usize),
            Line::default(),
            self.button_line(),
            Line::default(),
        ];
        lines.extend(self.status_lines());

        Paragraph::new(lines).render(inner, buf);
    }
}
