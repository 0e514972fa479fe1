//! Screen layout.
//!
//! Regions:
//! 1. Timeline pane (left half)
//! 2. Form pane (right half)
//! 3. Footer hints (bottom, 1 line)

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::app::{App, Focus};
use crate::widgets::{hints_for_focus, FooterHints, HelpOverlay, InputForm, TimelineWidget};

/// Minimum terminal width.
pub const MIN_WIDTH: u16 = 40;
/// Minimum terminal height.
pub const MIN_HEIGHT: u16 = 12;

/// Render the whole application into `buf`.
pub fn render_app(app: &App, area: Rect, buf: &mut Buffer) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(app, area, buf);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Panes
            Constraint::Length(1), // Footer hints
        ])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let entries = app.scheduler.timeline();
    let editing = match app.scheduler.mode() {
        dayplan_engine::Mode::Editing(id) => Some(id),
        dayplan_engine::Mode::Add => None,
    };
    TimelineWidget::new(&entries, &app.theme, &app.icons, &app.borders)
        .selected(app.selected)
        .editing(editing)
        .focused(app.focus == Focus::Timeline)
        .render(panes[0], buf);

    InputForm::new(app).render(panes[1], buf);

    let hints = hints_for_focus(app.focus, app.is_editing());
    FooterHints::new(&hints, &app.theme)
        .focus(app.focus)
        .editing(app.is_editing())
        .render(rows[1], buf);

    if app.show_help {
        HelpOverlay::new(&app.theme, &app.borders).render(area, buf);
    }
}

/// Render "terminal too small" warning.
fn render_too_small(app: &App, area: Rect, buf: &mut Buffer) {
    let message = format!(
        "Terminal too small: {}x{} (need {MIN_WIDTH}x{MIN_HEIGHT})",
        area.width, area.height
    );
    Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(app.theme.warning).bg(app.theme.base))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::buffer_to_string;

    fn render(app: &App, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        render_app(app, area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_min_size_constants() {
        assert_eq!(MIN_WIDTH, 40);
        assert_eq!(MIN_HEIGHT, 12);
    }

    #[test]
    fn test_full_layout() {
        let app = App::new_for_test();
        let text = render(&app, 100, 30);

        assert!(text.contains("Add Event"));
        assert!(text.contains("Timeline"));
        assert!(text.contains("No events yet"));
        assert!(text.contains("[Tab] focus"));
        assert!(!text.contains("Terminal too small"));
    }

    #[test]
    fn test_too_small() {
        let app = App::new_for_test();
        let text = render(&app, 30, 8);
        assert!(text.contains("Terminal too small"));
        assert!(!text.contains("Add Event"));
    }

    #[test]
    fn test_help_overlay_drawn_on_top() {
        let mut app = App::new_for_test();
        app.show_help = true;
        let text = render(&app, 100, 30);
        assert!(text.contains("Toggle done"));
    }
}
