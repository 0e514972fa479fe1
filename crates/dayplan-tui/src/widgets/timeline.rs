//! Vertical day timeline with event cards on alternating sides.
//!
//! The axis runs down the middle of the pane, midnight at the top. Cards
//! sit on the row matching their time of day. When two cards on the same
//! side land on one row, the later card moves to the nearest free row,
//! below first. Every card gets a row: when one side holds more cards than
//! the pane has rows, the day is laid out on a taller canvas and the pane
//! scrolls to keep the selected card in view. Cards outside the view are
//! counted in the `+N more` footer.

use dayplan_engine::{timeline, EventId, Side, TimelineEntry};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use super::Pane;
use crate::text::{fit_width, visual_width};
use crate::theme::{BorderSet, IconSet, Theme};

/// Message shown when there is nothing to draw.
pub const EMPTY_MESSAGE: &str = "No events yet";

/// Timeline pane widget.
pub struct TimelineWidget<'a> {
    entries: &'a [TimelineEntry<'a>],
    selected: Option<usize>,
    editing: Option<EventId>,
    focused: bool,
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
}

impl<'a> TimelineWidget<'a> {
    /// Create a new timeline widget over entries in display order.
    pub fn new(
        entries: &'a [TimelineEntry<'a>],
        theme: &'a Theme,
        icons: &'a IconSet,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            entries,
            selected: None,
            editing: None,
            focused: false,
            theme,
            icons,
            borders,
        }
    }

    /// Set the selected display index.
    #[must_use]
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// Mark the event currently being edited.
    #[must_use]
    pub fn editing(mut self, editing: Option<EventId>) -> Self {
        self.editing = editing;
        self
    }

    /// Set whether the pane is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Draw the axis for canvas rows `offset..offset + inner.height`.
    ///
    /// Returns, per visible row, the column just past its hour label.
    fn render_axis(
        &self,
        inner: Rect,
        axis_x: u16,
        canvas: u16,
        offset: u16,
        buf: &mut Buffer,
    ) -> Vec<Option<u16>> {
        for row in 0..inner.height {
            let style = Style::default().fg(self.theme.axis_color(row + offset, canvas));
            buf.set_string(axis_x, inner.y + row, self.icons.axis(), style);
        }

        let mut label_ends = vec![None; inner.height as usize];
        let label_x = axis_x + 2;
        let label_width = inner.right().saturating_sub(label_x) as usize;
        let mut last_row = None;
        for marker in timeline::hour_markers() {
            let row = timeline::row_for_position(marker.position, canvas);
            // Several hours share a row on short panes; keep the first
            if last_row == Some(row) {
                continue;
            }
            last_row = Some(row);
            if row < offset || row - offset >= inner.height {
                continue;
            }

            let visible = row - offset;
            let y = inner.y + visible;
            let tick = Style::default().fg(self.theme.axis_color(row, canvas));
            buf.set_string(axis_x, y, self.icons.hour_tick(), tick);
            if label_width > 0 {
                let (end, _) = buf.set_stringn(
                    label_x,
                    y,
                    marker.label(),
                    label_width,
                    Style::default().fg(self.theme.muted),
                );
                label_ends[visible as usize] = Some(end);
            }
        }
        label_ends
    }

    /// Assign each entry a canvas row on its side.
    ///
    /// The canvas is at least `height` rows and grows so every card on the
    /// busier side gets a row of its own. A card takes the first free row
    /// at or below its time, then the nearest free row above it.
    fn place(&self, height: u16) -> (Vec<u16>, u16) {
        let count = |side: Side| self.entries.iter().filter(|e| e.side == side).count();
        let busiest = count(Side::Left).max(count(Side::Right));
        let canvas = u16::try_from(busiest).unwrap_or(u16::MAX).max(height);

        let mut taken_left = vec![false; canvas as usize];
        let mut taken_right = vec![false; canvas as usize];

        let rows = self
            .entries
            .iter()
            .map(|entry| {
                let taken = match entry.side {
                    Side::Left => &mut taken_left,
                    Side::Right => &mut taken_right,
                };
                let start = timeline::row_for_position(entry.position, canvas);
                let row = (start..canvas)
                    .chain((0..start).rev())
                    .find(|&r| !taken[r as usize])
                    .unwrap_or(start);
                taken[row as usize] = true;
                row
            })
            .collect();
        (rows, canvas)
    }

    /// First visible canvas row: scrolled just enough to show the selection.
    fn scroll_offset(&self, rows: &[u16], canvas: u16, height: u16) -> u16 {
        let selected_row = self
            .entries
            .iter()
            .zip(rows)
            .find(|(entry, _)| Some(entry.index) == self.selected)
            .map(|(_, &row)| row);

        match selected_row {
            Some(row) => row
                .saturating_sub(height.saturating_sub(1))
                .min(canvas.saturating_sub(height)),
            None => 0,
        }
    }

    fn render_card(&self, entry: &TimelineEntry<'_>, area: Rect, buf: &mut Buffer) {
        if area.width == 0 {
            return;
        }
        let event = entry.event;
        let is_selected = self.selected == Some(entry.index);
        let is_editing = self.editing == Some(event.id);

        let marker = if is_selected {
            format!("{} ", self.icons.selected())
        } else {
            "  ".to_string()
        };
        let (check, check_color) = if event.completed {
            (self.icons.checked(), self.theme.success)
        } else {
            (self.icons.unchecked(), self.theme.muted)
        };
        let time = format!(" {} ", event.time);

        let mut desc_style = Style::default().fg(self.theme.text);
        if event.completed {
            desc_style = desc_style
                .fg(self.theme.muted)
                .add_modifier(Modifier::CROSSED_OUT);
        }
        let time_color = if is_editing {
            self.theme.warning
        } else {
            self.theme.subtext
        };

        let prefix_width = visual_width(&marker) + visual_width(check) + visual_width(&time);
        let desc_width = (area.width as usize).saturating_sub(prefix_width);

        let line = Line::from(vec![
            Span::styled(marker, Style::default().fg(self.theme.primary)),
            Span::styled(check, Style::default().fg(check_color)),
            Span::styled(time, Style::default().fg(time_color)),
            Span::styled(fit_width(&event.description, desc_width), desc_style),
        ]);

        let mut card_style = Style::default().bg(self.theme.base);
        if is_selected && self.focused {
            card_style = card_style.bg(self.theme.surface);
        }

        Clear.render(area, buf);
        Paragraph::new(line).style(card_style).render(area, buf);
    }
}

impl Widget for TimelineWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Pane::new(" Timeline ", self.theme, self.borders)
            .focused(self.focused)
            .block();
        let inner = block.inner(area);

        let (rows, canvas) = self.place(inner.height);
        let offset = self.scroll_offset(&rows, canvas, inner.height);
        let in_view = |row: u16| row >= offset && row - offset < inner.height;
        let hidden = rows.iter().filter(|&&row| !in_view(row)).count();

        let block = if hidden > 0 {
            block.title_bottom(
                Line::styled(
                    format!(" +{hidden} more "),
                    Style::default().fg(self.theme.warning),
                )
                .right_aligned(),
            )
        } else {
            block
        };
        block.render(area, buf);

        if inner.width < 3 || inner.height == 0 {
            return;
        }

        let axis_x = inner.x + inner.width / 2;
        let label_ends = self.render_axis(inner, axis_x, canvas, offset, buf);

        if self.entries.is_empty() {
            let y = inner.y + inner.height / 2;
            let row = Rect::new(inner.x, y, inner.width, 1);
            Clear.render(row, buf);
            Paragraph::new(EMPTY_MESSAGE)
                .alignment(Alignment::Center)
                .style(Style::default().fg(self.theme.muted).bg(self.theme.base))
                .render(row, buf);
            return;
        }

        let connector = Style::default().fg(self.theme.border);
        for (entry, row) in self.entries.iter().zip(rows) {
            if !in_view(row) {
                continue;
            }
            let visible = row - offset;
            let y = inner.y + visible;
            match entry.side {
                Side::Left => {
                    let width = axis_x.saturating_sub(inner.x + 1);
                    self.render_card(entry, Rect::new(inner.x, y, width, 1), buf);
                    if axis_x > inner.x {
                        buf.set_string(axis_x - 1, y, self.icons.connector(), connector);
                    }
                }
                Side::Right => {
                    // Hour labels stay readable; the card starts after them
                    let x = label_ends[visible as usize].map_or(axis_x + 2, |end| end + 1);
                    let width = inner.right().saturating_sub(x);
                    buf.set_string(axis_x + 1, y, self.icons.connector(), connector);
                    self.render_card(entry, Rect::new(x, y, width, 1), buf);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::buffer_to_string;
    use dayplan_engine::{Event, IconStyle, TimeOfDay};

    fn event(id: u64, time: &str, description: &str) -> Event {
        Event::new(
            EventId::from(id),
            time.parse::<TimeOfDay>().unwrap(),
            description,
        )
    }

    fn render(events: &[Event], selected: Option<usize>, width: u16, height: u16) -> Buffer {
        let theme = Theme::default();
        let icons = IconSet::new(IconStyle::Ascii);
        let borders = BorderSet::new(IconStyle::Ascii);
        let entries = timeline::project(events);
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        TimelineWidget::new(&entries, &theme, &icons, &borders)
            .selected(selected)
            .focused(true)
            .render(area, &mut buf);
        buf
    }

    fn lines(buf: &Buffer) -> Vec<String> {
        buffer_to_string(buf).lines().map(str::to_string).collect()
    }

    #[test]
    fn test_empty_state() {
        let buf = render(&[], None, 40, 10);
        let text = buffer_to_string(&buf);
        assert!(text.contains("Timeline"));
        assert!(text.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_axis_and_hour_labels() {
        // 24 inner rows gives one row per hour
        let buf = render(&[], None, 40, 26);
        let rows = lines(&buf);
        let axis_x = 1 + 38 / 2;

        assert!(rows[1].contains("+ 0:00"));
        assert!(rows[10].contains("+ 9:00"));
        assert!(rows[24].contains("+ 23:00"));
        assert_eq!(rows[2].chars().nth(axis_x), Some('+'));
    }

    #[test]
    fn test_cards_alternate_sides() {
        let events = vec![event(1, "06:00", "Run"), event(2, "18:00", "Dinner")];
        let buf = render(&events, None, 60, 26);
        let rows = lines(&buf);
        let axis_x = 1 + 58 / 2;

        // 06:00 is a quarter of the way down
        let run = &rows[1 + 6];
        let at = run.find("Run").unwrap();
        assert!(at < axis_x);
        assert!(run.contains("[ ] 06:00 Run"));

        let dinner = &rows[1 + 18];
        let at = dinner.find("Dinner").unwrap();
        assert!(at > axis_x);
    }

    #[test]
    fn test_completed_card_is_checked_and_struck() {
        let mut done = event(1, "09:00", "Standup");
        done.completed = true;
        let buf = render(&[done], None, 60, 26);
        let rows = lines(&buf);
        assert!(rows[10].contains("[x] 09:00 Standup"));

        let x = u16::try_from(rows[10].find("Standup").unwrap()).unwrap();
        assert!(buf[(x, 10)].modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_selection_marker() {
        let events = vec![event(1, "09:00", "Standup")];
        let buf = render(&events, Some(0), 60, 26);
        assert!(lines(&buf)[10].contains("> [ ] 09:00 Standup"));
    }

    #[test]
    fn test_colliding_cards_move_down() {
        // Display indices 0 and 2 both sit on the left at the same time
        let events = vec![
            event(1, "09:00", "First"),
            event(2, "09:00", "Second"),
            event(3, "09:00", "Third"),
        ];
        let buf = render(&events, None, 60, 26);
        let rows = lines(&buf);
        assert!(rows[10].contains("First"));
        assert!(rows[10].contains("Second"));
        assert!(rows[11].contains("Third"));
    }

    #[test]
    fn test_overflow_counts_cards_out_of_view() {
        let events: Vec<Event> = (1..=8).map(|i| event(i, "23:30", "Late")).collect();
        // 3 inner rows but 4 cards per side: one row of each side is out of view
        let buf = render(&events, None, 60, 5);
        let text = buffer_to_string(&buf);
        assert!(text.contains("+2 more"));
        assert_eq!(text.matches("Late").count(), 6);
    }

    #[test]
    fn test_pane_scrolls_to_selected_card() {
        let events: Vec<Event> = (1..=8).map(|i| event(i, "23:30", "Late")).collect();
        // The first card keeps the bottom canvas row, which starts out of view
        let buf = render(&events, None, 60, 5);
        assert!(!buffer_to_string(&buf).contains('>'));

        let buf = render(&events, Some(0), 60, 5);
        let text = buffer_to_string(&buf);
        assert!(text.contains("> [ ] 23:30 Late"));
        assert!(text.contains("+2 more"));
    }

    #[test]
    fn test_crowded_evening_draws_every_card() {
        let times = [
            "22:00", "22:10", "22:20", "22:30", "22:40", "22:50", "23:00", "23:10",
        ];
        let events: Vec<Event> = times
            .iter()
            .zip(1..)
            .map(|(time, id)| event(id, time, &format!("E{}", id - 1)))
            .collect();
        // Timeline pane size in a 100x30 terminal
        let buf = render(&events, Some(7), 50, 29);
        let text = buffer_to_string(&buf);

        for i in 0..8 {
            assert!(text.contains(&format!("E{i}")), "E{i} not drawn:\n{text}");
        }
        assert!(!text.contains("more"));
        assert!(text.contains("> [ ] 23:10 E7"));
    }

    #[test]
    fn test_right_cards_keep_hour_labels() {
        let events = vec![
            event(1, "22:00", "Left"),
            event(2, "22:10", "Call"),
            event(3, "22:20", "Left"),
            event(4, "23:00", "Read"),
        ];
        let buf = render(&events, None, 50, 29);
        let text = buffer_to_string(&buf);

        let call = text.lines().find(|l| l.contains("Call")).unwrap();
        assert!(call.contains("+-22:00"));
        let read = text.lines().find(|l| l.contains("Read")).unwrap();
        assert!(read.contains("+-23:00"));
    }

    #[test]
    fn test_snapshot_short_pane() {
        let events = vec![event(1, "13:30", "Lunch"), event(2, "19:00", "Dinner")];
        let theme = Theme::default();
        let icons = IconSet::new(IconStyle::Ascii);
        let borders = BorderSet::new(IconStyle::Ascii);
        let entries = timeline::project(&events);
        let area = Rect::new(0, 0, 50, 6);
        let mut buf = Buffer::empty(area);
        TimelineWidget::new(&entries, &theme, &icons, &borders).render(area, &mut buf);

        insta::assert_snapshot!(buffer_to_string(&buf), @r"
        ┌ Timeline ──────────────────────────────────────┐
        │                        + 0:00                  │
        │                        + 6:00                  │
        │  [ ] 13:30 Lunch      -+ 12:00                 │
        │                        +-18:00   [ ] 19:00 D...│
        └────────────────────────────────────────────────┘
        ");
    }

    #[test]
    fn test_long_description_is_truncated() {
        let events = vec![event(1, "09:00", "A very long description for a narrow pane")];
        let buf = render(&events, None, 40, 26);
        let row = &lines(&buf)[10];
        assert!(row.contains("..."));
        assert!(!row.contains("narrow pane"));
    }
}
