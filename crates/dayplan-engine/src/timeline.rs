//! Timeline projection.
//!
//! Pure functions that turn the event list into what the timeline pane
//! draws: display order, axis position, side, and hour gridlines.

use crate::event::Event;

/// Number of hour gridlines on the axis.
pub const HOURS_PER_DAY: u8 = 24;

/// Which side of the axis an event card sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left of the axis (even display index).
    Left,
    /// Right of the axis (odd display index).
    Right,
}

impl Side {
    /// Side for a display index: even left, odd right.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// An event placed on the timeline.
#[derive(Debug, Clone, Copy)]
pub struct TimelineEntry<'a> {
    /// Index in display order.
    pub index: usize,
    /// The event itself.
    pub event: &'a Event,
    /// Percentage offset along the axis.
    pub position: f64,
    /// Side of the axis.
    pub side: Side,
}

/// A gridline at the start of an hour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourMarker {
    /// Hour (0-23).
    pub hour: u8,
    /// Percentage offset along the axis.
    pub position: f64,
}

impl HourMarker {
    /// Label drawn next to the gridline, e.g. `9:00`.
    pub fn label(&self) -> String {
        format!("{}:00", self.hour)
    }
}

/// Events sorted by time of day. Ties keep creation order.
pub fn display_order(events: &[Event]) -> Vec<&Event> {
    let mut ordered: Vec<&Event> = events.iter().collect();
    // sort_by_key is stable
    ordered.sort_by_key(|e| e.time);
    ordered
}

/// Place every event on the axis in display order.
pub fn project(events: &[Event]) -> Vec<TimelineEntry<'_>> {
    display_order(events)
        .into_iter()
        .enumerate()
        .map(|(index, event)| TimelineEntry {
            index,
            event,
            position: event.position(),
            side: Side::for_index(index),
        })
        .collect()
}

/// Gridlines for hours 0 through 23.
pub fn hour_markers() -> Vec<HourMarker> {
    (0..HOURS_PER_DAY)
        .map(|hour| HourMarker {
            hour,
            position: f64::from(hour) / f64::from(HOURS_PER_DAY) * 100.0,
        })
        .collect()
}

/// Map a percentage onto one of `height` rows.
///
/// Returns 0 for a zero height.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn row_for_position(position: f64, height: u16) -> u16 {
    if height == 0 {
        return 0;
    }
    // Nudge up so exact boundaries like 1/24 don't floor to the row above
    let scaled = position.clamp(0.0, 100.0) / 100.0 * f64::from(height) + 1e-9;
    let row = scaled.floor() as u16;
    row.min(height - 1)
}
