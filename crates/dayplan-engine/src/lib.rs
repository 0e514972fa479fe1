//! dayplan-engine: Headless core of the dayplan daily scheduler
//!
//! This crate provides everything except the terminal, including:
//! - Time-of-day values and clock sources
//! - The event store and the add/edit input controller
//! - Timeline projection (ordering, axis positions, sides, gridlines)
//! - Configuration

pub mod clock;
pub mod config;
pub mod event;
pub mod scheduler;
pub mod store;
pub mod time;
pub mod timeline;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Config, ConfigError, IconStyle, SchedulerConfig, ThemeName, UiConfig};
pub use event::{Event, EventId};
pub use scheduler::{Draft, Mode, Scheduler, Submission};
pub use store::EventStore;
pub use time::{position, TimeError, TimeOfDay};
pub use timeline::{HourMarker, Side, TimelineEntry};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
