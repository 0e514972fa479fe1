//! Test utilities for dayplan-tui rendering and integration tests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dayplan_engine::TimeOfDay;
use ratatui::{buffer::Buffer, layout::Rect};

use crate::app::App;
use crate::layout::render_app;

pub use crate::headless::buffer_to_string;

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 100;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 30;

/// Create a test app stopped at 09:00.
pub fn create_test_app() -> App {
    App::new_for_test()
}

/// Create a test app with events added through the form.
pub fn create_test_app_with_events(events: &[(&str, &str)]) -> App {
    let mut app = App::new_for_test();
    for (time, description) in events {
        let time: TimeOfDay = time.parse().expect("valid test time");
        app.scheduler.set_draft_time(time);
        type_text(&mut app, description);
        press(&mut app, KeyCode::Enter);
    }
    app
}

/// Send a single unmodified key press.
pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

/// Type text one key at a time.
pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

/// Render the full app at the default test size.
pub fn render_app_to_string(app: &App) -> String {
    render_app_to_string_sized(app, TEST_WIDTH, TEST_HEIGHT)
}

/// Render the full app at a custom size.
pub fn render_app_to_string_sized(app: &App, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    render_app(app, area, &mut buf);
    buffer_to_string(&buf)
}
