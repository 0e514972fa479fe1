//! dayplan-tui: Terminal UI for the dayplan daily scheduler
//!
//! This crate provides the terminal layer for dayplan, including:
//! - The add/edit form and the day timeline
//! - Keyboard and mouse handling
//! - Themes and icon sets
//! - Headless mode for testing and automation

pub mod app;
pub mod event;
pub mod headless;
pub mod layout;
#[cfg(test)]
pub mod test_utils;
mod text;
pub mod theme;
pub mod widgets;

pub use app::{App, Focus, TimeSegment};
pub use dayplan_engine;
pub use event::{Action, Event, EventHandler};

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dayplan_engine::Config;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use tracing::{debug, info};

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// on exit (including on error).
pub async fn run_tui(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    info!(
        theme = ?config.ui.theme,
        icons = ?app.icons.style(),
        "Starting TUI"
    );

    let mut events = EventHandler::new(config.ui.tick_rate_ms);

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    info!(events = app.scheduler.events().len(), "TUI exited");
    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            layout::render_app(app, area, frame.buffer_mut());
        })?;

        if app.should_quit {
            return Ok(());
        }

        let Some(event) = events.next().await else {
            debug!("Event channel closed");
            return Ok(());
        };

        match event {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            // Redraw on the next pass picks up size and clock changes
            Event::Tick | Event::Resize(_, _) => {}
        }
    }
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
