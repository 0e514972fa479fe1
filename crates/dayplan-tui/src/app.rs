//! Application state for the dayplan TUI.
//!
//! [`App`] wraps the engine's [`Scheduler`] with everything the terminal
//! needs on top: which field has focus, the text cursor, the timeline
//! selection, and the help overlay.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use dayplan_engine::{timeline, Clock, Config, EventId, Scheduler, Submission, SystemClock};
use tracing::debug;

use crate::event::{key_to_action, Action};
use crate::theme::{BorderSet, IconSet, Theme};
use crate::widgets::TextInputState;

/// Which part of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Draft time field.
    Time,
    /// Draft description field.
    #[default]
    Description,
    /// Event cards on the timeline.
    Timeline,
}

impl Focus {
    /// Next field in Tab order.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Time => Self::Description,
            Self::Description => Self::Timeline,
            Self::Timeline => Self::Time,
        }
    }

    /// Previous field in Tab order.
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Time => Self::Timeline,
            Self::Description => Self::Time,
            Self::Timeline => Self::Description,
        }
    }

    /// Display name for the footer.
    pub fn label(self) -> &'static str {
        match self {
            Self::Time => "Time",
            Self::Description => "Description",
            Self::Timeline => "Timeline",
        }
    }
}

/// Part of the time field adjusted by Up/Down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeSegment {
    #[default]
    Hour,
    Minute,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Event store and input controller.
    pub scheduler: Scheduler,
    /// Cursor state for the description field (mirrors the draft).
    pub description: TextInputState,
    /// Focused field.
    pub focus: Focus,
    /// Segment of the time field being adjusted.
    pub time_segment: TimeSegment,
    /// Selected card, as an index in display order.
    pub selected: Option<usize>,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Should the app quit?
    pub should_quit: bool,
    /// Theme colors.
    pub theme: Theme,
    /// Icon set based on config.
    pub icons: IconSet,
    /// Border set based on icon style.
    pub borders: BorderSet,
}

impl App {
    /// Create the app on the system clock.
    pub fn new(config: &Config) -> Self {
        Self::with_clock(SystemClock, config)
    }

    /// Create the app with an explicit clock.
    pub fn with_clock(clock: impl Clock + 'static, config: &Config) -> Self {
        let ui = config.ui.clone().with_env_overrides();
        Self {
            scheduler: Scheduler::with_config(clock, config.scheduler.clone()),
            description: TextInputState::new(),
            focus: Focus::default(),
            time_segment: TimeSegment::default(),
            selected: None,
            show_help: false,
            should_quit: false,
            theme: Theme::from_name(ui.theme),
            icons: IconSet::new(ui.icons),
            borders: BorderSet::new(ui.icons),
        }
    }

    /// Create a test app stopped at 09:00 with default settings.
    #[cfg(test)]
    pub fn new_for_test() -> Self {
        use dayplan_engine::{IconStyle, ManualClock, TimeOfDay};

        let clock = ManualClock::new(TimeOfDay::from_minutes(9 * 60));
        let mut app = Self::with_clock(clock, &Config::default());
        // Pin icons so NO_COLOR in the test environment doesn't change output
        app.icons = IconSet::new(IconStyle::Unicode);
        app.borders = BorderSet::new(IconStyle::Unicode);
        app
    }

    /// Id of the selected card, if any.
    pub fn selected_event_id(&self) -> Option<EventId> {
        let index = self.selected?;
        timeline::display_order(self.scheduler.events())
            .get(index)
            .map(|event| event.id)
    }

    /// Route a key press: text entry first, then shortcuts.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.focus == Focus::Description && !self.show_help && self.handle_text_key(key) {
            return;
        }
        self.handle_action(key_to_action(key));
    }

    /// Mouse wheel moves the timeline selection; other mouse input is ignored.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.focus != Focus::Timeline {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => self.handle_action(Action::Up),
            MouseEventKind::ScrollDown => self.handle_action(Action::Down),
            _ => {}
        }
    }

    /// Handle editing keys for the description field.
    /// Returns true if the key was consumed.
    fn handle_text_key(&mut self, key: KeyEvent) -> bool {
        // Let the action handler deal with Ctrl+C and friends
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match key.code {
            KeyCode::Char(c) => self.description.insert(c),
            KeyCode::Backspace => self.description.backspace(),
            KeyCode::Delete => self.description.delete(),
            KeyCode::Left => self.description.move_left(),
            KeyCode::Right => self.description.move_right(),
            KeyCode::Home => self.description.move_home(),
            KeyCode::End => self.description.move_end(),
            // Enter, Esc, Tab and Up/Down are actions
            _ => return false,
        }

        self.scheduler
            .set_draft_description(self.description.content());
        true
    }

    /// Handle a semantic action.
    pub fn handle_action(&mut self, action: Action) {
        // Help overlay swallows everything except closing it
        if self.show_help {
            if matches!(action, Action::Help | Action::Back | Action::Quit) {
                self.show_help = false;
            }
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.show_help = true,
            Action::Back => {
                if self.scheduler.cancel_edit() {
                    self.sync_description();
                }
            }
            Action::Submit => match self.focus {
                Focus::Timeline => self.edit_selected(),
                Focus::Time | Focus::Description => self.submit(),
            },
            Action::Up => self.step(1),
            Action::Down => self.step(-1),
            Action::Left if self.focus == Focus::Time => self.time_segment = TimeSegment::Hour,
            Action::Right if self.focus == Focus::Time => {
                self.time_segment = TimeSegment::Minute;
            }
            Action::NextFocus => self.set_focus(self.focus.next()),
            Action::PrevFocus => self.set_focus(self.focus.prev()),
            Action::ToggleComplete if self.focus == Focus::Timeline => {
                if let Some(id) = self.selected_event_id() {
                    self.scheduler.toggle_complete(id);
                }
            }
            Action::Edit if self.focus == Focus::Timeline => self.edit_selected(),
            Action::Delete if self.focus == Focus::Timeline => self.delete_selected(),
            Action::Now if self.focus == Focus::Time => self.scheduler.reset_draft_time(),
            _ => {}
        }
    }

    /// Run the primary action (Add or Save).
    fn submit(&mut self) {
        match self.scheduler.submit() {
            Submission::Added(id) | Submission::Updated(id) => {
                self.select_event(id);
                self.sync_description();
            }
            Submission::Ignored => debug!(mode = ?self.scheduler.mode(), "Submit ignored"),
        }
    }

    /// Up/Down: adjust the time field or move the timeline selection.
    fn step(&mut self, delta: i32) {
        match self.focus {
            Focus::Time => {
                let time = self.scheduler.draft().time;
                let time = match self.time_segment {
                    TimeSegment::Hour => time.with_hour_offset(delta),
                    TimeSegment::Minute => time.with_minute_offset(delta),
                };
                self.scheduler.set_draft_time(time);
            }
            // Up moves towards earlier events
            Focus::Timeline if delta > 0 => self.select_prev(),
            Focus::Timeline => self.select_next(),
            Focus::Description => {}
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if focus == Focus::Timeline && self.selected.is_none() && !self.scheduler.events().is_empty()
        {
            self.selected = Some(0);
        }
    }

    fn select_prev(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some(i.saturating_sub(1));
        } else if !self.scheduler.events().is_empty() {
            self.selected = Some(0);
        }
    }

    fn select_next(&mut self) {
        let len = self.scheduler.events().len();
        if len == 0 {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(len - 1)));
    }

    fn select_event(&mut self, id: EventId) {
        self.selected = timeline::display_order(self.scheduler.events())
            .iter()
            .position(|event| event.id == id);
    }

    fn edit_selected(&mut self) {
        let Some(id) = self.selected_event_id() else {
            return;
        };
        if self.scheduler.start_editing(id) {
            self.sync_description();
            self.focus = Focus::Description;
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected_event_id() else {
            return;
        };
        if self.scheduler.delete_event(id) {
            let len = self.scheduler.events().len();
            self.selected = match self.selected {
                _ if len == 0 => None,
                Some(i) => Some(i.min(len - 1)),
                None => None,
            };
        }
    }

    /// Copy the scheduler's draft description into the text field.
    fn sync_description(&mut self) {
        self.description
            .set(self.scheduler.draft().description.clone());
    }

    /// Whether the primary button currently saves an edit.
    pub fn is_editing(&self) -> bool {
        self.scheduler.mode().is_editing()
    }
}
