//! Input controller: draft fields, add/edit mode, and the primary action.
//!
//! [`Scheduler`] owns the [`EventStore`] together with the form draft. The
//! primary action ([`Scheduler::submit`]) creates an event in add mode and
//! rewrites the targeted event's description in edit mode.

use tracing::{debug, info};

use crate::clock::Clock;
use crate::config::SchedulerConfig;
use crate::event::{Event, EventId};
use crate::store::EventStore;
use crate::time::TimeOfDay;
use crate::timeline::{self, TimelineEntry};

/// Which action the primary button performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Commit the draft as a new event.
    #[default]
    Add,
    /// Commit the draft description onto an existing event.
    Editing(EventId),
}

impl Mode {
    /// Check if an event is being edited.
    pub fn is_editing(self) -> bool {
        matches!(self, Self::Editing(_))
    }
}

/// Values typed into the form but not yet committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// Description text field.
    pub description: String,
    /// Time field.
    pub time: TimeOfDay,
}

/// Outcome of the primary action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// A new event was created.
    Added(EventId),
    /// An existing event's description was replaced.
    Updated(EventId),
    /// Nothing changed.
    Ignored,
}

/// Event store plus input controller for one scheduler instance.
pub struct Scheduler {
    store: EventStore,
    draft: Draft,
    mode: Mode,
    clock: Box<dyn Clock>,
    config: SchedulerConfig,
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("store", &self.store)
            .field("draft", &self.draft)
            .field("mode", &self.mode)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Scheduler {
    /// Create an empty scheduler. The draft time starts at the clock's current time.
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self::with_config(clock, SchedulerConfig::default())
    }

    /// Create an empty scheduler with explicit settings.
    pub fn with_config(clock: impl Clock + 'static, config: SchedulerConfig) -> Self {
        let draft = Draft {
            description: String::new(),
            time: clock.now(),
        };
        Self {
            store: EventStore::new(),
            draft,
            mode: Mode::Add,
            clock: Box::new(clock),
            config,
        }
    }

    /// The underlying event store.
    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// All events in creation order.
    pub fn events(&self) -> &[Event] {
        self.store.events()
    }

    /// Current form draft.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Timeline projection of the current events.
    pub fn timeline(&self) -> Vec<TimelineEntry<'_>> {
        timeline::project(self.store.events())
    }

    /// Replace the draft description.
    pub fn set_draft_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Replace the draft time.
    pub fn set_draft_time(&mut self, time: TimeOfDay) {
        self.draft.time = time;
    }

    /// Set the draft time to the clock's current time.
    pub fn reset_draft_time(&mut self) {
        self.draft.time = self.clock.now();
    }

    /// Commit the draft as a new event.
    ///
    /// A blank description is ignored and leaves the draft as is. On success
    /// the description is cleared and the time reset to now.
    pub fn add_event(&mut self) -> Option<EventId> {
        let id = self
            .store
            .add(self.draft.description.clone(), self.draft.time)?;

        self.draft.description.clear();
        self.reset_draft_time();
        Some(id)
    }

    /// Delete an event. Deleting the edit target returns to add mode.
    pub fn delete_event(&mut self, id: EventId) -> bool {
        let removed = self.store.delete(id);
        if removed && self.mode == Mode::Editing(id) {
            info!(%id, "Edit target deleted, back to add mode");
            self.mode = Mode::Add;
        }
        removed
    }

    /// Flip an event's completed flag.
    pub fn toggle_complete(&mut self, id: EventId) -> bool {
        self.store.toggle_complete(id)
    }

    /// Enter edit mode for `id`, copying its description into the draft.
    ///
    /// While already editing, this retargets to the new event.
    pub fn start_editing(&mut self, id: EventId) -> bool {
        let Some(event) = self.store.get(id) else {
            debug!(%id, "Ignoring edit of unknown event");
            return false;
        };

        if let Mode::Editing(previous) = self.mode {
            if previous != id {
                debug!(%previous, %id, "Retargeting edit");
            }
        }

        self.draft.description.clone_from(&event.description);
        self.mode = Mode::Editing(id);
        true
    }

    /// Save the draft description onto the edit target and return to add mode.
    ///
    /// Ignored in add mode, and for a blank description when
    /// `reject_empty_edits` is set (edit mode is kept in that case).
    pub fn save_edit(&mut self) -> Option<EventId> {
        let Mode::Editing(id) = self.mode else {
            debug!("Ignoring save outside edit mode");
            return None;
        };

        if self.config.reject_empty_edits && self.draft.description.trim().is_empty() {
            debug!(%id, "Rejecting blank edit");
            return None;
        }

        let updated = self
            .store
            .update_description(id, self.draft.description.clone());

        self.mode = Mode::Add;
        self.draft.description.clear();
        updated.then_some(id)
    }

    /// Leave edit mode without saving. Returns whether an edit was cancelled.
    pub fn cancel_edit(&mut self) -> bool {
        if !self.mode.is_editing() {
            return false;
        }
        self.mode = Mode::Add;
        self.draft.description.clear();
        true
    }

    /// Run the primary action for the current mode.
    pub fn submit(&mut self) -> Submission {
        let result = match self.mode {
            Mode::Add => self.add_event().map(Submission::Added),
            Mode::Editing(_) => self.save_edit().map(Submission::Updated),
        };
        result.unwrap_or(Submission::Ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn scheduler_at(time: &str) -> (Scheduler, ManualClock) {
        let clock = ManualClock::new(t(time));
        (Scheduler::new(clock.clone()), clock)
    }

    fn add(scheduler: &mut Scheduler, description: &str, time: &str) -> Option<EventId> {
        scheduler.set_draft_description(description);
        scheduler.set_draft_time(t(time));
        scheduler.add_event()
    }

    #[test]
    fn test_new_scheduler_starts_in_add_mode_at_now() {
        let (scheduler, _) = scheduler_at("07:45");
        assert_eq!(scheduler.mode(), Mode::Add);
        assert_eq!(scheduler.draft().time, t("07:45"));
        assert!(scheduler.draft().description.is_empty());
        assert!(scheduler.events().is_empty());
    }

    #[test]
    fn test_add_clears_description_and_resets_time() {
        let (mut scheduler, clock) = scheduler_at("07:45");
        clock.set(t("08:02"));

        let id = add(&mut scheduler, "Coffee", "10:30").unwrap();

        let event = scheduler.store().get(id).unwrap();
        assert_eq!(event.time, t("10:30"));
        assert!(!event.completed);
        assert!(scheduler.draft().description.is_empty());
        assert_eq!(scheduler.draft().time, t("08:02"));
    }

    #[test]
    fn test_blank_add_keeps_draft() {
        let (mut scheduler, clock) = scheduler_at("07:45");
        clock.set(t("09:00"));

        assert_eq!(add(&mut scheduler, "   ", "10:30"), None);
        assert!(scheduler.events().is_empty());
        assert_eq!(scheduler.draft().description, "   ");
        assert_eq!(scheduler.draft().time, t("10:30"));
    }

    #[test]
    fn test_add_empty_scenario() {
        let (mut scheduler, _) = scheduler_at("07:45");
        scheduler.set_draft_time(t("10:30"));
        assert_eq!(scheduler.submit(), Submission::Ignored);
        assert_eq!(scheduler.store().len(), 0);
    }

    #[test]
    fn test_meeting_scenario() {
        let (mut scheduler, _) = scheduler_at("07:45");

        scheduler.set_draft_description("Meeting");
        scheduler.set_draft_time(t("10:30"));
        let Submission::Added(id) = scheduler.submit() else {
            panic!("expected an added event");
        };
        assert_eq!(scheduler.store().len(), 1);
        assert_eq!(scheduler.store().get(id).unwrap().time, t("10:30"));

        assert!(scheduler.start_editing(id));
        assert_eq!(scheduler.draft().description, "Meeting");
        assert_eq!(scheduler.mode(), Mode::Editing(id));

        scheduler.set_draft_description("Meeting (moved)");
        assert_eq!(scheduler.submit(), Submission::Updated(id));

        let event = scheduler.store().get(id).unwrap();
        assert_eq!(event.description, "Meeting (moved)");
        assert_eq!(event.time, t("10:30"));
        assert_eq!(scheduler.mode(), Mode::Add);
        assert!(scheduler.draft().description.is_empty());
    }

    #[test]
    fn test_save_edit_keeps_draft_time() {
        let (mut scheduler, _) = scheduler_at("07:45");
        let id = add(&mut scheduler, "Lunch", "12:00").unwrap();
        scheduler.set_draft_time(t("15:15"));

        scheduler.start_editing(id);
        scheduler.save_edit();

        assert_eq!(scheduler.draft().time, t("15:15"));
        assert_eq!(scheduler.store().get(id).unwrap().time, t("12:00"));
    }

    #[test]
    fn test_save_edit_outside_edit_mode_is_ignored() {
        let (mut scheduler, _) = scheduler_at("07:45");
        add(&mut scheduler, "Lunch", "12:00");
        scheduler.set_draft_description("typed");

        assert_eq!(scheduler.save_edit(), None);
        assert_eq!(scheduler.draft().description, "typed");
        assert_eq!(scheduler.events()[0].description, "Lunch");
    }

    #[test]
    fn test_edit_can_save_empty_description_by_default() {
        let (mut scheduler, _) = scheduler_at("07:45");
        let id = add(&mut scheduler, "Lunch", "12:00").unwrap();

        scheduler.start_editing(id);
        scheduler.set_draft_description("");
        assert_eq!(scheduler.submit(), Submission::Updated(id));
        assert_eq!(scheduler.store().get(id).unwrap().description, "");
    }

    #[test]
    fn test_reject_empty_edits_keeps_edit_mode() {
        let clock = ManualClock::new(t("07:45"));
        let config = SchedulerConfig {
            reject_empty_edits: true,
        };
        let mut scheduler = Scheduler::with_config(clock, config);
        let id = add(&mut scheduler, "Lunch", "12:00").unwrap();

        scheduler.start_editing(id);
        scheduler.set_draft_description("  ");
        assert_eq!(scheduler.submit(), Submission::Ignored);
        assert_eq!(scheduler.mode(), Mode::Editing(id));
        assert_eq!(scheduler.store().get(id).unwrap().description, "Lunch");
    }

    #[test]
    fn test_start_editing_other_event_retargets() {
        let (mut scheduler, _) = scheduler_at("07:45");
        let first = add(&mut scheduler, "First", "08:00").unwrap();
        let second = add(&mut scheduler, "Second", "09:00").unwrap();

        scheduler.start_editing(first);
        scheduler.set_draft_description("First, edited");
        scheduler.start_editing(second);

        assert_eq!(scheduler.mode(), Mode::Editing(second));
        assert_eq!(scheduler.draft().description, "Second");

        scheduler.set_draft_description("Second, edited");
        scheduler.submit();
        assert_eq!(scheduler.store().get(first).unwrap().description, "First");
        assert_eq!(
            scheduler.store().get(second).unwrap().description,
            "Second, edited"
        );
    }

    #[test]
    fn test_start_editing_unknown_event_is_noop() {
        let (mut scheduler, _) = scheduler_at("07:45");
        scheduler.set_draft_description("typed");

        assert!(!scheduler.start_editing(EventId::from(3)));
        assert_eq!(scheduler.mode(), Mode::Add);
        assert_eq!(scheduler.draft().description, "typed");
    }

    #[test]
    fn test_cancel_edit() {
        let (mut scheduler, _) = scheduler_at("07:45");
        let id = add(&mut scheduler, "Gym", "18:00").unwrap();

        assert!(!scheduler.cancel_edit());

        scheduler.start_editing(id);
        scheduler.set_draft_description("Gym (legs)");
        assert!(scheduler.cancel_edit());

        assert_eq!(scheduler.mode(), Mode::Add);
        assert!(scheduler.draft().description.is_empty());
        assert_eq!(scheduler.store().get(id).unwrap().description, "Gym");
    }

    #[test]
    fn test_deleting_edit_target_returns_to_add_mode() {
        let (mut scheduler, _) = scheduler_at("07:45");
        let id = add(&mut scheduler, "Gym", "18:00").unwrap();

        scheduler.start_editing(id);
        scheduler.set_draft_description("Gym (legs)");
        assert!(scheduler.delete_event(id));

        assert_eq!(scheduler.mode(), Mode::Add);
        assert_eq!(scheduler.draft().description, "Gym (legs)");
        assert!(scheduler.events().is_empty());
    }

    #[test]
    fn test_deleting_other_event_keeps_edit_mode() {
        let (mut scheduler, _) = scheduler_at("07:45");
        let keep = add(&mut scheduler, "Keep", "08:00").unwrap();
        let other = add(&mut scheduler, "Drop", "09:00").unwrap();

        scheduler.start_editing(keep);
        scheduler.delete_event(other);
        assert_eq!(scheduler.mode(), Mode::Editing(keep));
    }

    #[test]
    fn test_toggle_complete_twice() {
        let (mut scheduler, _) = scheduler_at("07:45");
        let id = add(&mut scheduler, "Walk", "07:00").unwrap();

        scheduler.toggle_complete(id);
        scheduler.toggle_complete(id);
        assert!(!scheduler.store().get(id).unwrap().completed);
    }

    #[test]
    fn test_timeline_is_sorted_projection() {
        let (mut scheduler, _) = scheduler_at("07:45");
        add(&mut scheduler, "late", "22:00");
        add(&mut scheduler, "early", "06:00");

        let descriptions: Vec<&str> = scheduler
            .timeline()
            .iter()
            .map(|entry| entry.event.description.as_str())
            .collect();
        assert_eq!(descriptions, ["early", "late"]);

        // Store itself keeps creation order
        assert_eq!(scheduler.events()[0].description, "late");
    }
}
