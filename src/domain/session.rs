//! The session state model.
//!
//! [`Session`] owns every collection of the app and is only mutated through
//! [`Session::dispatch`]. Each [`Intent`] runs to completion before the next
//! one, so the model never needs locking. Messages meant for the user are
//! queued on an outbox and collected with [`Session::drain_notices`].

use super::blocklist::Blocklist;
use super::calendar::{CalendarEntry, CalendarLog};
use super::enums::{DraftField, NoticeKind, Priority};
use super::error::SessionError;
use super::journal::{Clock, MoodEntry, MoodLog, SystemClock};
use super::rewards::RewardCounters;
use super::tasks::{Completion, SubtaskId, Task, TaskId, TaskRegistry};
use super::timer::{FocusTimer, TickOutcome};
use serde::Serialize;
use std::collections::VecDeque;

pub const SESSION_COMPLETE_MESSAGE: &str =
    "Focus session complete! Your tree has grown. Take a break.";
pub const BLOCKER_OFF_MESSAGE: &str = "Distraction blocker disabled.";
pub const MOOD_LOGGED_MESSAGE: &str = "Mood logged! Keep taking care of yourself.";
pub const EVENT_ADDED_MESSAGE: &str = "Event added to the calendar!";

/// A fire-and-forget message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn confirmation(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Confirmation,
            message: message.into(),
        }
    }
}

/// Pending text of each input field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Drafts {
    pub task: String,
    pub priority: Priority,
    pub subtask: String,
    pub mood: String,
    pub event: String,
    pub blocked_entry: String,
}

impl Drafts {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Task => &self.task,
            DraftField::Subtask => &self.subtask,
            DraftField::Mood => &self.mood,
            DraftField::Event => &self.event,
            DraftField::BlockedEntry => &self.blocked_entry,
        }
    }

    fn slot_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Task => &mut self.task,
            DraftField::Subtask => &mut self.subtask,
            DraftField::Mood => &mut self.mood,
            DraftField::Event => &mut self.event,
            DraftField::BlockedEntry => &mut self.blocked_entry,
        }
    }
}

/// Every operation the presentation layer can request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    StartTimer,
    PauseTimer,
    ToggleTimer,
    ResetTimer,
    /// One elapsed second from the tick source
    Tick,
    AddTask { text: String, priority: Priority },
    ToggleTask(TaskId),
    AddSubtask { task: TaskId, text: String },
    ToggleSubtask { task: TaskId, subtask: SubtaskId },
    SetPriority(Priority),
    ToggleBlocking,
    AddBlockedEntry(String),
    LogMood(String),
    AddEvent(String),
    SetDraft { field: DraftField, text: String },
}

impl Intent {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Intent::StartTimer => "start_timer",
            Intent::PauseTimer => "pause_timer",
            Intent::ToggleTimer => "toggle_timer",
            Intent::ResetTimer => "reset_timer",
            Intent::Tick => "tick",
            Intent::AddTask { .. } => "add_task",
            Intent::ToggleTask(_) => "toggle_task",
            Intent::AddSubtask { .. } => "add_subtask",
            Intent::ToggleSubtask { .. } => "toggle_subtask",
            Intent::SetPriority(_) => "set_priority",
            Intent::ToggleBlocking => "toggle_blocking",
            Intent::AddBlockedEntry(_) => "add_blocked_entry",
            Intent::LogMood(_) => "log_mood",
            Intent::AddEvent(_) => "add_event",
            Intent::SetDraft { .. } => "set_draft",
        }
    }
}

/// Why an intent left the state untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skip {
    /// Text was empty or whitespace
    EmptyInput,
    /// Entry already present
    Duplicate,
    /// The intent does not apply in the current state
    NoChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Skipped(Skip),
}

impl Outcome {
    fn from_change(changed: bool) -> Self {
        if changed {
            Outcome::Applied
        } else {
            Outcome::Skipped(Skip::NoChange)
        }
    }
}

/// Owned, read-only copy of the whole model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub timer: FocusTimer,
    pub tasks: Vec<Task>,
    pub blocked_entries: Vec<String>,
    pub blocking_active: bool,
    pub moods: Vec<MoodEntry>,
    pub events: Vec<CalendarEntry>,
    pub points: u32,
    pub trees: u32,
    pub drafts: Drafts,
}

/// All state of one app session
pub struct Session {
    timer: FocusTimer,
    tasks: TaskRegistry,
    blocklist: Blocklist,
    moods: MoodLog,
    calendar: CalendarLog,
    rewards: RewardCounters,
    drafts: Drafts,
    outbox: VecDeque<Notice>,
    clock: Box<dyn Clock>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Session whose mood entries are dated by `clock`
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            timer: FocusTimer::new(),
            tasks: TaskRegistry::new(),
            blocklist: Blocklist::new(),
            moods: MoodLog::new(),
            calendar: CalendarLog::new(),
            rewards: RewardCounters::new(),
            drafts: Drafts::default(),
            outbox: VecDeque::new(),
            clock,
        }
    }

    pub fn timer(&self) -> &FocusTimer {
        &self.timer
    }

    pub fn tasks(&self) -> &TaskRegistry {
        &self.tasks
    }

    pub fn blocklist(&self) -> &Blocklist {
        &self.blocklist
    }

    pub fn moods(&self) -> &MoodLog {
        &self.moods
    }

    pub fn calendar(&self) -> &CalendarLog {
        &self.calendar
    }

    pub fn rewards(&self) -> &RewardCounters {
        &self.rewards
    }

    pub fn drafts(&self) -> &Drafts {
        &self.drafts
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            timer: self.timer.clone(),
            tasks: self.tasks.tasks().to_vec(),
            blocked_entries: self.blocklist.entries().to_vec(),
            blocking_active: self.blocklist.is_active(),
            moods: self.moods.entries().to_vec(),
            events: self.calendar.events().to_vec(),
            points: self.rewards.points(),
            trees: self.rewards.trees(),
            drafts: self.drafts.clone(),
        }
    }

    /// Take every queued notice, oldest first
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.outbox.drain(..).collect()
    }

    /// Apply one intent
    pub fn dispatch(&mut self, intent: Intent) -> Result<Outcome, SessionError> {
        match intent {
            Intent::StartTimer => Ok(Outcome::from_change(self.timer.start())),
            Intent::PauseTimer => Ok(Outcome::from_change(self.timer.pause())),
            Intent::ToggleTimer => Ok(Outcome::from_change(self.timer.toggle())),
            Intent::ResetTimer => {
                self.timer.reset();
                Ok(Outcome::Applied)
            }
            Intent::Tick => Ok(self.tick()),
            Intent::AddTask { text, priority } => Ok(self.add_task(&text, priority)),
            Intent::ToggleTask(id) => self.toggle_task(id),
            Intent::AddSubtask { task, text } => self.add_subtask(task, &text),
            Intent::ToggleSubtask { task, subtask } => {
                self.tasks.toggle_subtask(task, subtask)?;
                Ok(Outcome::Applied)
            }
            Intent::SetPriority(priority) => {
                self.drafts.priority = priority;
                Ok(Outcome::Applied)
            }
            Intent::ToggleBlocking => Ok(self.toggle_blocking()),
            Intent::AddBlockedEntry(name) => Ok(self.add_blocked_entry(&name)),
            Intent::LogMood(text) => Ok(self.log_mood(&text)),
            Intent::AddEvent(text) => Ok(self.add_event(&text)),
            Intent::SetDraft { field, text } => {
                *self.drafts.slot_mut(field) = text;
                Ok(Outcome::Applied)
            }
        }
    }

    fn tick(&mut self) -> Outcome {
        match self.timer.tick() {
            TickOutcome::Ignored => Outcome::Skipped(Skip::NoChange),
            TickOutcome::Counted => Outcome::Applied,
            TickOutcome::Completed => {
                self.rewards.award_focus_session();
                self.outbox.push_back(Notice::info(SESSION_COMPLETE_MESSAGE));
                Outcome::Applied
            }
        }
    }

    fn add_task(&mut self, text: &str, priority: Priority) -> Outcome {
        if self.tasks.add_task(text, priority).is_none() {
            return Outcome::Skipped(Skip::EmptyInput);
        }
        self.drafts.task.clear();
        self.drafts.priority = Priority::default();
        Outcome::Applied
    }

    fn toggle_task(&mut self, id: TaskId) -> Result<Outcome, SessionError> {
        if self.tasks.toggle_task(id)? == Completion::Completed {
            self.rewards.award_task_completion();
        }
        Ok(Outcome::Applied)
    }

    fn add_subtask(&mut self, task: TaskId, text: &str) -> Result<Outcome, SessionError> {
        if self.tasks.add_subtask(task, text)?.is_none() {
            return Ok(Outcome::Skipped(Skip::EmptyInput));
        }
        self.drafts.subtask.clear();
        Ok(Outcome::Applied)
    }

    fn toggle_blocking(&mut self) -> Outcome {
        let message = if self.blocklist.toggle() {
            format!(
                "Distraction blocker enabled. Blocked apps: {}.",
                self.blocklist.summary()
            )
        } else {
            BLOCKER_OFF_MESSAGE.to_string()
        };
        self.outbox.push_back(Notice::info(message));
        Outcome::Applied
    }

    fn add_blocked_entry(&mut self, name: &str) -> Outcome {
        if name.trim().is_empty() {
            return Outcome::Skipped(Skip::EmptyInput);
        }
        if !self.blocklist.add(name) {
            return Outcome::Skipped(Skip::Duplicate);
        }
        self.drafts.blocked_entry.clear();
        Outcome::Applied
    }

    fn log_mood(&mut self, text: &str) -> Outcome {
        let today = self.clock.today();
        if !self.moods.log(text, today) {
            return Outcome::Skipped(Skip::EmptyInput);
        }
        self.drafts.mood.clear();
        self.outbox.push_back(Notice::confirmation(MOOD_LOGGED_MESSAGE));
        Outcome::Applied
    }

    fn add_event(&mut self, text: &str) -> Outcome {
        if self.calendar.add(text).is_none() {
            return Outcome::Skipped(Skip::EmptyInput);
        }
        self.drafts.event.clear();
        self.outbox.push_back(Notice::confirmation(EVENT_ADDED_MESSAGE));
        Outcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::journal::FixedClock;
    use crate::domain::timer::SESSION_SECONDS;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn test_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
    }

    fn create_test_session() -> Session {
        Session::with_clock(Box::new(FixedClock(test_day())))
    }

    fn add_task(session: &mut Session, text: &str, priority: Priority) -> TaskId {
        session
            .dispatch(Intent::AddTask {
                text: text.to_string(),
                priority,
            })
            .unwrap();
        session.tasks().tasks().last().unwrap().id
    }

    #[test]
    fn test_new_session_snapshot() {
        let session = create_test_session();
        let snapshot = session.snapshot();

        assert!(!snapshot.timer.is_running());
        assert_eq!(snapshot.timer.remaining_seconds(), SESSION_SECONDS);
        assert!(snapshot.tasks.is_empty());
        assert!(snapshot.blocked_entries.is_empty());
        assert!(!snapshot.blocking_active);
        assert!(snapshot.moods.is_empty());
        assert!(snapshot.events.is_empty());
        assert_eq!(snapshot.points, 0);
        assert_eq!(snapshot.trees, 0);
        assert_eq!(snapshot.drafts, Drafts::default());
    }

    #[test]
    fn test_full_focus_session_awards_once() {
        let mut session = create_test_session();
        session.dispatch(Intent::StartTimer).unwrap();
        assert!(session.timer().is_running());

        for _ in 0..SESSION_SECONDS {
            session.dispatch(Intent::Tick).unwrap();
        }

        assert!(!session.timer().is_running());
        assert_eq!(session.timer().remaining_seconds(), SESSION_SECONDS);
        assert_eq!(session.rewards().points(), 10);
        assert_eq!(session.rewards().trees(), 1);
        assert_eq!(
            session.drain_notices(),
            vec![Notice::info(SESSION_COMPLETE_MESSAGE)]
        );

        // Further ticks are ignored until restarted
        assert_eq!(
            session.dispatch(Intent::Tick),
            Ok(Outcome::Skipped(Skip::NoChange))
        );
        assert_eq!(session.rewards().points(), 10);
    }

    #[test]
    fn test_pause_freezes_clock() {
        let mut session = create_test_session();
        session.dispatch(Intent::StartTimer).unwrap();
        for _ in 0..42 {
            session.dispatch(Intent::Tick).unwrap();
        }
        assert_eq!(session.dispatch(Intent::PauseTimer), Ok(Outcome::Applied));
        for _ in 0..100 {
            session.dispatch(Intent::Tick).unwrap();
        }
        assert_eq!(session.timer().remaining_seconds(), SESSION_SECONDS - 42);
        assert_eq!(
            session.dispatch(Intent::PauseTimer),
            Ok(Outcome::Skipped(Skip::NoChange))
        );
    }

    #[test]
    fn test_reset_stops_and_refills() {
        let mut session = create_test_session();
        session.dispatch(Intent::ToggleTimer).unwrap();
        session.dispatch(Intent::Tick).unwrap();
        session.dispatch(Intent::ResetTimer).unwrap();
        assert!(!session.timer().is_running());
        assert_eq!(session.timer().remaining_seconds(), SESSION_SECONDS);
        assert_eq!(session.rewards().points(), 0);
    }

    #[test]
    fn test_add_task_empty_is_skipped() {
        let mut session = create_test_session();
        let outcome = session
            .dispatch(Intent::AddTask {
                text: String::new(),
                priority: Priority::High,
            })
            .unwrap();
        assert_eq!(outcome, Outcome::Skipped(Skip::EmptyInput));
        assert!(session.tasks().is_empty());
    }

    #[test]
    fn test_add_task_with_portuguese_priority() {
        let mut session = create_test_session();
        let priority = Priority::from_label("Alta").unwrap();
        add_task(&mut session, "Write report", priority);

        let tasks = session.tasks().tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Write report");
        assert_eq!(tasks[0].priority, Priority::High);
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_add_task_clears_drafts() {
        let mut session = create_test_session();
        session
            .dispatch(Intent::SetDraft {
                field: DraftField::Task,
                text: "Study".to_string(),
            })
            .unwrap();
        session.dispatch(Intent::SetPriority(Priority::Medium)).unwrap();
        assert_eq!(session.drafts().priority, Priority::Medium);

        let text = session.drafts().task.clone();
        let priority = session.drafts().priority;
        session.dispatch(Intent::AddTask { text, priority }).unwrap();

        assert_eq!(session.drafts().task, "");
        assert_eq!(session.drafts().priority, Priority::Low);
        assert_eq!(session.tasks().tasks()[0].priority, Priority::Medium);
    }

    #[test]
    fn test_skipped_add_keeps_drafts() {
        let mut session = create_test_session();
        session.dispatch(Intent::SetPriority(Priority::High)).unwrap();
        session
            .dispatch(Intent::SetDraft {
                field: DraftField::Task,
                text: "   ".to_string(),
            })
            .unwrap();
        session
            .dispatch(Intent::AddTask {
                text: "   ".to_string(),
                priority: Priority::High,
            })
            .unwrap();
        assert_eq!(session.drafts().task, "   ");
        assert_eq!(session.drafts().priority, Priority::High);
    }

    #[test]
    fn test_task_completion_awards_points_once() {
        let mut session = create_test_session();
        let id = add_task(&mut session, "Study", Priority::from_label("Média").unwrap());

        session.dispatch(Intent::ToggleTask(id)).unwrap();
        assert!(session.tasks().get(id).unwrap().completed);
        assert_eq!(session.rewards().points(), 5);

        session.dispatch(Intent::ToggleTask(id)).unwrap();
        assert!(!session.tasks().get(id).unwrap().completed);
        assert_eq!(session.rewards().points(), 5);

        session.dispatch(Intent::ToggleTask(id)).unwrap();
        assert_eq!(session.rewards().points(), 10);
        assert_eq!(session.rewards().trees(), 0);
    }

    #[test]
    fn test_toggle_unknown_task_is_not_found() {
        let mut session = create_test_session();
        let missing = TaskId::new();
        assert_eq!(
            session.dispatch(Intent::ToggleTask(missing)),
            Err(SessionError::TaskNotFound(missing))
        );
        assert_eq!(session.rewards().points(), 0);
    }

    #[test]
    fn test_add_subtask_unknown_task_is_not_found() {
        let mut session = create_test_session();
        let id = add_task(&mut session, "Parent", Priority::Low);
        session
            .dispatch(Intent::SetDraft {
                field: DraftField::Subtask,
                text: "Step".to_string(),
            })
            .unwrap();
        let before = session.snapshot();

        let missing = TaskId::new();
        let result = session.dispatch(Intent::AddSubtask {
            task: missing,
            text: "Step".to_string(),
        });

        assert_eq!(result, Err(SessionError::TaskNotFound(missing)));
        assert_eq!(session.snapshot(), before);
        assert!(session.tasks().get(id).unwrap().subtasks.is_empty());
    }

    #[test]
    fn test_add_and_toggle_subtask() {
        let mut session = create_test_session();
        let id = add_task(&mut session, "Parent", Priority::Low);
        session
            .dispatch(Intent::SetDraft {
                field: DraftField::Subtask,
                text: "Outline".to_string(),
            })
            .unwrap();
        session
            .dispatch(Intent::AddSubtask {
                task: id,
                text: "Outline".to_string(),
            })
            .unwrap();
        assert_eq!(session.drafts().subtask, "");

        let subtask = session.tasks().get(id).unwrap().subtasks[0].id;
        session
            .dispatch(Intent::ToggleSubtask { task: id, subtask })
            .unwrap();

        let task = session.tasks().get(id).unwrap();
        assert!(task.subtasks[0].completed);
        assert!(!task.completed);
        assert_eq!(session.rewards().points(), 0);
    }

    #[test]
    fn test_blocked_entry_added_once() {
        let mut session = create_test_session();
        let first = session
            .dispatch(Intent::AddBlockedEntry("Instagram".to_string()))
            .unwrap();
        let second = session
            .dispatch(Intent::AddBlockedEntry("Instagram".to_string()))
            .unwrap();

        assert_eq!(first, Outcome::Applied);
        assert_eq!(second, Outcome::Skipped(Skip::Duplicate));
        assert_eq!(session.blocklist().entries(), &["Instagram".to_string()]);
    }

    #[test]
    fn test_duplicate_blocked_entry_keeps_draft() {
        let mut session = create_test_session();
        session
            .dispatch(Intent::AddBlockedEntry("Reddit".to_string()))
            .unwrap();
        session
            .dispatch(Intent::SetDraft {
                field: DraftField::BlockedEntry,
                text: "Reddit".to_string(),
            })
            .unwrap();
        session
            .dispatch(Intent::AddBlockedEntry("Reddit".to_string()))
            .unwrap();
        assert_eq!(session.drafts().blocked_entry, "Reddit");
    }

    #[test]
    fn test_blocking_notice_lists_entries() {
        let mut session = create_test_session();
        session
            .dispatch(Intent::AddBlockedEntry("TikTok".to_string()))
            .unwrap();
        session.dispatch(Intent::ToggleBlocking).unwrap();

        assert!(session.blocklist().is_active());
        let notices = session.drain_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Info);
        assert!(notices[0].message.contains("TikTok"));

        session.dispatch(Intent::ToggleBlocking).unwrap();
        assert!(!session.blocklist().is_active());
        assert_eq!(session.drain_notices(), vec![Notice::info(BLOCKER_OFF_MESSAGE)]);
    }

    #[test]
    fn test_blocking_notice_with_empty_list() {
        let mut session = create_test_session();
        session.dispatch(Intent::ToggleBlocking).unwrap();
        let notices = session.drain_notices();
        assert_eq!(
            notices[0].message,
            "Distraction blocker enabled. Blocked apps: none."
        );
    }

    #[test]
    fn test_log_mood() {
        let mut session = create_test_session();
        session
            .dispatch(Intent::SetDraft {
                field: DraftField::Mood,
                text: "Feliz".to_string(),
            })
            .unwrap();
        let text = session.drafts().mood.clone();
        session.dispatch(Intent::LogMood(text)).unwrap();

        let entries = session.moods().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, test_day());
        assert_eq!(entries[0].mood, "Feliz");
        assert_eq!(session.drafts().mood, "");
        assert_eq!(
            session.drain_notices(),
            vec![Notice::confirmation(MOOD_LOGGED_MESSAGE)]
        );
    }

    #[test]
    fn test_log_empty_mood_is_silent() {
        let mut session = create_test_session();
        let outcome = session.dispatch(Intent::LogMood("  ".to_string())).unwrap();
        assert_eq!(outcome, Outcome::Skipped(Skip::EmptyInput));
        assert!(session.moods().entries().is_empty());
        assert!(session.drain_notices().is_empty());
    }

    #[test]
    fn test_add_event() {
        let mut session = create_test_session();
        session
            .dispatch(Intent::SetDraft {
                field: DraftField::Event,
                text: "Team sync".to_string(),
            })
            .unwrap();
        session
            .dispatch(Intent::AddEvent("Team sync".to_string()))
            .unwrap();
        session.dispatch(Intent::AddEvent(String::new())).unwrap();

        assert_eq!(session.calendar().events().len(), 1);
        assert_eq!(session.calendar().events()[0].text, "Team sync");
        assert_eq!(session.drafts().event, "");
        assert_eq!(
            session.drain_notices(),
            vec![Notice::confirmation(EVENT_ADDED_MESSAGE)]
        );
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut session = create_test_session();
        add_task(&mut session, "Study", Priority::Medium);
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["tasks"][0]["text"], "Study");
        assert_eq!(json["tasks"][0]["priority"], "Medium");
        assert_eq!(json["points"], 0);
    }

    proptest! {
        #[test]
        fn rewards_follow_completed_sessions(sessions in 0u32..4, extra in 0u32..SESSION_SECONDS) {
            let mut session = create_test_session();
            for _ in 0..sessions {
                session.dispatch(Intent::StartTimer).unwrap();
                for _ in 0..SESSION_SECONDS {
                    session.dispatch(Intent::Tick).unwrap();
                }
            }
            session.dispatch(Intent::StartTimer).unwrap();
            for _ in 0..extra {
                session.dispatch(Intent::Tick).unwrap();
            }

            prop_assert_eq!(session.rewards().points(), sessions * 10);
            prop_assert_eq!(session.rewards().trees(), sessions);
            prop_assert_eq!(session.timer().remaining_seconds(), SESSION_SECONDS - extra);
            prop_assert_eq!(session.drain_notices().len(), sessions as usize);
        }

        #[test]
        fn points_never_decrease(toggles in proptest::collection::vec(0usize..3, 0..40)) {
            let mut session = create_test_session();
            let ids: Vec<TaskId> = ["a", "b", "c"]
                .iter()
                .map(|t| add_task(&mut session, t, Priority::Low))
                .collect();

            let mut previous = 0;
            for idx in toggles {
                session.dispatch(Intent::ToggleTask(ids[idx])).unwrap();
                prop_assert!(session.rewards().points() >= previous);
                previous = session.rewards().points();
            }
        }
    }
}
