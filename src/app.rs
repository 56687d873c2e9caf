use crate::config::FocusConfig;
use crate::domain::session::SESSION_COMPLETE_MESSAGE;
use crate::domain::{
    flatten_tasks, row_target, DraftField, Intent, Notice, Outcome, Pane, Priority, RowTarget,
    Session, SessionError, TaskId, UiMode,
};
use crate::notifications;
use crate::ticker::TickSource;
use std::collections::VecDeque;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Main application state
pub struct AppState {
    pub session: Session,
    pub config: FocusConfig,
    pub focused_pane: Pane,
    /// Row in the flattened task list
    pub selected_index: usize,
    pub ui_mode: UiMode,
    /// Notices waiting to be shown, oldest first
    pub notices: VecDeque<Notice>,
    pub ticker: TickSource,
    /// Task a subtask entry will be added to
    pub entry_target: Option<TaskId>,
}

impl AppState {
    pub fn new(config: FocusConfig) -> Self {
        Self::with_session(Session::new(), config)
    }

    pub fn with_session(session: Session, config: FocusConfig) -> Self {
        Self {
            session,
            config,
            focused_pane: Pane::Timer,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            notices: VecDeque::new(),
            ticker: TickSource::default(),
            entry_target: None,
        }
    }

    /// Apply an intent to the session.
    ///
    /// Returns None when the intent referenced a task or subtask that no
    /// longer exists; that case is logged and otherwise ignored.
    pub fn dispatch(&mut self, intent: Intent) -> Option<Outcome> {
        self.dispatch_at(intent, Instant::now())
    }

    pub(crate) fn dispatch_at(&mut self, intent: Intent, now: Instant) -> Option<Outcome> {
        let name = intent.name();
        let trees_before = self.session.rewards().trees();

        let result = self.session.dispatch(intent);
        self.ticker.sync(self.session.timer().is_running(), now);

        let outcome = match result {
            Ok(outcome) => {
                if name != "tick" {
                    debug!(intent = name, ?outcome, "intent dispatched");
                }
                Some(outcome)
            }
            Err(err) => {
                self.log_session_error(name, &err);
                None
            }
        };

        if self.session.rewards().trees() > trees_before {
            self.on_session_complete();
        }
        self.collect_notices();
        outcome
    }

    fn log_session_error(&self, intent: &str, err: &SessionError) {
        warn!(intent, error = %err, "intent ignored");
    }

    fn on_session_complete(&mut self) {
        info!(
            points = self.session.rewards().points(),
            trees = self.session.rewards().trees(),
            "focus session complete"
        );
        if self.config.desktop_notifications {
            notifications::notify_session_complete(SESSION_COMPLETE_MESSAGE);
        }
    }

    fn collect_notices(&mut self) {
        self.notices.extend(self.session.drain_notices());
        self.settle_mode();
    }

    /// Show the next notice once nothing else holds the screen
    fn settle_mode(&mut self) {
        if self.ui_mode == UiMode::Normal && !self.notices.is_empty() {
            self.ui_mode = UiMode::Notice;
        }
    }

    /// Notice currently on screen
    pub fn current_notice(&self) -> Option<&Notice> {
        match self.ui_mode {
            UiMode::Notice => self.notices.front(),
            _ => None,
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
        self.ui_mode = UiMode::Normal;
        self.settle_mode();
    }

    /// Deliver the ticks that became due by `now`
    pub fn tick(&mut self, now: Instant) {
        let due = self.ticker.due_ticks(now);
        for _ in 0..due {
            if !self.session.timer().is_running() {
                break;
            }
            self.dispatch_at(Intent::Tick, now);
        }
    }

    pub fn focus_next(&mut self) {
        self.focused_pane = self.focused_pane.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused_pane = self.focused_pane.previous();
    }

    pub fn toggle_timer(&mut self) {
        self.dispatch(Intent::ToggleTimer);
    }

    pub fn reset_timer(&mut self) {
        self.dispatch(Intent::ResetTimer);
    }

    pub fn toggle_blocking(&mut self) {
        self.dispatch(Intent::ToggleBlocking);
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        let rows = flatten_tasks(self.session.tasks().tasks());
        if self.selected_index + 1 < rows.len() {
            self.selected_index += 1;
        }
    }

    /// Get the task or subtask under the selection
    pub fn selected_target(&self) -> Option<RowTarget> {
        row_target(self.session.tasks().tasks(), self.selected_index)
    }

    /// Complete or reopen the selected row
    pub fn toggle_selected(&mut self) {
        match self.selected_target() {
            Some(RowTarget::Task(id)) => {
                self.dispatch(Intent::ToggleTask(id));
            }
            Some(RowTarget::Subtask(task, subtask)) => {
                self.dispatch(Intent::ToggleSubtask { task, subtask });
            }
            None => {}
        }
    }

    /// Open the text entry for a draft field
    pub fn start_entry(&mut self, field: DraftField) {
        if field == DraftField::Subtask {
            match self.selected_target() {
                Some(target) => self.entry_target = Some(target.task_id()),
                None => return,
            }
        }
        self.ui_mode = UiMode::Entering(field);
    }

    fn entering_field(&self) -> Option<DraftField> {
        match self.ui_mode {
            UiMode::Entering(field) => Some(field),
            _ => None,
        }
    }

    /// Text currently typed in the open entry
    pub fn entry_text(&self) -> &str {
        match self.entering_field() {
            Some(field) => self.session.drafts().get(field),
            None => "",
        }
    }

    pub fn entry_push(&mut self, c: char) {
        if let Some(field) = self.entering_field() {
            let mut text = self.session.drafts().get(field).to_string();
            text.push(c);
            self.dispatch(Intent::SetDraft { field, text });
        }
    }

    pub fn entry_backspace(&mut self) {
        if let Some(field) = self.entering_field() {
            let mut text = self.session.drafts().get(field).to_string();
            if text.pop().is_some() {
                self.dispatch(Intent::SetDraft { field, text });
            }
        }
    }

    /// Cycle the draft priority in the task entry
    pub fn cycle_priority(&mut self, forward: bool) {
        let current = self.session.drafts().priority;
        let next = if forward {
            current.next()
        } else {
            current.previous()
        };
        self.dispatch(Intent::SetPriority(next));
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.dispatch(Intent::SetPriority(priority));
    }

    /// Submit the open entry. The draft is kept when the intent is skipped.
    pub fn submit_entry(&mut self) {
        let Some(field) = self.entering_field() else {
            return;
        };
        let drafts = self.session.drafts();
        let text = drafts.get(field).to_string();

        let intent = match field {
            DraftField::Task => Some(Intent::AddTask {
                text,
                priority: drafts.priority,
            }),
            DraftField::Subtask => self
                .entry_target
                .map(|task| Intent::AddSubtask { task, text }),
            DraftField::Mood => Some(Intent::LogMood(text)),
            DraftField::Event => Some(Intent::AddEvent(text)),
            DraftField::BlockedEntry => Some(Intent::AddBlockedEntry(text)),
        };

        self.ui_mode = UiMode::Normal;
        self.entry_target = None;
        if let Some(intent) = intent {
            self.dispatch(intent);
        }
        self.settle_mode();
    }

    /// Close the entry, keeping the draft for later
    pub fn cancel_entry(&mut self) {
        self.ui_mode = UiMode::Normal;
        self.entry_target = None;
        self.settle_mode();
    }
}
