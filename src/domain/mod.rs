pub mod blocklist;
pub mod calendar;
pub mod enums;
pub mod error;
pub mod journal;
pub mod rewards;
pub mod session;
pub mod tasks;
pub mod timer;
pub mod views;

pub use enums::{DraftField, NoticeKind, Pane, Priority, UiMode};
pub use error::SessionError;
pub use session::{Drafts, Intent, Notice, Outcome, Session, SessionSnapshot, Skip};
pub use tasks::{SubtaskId, Task, TaskId};
pub use timer::{FocusTimer, SESSION_SECONDS};
pub use views::{flatten_tasks, row_target, FlatRow, RowTarget};
