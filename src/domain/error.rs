use super::tasks::{SubtaskId, TaskId};
use thiserror::Error;

/// Errors raised by session intents.
///
/// Both variants mean the caller holds an id the session never issued,
/// i.e. the presentation layer is out of sync with the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("task {0} not found")]
    TaskNotFound(TaskId),

    #[error("subtask {subtask} not found in task {task}")]
    SubtaskNotFound { task: TaskId, subtask: SubtaskId },
}
