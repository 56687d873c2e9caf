use super::enums::Priority;
use crate::domain::error::SessionError;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Identifier of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of a subtask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SubtaskId(Uuid);

impl SubtaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubtaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A step inside a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subtask {
    pub id: SubtaskId,
    pub text: String,
    pub completed: bool,
}

impl Subtask {
    fn new(text: String) -> Self {
        Self {
            id: SubtaskId::new(),
            text,
            completed: false,
        }
    }
}

/// A planner task with its subtasks (one level deep)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub priority: Priority,
    pub completed: bool,
    pub subtasks: Vec<Subtask>,
}

impl Task {
    fn new(text: String, priority: Priority) -> Self {
        Self {
            id: TaskId::new(),
            text,
            priority,
            completed: false,
            subtasks: Vec::new(),
        }
    }

    /// Number of completed subtasks
    pub fn subtasks_done(&self) -> usize {
        self.subtasks.iter().filter(|st| st.completed).count()
    }
}

/// Direction of a completion flip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Went from open to completed
    Completed,
    /// Went from completed back to open
    Reopened,
}

impl Completion {
    fn from_flag(completed: bool) -> Self {
        if completed {
            Self::Completed
        } else {
            Self::Reopened
        }
    }
}

/// Ordered collection of tasks. Nothing is ever removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Result<&mut Task, SessionError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(SessionError::TaskNotFound(id))
    }

    /// Append a task. Returns None when the text is blank.
    pub fn add_task(&mut self, text: &str, priority: Priority) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let task = Task::new(text.to_string(), priority);
        let id = task.id;
        self.tasks.push(task);
        Some(id)
    }

    /// Flip a task's completion
    pub fn toggle_task(&mut self, id: TaskId) -> Result<Completion, SessionError> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        Ok(Completion::from_flag(task.completed))
    }

    /// Append a subtask. Unknown task ids fail before the text is looked at;
    /// blank text yields Ok(None).
    pub fn add_subtask(&mut self, task_id: TaskId, text: &str) -> Result<Option<SubtaskId>, SessionError> {
        let task = self.get_mut(task_id)?;
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let subtask = Subtask::new(text.to_string());
        let id = subtask.id;
        task.subtasks.push(subtask);
        Ok(Some(id))
    }

    /// Flip a subtask's completion. The parent is left alone.
    pub fn toggle_subtask(&mut self, task_id: TaskId, subtask_id: SubtaskId) -> Result<Completion, SessionError> {
        let task = self.get_mut(task_id)?;
        let subtask = task
            .subtasks
            .iter_mut()
            .find(|st| st.id == subtask_id)
            .ok_or(SessionError::SubtaskNotFound {
                task: task_id,
                subtask: subtask_id,
            })?;
        subtask.completed = !subtask.completed;
        Ok(Completion::from_flag(subtask.completed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_task() {
        let mut registry = TaskRegistry::new();
        let id = registry.add_task("Write report", Priority::High).unwrap();

        assert_eq!(registry.len(), 1);
        let task = registry.get(id).unwrap();
        assert_eq!(task.text, "Write report");
        assert_eq!(task.priority, Priority::High);
        assert!(!task.completed);
        assert!(task.subtasks.is_empty());
    }

    #[test]
    fn test_add_task_blank_is_skipped() {
        let mut registry = TaskRegistry::new();
        assert!(registry.add_task("", Priority::Low).is_none());
        assert!(registry.add_task("   \t", Priority::Low).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_task_trims_text() {
        let mut registry = TaskRegistry::new();
        let id = registry.add_task("  Study  ", Priority::Medium).unwrap();
        assert_eq!(registry.get(id).unwrap().text, "Study");
    }

    #[test]
    fn test_tasks_keep_insertion_order() {
        let mut registry = TaskRegistry::new();
        registry.add_task("First", Priority::Low);
        registry.add_task("Second", Priority::High);
        registry.add_task("Third", Priority::Medium);

        let texts: Vec<&str> = registry.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_toggle_task() {
        let mut registry = TaskRegistry::new();
        let id = registry.add_task("Task", Priority::Low).unwrap();

        assert_eq!(registry.toggle_task(id), Ok(Completion::Completed));
        assert!(registry.get(id).unwrap().completed);
        assert_eq!(registry.toggle_task(id), Ok(Completion::Reopened));
        assert!(!registry.get(id).unwrap().completed);
    }

    #[test]
    fn test_toggle_unknown_task() {
        let mut registry = TaskRegistry::new();
        let missing = TaskId::new();
        assert_eq!(registry.toggle_task(missing), Err(SessionError::TaskNotFound(missing)));
    }

    #[test]
    fn test_add_subtask() {
        let mut registry = TaskRegistry::new();
        let id = registry.add_task("Parent", Priority::Low).unwrap();

        registry.add_subtask(id, "Step 1").unwrap().unwrap();
        registry.add_subtask(id, "Step 2").unwrap().unwrap();

        let task = registry.get(id).unwrap();
        assert_eq!(task.subtasks.len(), 2);
        assert_eq!(task.subtasks[0].text, "Step 1");
        assert_eq!(task.subtasks[1].text, "Step 2");
        assert!(!task.subtasks[0].completed);
    }

    #[test]
    fn test_add_subtask_blank_is_skipped() {
        let mut registry = TaskRegistry::new();
        let id = registry.add_task("Parent", Priority::Low).unwrap();
        assert_eq!(registry.add_subtask(id, "  "), Ok(None));
        assert!(registry.get(id).unwrap().subtasks.is_empty());
    }

    #[test]
    fn test_add_subtask_unknown_task_mutates_nothing() {
        let mut registry = TaskRegistry::new();
        registry.add_task("Parent", Priority::Low);
        let before = registry.clone();

        let missing = TaskId::new();
        assert_eq!(
            registry.add_subtask(missing, "Orphan"),
            Err(SessionError::TaskNotFound(missing))
        );
        assert_eq!(registry, before);
    }

    #[test]
    fn test_toggle_subtask_does_not_cascade() {
        let mut registry = TaskRegistry::new();
        let task_id = registry.add_task("Parent", Priority::Low).unwrap();
        let st_id = registry.add_subtask(task_id, "Only step").unwrap().unwrap();

        assert_eq!(registry.toggle_subtask(task_id, st_id), Ok(Completion::Completed));

        let task = registry.get(task_id).unwrap();
        assert!(task.subtasks[0].completed);
        assert!(!task.completed);
        assert_eq!(task.subtasks_done(), 1);
    }

    #[test]
    fn test_toggle_unknown_subtask() {
        let mut registry = TaskRegistry::new();
        let task_id = registry.add_task("Parent", Priority::Low).unwrap();
        let missing = SubtaskId::new();

        assert_eq!(
            registry.toggle_subtask(task_id, missing),
            Err(SessionError::SubtaskNotFound {
                task: task_id,
                subtask: missing
            })
        );

        let other_task = TaskId::new();
        assert_eq!(
            registry.toggle_subtask(other_task, missing),
            Err(SessionError::TaskNotFound(other_task))
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let mut registry = TaskRegistry::new();
        let a = registry.add_task("Same", Priority::Low).unwrap();
        let b = registry.add_task("Same", Priority::Low).unwrap();
        assert_ne!(a, b);
    }
}
