use super::tasks::{SubtaskId, Task, TaskId};
use super::timer::{FocusTimer, TimerPhase};

/// A flattened row for rendering the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRow {
    /// Depth in the tree (0 = task, 1 = subtask)
    pub depth: usize,
    /// Whether this is the last subtask of its parent
    pub is_last: bool,
    pub task_index: usize,
    /// Subtask index (None for tasks)
    pub subtask_index: Option<usize>,
}

/// What a selected row points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTarget {
    Task(TaskId),
    Subtask(TaskId, SubtaskId),
}

impl RowTarget {
    /// The task owning the row
    pub fn task_id(&self) -> TaskId {
        match self {
            RowTarget::Task(id) | RowTarget::Subtask(id, _) => *id,
        }
    }
}

/// Flatten tasks and their subtasks into display order
pub fn flatten_tasks(tasks: &[Task]) -> Vec<FlatRow> {
    let mut rows = Vec::new();

    for (task_idx, task) in tasks.iter().enumerate() {
        rows.push(FlatRow {
            depth: 0,
            is_last: false,
            task_index: task_idx,
            subtask_index: None,
        });

        let count = task.subtasks.len();
        for st_idx in 0..count {
            rows.push(FlatRow {
                depth: 1,
                is_last: st_idx + 1 == count,
                task_index: task_idx,
                subtask_index: Some(st_idx),
            });
        }
    }

    rows
}

/// Resolve a flattened row index to ids
pub fn row_target(tasks: &[Task], row: usize) -> Option<RowTarget> {
    let flat = flatten_tasks(tasks);
    let row = flat.get(row)?;
    let task = tasks.get(row.task_index)?;
    match row.subtask_index {
        None => Some(RowTarget::Task(task.id)),
        Some(idx) => task
            .subtasks
            .get(idx)
            .map(|st| RowTarget::Subtask(task.id, st.id)),
    }
}

/// Plant glyph for how far the current session has grown
pub fn plant_glyph(progress: f64, use_emoji: bool) -> &'static str {
    if use_emoji {
        if progress < 0.25 {
            "🌱"
        } else if progress < 1.0 {
            "🌿"
        } else {
            "🌳"
        }
    } else if progress < 0.25 {
        "."
    } else if progress < 1.0 {
        "*"
    } else {
        "T"
    }
}

/// Glyph for one grown tree
pub fn tree_glyph(use_emoji: bool) -> &'static str {
    if use_emoji {
        "🌳"
    } else {
        "T"
    }
}

/// Timer status badge
pub fn timer_badge(timer: &FocusTimer, use_emoji: bool) -> &'static str {
    match (timer.phase(), use_emoji) {
        (TimerPhase::Running, true) => "⏱ FOCUSING",
        (TimerPhase::Running, false) => "FOCUSING",
        (TimerPhase::Idle, true) if timer.is_paused() => "⏸ PAUSED",
        (TimerPhase::Idle, false) if timer.is_paused() => "PAUSED",
        (TimerPhase::Idle, true) => "🌿 READY",
        (TimerPhase::Idle, false) => "READY",
    }
}

/// Get tree connector for subtasks
pub fn tree_connector(is_last: bool) -> &'static str {
    if is_last {
        "└─"
    } else {
        "├─"
    }
}

/// Checkbox for a completion flag
pub fn checkbox(completed: bool) -> &'static str {
    if completed {
        "[x]"
    } else {
        "[ ]"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::Priority;
    use crate::domain::tasks::TaskRegistry;

    fn registry_with_subtasks() -> TaskRegistry {
        let mut registry = TaskRegistry::new();
        let parent = registry.add_task("Parent", Priority::Low).unwrap();
        registry.add_subtask(parent, "Subtask 1").unwrap();
        registry.add_subtask(parent, "Subtask 2").unwrap();
        registry.add_task("Second", Priority::High).unwrap();
        registry
    }

    #[test]
    fn test_flatten_tasks_simple() {
        let mut registry = TaskRegistry::new();
        registry.add_task("Task 1", Priority::Low);
        registry.add_task("Task 2", Priority::Low);

        let rows = flatten_tasks(registry.tasks());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].depth, 0);
        assert_eq!(rows[1].task_index, 1);
    }

    #[test]
    fn test_flatten_tasks_with_subtasks() {
        let registry = registry_with_subtasks();
        let rows = flatten_tasks(registry.tasks());

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1].depth, 1);
        assert!(!rows[1].is_last);
        assert!(rows[2].is_last);
        assert_eq!(rows[2].subtask_index, Some(1));
        assert_eq!(rows[3].task_index, 1);
    }

    #[test]
    fn test_row_target() {
        let registry = registry_with_subtasks();
        let tasks = registry.tasks();

        assert_eq!(row_target(tasks, 0), Some(RowTarget::Task(tasks[0].id)));
        assert_eq!(
            row_target(tasks, 2),
            Some(RowTarget::Subtask(tasks[0].id, tasks[0].subtasks[1].id))
        );
        assert_eq!(row_target(tasks, 3).map(|t| t.task_id()), Some(tasks[1].id));
        assert_eq!(row_target(tasks, 4), None);
    }

    #[test]
    fn test_plant_glyph() {
        assert_eq!(plant_glyph(0.1, true), "🌱");
        assert_eq!(plant_glyph(0.5, true), "🌿");
        assert_eq!(plant_glyph(1.0, true), "🌳");
        assert_eq!(plant_glyph(0.1, false), ".");
        assert_eq!(plant_glyph(0.5, false), "*");
    }

    #[test]
    fn test_timer_badge() {
        let mut timer = FocusTimer::new();
        assert_eq!(timer_badge(&timer, true), "🌿 READY");
        assert_eq!(timer_badge(&timer, false), "READY");
        timer.start();
        assert_eq!(timer_badge(&timer, true), "⏱ FOCUSING");
        assert_eq!(timer_badge(&timer, false), "FOCUSING");
        timer.tick();
        timer.pause();
        assert_eq!(timer_badge(&timer, true), "⏸ PAUSED");
        assert_eq!(timer_badge(&timer, false), "PAUSED");
    }

    #[test]
    fn test_tree_connector() {
        assert_eq!(tree_connector(false), "├─");
        assert_eq!(tree_connector(true), "└─");
    }
}
