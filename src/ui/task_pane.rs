use crate::app::AppState;
use crate::domain::views::{checkbox, tree_connector};
use crate::domain::{flatten_tasks, Pane, Task};
use crate::ui::pane_block;
use crate::ui::styles::{
    default_style, done_style, hint_style, priority_style, selected_style, tree_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Line for a task: "[ ] Write report  High  (1/2)"
fn task_line(task: &Task) -> Line<'static> {
    let text_style = if task.completed {
        done_style()
    } else {
        default_style()
    };

    let mut spans = vec![
        Span::raw(format!("{} ", checkbox(task.completed))),
        Span::styled(task.text.clone(), text_style),
        Span::raw("  "),
        Span::styled(task.priority.label().to_string(), priority_style(task.priority)),
    ];

    if !task.subtasks.is_empty() {
        spans.push(Span::styled(
            format!("  ({}/{})", task.subtasks_done(), task.subtasks.len()),
            tree_style(),
        ));
    }

    Line::from(spans)
}

/// Line for a subtask, indented under its parent
fn subtask_line(text: &str, completed: bool, is_last: bool) -> Line<'static> {
    let text_style = if completed {
        done_style()
    } else {
        default_style()
    };

    Line::from(vec![
        Span::styled(format!("   {} ", tree_connector(is_last)), tree_style()),
        Span::raw(format!("{} ", checkbox(completed))),
        Span::styled(text.to_string(), text_style),
    ])
}

/// Render the tasks pane
pub fn render_task_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let tasks = app.session.tasks().tasks();
    let focused = app.focused_pane == Pane::Tasks;
    let done = tasks.iter().filter(|t| t.completed).count();
    let title = format!("Tasks ({}/{})", done, tasks.len());
    let block = pane_block(app, "📋", &title, focused);

    if tasks.is_empty() {
        let empty = Paragraph::new(Line::styled(
            " No tasks yet. Press a to add one.",
            hint_style(),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = flatten_tasks(tasks)
        .iter()
        .enumerate()
        .filter_map(|(idx, row)| {
            let task = tasks.get(row.task_index)?;
            let line = match row.subtask_index {
                None => task_line(task),
                Some(st_idx) => {
                    let subtask = task.subtasks.get(st_idx)?;
                    subtask_line(&subtask.text, subtask.completed, row.is_last)
                }
            };

            let item = ListItem::new(line);
            Some(if focused && idx == app.selected_index {
                item.style(selected_style())
            } else {
                item
            })
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
