use crate::app::AppState;
use crate::domain::{DraftField, Pane, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Entering(field) => handle_entry_mode(app, field, key),
        UiMode::Notice => handle_notice_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),

        // Pane focus
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_previous(),

        // Play/pause from anywhere
        KeyCode::Char('p') | KeyCode::Char('P') => app.toggle_timer(),

        _ => match app.focused_pane {
            Pane::Timer => handle_timer_pane(app, key),
            Pane::Tasks => handle_tasks_pane(app, key),
            Pane::Blocker => handle_blocker_pane(app, key),
            Pane::Mood => handle_text_pane(app, key, DraftField::Mood),
            Pane::Calendar => handle_text_pane(app, key, DraftField::Event),
        },
    }
    Ok(false)
}

fn handle_timer_pane(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_timer(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset_timer(),
        _ => {}
    }
}

fn handle_tasks_pane(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('a') => app.start_entry(DraftField::Task),
        KeyCode::Char('A') | KeyCode::Char('s') => app.start_entry(DraftField::Subtask),
        _ => {}
    }
}

fn handle_blocker_pane(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('b') | KeyCode::Char('B') => app.toggle_blocking(),
        KeyCode::Char('a') | KeyCode::Char('A') => app.start_entry(DraftField::BlockedEntry),
        _ => {}
    }
}

fn handle_text_pane(app: &mut AppState, key: KeyEvent, field: DraftField) {
    if matches!(
        key.code,
        KeyCode::Enter | KeyCode::Char('a') | KeyCode::Char('A')
    ) {
        app.start_entry(field);
    }
}

/// Handle keys while typing into a draft
fn handle_entry_mode(app: &mut AppState, field: DraftField, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_entry(),
        KeyCode::Esc => app.cancel_entry(),
        KeyCode::Backspace => app.entry_backspace(),

        // Priority picker
        KeyCode::Right | KeyCode::Tab if field == DraftField::Task => app.cycle_priority(true),
        KeyCode::Left | KeyCode::BackTab if field == DraftField::Task => {
            app.cycle_priority(false)
        }

        KeyCode::Char(c) => app.entry_push(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys while a notice is shown
fn handle_notice_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if matches!(
        key.code,
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')
    ) {
        app.dismiss_notice();
    }
    Ok(false)
}
