use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub timer_area: Rect,
    pub tasks_area: Rect,
    pub blocker_area: Rect,
    pub mood_area: Rect,
    pub calendar_area: Rect,
    pub rewards_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Left column (60%): Timer above Tasks
/// - Right column (40%): Rewards, Blocker, Mood, Calendar
pub fn create_layout(area: Rect) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Timer
            Constraint::Min(0),    // Tasks
        ])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),      // Rewards
            Constraint::Percentage(30), // Blocker
            Constraint::Percentage(35), // Mood
            Constraint::Min(0),         // Calendar
        ])
        .split(columns[1]);

    MainLayout {
        keybindings_area: main_chunks[0],
        timer_area: left[0],
        tasks_area: left[1],
        rewards_area: right[0],
        blocker_area: right[1],
        mood_area: right[2],
        calendar_area: right[3],
    }
}

/// Create centered modal area with a fixed height
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(height),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
