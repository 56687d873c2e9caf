pub mod blocker_pane;
pub mod calendar_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod mood_pane;
pub mod rewards_pane;
pub mod styles;
pub mod task_pane;
pub mod timer_pane;

use crate::app::AppState;
use blocker_pane::render_blocker_pane;
use calendar_pane::render_calendar_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::render_notice_modal;
use mood_pane::render_mood_pane;
use ratatui::{
    text::Span,
    widgets::{Block, Borders},
    Frame,
};
use rewards_pane::render_rewards_pane;
use styles::{border_style, focused_border_style, title_style};
use task_pane::render_task_pane;
use timer_pane::render_timer_pane;

/// Bordered pane block, highlighted when it holds focus
pub(crate) fn pane_block(app: &AppState, emoji: &str, label: &str, focused: bool) -> Block<'static> {
    let title = if app.config.use_emoji {
        format!(" {} {} ", emoji, label)
    } else {
        format!(" {} ", label)
    };
    let border = if focused {
        focused_border_style()
    } else {
        border_style()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(title, title_style()))
}

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app, layout.keybindings_area);

    render_timer_pane(f, app, layout.timer_area);
    render_task_pane(f, app, layout.tasks_area);
    render_rewards_pane(f, app, layout.rewards_area);
    render_blocker_pane(f, app, layout.blocker_area);
    render_mood_pane(f, app, layout.mood_area);
    render_calendar_pane(f, app, layout.calendar_area);

    // Overlays
    render_input_form(f, app, size);
    render_notice_modal(f, app, size);
}
