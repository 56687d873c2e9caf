use crate::app::AppState;
use crate::domain::Pane;
use crate::ui::pane_block;
use crate::ui::styles::hint_style;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the mood diary pane
pub fn render_mood_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = pane_block(app, "📓", "Mood Diary", app.focused_pane == Pane::Mood);
    let entries = app.session.moods().entries();

    let lines: Vec<Line> = if entries.is_empty() {
        vec![Line::styled("No moods logged yet.", hint_style())]
    } else {
        entries
            .iter()
            .map(|entry| Line::raw(entry.display(&app.config.date_format)))
            .collect()
    };

    // Keep the newest entries in view
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    f.render_widget(paragraph, area);
}
