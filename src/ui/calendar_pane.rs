use crate::app::AppState;
use crate::domain::Pane;
use crate::ui::pane_block;
use crate::ui::styles::hint_style;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Render the calendar pane
pub fn render_calendar_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = pane_block(app, "📅", "Calendar", app.focused_pane == Pane::Calendar);
    let events = app.session.calendar().events();

    if events.is_empty() {
        let empty = Paragraph::new(Line::styled("No events yet.", hint_style())).block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = events
        .iter()
        .map(|event| ListItem::new(format!("• {}", event.text)))
        .collect();
    f.render_widget(List::new(items).block(block), area);
}
