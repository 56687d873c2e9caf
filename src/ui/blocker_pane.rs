use crate::app::AppState;
use crate::domain::blocklist::Blocklist;
use crate::domain::Pane;
use crate::ui::pane_block;
use crate::ui::styles::{blocker_style, default_style, hint_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

fn blocker_lines(blocklist: &Blocklist) -> Vec<Line<'static>> {
    let status = if blocklist.is_active() { "ON" } else { "OFF" };
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Blocker: ", title_style()),
            Span::styled(status, blocker_style(blocklist.is_active())),
        ]),
        Line::raw(""),
    ];

    if blocklist.entries().is_empty() {
        lines.push(Line::styled("No apps or sites listed.", hint_style()));
    } else {
        lines.extend(
            blocklist
                .entries()
                .iter()
                .map(|entry| Line::styled(format!("• {}", entry), default_style())),
        );
    }
    lines
}

/// Render the distraction blocker pane
pub fn render_blocker_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = pane_block(
        app,
        "🚫",
        "Distraction Blocker",
        app.focused_pane == Pane::Blocker,
    );
    let paragraph = Paragraph::new(blocker_lines(app.session.blocklist()))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
