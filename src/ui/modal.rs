use crate::app::AppState;
use crate::domain::NoticeKind;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style, notice_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn notice_title(kind: NoticeKind, use_emoji: bool) -> &'static str {
    match (kind, use_emoji) {
        (NoticeKind::Info, true) => " 🔔 Notice ",
        (NoticeKind::Info, false) => " Notice ",
        (NoticeKind::Confirmation, true) => " ✅ Saved ",
        (NoticeKind::Confirmation, false) => " Saved ",
    }
}

/// Render the notice at the front of the queue
pub fn render_notice_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(notice) = app.current_notice() else {
        return;
    };

    let modal_area = create_modal_area(area, 8);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let mut lines = vec![
        Line::raw(""),
        Line::raw(format!("  {}", notice.message)),
        Line::raw(""),
    ];

    let waiting = app.notices.len().saturating_sub(1);
    let footer = if waiting > 0 {
        format!(" OK ({} more)", waiting)
    } else {
        " OK".to_string()
    };
    lines.push(Line::from(vec![
        Span::styled("  [Enter]", modal_title_style()),
        Span::raw(footer),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    notice_title(notice.kind, app.config.use_emoji),
                    notice_title_style(notice.kind),
                ))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
