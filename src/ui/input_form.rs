use crate::app::AppState;
use crate::domain::{DraftField, Priority, UiMode};
use crate::ui::{
    layout::create_modal_area,
    styles::{hint_style, modal_bg_style, modal_title_style, priority_style, selected_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Priority picker: the chosen label highlighted
fn priority_picker(current: Priority) -> Line<'static> {
    let mut spans = vec![Span::raw("Priority: ")];
    for priority in Priority::all() {
        let label = format!(" {} ", priority.label());
        let style = if *priority == current {
            selected_style()
        } else {
            priority_style(*priority)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Render the text entry for the draft being edited
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let UiMode::Entering(field) = app.ui_mode else {
        return;
    };

    let modal_area = create_modal_area(area, 9);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let mut lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(app.entry_text().to_string(), modal_title_style()),
            Span::styled("█", modal_title_style()), // Cursor
        ]),
        Line::raw(""),
    ];

    if field == DraftField::Task {
        lines.push(priority_picker(app.session.drafts().priority));
        lines.push(Line::raw(""));
    }

    lines.push(Line::styled("Enter to save  ·  Esc to cancel", hint_style()));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    format!(" {} ", field.prompt()),
                    modal_title_style(),
                ))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
