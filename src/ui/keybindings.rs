use crate::app::AppState;
use crate::domain::{DraftField, Pane, UiMode};
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Hints for the current mode and focused pane
fn hints(app: &AppState) -> Vec<&'static str> {
    match app.ui_mode {
        UiMode::Notice => vec!["Enter/Esc ok"],
        UiMode::Entering(DraftField::Task) => {
            vec!["Enter add", "←/→ priority", "Esc cancel"]
        }
        UiMode::Entering(_) => vec!["Enter save", "Esc cancel"],
        UiMode::Normal => {
            let mut hints = match app.focused_pane {
                Pane::Timer => vec!["Enter start/pause", "r reset"],
                Pane::Tasks => vec!["↑/↓ select", "Enter done", "a add", "s subtask"],
                Pane::Blocker => vec!["Enter/b on-off", "a add app"],
                Pane::Mood => vec!["a log mood"],
                Pane::Calendar => vec!["a add event"],
            };
            hints.extend(["p play/pause", "Tab next pane", "q quit"]);
            hints
        }
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let text = format!(" {}", hints(app).join("   "));
    let paragraph = Paragraph::new(Line::raw(text)).style(hint_style());
    f.render_widget(paragraph, area);
}
