use crate::app::AppState;
use crate::domain::timer::TimerPhase;
use crate::domain::views::{plant_glyph, timer_badge};
use crate::domain::{FocusTimer, Pane};
use crate::ui::pane_block;
use crate::ui::styles::{gauge_style, idle_style, paused_style, plant_style, running_style};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

fn badge_style(timer: &FocusTimer) -> Style {
    match timer.phase() {
        TimerPhase::Running => running_style(),
        TimerPhase::Idle if timer.is_paused() => paused_style(),
        TimerPhase::Idle => idle_style(),
    }
}

/// Clock line: plant, MM:SS and status badge
fn clock_line(timer: &FocusTimer, use_emoji: bool) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{} ", plant_glyph(timer.progress(), use_emoji)),
            plant_style(),
        ),
        Span::styled(
            timer.clock(),
            badge_style(timer).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(timer_badge(timer, use_emoji).to_string(), badge_style(timer)),
    ])
}

/// Render the focus timer pane
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let timer = app.session.timer();
    let block = pane_block(
        app,
        "⏱",
        "Focus Timer",
        app.focused_pane == Pane::Timer,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Clock
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Gauge
            Constraint::Min(0),
        ])
        .split(block.inner(area));

    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .ratio(timer.progress().clamp(0.0, 1.0))
        .label(format!("{:.0}%", timer.progress() * 100.0));

    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(clock_line(timer, app.config.use_emoji)).alignment(Alignment::Center),
        chunks[1],
    );
    f.render_widget(gauge, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_clock_line() {
        let mut timer = FocusTimer::new();
        assert_eq!(line_text(&clock_line(&timer, false)), ". 25:00  READY");
        assert_eq!(line_text(&clock_line(&timer, true)), "🌱 25:00  🌿 READY");

        timer.start();
        timer.tick();
        assert!(line_text(&clock_line(&timer, true)).contains("24:59"));
        assert!(line_text(&clock_line(&timer, true)).contains("FOCUSING"));
    }
}
