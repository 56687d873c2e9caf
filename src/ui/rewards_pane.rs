use crate::app::AppState;
use crate::domain::views::tree_glyph;
use crate::ui::pane_block;
use crate::ui::styles::{plant_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Trees shown before collapsing into a count
const MAX_TREE_GLYPHS: u32 = 12;

/// Row of grown trees, "+N" past the cap
fn forest_row(trees: u32, use_emoji: bool) -> String {
    if trees == 0 {
        return "Finish a focus session to grow a tree.".to_string();
    }
    let shown = trees.min(MAX_TREE_GLYPHS);
    let mut row = tree_glyph(use_emoji).repeat(shown as usize);
    if trees > shown {
        row.push_str(&format!(" +{}", trees - shown));
    }
    row
}

/// Render the rewards pane (points and forest)
pub fn render_rewards_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let rewards = app.session.rewards();
    let block = pane_block(app, "🌳", "Focus Forest", false);

    let lines = vec![
        Line::from(vec![
            Span::styled("Points: ", title_style()),
            Span::raw(rewards.points().to_string()),
            Span::raw("   "),
            Span::styled("Trees: ", title_style()),
            Span::raw(rewards.trees().to_string()),
        ]),
        Line::raw(""),
        Line::styled(forest_row(rewards.trees(), app.config.use_emoji), plant_style()),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}
