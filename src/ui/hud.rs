use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::GameState;

/// Renders the score/speed row and the controls hint, returning the
/// remaining play area above them.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [play_area, score_area, hint_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(score_line(state, theme)).alignment(Alignment::Center),
        score_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from(
            "arrows/wasd move · space pause · r restart · q quit",
        ))
        .alignment(Alignment::Center)
        .style(Style::new().fg(theme.hud_muted)),
        hint_area,
    );

    play_area
}

fn score_line(state: &GameState, theme: &Theme) -> Line<'static> {
    let label = Style::new().fg(theme.hud_muted);
    let value = Style::new().fg(theme.hud_value);

    Line::from(vec![
        Span::styled("Score: ", label),
        Span::styled(state.score.to_string(), value),
        Span::styled("  │  ", label),
        Span::styled("Speed: ", label),
        Span::styled(state.speed_level().to_string(), value),
    ])
}
