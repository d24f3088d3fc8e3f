use std::time::Duration;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{GLYPH_FOOD, GLYPH_GRID_DOT, GLYPH_SEGMENT, Theme};
use crate::game::{GameState, GameStatus};
use crate::grid::{self, Cell, GRID_SIZE};
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_victory_menu};

/// Presentation-only values for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo<'a> {
    pub theme: &'a Theme,
    /// Time since app start; drives the food pulse.
    pub elapsed: Duration,
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, info: FrameInfo<'_>) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, info.theme);
    let board = board_rect(play_area);

    let block = Block::bordered()
        .title(" gilded snake ")
        .border_style(Style::new().fg(info.theme.border));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_field(frame, inner, info.theme);
    render_food(frame, inner, state.food, info);
    render_snake(frame, inner, state, info.theme);

    match state.status {
        GameStatus::Paused => render_pause_menu(frame, board, info.theme),
        GameStatus::GameOver => {
            render_game_over_menu(frame, board, state.score, state.death_reason, info.theme);
        }
        GameStatus::Victory => render_victory_menu(frame, board, state.score, info.theme),
        GameStatus::Running => {}
    }
}

/// Centers the fixed-size board within the available play area.
fn board_rect(play_area: Rect) -> Rect {
    let side = GRID_SIZE as u16 + 2;
    Rect {
        x: play_area.x + play_area.width.saturating_sub(side) / 2,
        y: play_area.y + play_area.height.saturating_sub(side) / 2,
        width: side.min(play_area.width),
        height: side.min(play_area.height),
    }
}

fn render_field(frame: &mut Frame<'_>, inner: Rect, theme: &Theme) {
    let style = Style::new().fg(theme.grid_line).bg(theme.field_bg);
    let buffer = frame.buffer_mut();

    for y in inner.y..inner.bottom() {
        for x in inner.x..inner.right() {
            buffer.set_string(x, y, GLYPH_GRID_DOT, style);
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, food: Cell, info: FrameInfo<'_>) {
    let Some((x, y)) = logical_to_terminal(inner, food) else {
        return;
    };

    let color = scale_rgb(info.theme.food, food_pulse(info.elapsed));
    frame.buffer_mut().set_string(
        x,
        y,
        GLYPH_FOOD,
        Style::new().fg(color).bg(info.theme.field_bg),
    );
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let len = state.snake.len();
    let buffer = frame.buffer_mut();

    for (index, segment) in state.snake.segments().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, *segment) else {
            continue;
        };

        let style = if index == 0 {
            Style::new()
                .fg(theme.snake_head)
                .bg(theme.field_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            // Gold near the head shading into red, fading toward the
            // field along the tail.
            let ratio = index as f32 / len as f32;
            let base = blend_rgb(theme.snake_body_start, theme.snake_body_end, ratio);
            Style::new()
                .fg(blend_rgb(base, theme.field_bg, ratio * 0.5))
                .bg(theme.field_bg)
        };

        buffer.set_string(x, y, GLYPH_SEGMENT, style);
    }
}

fn logical_to_terminal(inner: Rect, cell: Cell) -> Option<(u16, u16)> {
    if !grid::in_bounds(cell) {
        return None;
    }

    let x = inner.x.saturating_add(u16::try_from(cell.x).ok()?);
    let y = inner.y.saturating_add(u16::try_from(cell.y).ok()?);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

/// Brightness factor in [0.4, 1.0] with a 2π·200 ms period.
fn food_pulse(elapsed: Duration) -> f32 {
    (elapsed.as_millis() as f32 / 200.0).sin() * 0.3 + 0.7
}

/// Linear blend between two true-color values; non-RGB colors pass
/// through unchanged (the built-in theme is all RGB).
fn blend_rgb(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(fr, fg, fb), Color::Rgb(tr, tg, tb)) => Color::Rgb(
            lerp_u8(fr, tr, t),
            lerp_u8(fg, tg, t),
            lerp_u8(fb, tb, t),
        ),
        _ => from,
    }
}

fn scale_rgb(color: Color, factor: f32) -> Color {
    let factor = factor.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * factor) as u8,
            (g as f32 * factor) as u8,
            (b as f32 * factor) as u8,
        ),
        other => other,
    }
}

fn lerp_u8(from: u8, to: u8, t: f32) -> u8 {
    ((from as f32) + ((to as f32) - (from as f32)) * t).round() as u8
}
