use ratatui::style::Color;

use crate::grid::{Cell, GRID_SIZE};
use crate::input::Heading;

/// Tick interval at the start of a session, in milliseconds.
pub const START_TICK_INTERVAL_MS: u64 = 150;

/// Tick interval floor, in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 50;

/// Interval reduction applied at each speed-up, in milliseconds.
pub const TICK_INTERVAL_STEP_MS: u64 = 20;

/// Points granted per food eaten.
pub const POINTS_PER_FOOD: u32 = 10;

/// Score period between speed-ups.
pub const SPEED_UP_SCORE_STEP: u32 = 50;

/// Reference interval the displayed speed level is derived from.
pub const SPEED_LEVEL_BASE_MS: u64 = 200;

/// Interval span per displayed speed level step.
pub const SPEED_LEVEL_SPAN_MS: u64 = 15;

/// Starting snake segments, head first.
pub const START_SNAKE: [Cell; 3] = [
    Cell { x: 10, y: 10 },
    Cell { x: 9, y: 10 },
    Cell { x: 8, y: 10 },
];

/// Starting heading.
pub const START_HEADING: Heading = Heading::Right;

/// Starting food cell.
pub const START_FOOD: Cell = Cell { x: 15, y: 15 };

/// Minimum terminal width: board plus its border.
pub const MIN_TERMINAL_COLS: u16 = GRID_SIZE as u16 + 2;

/// Minimum terminal height: board, border, and the two HUD rows.
pub const MIN_TERMINAL_ROWS: u16 = GRID_SIZE as u16 + 2 + 2;

/// Solid block glyph for snake segments.
pub const GLYPH_SEGMENT: &str = "█";

/// Food marker glyph.
pub const GLYPH_FOOD: &str = "●";

/// Faint dot marking empty grid cells.
pub const GLYPH_GRID_DOT: &str = "·";

/// Color theme applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    /// Bright color for the head segment.
    pub snake_head: Color,
    /// Body gradient endpoint nearest the head.
    pub snake_body_start: Color,
    /// Body gradient endpoint nearest the tail.
    pub snake_body_end: Color,
    pub food: Color,
    /// Background of the play field.
    pub field_bg: Color,
    /// Faint grid texture over the field.
    pub grid_line: Color,
    pub border: Color,
    pub hud_value: Color,
    pub hud_muted: Color,
    /// Banner title color for a lost session.
    pub banner_over: Color,
    /// Banner title color for pause and victory.
    pub banner_accent: Color,
}

/// Gold-and-red palette lifted from the hosting page: gold snake fading
/// into deep red, jade food, near-black field.
pub const THEME_GILDED: Theme = Theme {
    name: "Gilded",
    snake_head: Color::Rgb(255, 215, 0),
    snake_body_start: Color::Rgb(212, 175, 55),
    snake_body_end: Color::Rgb(200, 16, 46),
    food: Color::Rgb(0, 168, 107),
    field_bg: Color::Rgb(10, 10, 10),
    grid_line: Color::Rgb(26, 26, 26),
    border: Color::Rgb(212, 175, 55),
    hud_value: Color::Rgb(212, 175, 55),
    hud_muted: Color::DarkGray,
    banner_over: Color::Rgb(200, 16, 46),
    banner_accent: Color::Rgb(212, 175, 55),
};
