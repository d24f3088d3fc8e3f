use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// Movement axis of a heading.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Canonical movement headings.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Returns the unit step for one tick of travel.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Returns the axis this heading travels along.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }
}

/// Returns whether a heading change is legal.
///
/// A request is accepted only when it leaves the axis currently in use.
/// This rejects 180° reversals and, as a consequence, re-submission of
/// the current heading.
#[must_use]
pub fn heading_change_is_valid(current: Heading, requested: Heading) -> bool {
    requested.axis() != current.axis()
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Heading(Heading),
    Pause,
    Restart,
    Quit,
}

/// Drains pending terminal events and returns the first game input, if any.
///
/// Non-blocking: returns `Ok(None)` when no relevant event is queued.
pub fn poll_input() -> io::Result<Option<GameInput>> {
    while event::poll(Duration::ZERO)? {
        let Event::Key(key) = event::read()? else {
            continue;
        };

        if key.kind != KeyEventKind::Press {
            continue;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(GameInput::Quit));
        }

        let input = match key.code {
            KeyCode::Up | KeyCode::Char('w') => GameInput::Heading(Heading::Up),
            KeyCode::Down | KeyCode::Char('s') => GameInput::Heading(Heading::Down),
            KeyCode::Left | KeyCode::Char('a') => GameInput::Heading(Heading::Left),
            KeyCode::Right | KeyCode::Char('d') => GameInput::Heading(Heading::Right),
            KeyCode::Char(' ') => GameInput::Pause,
            KeyCode::Char('r') | KeyCode::Enter => GameInput::Restart,
            KeyCode::Char('q') | KeyCode::Esc => GameInput::Quit,
            _ => continue,
        };

        return Ok(Some(input));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::{Axis, Heading, heading_change_is_valid};

    #[test]
    fn headings_step_one_orthogonal_cell() {
        assert_eq!(Heading::Up.delta(), (0, -1));
        assert_eq!(Heading::Down.delta(), (0, 1));
        assert_eq!(Heading::Left.delta(), (-1, 0));
        assert_eq!(Heading::Right.delta(), (1, 0));
    }

    #[test]
    fn axis_classification() {
        assert_eq!(Heading::Up.axis(), Axis::Vertical);
        assert_eq!(Heading::Down.axis(), Axis::Vertical);
        assert_eq!(Heading::Left.axis(), Axis::Horizontal);
        assert_eq!(Heading::Right.axis(), Axis::Horizontal);
    }

    #[test]
    fn same_axis_requests_are_rejected() {
        assert!(!heading_change_is_valid(Heading::Right, Heading::Left));
        assert!(!heading_change_is_valid(Heading::Right, Heading::Right));
        assert!(!heading_change_is_valid(Heading::Up, Heading::Down));
        assert!(!heading_change_is_valid(Heading::Up, Heading::Up));
    }

    #[test]
    fn cross_axis_requests_are_accepted() {
        assert!(heading_change_is_valid(Heading::Right, Heading::Up));
        assert!(heading_change_is_valid(Heading::Right, Heading::Down));
        assert!(heading_change_is_valid(Heading::Down, Heading::Left));
        assert!(heading_change_is_valid(Heading::Down, Heading::Right));
    }
}
