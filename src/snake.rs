use std::collections::VecDeque;

use crate::grid::{self, Cell};

/// Snake body as an ordered head-first segment queue.
///
/// The body never mutates itself based on a heading; the engine computes
/// the candidate head, runs its collision checks against the unmoved
/// body, and only then calls [`Snake::advance`].
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Creates a snake from explicit segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>) -> Self {
        debug_assert!(!segments.is_empty());

        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the current head cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        grid::occupied_by(&self.body, cell)
    }

    /// Moves the head to `new_head`; keeps the tail when `grow` is set.
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Cell;

    use super::Snake;

    fn three_cell_snake() -> Snake {
        Snake::from_segments(vec![
            Cell { x: 5, y: 5 },
            Cell { x: 4, y: 5 },
            Cell { x: 3, y: 5 },
        ])
    }

    #[test]
    fn advance_shifts_every_segment_by_one() {
        let mut snake = three_cell_snake();

        snake.advance(Cell { x: 6, y: 5 }, false);

        let segments: Vec<Cell> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Cell { x: 6, y: 5 },
                Cell { x: 5, y: 5 },
                Cell { x: 4, y: 5 },
            ]
        );
    }

    #[test]
    fn growing_advance_keeps_the_tail() {
        let mut snake = three_cell_snake();

        snake.advance(Cell { x: 6, y: 5 }, true);

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.segments().last(), Some(&Cell { x: 3, y: 5 }));
    }

    #[test]
    fn occupies_covers_head_and_tail() {
        let snake = three_cell_snake();

        assert!(snake.occupies(Cell { x: 5, y: 5 }));
        assert!(snake.occupies(Cell { x: 3, y: 5 }));
        assert!(!snake.occupies(Cell { x: 6, y: 5 }));
    }
}
