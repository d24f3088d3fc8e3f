use rand::Rng;

use crate::grid::{Cell, GRID_SIZE};
use crate::snake::Snake;

/// Spawns food in a uniformly random free cell.
///
/// Rejection sampling: draw a cell anywhere on the field and redraw while
/// it collides with the snake. Callers must guarantee at least one free
/// cell exists; the engine ends the session before the board fills.
#[must_use]
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, snake: &Snake) -> Cell {
    debug_assert!(snake.len() < crate::grid::CELL_COUNT);

    loop {
        let candidate = Cell {
            x: rng.gen_range(0..GRID_SIZE),
            y: rng.gen_range(0..GRID_SIZE),
        };

        if !snake.occupies(candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::grid::{self, Cell};
    use crate::snake::Snake;

    use super::spawn;

    #[test]
    fn food_never_lands_on_the_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(vec![
            Cell { x: 0, y: 0 },
            Cell { x: 1, y: 0 },
            Cell { x: 2, y: 0 },
            Cell { x: 2, y: 1 },
        ]);

        for _ in 0..200 {
            let food = spawn(&mut rng, &snake);
            assert!(!snake.occupies(food));
            assert!(grid::in_bounds(food));
        }
    }

    #[test]
    fn spawn_finds_the_single_free_cell_on_a_tiny_strip() {
        let mut rng = StdRng::seed_from_u64(11);

        // Occupy all but one cell of the first row; the sampler must
        // still terminate and land on the gap eventually.
        let mut segments = Vec::new();
        for x in 0..crate::grid::GRID_SIZE {
            if x != 12 {
                segments.push(Cell { x, y: 0 });
            }
        }
        let snake = Snake::from_segments(segments);

        let food = spawn(&mut rng, &snake);
        assert!(!snake.occupies(food));
    }
}
