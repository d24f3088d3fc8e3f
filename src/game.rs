use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{
    MIN_TICK_INTERVAL_MS, POINTS_PER_FOOD, SPEED_LEVEL_BASE_MS, SPEED_LEVEL_SPAN_MS,
    SPEED_UP_SCORE_STEP, START_FOOD, START_HEADING, START_SNAKE, START_TICK_INTERVAL_MS,
    TICK_INTERVAL_STEP_MS,
};
use crate::food;
use crate::grid::{self, Cell};
use crate::input::{GameInput, Heading, heading_change_is_valid};
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
    Victory,
}

impl GameStatus {
    /// Returns true for the terminal states.
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, Self::GameOver | Self::Victory)
    }
}

/// Cause of a lost session, for the game-over banner.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Result of one engine tick, surfaced so the driving loop can react.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// Nothing happened: the session is paused or already finished.
    Skipped,
    /// Snake moved into a free cell.
    Moved,
    /// Snake ate food. `interval_changed` asks the scheduler to re-arm
    /// its timer with the new tick interval.
    Ate { interval_changed: bool },
    /// Snake filled the entire board.
    Won,
    /// Session ended with the given cause.
    Died(DeathReason),
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub heading: Heading,
    pub food: Cell,
    pub score: u32,
    /// Current tick interval in milliseconds. The engine never arms a
    /// timer itself; the driving loop reads this after a tick reports
    /// `interval_changed`.
    pub interval_ms: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh session with entropy-seeded food placement.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            snake: Snake::from_segments(START_SNAKE.to_vec()),
            heading: START_HEADING,
            food: START_FOOD,
            score: 0,
            interval_ms: START_TICK_INTERVAL_MS,
            status: GameStatus::Running,
            death_reason: None,
            rng,
        }
    }

    /// Reinitializes to the fixed starting values. The RNG stream
    /// continues, so food placement differs between sessions.
    pub fn reset(&mut self) {
        self.snake = Snake::from_segments(START_SNAKE.to_vec());
        self.heading = START_HEADING;
        self.food = START_FOOD;
        self.score = 0;
        self.interval_ms = START_TICK_INTERVAL_MS;
        self.status = GameStatus::Running;
        self.death_reason = None;
    }

    /// Advances the simulation by one gameplay tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Skipped;
        }

        let new_head = self.snake.head().offset(self.heading.delta());

        if !grid::in_bounds(new_head) {
            return self.die(DeathReason::WallCollision);
        }

        // Checked against the full pre-move body: the tail cell still
        // counts as occupied even though it is about to be vacated.
        if self.snake.occupies(new_head) {
            return self.die(DeathReason::SelfCollision);
        }

        if new_head == self.food {
            self.snake.advance(new_head, true);
            self.score += POINTS_PER_FOOD;

            if self.snake.len() == grid::CELL_COUNT {
                self.status = GameStatus::Victory;
                return TickOutcome::Won;
            }

            self.food = food::spawn(&mut self.rng, &self.snake);
            let interval_changed = self.maybe_speed_up();
            return TickOutcome::Ate { interval_changed };
        }

        self.snake.advance(new_head, false);
        TickOutcome::Moved
    }

    /// Replaces the heading read by the next tick.
    ///
    /// Silently ignored when the session is over or when the request
    /// stays on the axis currently in use. Accepted while paused.
    pub fn set_heading(&mut self, requested: Heading) {
        if self.status.is_over() {
            return;
        }

        if heading_change_is_valid(self.heading, requested) {
            self.heading = requested;
        }
    }

    /// Flips between Running and Paused; no-op once the session is over.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            other => other,
        };
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Heading(heading) => self.set_heading(heading),
            GameInput::Pause => self.toggle_pause(),
            GameInput::Restart => self.reset(),
            GameInput::Quit => {}
        }
    }

    /// Derived display value: how fast the session currently runs.
    #[must_use]
    pub fn speed_level(&self) -> u32 {
        let gained = (SPEED_LEVEL_BASE_MS - self.interval_ms) as f32;
        (gained / SPEED_LEVEL_SPAN_MS as f32).round() as u32
    }

    fn die(&mut self, reason: DeathReason) -> TickOutcome {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        TickOutcome::Died(reason)
    }

    fn maybe_speed_up(&mut self) -> bool {
        if self.score % SPEED_UP_SCORE_STEP == 0 && self.interval_ms > MIN_TICK_INTERVAL_MS {
            self.interval_ms -= TICK_INTERVAL_STEP_MS;
            return true;
        }

        false
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
