use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::{GameConfig, GridSize};
use crate::food::Food;
use crate::input::{Direction, GameInput};
use crate::snake::{Collision, Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Complete mutable game state for one session.
///
/// Owns the snake, the food and the rng exclusively. The front-end drives
/// it through [`GameState::tick`], [`GameState::queue_direction`] and
/// [`GameState::restart`], and reads it back through the accessors.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub tick_count: u64,
    pub status: GameStatus,
    pub death_reason: Option<Collision>,
    pending_direction: Option<Direction>,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Creates a session seeded from system entropy.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = Snake::spawn_centered(config.grid, config.initial_length);
        let food = Food::spawn(&mut rng, config.grid, &snake);

        Self {
            snake,
            food,
            score: 0,
            tick_count: 0,
            status: GameStatus::Playing,
            death_reason: None,
            pending_direction: None,
            config,
            rng,
        }
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Collision is checked before food, so a move that reaches the food
    /// cell and a wall or body cell at once is a loss.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        self.tick_count += 1;
        if let Some(direction) = self.pending_direction.take() {
            let _ = self.snake.change_direction(direction);
        }
        self.snake.move_forward();

        if let Some(collision) = self.snake.collision(self.config.grid) {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(collision);
            info!(
                reason = ?collision,
                score = self.score,
                length = self.snake.len(),
                ticks = self.tick_count,
                "game over"
            );
            return;
        }

        let head = self.snake.head();
        if self.food.is_eaten(head) {
            self.snake.grow_next();
            self.score += self.config.food_reward;
            self.food = Food::spawn(&mut self.rng, self.config.grid, &self.snake);
            debug!(
                eaten_at = ?head,
                respawned_at = ?self.food.position,
                score = self.score,
                "food eaten"
            );
        }
    }

    /// Buffers a direction request for the next tick. Only the latest request
    /// between two ticks is applied; requests are ignored after game over.
    pub fn queue_direction(&mut self, direction: Direction) {
        if self.status == GameStatus::Playing {
            self.pending_direction = Some(direction);
        }
    }

    /// Starts a fresh session with the same config. Only honoured after game
    /// over; returns whether the restart happened.
    pub fn restart(&mut self) -> bool {
        if self.status != GameStatus::GameOver {
            return false;
        }

        info!(final_score = self.score, "restarting session");
        self.snake = Snake::spawn_centered(self.config.grid, self.config.initial_length);
        self.food = Food::spawn(&mut self.rng, self.config.grid, &self.snake);
        self.score = 0;
        self.tick_count = 0;
        self.status = GameStatus::Playing;
        self.death_reason = None;
        self.pending_direction = None;
        true
    }

    /// Applies one external input event. `Quit` is handled by the caller.
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => self.queue_direction(direction),
            GameInput::Restart => {
                let _ = self.restart();
            }
            GameInput::Quit => {}
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.grid
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Snake segments, head first.
    #[must_use]
    pub fn snake_segments(&self) -> Vec<Position> {
        self.snake.positions()
    }

    #[must_use]
    pub fn food_position(&self) -> Position {
        self.food.position
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Direction waiting to be applied on the next tick.
    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }
}
