use std::collections::HashSet;

use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Cell returned when every cell on the grid is occupied.
pub const FALLBACK_FOOD_POSITION: Position = Position { x: 0, y: 0 };

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food in a cell the snake does not occupy.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Self {
        Self::new(spawn_position(rng, bounds, snake.segments()))
    }

    /// Returns true when `head` sits on this food.
    #[must_use]
    pub fn is_eaten(self, head: Position) -> bool {
        self.position == head
    }
}

/// Picks a uniformly random cell outside `occupied`.
///
/// Falls back to [`FALLBACK_FOOD_POSITION`] when no free cell remains.
#[must_use]
pub fn spawn_position<'a, R, I>(rng: &mut R, bounds: GridSize, occupied: I) -> Position
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a Position>,
{
    let occupied: HashSet<Position> = occupied.into_iter().copied().collect();
    let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(occupied.len()));

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !occupied.contains(&position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return FALLBACK_FOOD_POSITION;
    }

    let index = rng.gen_range(0..candidates.len());
    candidates[index]
}
