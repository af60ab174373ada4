use std::collections::VecDeque;

use tracing::trace;

use crate::config::GridSize;
use crate::input::{Direction, direction_change_is_valid};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// What the head ran into.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    /// Head left the grid.
    Wall,
    /// Head landed on another segment. A snake with no segments left also
    /// reports this.
    SelfIntersection,
}

/// Snake body, heading and deferred growth.
///
/// The body is stored head-first: `front()` is the head, `back()` the tail.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    grow: bool,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        Self::from_segments(vec![start], direction)
    }

    /// Lays out `length` segments leftwards from the grid centre, heading right.
    ///
    /// The caller guarantees the snake fits; see
    /// [`crate::config::GameConfig::validate`].
    #[must_use]
    pub fn spawn_centered(bounds: GridSize, length: usize) -> Self {
        debug_assert!(length >= 1);
        debug_assert!(length <= usize::from(bounds.width / 2) + 1);

        let head = Position {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        };
        let body = (0..length)
            .map(|offset| Position {
                x: head.x - offset as i32,
                y: head.y,
            })
            .collect();

        Self {
            body,
            direction: Direction::Right,
            grow: false,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            direction,
            grow: false,
        }
    }

    /// Queues growth on the next movement tick. Repeated calls before that
    /// move still add a single segment.
    pub fn grow_next(&mut self) {
        self.grow = true;
    }

    /// Returns true when the next move keeps the tail.
    #[must_use]
    pub fn has_pending_growth(&self) -> bool {
        self.grow
    }

    /// Applies one movement step in the current direction.
    ///
    /// Pushes the new head and drops the tail unless growth is pending.
    pub fn move_forward(&mut self) {
        let Some(head) = self.body.front().copied() else {
            return;
        };

        self.body.push_front(head.step(self.direction));
        if !self.grow {
            let _ = self.body.pop_back();
        }
        self.grow = false;
    }

    /// Turns the snake unless `direction` reverses the current heading.
    ///
    /// Returns whether the change was accepted. Rejections are silent.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            trace!(current = ?self.direction, requested = ?direction, "reversal ignored");
            return false;
        }

        self.direction = direction;
        true
    }

    /// Returns what the head currently collides with, if anything.
    #[must_use]
    pub fn collision(&self, bounds: GridSize) -> Option<Collision> {
        let Some(head) = self.body.front().copied() else {
            return Some(Collision::SelfIntersection);
        };

        if !head.is_within_bounds(bounds) {
            return Some(Collision::Wall);
        }

        if self.head_overlaps_body() {
            return Some(Collision::SelfIntersection);
        }

        None
    }

    /// Returns true if the head is off the grid or on another segment.
    #[must_use]
    pub fn check_collision(&self, bounds: GridSize) -> bool {
        self.collision(bounds).is_some()
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let Some(head) = self.body.front() else {
            return false;
        };
        self.body.iter().skip(1).any(|segment| segment == head)
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

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// Copies the body out, head first.
    #[must_use]
    pub fn positions(&self) -> Vec<Position> {
        self.body.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Collision, Position, Snake};

    const GRID_4X4: GridSize = GridSize {
        width: 4,
        height: 4,
    };

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    /// Head at (2,1), tail at (0,1), heading right.
    fn three_in_a_row() -> Snake {
        Snake::from_segments(vec![p(2, 1), p(1, 1), p(0, 1)], Direction::Right)
    }

    #[test]
    fn snake_moves_one_cell_per_tick() {
        let mut snake = three_in_a_row();

        snake.move_forward();

        assert_eq!(snake.positions(), vec![p(3, 1), p(2, 1), p(1, 1)]);
        assert!(!snake.check_collision(GRID_4X4));
    }

    #[test]
    fn snake_growth_keeps_previous_tail() {
        let mut snake = three_in_a_row();

        snake.grow_next();
        assert_eq!(snake.len(), 3, "growth is deferred to the next move");
        snake.move_forward();

        assert_eq!(snake.positions(), vec![p(3, 1), p(2, 1), p(1, 1), p(0, 1)]);
        assert!(!snake.has_pending_growth());
    }

    #[test]
    fn repeated_grow_adds_one_segment() {
        let mut snake = three_in_a_row();

        snake.grow_next();
        snake.grow_next();
        snake.move_forward();
        assert_eq!(snake.len(), 4);

        snake.change_direction(Direction::Down);
        snake.move_forward();
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn reversal_is_rejected_and_turns_are_accepted() {
        let mut snake = three_in_a_row();

        assert!(!snake.change_direction(Direction::Left));
        assert_eq!(snake.direction(), Direction::Right);

        for turn in [Direction::Up, Direction::Right, Direction::Down] {
            let mut turned = three_in_a_row();
            assert!(turned.change_direction(turn));
            assert_eq!(turned.direction(), turn);
        }

        snake.move_forward();
        assert_eq!(snake.head(), p(3, 1));
    }

    #[test]
    fn moving_past_edge_is_wall_collision() {
        let mut snake = Snake::from_segments(vec![p(3, 1), p(2, 1)], Direction::Right);

        snake.move_forward();

        assert_eq!(snake.head(), p(4, 1));
        assert_eq!(snake.collision(GRID_4X4), Some(Collision::Wall));
    }

    #[test]
    fn negative_coordinates_are_out_of_bounds() {
        let mut snake = Snake::new(p(0, 0), Direction::Up);

        snake.move_forward();

        assert_eq!(snake.head(), p(0, -1));
        assert!(snake.check_collision(GRID_4X4));
    }

    #[test]
    fn looping_into_body_is_self_collision() {
        // Head at (2,2) turning up into (2,1), which is still occupied.
        let mut snake = Snake::from_segments(
            vec![p(2, 2), p(3, 2), p(3, 1), p(2, 1), p(1, 1)],
            Direction::Left,
        );

        snake.change_direction(Direction::Up);
        snake.move_forward();

        assert_eq!(snake.collision(GRID_4X4), Some(Collision::SelfIntersection));
    }

    #[test]
    fn head_is_excluded_from_self_scan() {
        let snake = Snake::new(p(1, 1), Direction::Right);

        assert!(!snake.head_overlaps_body());
        assert!(!snake.check_collision(GRID_4X4));
    }

    #[test]
    fn empty_snake_counts_as_collided() {
        let mut snake = Snake::from_segments(Vec::new(), Direction::Right);

        snake.move_forward();

        assert!(snake.is_empty());
        assert_eq!(snake.collision(GRID_4X4), Some(Collision::SelfIntersection));
    }

    #[test]
    fn spawn_centered_lays_out_contiguous_row() {
        let snake = Snake::spawn_centered(
            GridSize {
                width: 40,
                height: 30,
            },
            3,
        );

        assert_eq!(snake.positions(), vec![p(20, 15), p(19, 15), p(18, 15)]);
        assert_eq!(snake.direction(), Direction::Right);
        assert!(!snake.has_pending_growth());
    }

    #[test]
    fn spawn_centered_fills_left_half_on_small_grid() {
        let snake = Snake::spawn_centered(GRID_4X4, 3);

        assert_eq!(snake.positions(), vec![p(2, 2), p(1, 2), p(0, 2)]);
        assert!(!snake.check_collision(GRID_4X4));
    }

    #[test]
    fn segments_stay_unique_and_adjacent_while_alive() {
        let bounds = GridSize {
            width: 10,
            height: 10,
        };
        let mut snake = Snake::spawn_centered(bounds, 3);
        let path = [
            Direction::Up,
            Direction::Left,
            Direction::Left,
            Direction::Down,
            Direction::Down,
            Direction::Right,
        ];

        for (step, turn) in path.iter().cycle().take(24).enumerate() {
            if step % 3 == 0 {
                snake.grow_next();
            }
            snake.change_direction(*turn);
            snake.move_forward();
            if snake.check_collision(bounds) {
                break;
            }

            let positions = snake.positions();
            let unique: HashSet<_> = positions.iter().collect();
            assert_eq!(unique.len(), positions.len());
            for pair in positions.windows(2) {
                let distance = (pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs();
                assert_eq!(distance, 1);
            }
        }
    }
}
