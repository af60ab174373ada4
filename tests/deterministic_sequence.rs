use std::collections::HashSet;

use grid_snake::config::{GameConfig, GridSize};
use grid_snake::food::Food;
use grid_snake::game::{GameState, GameStatus};
use grid_snake::input::{Direction, GameInput};
use grid_snake::snake::{Position, Snake};

fn small_config() -> GameConfig {
    GameConfig {
        grid: GridSize {
            width: 4,
            height: 4,
        },
        ..GameConfig::default()
    }
}

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

#[test]
fn eat_then_run_into_wall_then_restart() {
    let mut state = GameState::new_with_seed(small_config(), 42);
    state.snake = Snake::from_segments(vec![p(2, 1), p(1, 1), p(0, 1)], Direction::Right);
    state.food = Food::new(p(3, 1));

    state.tick();
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.score(), 10);
    assert_eq!(state.snake.head(), p(3, 1));
    assert!(!state.snake.occupies(state.food_position()));

    // Park the respawned food away from the path to the wall.
    state.food = Food::new(p(0, 3));
    state.apply_input(GameInput::Direction(Direction::Down));
    state.tick();
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.snake_segments(), vec![p(3, 2), p(3, 1), p(2, 1), p(1, 1)]);

    state.apply_input(GameInput::Direction(Direction::Up));
    state.tick();
    assert_eq!(state.snake.head(), p(3, 3), "reversal must be ignored");

    state.tick();
    assert!(state.is_game_over());
    assert_eq!(state.score(), 10);

    state.apply_input(GameInput::Restart);
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.score(), 0);
    assert_eq!(state.snake.len(), 3);
}

#[test]
fn segments_stay_unique_across_seeded_play() {
    let config = GameConfig {
        grid: GridSize {
            width: 8,
            height: 8,
        },
        ..GameConfig::default()
    };
    let turns = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    for seed in 0..20 {
        let mut state = GameState::new_with_seed(config, seed);

        for step in 0..200usize {
            if step % 5 == 0 {
                state.queue_direction(turns[(step / 5 + seed as usize) % turns.len()]);
            }
            let length_before = state.snake.len();
            let growth_pending = state.snake.has_pending_growth();

            state.tick();
            if state.is_game_over() {
                break;
            }

            let segments = state.snake_segments();
            let unique: HashSet<_> = segments.iter().collect();
            assert_eq!(unique.len(), segments.len(), "seed {seed} step {step}");
            assert_eq!(
                segments.len(),
                length_before + usize::from(growth_pending),
                "seed {seed} step {step}"
            );
            assert!(!state.snake.occupies(state.food_position()));
        }
    }
}
