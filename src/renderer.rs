use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;

use crate::config::GridSize;
use crate::game::{GameState, GameStatus};
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::render_game_over_menu;

/// Terminal columns per logical cell; two columns keep cells roughly square.
pub const CELL_WIDTH: u16 = 2;

const GLYPH_CELL: &str = "██";
const GLYPH_FOOD: &str = "◆ ";

const SNAKE_HEAD_COLOR: Color = Color::LightGreen;
const SNAKE_BODY_COLOR: Color = Color::Green;
const FOOD_COLOR: Color = Color::Red;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state);
    let board_area = board_rect(play_area, state.bounds());

    let block = Block::bordered().border_style(Style::new().fg(Color::White));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    match state.status {
        GameStatus::Playing => {
            render_food(frame, inner, state);
            render_snake(frame, inner, state);
        }
        GameStatus::GameOver => {
            render_game_over_menu(frame, board_area, state.score(), state.death_reason);
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let Some((x, y)) = logical_to_terminal(inner, state.bounds(), state.food_position()) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(FOOD_COLOR));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState) {
    let bounds = state.bounds();
    let buffer = frame.buffer_mut();

    let body_style = Style::new().fg(SNAKE_BODY_COLOR);
    for segment in state.snake.segments().skip(1) {
        if let Some((x, y)) = logical_to_terminal(inner, bounds, *segment) {
            buffer.set_string(x, y, GLYPH_CELL, body_style);
        }
    }

    // Head last so it is never painted over by a body segment.
    if let Some((x, y)) = logical_to_terminal(inner, bounds, state.snake.head()) {
        let head_style = Style::new()
            .fg(SNAKE_HEAD_COLOR)
            .add_modifier(Modifier::BOLD);
        buffer.set_string(x, y, GLYPH_CELL, head_style);
    }
}

/// Centres a bordered board of `bounds` cells inside `area`, clipped to it.
fn board_rect(area: Rect, bounds: GridSize) -> Rect {
    let width = bounds
        .width
        .saturating_mul(CELL_WIDTH)
        .saturating_add(2)
        .min(area.width);
    let height = bounds.height.saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
