use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::game::GameState;

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState) -> Rect {
    let [play_area, score_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(info_line(state))
            .alignment(Alignment::Left)
            .style(Style::default().fg(Color::DarkGray)),
        score_area,
    );

    play_area
}

fn info_line(state: &GameState) -> Line<'static> {
    let bounds = state.bounds();
    Line::from(vec![
        Span::raw(" Score: "),
        Span::styled(
            state.score().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  Length: "),
        Span::styled(state.snake.len().to_string(), Style::default().fg(Color::White)),
        Span::raw(format!("  {}x{}", bounds.width, bounds.height)),
    ])
}
