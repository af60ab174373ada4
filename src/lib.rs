//! Grid-based Snake: a deque-backed game engine plus a ratatui front-end.
//!
//! The engine (`config`, `snake`, `food`, `game` and the direction model in
//! `input`) is plain data and never touches the terminal.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
