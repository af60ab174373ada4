use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default grid width in cells (800 px window / 20 px cells).
pub const DEFAULT_GRID_WIDTH: u16 = 40;

/// Default grid height in cells (600 px window / 20 px cells).
pub const DEFAULT_GRID_HEIGHT: u16 = 30;

/// Segments laid out when a session starts.
pub const DEFAULT_INITIAL_LENGTH: usize = 3;

/// Score granted per food eaten.
pub const DEFAULT_FOOD_REWARD: u32 = 10;

/// Base tick interval in milliseconds (10 ticks per second).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

/// Failure to produce a usable [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Fixed session parameters handed to [`crate::game::GameState`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid: GridSize,
    pub initial_length: usize,
    pub food_reward: u32,
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            initial_length: DEFAULT_INITIAL_LENGTH,
            food_reward: DEFAULT_FOOD_REWARD,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Loads a config from a JSON file. Missing fields take their defaults.
    ///
    /// The result is not validated; call [`GameConfig::validate`] after
    /// applying any overrides.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Checks that a session can be started with these parameters.
    ///
    /// The starting snake is laid out leftwards from the centre column, so
    /// it must fit in `width / 2 + 1` cells.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.width == 0 || self.grid.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must be non-empty, got {}x{}",
                self.grid.width, self.grid.height
            )));
        }

        if self.initial_length == 0 {
            return Err(ConfigError::Invalid(
                "initial snake length must be at least 1".to_owned(),
            ));
        }

        let max_length = usize::from(self.grid.width / 2) + 1;
        if self.initial_length > max_length {
            return Err(ConfigError::Invalid(format!(
                "initial snake length {} does not fit a grid {} cells wide (max {max_length})",
                self.initial_length, self.grid.width
            )));
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick interval must be greater than zero".to_owned(),
            ));
        }

        Ok(())
    }
}
