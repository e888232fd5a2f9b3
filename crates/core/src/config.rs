//! Game configuration
//!
//! Read from environment variables; unparsable values fall back to defaults and
//! board dimensions are clamped to `MIN_BOARD_DIMENSION..=MAX_BOARD_DIMENSION`.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `TETRIS_WIDTH` | 10 |
//! | `TETRIS_HEIGHT` | 20 |
//! | `TETRIS_SEED` | derived from the system clock |

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_BOARD_DIMENSION, MIN_BOARD_DIMENSION,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let width = lookup("TETRIS_WIDTH")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .map(clamp_dimension)
            .unwrap_or(DEFAULT_BOARD_WIDTH);

        let height = lookup("TETRIS_HEIGHT")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .map(clamp_dimension)
            .unwrap_or(DEFAULT_BOARD_HEIGHT);

        let seed = lookup("TETRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        Self {
            width,
            height,
            seed,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_size(mut self, width: u8, height: u8) -> Self {
        self.width = clamp_dimension(width as u16);
        self.height = clamp_dimension(height as u16);
        self
    }
}

fn clamp_dimension(value: u16) -> u8 {
    value.clamp(MIN_BOARD_DIMENSION as u16, MAX_BOARD_DIMENSION as u16) as u8
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
