//! Application configuration.
//!
//! Extends the game's [`GameConfig`] with front-end settings:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `TETRIS_LOG_PATH` | unset (logging disabled) |
//! | `TETRIS_LOG_LEVEL` | `info` |
//! | `TETRIS_BACKDROP` | unset (solid fill) |

use std::path::PathBuf;

use log::LevelFilter;

use crate::core::GameConfig;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub game: GameConfig,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub backdrop: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            log_path: None,
            log_level: LevelFilter::Info,
            backdrop: None,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let game = GameConfig::from_lookup(&lookup);

        let log_path = non_empty(lookup("TETRIS_LOG_PATH")).map(PathBuf::from);

        let log_level = lookup("TETRIS_LOG_LEVEL")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);

        let backdrop = non_empty(lookup("TETRIS_BACKDROP")).map(PathBuf::from);

        Self {
            game,
            log_path,
            log_level,
            backdrop,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|key| match key {
            "TETRIS_SEED" => Some("3".to_string()),
            _ => None,
        });
        assert_eq!(config.game.width, 10);
        assert_eq!(config.game.seed, 3);
        assert!(config.log_path.is_none());
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.backdrop.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(|key| match key {
            "TETRIS_LOG_PATH" => Some(" /tmp/blockfall.log ".to_string()),
            "TETRIS_LOG_LEVEL" => Some("debug".to_string()),
            "TETRIS_BACKDROP" => Some("".to_string()),
            "TETRIS_WIDTH" => Some("12".to_string()),
            _ => None,
        });
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/blockfall.log")));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(config.backdrop.is_none());
        assert_eq!(config.game.width, 12);
    }

    #[test]
    fn test_bad_level_falls_back() {
        let config = AppConfig::from_lookup(|key| match key {
            "TETRIS_LOG_LEVEL" => Some("loud".to_string()),
            _ => None,
        });
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
