//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has no dependencies on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed and same key timeline produce identical games
//! - **Testable**: Time is passed in as milliseconds, never read from a clock
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: Flat occupancy grid of locked cells
//! - [`pieces`]: Six piece kinds with spawn layouts and rotation delta tables
//! - [`collision`]: Placement checks, clamping, snapping and lock resolution
//! - [`line_clear`]: Complete row detection and compaction
//! - [`scoring`]: Line and placement points, session record
//! - [`timing`]: Fixed-cadence command scheduler driven by held keys
//! - [`celebration`]: Timed line clear message
//! - [`rng`]: Seeded LCG for piece kinds and colors
//! - [`config`]: Board size and seed from the environment
//! - [`game_state`]: Phase machine tying everything together
//!
//! # Game Rules
//!
//! - Gravity moves the piece down every 700ms; holding down moves it every 70ms
//! - A piece locks as soon as it touches the floor or the stack
//! - Rotation that would collide is rejected; rotation off a wall is pulled back in
//! - Each cleared row scores 10 and every lock scores 1
//! - A piece that cannot settle fully on the board ends the game
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{GameConfig, GameState};
//! use tui_blockfall_types::{Keys, Phase};
//!
//! let mut game = GameState::new(GameConfig::default().with_seed(12345), 0);
//!
//! // Any key starts the game.
//! let start = Keys { any: true, ..Keys::default() };
//! game.tick(16, &start);
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! // Hard drop the first piece.
//! let drop = Keys { hard_drop: true, ..Keys::default() };
//! game.tick(200, &drop);
//! assert_eq!(game.score(), 1);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame (16ms) with a
//! monotonic millisecond clock and the sampled [`Keys`](types::Keys).

pub mod board;
pub mod celebration;
pub mod collision;
pub mod config;
pub mod game_state;
pub mod line_clear;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod timing;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use celebration::Celebration;
pub use collision::{can_place, drop_distance, resolve, Resolution};
pub use config::GameConfig;
pub use game_state::GameState;
pub use line_clear::{clear_complete_rows, complete_rows};
pub use pieces::{Piece, PieceCells};
pub use rng::{PieceSource, SimpleRng};
pub use scoring::{lock_points, ScoreBoard};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use timing::{Command, Commands, Controller};
