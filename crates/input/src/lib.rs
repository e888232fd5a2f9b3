//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the held-key roles the game samples each
//! tick, and tracks which keys are held. Works in terminals without
//! key-release events by expiring keys after a short timeout.

pub mod handler;
pub mod map;

pub use tui_blockfall_types as types;

pub use handler::KeyTracker;
pub use map::{key_role, should_quit, KeyRole};
