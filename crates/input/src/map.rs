//! Key mapping from terminal events to game keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The held-key roles the game samples every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRole {
    Left,
    Right,
    Down,
    Rotate,
    HardDrop,
}

/// Number of distinct roles.
pub const ROLE_COUNT: usize = 5;

impl KeyRole {
    pub const ALL: [KeyRole; ROLE_COUNT] = [
        KeyRole::Left,
        KeyRole::Right,
        KeyRole::Down,
        KeyRole::Rotate,
        KeyRole::HardDrop,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Map a keyboard event to the role it plays, if any.
pub fn key_role(key: KeyEvent) -> Option<KeyRole> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(KeyRole::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(KeyRole::Right),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(KeyRole::Down),

        KeyCode::Up | KeyCode::Char(' ') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(KeyRole::Rotate)
        }

        KeyCode::Char('d') | KeyCode::Char('D') => Some(KeyRole::HardDrop),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
