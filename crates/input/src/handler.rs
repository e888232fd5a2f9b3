//! Held-key tracker for terminal environments.
//!
//! Turns a stream of key events into the per-tick [`Keys`] snapshot the game
//! samples.
//!
//! Terminals that report key releases (keyboard enhancement enabled) keep a key
//! held from press to release. Terminals that do not report releases need
//! timeouts instead. A lone press is a tap and stays held only for
//! [`DEFAULT_TAP_HOLD_MS`], which is shorter than the fastest repeat cadence,
//! so one tap fires exactly one move. A second press or a repeat event while
//! the key is still held confirms a real hold, which then lasts until no press
//! or repeat has arrived within the release timeout.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{key_role, should_quit, KeyRole, ROLE_COUNT};
use crate::types::Keys;

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// How long an unconfirmed press counts as held.
pub const DEFAULT_TAP_HOLD_MS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Hold {
    last_ms: u64,
    /// Seen a repeat or a second press, so this is not a tap.
    confirmed: bool,
}

/// Tracks which game keys are held.
#[derive(Debug, Clone)]
pub struct KeyTracker {
    held: [Option<Hold>; ROLE_COUNT],
    escape: bool,
    any: bool,
    /// The terminal reports releases; holds never time out.
    release_events: bool,
    key_release_timeout_ms: u64,
    tap_hold_ms: u64,
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyTracker {
    pub fn new() -> Self {
        Self {
            held: [None; ROLE_COUNT],
            escape: false,
            any: false,
            release_events: false,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            tap_hold_ms: DEFAULT_TAP_HOLD_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn with_tap_hold_ms(mut self, tap_ms: u64) -> Self {
        self.tap_hold_ms = tap_ms;
        self
    }

    /// Declare whether the terminal sends release events. Also switched on by
    /// the first release event seen.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u64 {
        self.key_release_timeout_ms
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    /// Feed one key event observed at `now_ms`.
    pub fn handle_key_event(&mut self, key: KeyEvent, now_ms: u64) {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.handle_key_press(key, now_ms),
            KeyEventKind::Release => self.handle_key_release(key),
        }
    }

    pub fn handle_key_press(&mut self, key: KeyEvent, now_ms: u64) {
        if should_quit(key) {
            self.escape = true;
            return;
        }
        let repeat = key.kind == KeyEventKind::Repeat;
        if !repeat {
            self.any = true;
        }
        if let Some(role) = key_role(key) {
            self.expire(now_ms);
            let slot = &mut self.held[role.index()];
            let confirmed = repeat || slot.is_some();
            *slot = Some(Hold {
                last_ms: now_ms,
                confirmed,
            });
        }
    }

    pub fn handle_key_release(&mut self, key: KeyEvent) {
        self.release_events = true;
        if let Some(role) = key_role(key) {
            self.held[role.index()] = None;
        }
    }

    pub fn is_held(&self, role: KeyRole) -> bool {
        self.held[role.index()].is_some()
    }

    /// Snapshot the key state for one tick.
    ///
    /// Expires timed-out keys and consumes the `any` edge.
    pub fn sample(&mut self, now_ms: u64) -> Keys {
        self.expire(now_ms);

        let keys = Keys {
            left: self.is_held(KeyRole::Left),
            right: self.is_held(KeyRole::Right),
            down: self.is_held(KeyRole::Down),
            rotate: self.is_held(KeyRole::Rotate),
            hard_drop: self.is_held(KeyRole::HardDrop),
            escape: self.escape,
            any: self.any,
        };
        self.any = false;
        keys
    }

    /// Drop all held keys and pending edges.
    pub fn reset(&mut self) {
        self.held = [None; ROLE_COUNT];
        self.escape = false;
        self.any = false;
    }

    fn expire(&mut self, now_ms: u64) {
        if self.release_events {
            return;
        }
        let (hold_ms, tap_ms) = (self.key_release_timeout_ms, self.tap_hold_ms);
        for slot in self.held.iter_mut() {
            if let Some(hold) = *slot {
                let timeout = if hold.confirmed { hold_ms } else { tap_ms };
                if now_ms.saturating_sub(hold.last_ms) > timeout {
                    *slot = None;
                }
            }
        }
    }
}
