//! Timing module - turns elapsed time and held keys into discrete commands
//!
//! Every action keeps its own last-fired timestamp and fires again once its
//! cadence has elapsed. Gravity needs strictly more than [`GRAVITY_MS`]; the
//! key-driven actions fire at exactly their interval.
//!
//! Evaluation order per poll:
//!
//! 1. gravity, soft drop, hard drop
//! 2. if left and right are both held, stop here (no rotation, no shift)
//! 3. rotate, then left or else right
//!
//! A key-driven action marks its timestamp whenever it fires, even if the move it
//! produces is later rejected, so a blocked key repeats at its normal cadence.

use arrayvec::ArrayVec;

use crate::types::{
    Keys, GRAVITY_MS, HARD_DROP_MS, ROTATE_MS, SHIFT_MS, SOFT_DROP_MS,
};

/// A discrete intent produced by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Gravity,
    SoftDrop,
    HardDrop,
    Rotate,
    Left,
    Right,
}

impl Command {
    /// True for commands that move the piece down.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Command::Gravity | Command::SoftDrop | Command::HardDrop)
    }
}

/// Commands due on one poll, in application order.
pub type Commands = ArrayVec<Command, 6>;

/// Fixed-cadence command scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controller {
    last_gravity: u64,
    last_soft_drop: u64,
    last_hard_drop: u64,
    last_rotate: u64,
    last_left: u64,
    last_right: u64,
}

impl Controller {
    /// All cadences start counting from `now_ms`.
    pub fn new(now_ms: u64) -> Self {
        Self {
            last_gravity: now_ms,
            last_soft_drop: now_ms,
            last_hard_drop: now_ms,
            last_rotate: now_ms,
            last_left: now_ms,
            last_right: now_ms,
        }
    }

    /// Decide which commands are due at `now_ms` given the held keys.
    pub fn poll(&mut self, now_ms: u64, keys: &Keys) -> Commands {
        let mut commands = Commands::new();

        if now_ms.saturating_sub(self.last_gravity) > GRAVITY_MS {
            self.last_gravity = now_ms;
            commands.push(Command::Gravity);
        }
        if keys.down && fire(&mut self.last_soft_drop, now_ms, SOFT_DROP_MS) {
            commands.push(Command::SoftDrop);
        }
        if keys.hard_drop && fire(&mut self.last_hard_drop, now_ms, HARD_DROP_MS) {
            commands.push(Command::HardDrop);
        }

        if keys.horizontal_conflict() {
            return commands;
        }

        if keys.rotate && fire(&mut self.last_rotate, now_ms, ROTATE_MS) {
            commands.push(Command::Rotate);
        }
        if keys.left {
            if fire(&mut self.last_left, now_ms, SHIFT_MS) {
                commands.push(Command::Left);
            }
        } else if keys.right && fire(&mut self.last_right, now_ms, SHIFT_MS) {
            commands.push(Command::Right);
        }

        commands
    }
}

fn fire(last: &mut u64, now_ms: u64, interval: u64) -> bool {
    if now_ms.saturating_sub(*last) >= interval {
        *last = now_ms;
        true
    } else {
        false
    }
}
