//! Line clear celebration - a short-lived message chosen at random
//!
//! Triggering while a message is already showing keeps the current one and its
//! original deadline.

use crate::rng::SimpleRng;
use crate::types::CELEBRATION_MS;

pub const MESSAGES: [&str; 11] = [
    "Great!",
    "Keep it up!",
    "Way to go!",
    "I'm proud of you!",
    "Wow!",
    "Excellent!",
    "Amazing!",
    "Good job!",
    "Excellent job!",
    "Nice!",
    "Nice job!",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Celebration {
    active: Option<Shown>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Shown {
    message: &'static str,
    until_ms: u64,
}

impl Celebration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a random message for [`CELEBRATION_MS`] unless one is already showing.
    ///
    /// Returns true if a new message started.
    pub fn trigger(&mut self, now_ms: u64, rng: &mut SimpleRng) -> bool {
        if self.message(now_ms).is_some() {
            return false;
        }
        let idx = rng.next_range(MESSAGES.len() as u32) as usize;
        self.active = Some(Shown {
            message: MESSAGES[idx],
            until_ms: now_ms + CELEBRATION_MS,
        });
        true
    }

    /// The message visible at `now_ms`, if any.
    pub fn message(&self, now_ms: u64) -> Option<&'static str> {
        self.active
            .filter(|shown| now_ms < shown.until_ms)
            .map(|shown| shown.message)
    }

    /// Forget an expired message.
    pub fn expire(&mut self, now_ms: u64) {
        if self.message(now_ms).is_none() {
            self.active = None;
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}
