//! Scoring module - line and placement points, session record
//!
//! Each cleared row is worth [`LINE_CLEAR_POINTS`] and every locked piece adds
//! [`PLACEMENT_POINTS`]. The record is the best score seen this session and
//! survives restarts.

use crate::types::{LINE_CLEAR_POINTS, PLACEMENT_POINTS};

/// Points for one lock that cleared `lines` rows.
pub fn lock_points(lines: u32) -> u32 {
    lines * LINE_CLEAR_POINTS + PLACEMENT_POINTS
}

/// Running score and session record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    score: u32,
    record: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn record(&self) -> u32 {
        self.record
    }

    /// Add points and raise the record if the score passed it.
    pub fn add(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.record = self.record.max(self.score);
    }

    /// Zero the score for a new game. The record is kept.
    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}
