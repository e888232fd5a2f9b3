//! RNG module - deterministic piece and color generation
//!
//! Kinds are drawn uniformly from the six block types; each color component is
//! drawn uniformly from `COLOR_COMPONENT_MIN..=COLOR_COMPONENT_MAX`. Everything is
//! driven by a seeded LCG so a seed reproduces a whole game.

use crate::types::{Color, PieceKind, COLOR_COMPONENT_MAX, COLOR_COMPONENT_MIN};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG cycle quickly; use the high half.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Generate random value in the inclusive range [lo, hi]
    pub fn next_inclusive(&mut self, lo: u8, hi: u8) -> u8 {
        let span = hi.saturating_sub(lo) as u32 + 1;
        lo + self.next_range(span) as u8
    }
}

/// Source of new pieces: a kind plus a color.
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: SimpleRng,
}

impl PieceSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    pub fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    pub fn next_color(&mut self) -> Color {
        Color::new(
            self.rng.next_inclusive(COLOR_COMPONENT_MIN, COLOR_COMPONENT_MAX),
            self.rng.next_inclusive(COLOR_COMPONENT_MIN, COLOR_COMPONENT_MAX),
            self.rng.next_inclusive(COLOR_COMPONENT_MIN, COLOR_COMPONENT_MAX),
        )
    }

    /// Shared generator for non-piece randomness (celebration messages).
    pub fn rng_mut(&mut self) -> &mut SimpleRng {
        &mut self.rng
    }
}
