//! Play-area backdrop.
//!
//! A backdrop is either a text pattern tiled across the empty play area or a
//! solid fill. Loading a pattern never fails the game: a missing or empty file
//! is logged and replaced by the solid fill.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::fb::{CellStyle, Rgb};

/// Fill color used when no pattern is available.
pub const FALLBACK_RGB: Rgb = Rgb::new(27, 49, 69);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backdrop {
    /// Pattern rows, all padded to the same width. Empty for a solid fill.
    rows: Vec<Vec<char>>,
    bg: Rgb,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::solid()
    }
}

impl Backdrop {
    pub fn solid() -> Self {
        Self {
            rows: Vec::new(),
            bg: FALLBACK_RGB,
        }
    }

    /// Build a backdrop from pattern text. Blank text is an error.
    pub fn from_text(text: &str) -> Result<Self> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.trim_end_matches('\r').chars().collect())
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            bail!("backdrop pattern is empty");
        }
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, ' ');
                row
            })
            .collect();
        Ok(Self {
            rows,
            bg: FALLBACK_RGB,
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading backdrop {}", path.display()))?;
        Self::from_text(&text).with_context(|| format!("parsing backdrop {}", path.display()))
    }

    /// Load `path` if given, falling back to the solid fill on any error.
    pub fn load_or_solid(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::solid();
        };
        match Self::load(path) {
            Ok(backdrop) => {
                log::debug!("loaded backdrop {}", path.display());
                backdrop
            }
            Err(err) => {
                log::warn!("backdrop unavailable, using solid fill: {:#}", err);
                Self::solid()
            }
        }
    }

    pub fn is_solid(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn bg(&self) -> Rgb {
        self.bg
    }

    /// Glyph and style for a play-area terminal cell (relative to the area origin).
    pub fn cell_at(&self, x: u16, y: u16) -> (char, CellStyle) {
        let style = CellStyle::new(Rgb::new(70, 95, 120), self.bg).dim();
        if self.rows.is_empty() {
            return (' ', style);
        }
        let row = &self.rows[y as usize % self.rows.len()];
        (row[x as usize % row.len()], style)
    }
}
