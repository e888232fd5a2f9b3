//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 20 rows. Row 0 is the top row and rows
//! grow downward; pieces spawn straddling row 0 with their topmost cells at
//! negative rows.
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `GRAVITY_MS` | 700 | Automatic one-row fall |
//! | `SOFT_DROP_MS` | 70 | One-row fall while down is held |
//! | `HARD_DROP_MS` | 140 | Hard drop debounce |
//! | `ROTATE_MS` | 200 | Rotation debounce |
//! | `SHIFT_MS` | 70 | Left/right debounce |
//! | `CELEBRATION_MS` | 1000 | Line clear message lifetime |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{PieceKind, Phase, DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT};
//!
//! // Numeric kinds map 1..=6
//! assert_eq!(PieceKind::from_block_type(6), Some(PieceKind::T));
//! assert_eq!(PieceKind::T.block_type(), 6);
//! assert_eq!(PieceKind::Dot.as_str(), "dot");
//!
//! assert_eq!(Phase::default(), Phase::NotStarted);
//! assert_eq!(DEFAULT_BOARD_WIDTH, 10);
//! assert_eq!(DEFAULT_BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells (10 columns)
pub const DEFAULT_BOARD_WIDTH: u8 = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_BOARD_HEIGHT: u8 = 20;

/// Smallest accepted board dimension; every spawn layout fits in 4 columns.
pub const MIN_BOARD_DIMENSION: u8 = 4;

/// Largest accepted board dimension.
pub const MAX_BOARD_DIMENSION: u8 = 64;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval. Fires once strictly more than this has elapsed.
pub const GRAVITY_MS: u64 = 700;

/// Soft drop cadence while the down key is held.
pub const SOFT_DROP_MS: u64 = 70;

/// Hard drop debounce.
pub const HARD_DROP_MS: u64 = 140;

/// Rotation debounce.
pub const ROTATE_MS: u64 = 200;

/// Horizontal shift debounce (shared cadence for left and right).
pub const SHIFT_MS: u64 = 70;

/// How long the line clear celebration stays visible.
pub const CELEBRATION_MS: u64 = 1000;

/// Points per cleared row.
pub const LINE_CLEAR_POINTS: u32 = 10;

/// Points granted for every locked piece.
pub const PLACEMENT_POINTS: u32 = 1;

/// Inclusive range for each randomly drawn color component.
pub const COLOR_COMPONENT_MIN: u8 = 90;
pub const COLOR_COMPONENT_MAX: u8 = 245;


/// Column, row pair. Row 0 is the top of the board; negative rows are above it.
pub type Coord = (i16, i16);

/// The six piece kinds, numbered 1..=6
///
/// - **Dot**: a single cell
/// - **I**: four in a row, spawns horizontal
/// - **O**: 2x2 square
/// - **L**: three tall with a foot to the right
/// - **S**: two offset vertical pairs
/// - **T**: three wide with a stem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Dot,
    I,
    O,
    L,
    S,
    T,
}

impl PieceKind {
    /// All kinds in block-type order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Dot,
        PieceKind::I,
        PieceKind::O,
        PieceKind::L,
        PieceKind::S,
        PieceKind::T,
    ];

    /// Map a numeric block type (1..=6) to a kind.
    pub fn from_block_type(block_type: u8) -> Option<Self> {
        match block_type {
            1 => Some(PieceKind::Dot),
            2 => Some(PieceKind::I),
            3 => Some(PieceKind::O),
            4 => Some(PieceKind::L),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Numeric block type (1..=6).
    pub fn block_type(&self) -> u8 {
        match self {
            PieceKind::Dot => 1,
            PieceKind::I => 2,
            PieceKind::O => 3,
            PieceKind::L => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
        }
    }

    /// Lowercase name used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Dot => "dot",
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::L => "l",
            PieceKind::S => "s",
            PieceKind::T => "t",
        }
    }

    /// Number of cells in a piece of this kind.
    pub fn cell_count(&self) -> usize {
        match self {
            PieceKind::Dot => 1,
            _ => 4,
        }
    }
}

/// 24-bit piece color. Immutable once a piece is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled by a locked piece of that color
pub type Cell = Option<Color>;

/// Lifecycle phase of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Waiting for the first key press.
    #[default]
    NotStarted,
    Playing,
    /// Topped out; the next key press restarts.
    Dead,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::NotStarted => "not_started",
            Phase::Playing => "playing",
            Phase::Dead => "dead",
        }
    }
}

/// Instantaneous key state sampled once per tick.
///
/// `any` is an edge: it is true when a non-escape key was pressed since the
/// previous sample. All other fields are levels (held or not).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Keys {
    pub left: bool,
    pub right: bool,
    pub down: bool,
    pub rotate: bool,
    pub hard_drop: bool,
    pub escape: bool,
    pub any: bool,
}

impl Keys {
    /// Left and right held together cancel all horizontal input.
    pub fn horizontal_conflict(&self) -> bool {
        self.left && self.right
    }
}

/// Core-side event emitted after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    /// Points awarded for this lock, including the placement bonus.
    pub points: u32,
}
