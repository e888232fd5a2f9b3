//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, pieces, collision,
//! line clears, scoring, the timing controller and the celebration message.
//! It owns the phase machine (not started, playing, dead) and applies the
//! controller's commands to the active piece once per tick.

use crate::board::Board;
use crate::celebration::Celebration;
use crate::collision::{
    can_place, clamp_floor, clamp_horizontal, drop_distance, drop_preview, resolve, Resolution,
};
use crate::config::GameConfig;
use crate::line_clear::clear_complete_rows;
use crate::pieces::Piece;
use crate::rng::PieceSource;
use crate::scoring::{lock_points, ScoreBoard};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::timing::{Command, Controller};
use crate::types::{Keys, LockEvent, Phase};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: Option<Piece>,
    source: PieceSource,
    controller: Controller,
    scores: ScoreBoard,
    celebration: Celebration,
    phase: Phase,
    /// Pieces locked in the current game.
    pieces_locked: u32,
    /// Rows cleared in the current game.
    lines_cleared: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    /// Clock value of the most recent tick.
    now_ms: u64,
}

impl GameState {
    /// Create a game waiting for its first key press.
    pub fn new(config: GameConfig, now_ms: u64) -> Self {
        Self {
            board: Board::new(config.width, config.height),
            active: None,
            source: PieceSource::new(config.seed),
            controller: Controller::new(now_ms),
            scores: ScoreBoard::new(),
            celebration: Celebration::new(),
            phase: Phase::NotStarted,
            pieces_locked: 0,
            lines_cleared: 0,
            last_event: None,
            now_ms,
            config,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.phase != Phase::NotStarted {
            return;
        }
        log::info!(
            "game started: {}x{} seed {}",
            self.config.width,
            self.config.height,
            self.config.seed
        );
        self.begin(self.now_ms);
    }

    /// Begin a fresh game. Score, board and counters reset; the record is kept.
    pub fn restart(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
        self.board.clear();
        self.scores.reset_score();
        self.celebration.clear();
        self.pieces_locked = 0;
        self.lines_cleared = 0;
        self.last_event = None;
        log::info!("game restarted, record {}", self.scores.record());
        self.begin(now_ms);
    }

    fn begin(&mut self, now_ms: u64) {
        self.controller = Controller::new(now_ms);
        self.phase = Phase::Playing;
        self.spawn_piece();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.scores.score()
    }

    pub fn record(&self) -> u32 {
        self.scores.record()
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for tests and benchmarks
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    /// Replace the active piece. Used by tests and benchmarks to stage positions.
    pub fn set_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }

    /// Landing position of the active piece.
    pub fn ghost(&self) -> Option<Piece> {
        self.active
            .as_ref()
            .map(|piece| drop_preview(piece, &self.board))
    }

    /// Celebration message visible at the most recent tick.
    pub fn celebration(&self) -> Option<&'static str> {
        self.celebration.message(self.now_ms)
    }

    /// Spawn a new piece. Returns false (and ends the game) if it cannot fall.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.source.next_kind();
        let color = self.source.next_color();
        let piece = Piece::spawn(kind, color, self.config.width);

        match resolve(&piece, &self.board) {
            Resolution::Falling => {
                self.active = Some(piece);
                true
            }
            _ => {
                self.top_out();
                false
            }
        }
    }

    fn top_out(&mut self) {
        self.active = None;
        self.phase = Phase::Dead;
        log::info!(
            "game over: score {} record {} pieces {} lines {}",
            self.scores.score(),
            self.scores.record(),
            self.pieces_locked,
            self.lines_cleared
        );
    }

    /// Merge the piece into the board, clear rows, score, and spawn the next piece
    pub fn lock_piece(&mut self, piece: Piece) {
        self.active = None;
        self.board.occupy(piece.cells(), piece.color());

        let cleared = clear_complete_rows(&mut self.board);
        let lines = cleared.len() as u32;
        let points = lock_points(lines);
        self.scores.add(points);
        self.pieces_locked += 1;
        self.lines_cleared += lines;

        if lines > 0 {
            self.celebration.trigger(self.now_ms, self.source.rng_mut());
            log::debug!("cleared rows {:?} with {}", cleared.as_slice(), piece.kind().as_str());
        }

        self.last_event = Some(LockEvent {
            kind: piece.kind(),
            lines_cleared: lines,
            points,
        });

        self.spawn_piece();
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance the game to `now_ms` with the sampled key state.
    ///
    /// Outside of play, `keys.any` starts (or restarts) a game and nothing else
    /// happens that tick. Returns true if anything visible changed.
    pub fn tick(&mut self, now_ms: u64, keys: &Keys) -> bool {
        self.now_ms = now_ms;
        self.celebration.expire(now_ms);

        match self.phase {
            Phase::NotStarted => {
                if keys.any {
                    self.start();
                    return true;
                }
                return false;
            }
            Phase::Dead => {
                if keys.any {
                    self.restart(now_ms);
                    return true;
                }
                return false;
            }
            Phase::Playing => {}
        }

        let Some(before) = self.active.clone() else {
            return false;
        };

        let mut piece = before.clone();
        for command in self.controller.poll(now_ms, keys) {
            piece = self.apply_command(piece, command);
            if command.is_vertical() {
                piece = clamp_floor(piece, self.config.height);
            }
        }
        piece = clamp_horizontal(piece, self.config.width);

        match resolve(&piece, &self.board) {
            Resolution::Falling => {
                let moved = piece != before;
                self.active = Some(piece);
                moved
            }
            Resolution::Lock(settled) => {
                self.lock_piece(settled);
                true
            }
            Resolution::TopOut => {
                self.top_out();
                true
            }
        }
    }

    fn apply_command(&self, piece: Piece, command: Command) -> Piece {
        match command {
            Command::Gravity | Command::SoftDrop => piece.translated(0, 1),
            Command::HardDrop => {
                let distance = drop_distance(&piece, &self.board);
                piece.translated(0, distance)
            }
            Command::Rotate => {
                let candidate = clamp_floor(
                    clamp_horizontal(piece.rotated(), self.config.width),
                    self.config.height,
                );
                self.accept(piece, candidate)
            }
            Command::Left => {
                let candidate = piece.translated(-1, 0);
                self.accept(piece, candidate)
            }
            Command::Right => {
                let candidate = piece.translated(1, 0);
                self.accept(piece, candidate)
            }
        }
    }

    fn accept(&self, current: Piece, candidate: Piece) -> Piece {
        if can_place(candidate.cells(), &self.board) {
            candidate
        } else {
            current
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());

        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.ghost.clear();
        if let Some(ghost) = self.ghost() {
            out.ghost.extend(ghost.cells().iter().copied());
        }
        out.phase = self.phase;
        out.score = self.scores.score();
        out.record = self.scores.record();
        out.pieces_locked = self.pieces_locked;
        out.lines_cleared = self.lines_cleared;
        out.celebration = self.celebration();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default(), 0)
    }
}
