//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::backdrop::Backdrop;
use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, Coord, Phase};

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    backdrop: Backdrop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the play area frame sits in the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
            backdrop: Backdrop::solid(),
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_backdrop(mut self, backdrop: Backdrop) -> Self {
        self.backdrop = backdrop;
        self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Cell::default());

        let board_px_w = snap.width as u16 * self.cell_w;
        let board_px_h = snap.height as u16 * self.cell_h;
        let frame = Frame {
            x: viewport.width.saturating_sub(board_px_w + 2) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(board_px_h + 2) / 2,
                AnchorY::Top => 0,
            },
            w: board_px_w + 2,
            h: board_px_h + 2,
        };

        self.draw_backdrop(fb, frame, board_px_w, board_px_h);

        self.draw_border(fb, frame, BORDER);

        // Ghost first; locked and active cells draw over it.
        if let Some(active) = snap.active.as_ref().filter(|_| snap.playable()) {
            for &coord in snap.ghost.iter() {
                self.draw_block(fb, frame, snap, coord, active.color, '░', true);
            }
        }
        for (coord, color) in snap.visible_cells() {
            self.draw_block(fb, frame, snap, coord, color, '█', false);
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if let Some(message) = snap.celebration {
            let style = CellStyle::new(Rgb::new(255, 220, 90), self.backdrop.bg()).bold();
            let y = frame.y.saturating_add(1 + board_px_h / 4);
            self.put_centered(fb, frame, y, message, style);
        }

        match snap.phase {
            Phase::NotStarted => {
                self.draw_overlay(fb, frame, &["Press any key", "to start"], None);
            }
            Phase::Dead => {
                self.draw_overlay(
                    fb,
                    frame,
                    &["Game Over!", "", "", "", "Press any key", "to restart"],
                    Some((snap.score, snap.record)),
                );
            }
            Phase::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_backdrop(&self, fb: &mut FrameBuffer, frame: Frame, w: u16, h: u16) {
        for dy in 0..h {
            for dx in 0..w {
                let (ch, style) = self.backdrop.cell_at(dx, dy);
                fb.put_char(frame.x + 1 + dx, frame.y + 1 + dy, ch, style);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        snap: &GameSnapshot,
        (x, y): Coord,
        color: Color,
        ch: char,
        ghost: bool,
    ) {
        if x < 0 || y < 0 || x >= snap.width as i16 || y >= snap.height as i16 {
            return;
        }
        let fg = if ghost {
            Rgb::from(color).darken(60)
        } else {
            Rgb::from(color)
        };
        let style = CellStyle {
            bold: !ghost,
            dim: ghost,
            ..CellStyle::new(fg, self.backdrop.bg())
        };
        let px = frame.x + 1 + x as u16 * self.cell_w;
        let py = frame.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let mut y = frame.y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("RECORD", snap.record),
            ("LINES", snap.lines_cleared),
            ("PIECES", snap.pieces_locked),
        ] {
            fb.put_str(panel_x, y, name, LABEL);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, n, VALUE);
            y = y.saturating_add(2);
        }

        if panel_w < 18 {
            return;
        }
        let dim = VALUE.dim();
        for help in [
            "←/h →/l  move",
            "↓/j      soft drop",
            "space/↑  rotate",
            "d        hard drop",
            "esc/q    quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, help, dim);
            y = y.saturating_add(1);
        }
    }

    /// Centered text lines over the play area. Blank lines 2 and 3 receive the
    /// score and record when `totals` is given.
    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        lines: &[&str],
        totals: Option<(u32, u32)>,
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::BLACK).bold();
        let top = frame
            .y
            .saturating_add(frame.h / 2)
            .saturating_sub(lines.len() as u16 / 2);
        for (i, line) in lines.iter().enumerate() {
            let y = top.saturating_add(i as u16);
            match (i, totals) {
                (2, Some((score, _))) => {
                    self.put_centered_value(fb, frame, y, "Score ", score, style)
                }
                (3, Some((_, record))) => {
                    self.put_centered_value(fb, frame, y, "Record ", record, style)
                }
                _ if !line.is_empty() => self.put_centered(fb, frame, y, line, style),
                _ => {}
            }
        }
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        y: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }

    fn put_centered_value(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        y: u16,
        label: &str,
        value: u32,
        style: CellStyle,
    ) {
        let text_w = label.chars().count() as u16 + digit_count(value);
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let x = fb.put_str(x, y, label, style);
        fb.put_u32(x, y, value, style);
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
