use tui_blockfall::core::{GameSnapshot, GameState, Piece};
use tui_blockfall::term::{AnchorY, Backdrop, FrameBuffer, GameView, Rgb, Viewport};
use tui_blockfall::types::{Color, Phase, PieceKind};

const GREEN: Color = Color::new(120, 220, 110);

fn playing_snapshot() -> GameSnapshot {
    let mut snap = GameState::default().snapshot();
    snap.phase = Phase::Playing;
    snap
}

fn view_default(snap: &GameSnapshot) -> FrameBuffer {
    GameView::default().render(snap, Viewport::new(22, 22))
}

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = playing_snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = playing_snapshot();
    // Locked cell at bottom-left.
    snap.board[19 * 10] = Some(GREEN);

    let fb = view_default(&snap);

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let x0 = 1;
    let y0 = 1 + 19;
    for x in [x0, x0 + 1] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::new(120, 220, 110));
        assert!(cell.style.bold);
    }
    assert_ne!(fb.get(x0 + 2, y0).unwrap().ch, '█');
}

#[test]
fn term_view_draws_ghost_below_active_piece() {
    let mut game = GameState::default();
    game.start();
    game.set_active(Piece::from_cells(PieceKind::Dot, GREEN, 0, &[(0, 0)]));
    let snap = game.snapshot();

    let fb = view_default(&snap);

    assert_eq!(fb.get(1, 1).unwrap().ch, '█');
    let ghost = fb.get(1, 20).unwrap();
    assert_eq!(ghost.ch, '░');
    assert!(ghost.style.dim);
    assert_eq!(ghost.style.fg, Rgb::from(GREEN).darken(60));
}

#[test]
fn term_view_fills_play_area_with_solid_backdrop() {
    let snap = playing_snapshot();
    let fb = view_default(&snap);

    let inside = fb.get(5, 5).unwrap();
    assert_eq!(inside.ch, ' ');
    assert_eq!(inside.style.bg, Rgb::new(27, 49, 69));
}

#[test]
fn term_view_tiles_pattern_backdrop() {
    let snap = playing_snapshot();
    let view = GameView::default().with_backdrop(Backdrop::from_text("+.").unwrap());
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(1, 1).unwrap().ch, '+');
    assert_eq!(fb.get(2, 1).unwrap().ch, '.');
    assert_eq!(fb.get(3, 1).unwrap().ch, '+');
}

#[test]
fn term_view_prompts_before_first_game() {
    let snap = GameState::default().snapshot();
    assert_eq!(snap.phase, Phase::NotStarted);

    let fb = view_default(&snap);

    let all = screen_text(&fb);
    assert!(all.contains("Press any key"));
    assert!(all.contains("to start"));
}

#[test]
fn term_view_shows_totals_after_game_over() {
    let mut snap = playing_snapshot();
    snap.phase = Phase::Dead;
    snap.score = 42;
    snap.record = 99;

    let fb = view_default(&snap);

    let all = screen_text(&fb);
    assert!(all.contains("Game Over!"));
    assert!(all.contains("Score 42"));
    assert!(all.contains("Record 99"));
    assert!(all.contains("to restart"));
}

#[test]
fn term_view_shows_celebration_message() {
    let mut snap = playing_snapshot();
    snap.celebration = Some("Awesome!");

    let fb = view_default(&snap);

    // Quarter of the way down the play area.
    assert!(fb.row_text(6).contains("Awesome!"));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = playing_snapshot();
    snap.score = 1234;
    snap.record = 5678;
    snap.lines_cleared = 10;

    let view = GameView::default();
    // Wider than the 22x22 board frame to allow a panel.
    let fb = view.render(&snap, Viewport::new(70, 22));

    let all = screen_text(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("RECORD"));
    assert!(all.contains("5678"));
    assert!(all.contains("hard drop"));
}

#[test]
fn term_view_omits_side_panel_on_narrow_viewports() {
    let snap = playing_snapshot();
    let fb = view_default(&snap);
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = playing_snapshot();
    let view = GameView::default();

    // Board frame is 22 rows tall (20 + border).
    let fb = view.render(&snap, Viewport::new(22, 30));

    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = playing_snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    let fb = view.render(&snap, Viewport::new(22, 30));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_hides_ghost_outside_play() {
    let mut game = GameState::default();
    game.start();
    game.set_active(Piece::from_cells(PieceKind::Dot, GREEN, 0, &[(0, 0)]));
    let mut snap = game.snapshot();
    snap.phase = Phase::Dead;

    let fb = view_default(&snap);

    assert_ne!(fb.get(1, 20).unwrap().ch, '░');
}
