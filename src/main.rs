//! Terminal falling-block game runner (default binary).
//!
//! Polls crossterm for key events between fixed 16ms ticks, samples the held
//! keys once per tick, advances the game, and redraws through the
//! framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_blockfall::core::{GameSnapshot, GameState};
use tui_blockfall::input::KeyTracker;
use tui_blockfall::logging;
use tui_blockfall::term::{Backdrop, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::TICK_MS;
use tui_blockfall::AppConfig;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref(), config.log_level)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("exiting with error: {:#}", err);
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut game = GameState::new(config.game, now_ms());
    let mut keys = KeyTracker::new().with_release_events(term.keyboard_enhanced());
    let backdrop = Backdrop::load_or_solid(config.backdrop.as_deref());
    let view = GameView::default().with_backdrop(backdrop);

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => keys.handle_key_event(key, now_ms()),
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            let sampled = keys.sample(now_ms());
            if sampled.escape {
                log::info!(
                    "quit requested, score {} record {}",
                    game.score(),
                    game.record()
                );
                return Ok(());
            }

            let celebrating = game.celebration().is_some();
            let phase = game.phase();
            dirty |= game.tick(now_ms(), &sampled);
            if phase != game.phase() {
                log::info!("phase {} -> {}", phase.as_str(), game.phase().as_str());
            }
            // Redraw once more when the celebration message expires.
            dirty |= celebrating != game.celebration().is_some();

            if let Some(event) = game.take_last_event() {
                log::debug!(
                    "locked {}: {} lines, +{} points",
                    event.kind.as_str(),
                    event.lines_cleared,
                    event.points
                );
            }
        }
    }
}
