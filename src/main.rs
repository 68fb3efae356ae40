//! Terminal Snake runner (default binary).
//!
//! Owns scheduling: the game state only says how long a tick should take,
//! this loop decides when to call it. Input is read with crossterm and
//! translated to signals before it touches the game.

mod logging;

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info};

use tui_snake::core::{GameConfig, GameSnapshot, GameState, TickOutcome};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = GameConfig::from_env().context("invalid snake configuration")?;
    logging::init()?;

    let seed = config.seed.unwrap_or_else(clock_seed);
    info!(
        width = config.grid_width,
        height = config.grid_height,
        seed,
        speed_up = config.speed_up,
        "starting snake"
    );
    let game = GameState::new(config, seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        error!(?err, "failed to restore terminal");
        // The log file may not be enabled.
        eprintln!("failed to restore terminal: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut next_tick = Instant::now() + game.tick_interval();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = game.score(), episode = game.episode_id(), "quit");
                        return Ok(());
                    }
                    if let Some(signal) = handle_key_event(key) {
                        game.apply_signal(signal);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let now = Instant::now();
        if now >= next_tick {
            if let TickOutcome::Collided(_) | TickOutcome::Cleared = game.tick() {
                info!(score = game.score(), length = game.len(), "episode finished");
            }
            next_tick = now + game.tick_interval();
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
