//! Terminal Tetris runner (default binary).
//!
//! One frame every `FRAME_MS`: drain terminal events into the keyboard state,
//! hand the held-key snapshot and the clock to the engine, then draw.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use microtris::config::RunConfig;
use microtris::core::{GameEvent, GameSnapshot, GameState};
use microtris::input::KeyboardState;
use microtris::term::{FrameBuffer, GameView, TerminalGuard, Viewport};
use microtris::types::{GameAction, FRAME_MS};

/// Totals reported once the terminal is restored.
#[derive(Debug, Default)]
struct RunSummary {
    sessions: u32,
    best_lines: u32,
    pieces: u32,
}

fn main() -> Result<()> {
    let config = RunConfig::from_env()?;

    let mut term = TerminalGuard::acquire()?;
    let result = run(&mut term, &config);
    let restored = term.release();

    match &result {
        Ok(summary) => eprintln!(
            "[Runner] seed={} sessions={} best_lines={} pieces={}",
            config.seed, summary.sessions, summary.best_lines, summary.pieces
        ),
        Err(e) => eprintln!("[Runner] error: {e:#}"),
    }

    restored?;
    result.map(|_| ())
}

fn run(term: &mut TerminalGuard, config: &RunConfig) -> Result<RunSummary> {
    let mut game = GameState::new(config.seed);
    game.set_level(config.level);

    let mut keyboard = KeyboardState::with_key_release_timeout_ms(config.key_release_ms);
    let view = GameView::default().with_ghost(config.ghost);
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut summary = RunSummary::default();

    let clock = Instant::now();
    let frame = Duration::from_millis(FRAME_MS);

    loop {
        let deadline = Instant::now() + frame;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    let action = keyboard.handle_key_event(key, Instant::now());
                    if action == Some(GameAction::Quit) && key.kind != KeyEventKind::Release {
                        summary.best_lines = summary.best_lines.max(game.lines());
                        return Ok(summary);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        let input = keyboard.frame(now);
        for ev in game.update(&input, now.duration_since(clock).as_secs_f64()) {
            match ev {
                GameEvent::Started => summary.sessions += 1,
                GameEvent::Spawned(_) => summary.pieces += 1,
                GameEvent::GameOver => summary.best_lines = summary.best_lines.max(game.lines()),
                _ => {}
            }
        }

        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}
