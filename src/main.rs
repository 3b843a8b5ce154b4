//! Terminal 2048 runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout).

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::core::{GameState, MoveStep};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use tui_2048::types::{Direction, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(time_seed());
    game.start();

    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let tick = Duration::from_millis(TICK_MS as u64);

    loop {
        draw(term, &view, &game, &mut fb)?;

        // Block on input; the tick timeout keeps resizes responsive.
        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(direction) = handle_key_event(key) {
                        settle_move(term, &view, &mut game, &mut fb, direction)?;
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                }
                _ => {}
            }
        }
    }
}

/// Drive a move command to its fixed point, one pass per frame.
///
/// Input is not polled until the move settles; a directional command always
/// runs to completion before control returns to the event loop.
fn settle_move(
    term: &mut TerminalRenderer,
    view: &BoardView,
    game: &mut GameState,
    fb: &mut FrameBuffer,
    direction: Direction,
) -> Result<()> {
    let tick = Duration::from_millis(TICK_MS as u64);
    game.begin_move(direction);

    loop {
        let frame_start = Instant::now();
        if let MoveStep::Settled(_) = game.step() {
            return Ok(());
        }
        draw(term, view, game, fb)?;
        if let Some(rest) = tick.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &BoardView,
    game: &GameState,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    view.render_into(&game.board, Viewport::new(w, h), fb);
    term.draw(fb)
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
