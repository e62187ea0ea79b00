//! Terminal runner: owns the frame loop, feeds wall-clock deltas into the
//! engine, and routes key events.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::input::{is_restart, map_key, should_quit};
use gridfall::term::{GameView, TerminalRenderer, Viewport};
use gridfall::Engine;

const FRAME_MS: u64 = 16;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Restore the terminal even when the loop bails out.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut engine = Engine::new(seed);
    engine.start();

    let view = GameView::default();
    let frame = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(engine.game(), Viewport::new(w, h));
        term.draw(&fb)?;

        if engine.game().is_game_over() {
            engine.stop();
        }

        // Poll input until the next frame boundary.
        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if is_restart(key) {
                            engine.new_game();
                            engine.start();
                        } else if let Some(logical) = map_key(key.code) {
                            engine.on_key_down(logical);
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(logical) = map_key(key.code) {
                            engine.on_key_up(logical);
                        }
                    }
                }
            }
        }

        let now = Instant::now();
        let delta = now.duration_since(last_frame);
        if delta >= frame {
            last_frame = now;
            engine.advance(delta.as_millis() as i64);
        }
    }
}
