//! Terminal Tetris runner (default binary).
//!
//! Frame loop: draw, step the session with whatever the latch collected and
//! whether gravity is due, then wait briefly for key events. Logging goes to
//! stderr through `env_logger`; set `RUST_LOG` and redirect stderr to a file
//! to see it while playing.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};
use log::{info, warn};

use cli_tetris::core::{GameConfig, GravityClock, Session};
use cli_tetris::input::{map_key, should_quit, KeyLatch};
use cli_tetris::term::{FrameBuffer, PlayfieldView, TerminalRenderer};
use cli_tetris::types::MIN_TERMINAL_SIZE;

/// Lower bound for the input wait, so a zero frame sleep does not spin.
const MIN_INPUT_WAIT: Duration = Duration::from_millis(5);

fn main() -> Result<()> {
    env_logger::init();

    let (w, h) = terminal::size()?;
    let (min_w, min_h) = MIN_TERMINAL_SIZE;
    if w < min_w || h < min_h {
        eprintln!(
            "Terminal too small: {}x{}, need at least {}x{}.",
            w, h, min_w, min_h
        );
        return Ok(());
    }

    let config = GameConfig::from_env();

    let mut term = TerminalRenderer::new();
    term.enter()?;
    // Release events are only reported with the enhancement flags on.
    let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            std::io::stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    if enhanced {
        let _ = execute!(std::io::stdout(), PopKeyboardEnhancementFlags);
    }
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut session = Session::new(config.clone());
    let mut clock = GravityClock::new(config.gravity_interval);
    let mut latch = KeyLatch::new();
    let view = PlayfieldView::default();

    let (w, h) = terminal::size()?;
    let mut fb = FrameBuffer::new(w, h);
    let input_wait = config.frame_sleep.max(MIN_INPUT_WAIT);

    loop {
        view.render_into(&session, &mut fb);
        term.present(&fb)?;

        if !session.is_over() {
            let outcome = session.step(clock.poll(), latch.take_commands())?;
            if outcome.game_over {
                // Banner shows on the next draw; keep looping until quit.
                info!("final score {}", session.score());
            }
        }

        // Block for the first event, then drain whatever else is queued.
        let mut wait = input_wait;
        while event::poll(wait)? {
            wait = Duration::ZERO;
            match event::read()? {
                Event::Key(key) => {
                    if handle_key(&mut latch, key) {
                        return Ok(());
                    }
                }
                Event::Resize(nw, nh) => {
                    fb.resize(nw, nh);
                    term.invalidate();
                    if nw < MIN_TERMINAL_SIZE.0 || nh < MIN_TERMINAL_SIZE.1 {
                        warn!("terminal shrank to {}x{}", nw, nh);
                    }
                }
                _ => {}
            }
        }

        latch.update();
    }
}

/// Feed one key event into the latch. Returns true when the player quits.
fn handle_key(latch: &mut KeyLatch, key: KeyEvent) -> bool {
    match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => {
            if should_quit(key) {
                return true;
            }
            if let Some(game_key) = map_key(key.code) {
                latch.press(game_key);
            }
        }
        KeyEventKind::Release => {
            if let Some(game_key) = map_key(key.code) {
                latch.release(game_key);
            }
        }
    }
    false
}
