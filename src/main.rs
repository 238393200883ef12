//! Terminal blockfall runner (default binary).
//!
//! Single-threaded cooperative loop. Each iteration renders the current
//! state, drains all pending key events into the tick's intent batch, and
//! advances the game by one step once the fall interval has elapsed. Input
//! for a tick is applied strictly before that tick's update.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blockfall::core::GameState;
use tui_blockfall::input::{map_key_event, IntentBatch};
use tui_blockfall::term::{GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::{Intent, FALL_INTERVAL_MS, INPUT_POLL_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new();
    let view = GameView::default();
    let mut batch = IntentBatch::new();

    let fall_interval = Duration::from_millis(FALL_INTERVAL_MS);
    let poll_slice = Duration::from_millis(INPUT_POLL_MS);
    let mut last_fall = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 30));
        let fb = view.render(&game, Viewport::new(w, h));
        term.draw(&fb)?;

        // Wait for input, but never past the next fall step.
        let timeout = fall_interval
            .checked_sub(last_fall.elapsed())
            .unwrap_or(Duration::ZERO)
            .min(poll_slice);

        // Drain everything that is pending before applying any of it.
        if event::poll(timeout)? {
            loop {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(intent) = map_key_event(key) {
                            batch.push(intent);
                        }
                    }
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        for intent in batch.take() {
            if intent == Intent::Quit {
                return Ok(());
            }
            game.handle_intent(intent);
        }

        // Fall step.
        if last_fall.elapsed() >= fall_interval {
            last_fall = Instant::now();
            game.update();
        }
    }
}
