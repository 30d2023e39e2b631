//! Terminal blockfall runner.
//!
//! Single-threaded cooperative loop: the gravity timer and discrete key
//! commands are serialized onto this one thread, so the session never sees
//! concurrent mutation. Gravity pacing lives inside the session; the loop
//! just feeds it a fixed 16 ms timestep and redraws when the session reports
//! a change.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameSession, SessionEvent};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = GameSession::new(clock_seed());
    session.start();

    let view = GameView::default();
    let mut last_final_score: Option<u32> = None;
    let mut needs_redraw = true;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        for event in session.take_events() {
            match event {
                SessionEvent::BoardChanged => needs_redraw = true,
                SessionEvent::SessionEnded { final_score } => {
                    last_final_score = Some(final_score);
                    needs_redraw = true;
                }
            }
        }

        if needs_redraw {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let fb = view.render(&session.snapshot(), last_final_score, Viewport::new(w, h));
            term.draw(&fb)?;
            needs_redraw = false;
        }

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        session.apply(command);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    needs_redraw = true;
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }
    }
}
