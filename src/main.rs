//! Terminal runner (default binary).
//!
//! Reads configuration from the environment, then loops: deliver due gravity
//! ticks, render, wait for input until the next frame.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use colorfall::engine::{AppConfig, EventLog, GameDriver};
use colorfall::input::{handle_key_event, should_quit};
use colorfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::from_env();

    let mut driver = GameDriver::new(config.seed);
    if let Some(path) = config.log_path.as_deref() {
        match EventLog::open(path) {
            Ok(log) => driver = driver.with_event_log(log),
            Err(e) => eprintln!("[colorfall] {:#}; continuing without event log", e),
        }
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut driver, &config);

    driver.stop();
    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, driver: &mut GameDriver, config: &AppConfig) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;
    let frame = Duration::from_millis(config.frame_ms as u64);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let frame_start = Instant::now();
        driver.advance(now_ms());

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&driver.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = frame.saturating_sub(frame_start.elapsed());
        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    driver.apply(action, now_ms());
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
