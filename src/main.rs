//! Terminal memory-match runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from the term crate.
//! One loop drives everything: poll input until the next fixed frame, then
//! advance the game clock by `FRAME_MS`.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use memory_match::config::Config;
use memory_match::controller::dispatch;
use memory_match::core::{GameSnapshot, GameState};
use memory_match::input::{handle_key_event, should_quit, GridCursor};
use memory_match::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use memory_match::types::{FRAME_MS, TICK_MS};

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config)?;

    let mut game_state = match config.seed {
        Some(seed) => GameState::new(seed),
        None => GameState::from_entropy(),
    }
    .with_reveal_delay_ms(config.reveal_ms);
    game_state.select_time_limit(config.time);
    info!(
        seed = game_state.seed(),
        preset = config.time.as_str(),
        reveal_ms = config.reveal_ms,
        "memory-match starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game_state);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("memory-match exiting");
    result
}

fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, game_state: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let mut cursor = GridCursor::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(FRAME_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game_state.snapshot_into(&mut snap);
        view.render_into(&snap, Some(cursor.index()), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dispatch(action, game_state, &mut cursor);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with the time that actually passed.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            game_state.update(frame_elapsed_ms(elapsed));
        }
    }
}

/// Milliseconds to feed into `GameState::update` for one loop step.
///
/// Capped at one countdown second so a suspended terminal does not burn the
/// clock on resume.
fn frame_elapsed_ms(elapsed: Duration) -> u32 {
    elapsed.as_millis().min(u128::from(TICK_MS)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_elapsed_follows_wall_clock() {
        assert_eq!(frame_elapsed_ms(Duration::from_millis(50)), 50);
        assert_eq!(frame_elapsed_ms(Duration::from_millis(180)), 180);
    }

    #[test]
    fn frame_elapsed_is_capped_after_a_stall() {
        assert_eq!(frame_elapsed_ms(Duration::from_secs(30)), TICK_MS);
    }

    #[test]
    fn slow_frames_keep_the_countdown_on_time() {
        let mut state = GameState::new(1);
        state.start_game(memory_match::types::TimeLimit::Hard);
        let start = state.time_remaining();
        // Ten frames of 200ms each are two real seconds.
        for _ in 0..10 {
            state.update(frame_elapsed_ms(Duration::from_millis(200)));
        }
        assert_eq!(state.time_remaining(), start - 2);
    }
}
