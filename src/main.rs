//! Terminal word search runner (default binary).
//!
//! Drag across the board with the left mouse button to select a line of
//! letters. `h` shows a hint, `n` hides the next word, `q` quits.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tui_wordsearch::core::PuzzleBoard;
use tui_wordsearch::input::{handle_key_event, should_quit, DragTracker};
use tui_wordsearch::term::{BoardView, TerminalPalette, TerminalRenderer, Viewport};
use tui_wordsearch::types::{BoardEvent, PuzzleAction, TICK_MS};
use tui_wordsearch::config::DEFAULT_LOG_FILTER;
use tui_wordsearch::GameConfig;

fn main() -> Result<()> {
    let config = GameConfig::from_env()?;
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Install a file subscriber when a log path is configured.
///
/// The terminal belongs to the renderer, so nothing is logged to stdout.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut board = PuzzleBoard::new(config.dims, config.seed)
        .with_reveal_delay_ms(config.reveal_delay_ms);
    let view = BoardView::default();
    let palette = TerminalPalette::default();
    let mut tracker = DragTracker::new();

    tracing::info!(
        width = config.dims.width,
        height = config.dims.height,
        seed = config.seed,
        words = config.words.len(),
        "starting"
    );

    let mut word_index = 0;
    let mut status = hide_word(&mut board, &config.words, word_index);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let snap = board.snapshot();
        term.draw(&view, &snap, &palette, &status, viewport)?;

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
                    match handle_key_event(key) {
                        Some(PuzzleAction::ShowHint) => board.show_hint(),
                        Some(PuzzleAction::NextWord) => {
                            word_index = (word_index + 1) % config.words.len();
                            status = hide_word(&mut board, &config.words, word_index);
                        }
                        None => {}
                    }
                }
                Event::Mouse(mouse) => {
                    let geometry = view.geometry(&snap, viewport);
                    for drag in tracker.handle_mouse(mouse, &geometry) {
                        if let Some(correct) = board.handle_drag(drag) {
                            tracing::debug!(correct, "selection submitted");
                        }
                    }
                }
                Event::FocusLost => {
                    if let Some(drag) = tracker.cancel() {
                        board.handle_drag(drag);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            board.tick(TICK_MS);

            for ev in board.take_events() {
                if let BoardEvent::ContentJudged { correct } = ev {
                    status = if correct {
                        "Found it! Press n for the next word.".to_string()
                    } else {
                        "Not quite. Press n to try another word.".to_string()
                    };
                }
            }
        }
    }
}

/// Hide `words[index]` and describe the outcome for the status line.
fn hide_word(board: &mut PuzzleBoard, words: &[String], index: usize) -> String {
    let Some(word) = words.get(index) else {
        return "No words configured.".to_string();
    };
    match board.hide(word) {
        Ok(placement) => format!(
            "Find a {}-letter word. Drag to select, h for a hint.",
            placement.len
        ),
        Err(err) => {
            tracing::warn!(word = %word, error = %err, "cannot hide word");
            format!("Cannot hide {word:?}: {err}. Press n to skip.")
        }
    }
}
