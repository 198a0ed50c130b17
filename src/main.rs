//! Terminal word snake runner (default binary).
//!
//! Keys are read on a plain thread and forwarded to a single-threaded tokio
//! runtime that owns the session and ticks it. Logs go to a file because the
//! terminal is in raw mode on the alternate screen.

use std::fs::File;
use std::thread;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};
use tokio::sync::mpsc;

use word_snake::core::GameSnapshot;
use word_snake::engine::{self, Control, Display, EngineConfig, Session};
use word_snake::input::{handle_key_event, should_quit};
use word_snake::store::{builtin_words, open_dictionary, JsonScoreFile, StoreConfig};
use word_snake::term::{FrameBuffer, GameView, Screen, Viewport};
use word_snake::types::HighScoreEntry;

const DEFAULT_LOG_PATH: &str = "word_snake.log";

fn main() -> Result<()> {
    init_logging();

    let config = EngineConfig::from_env();
    let store_config = StoreConfig::from_env();
    let dictionary = open_dictionary(store_config.dictionary_path.as_deref()).unwrap_or_else(|e| {
        warn!("{e:#}; falling back to the built-in word list");
        builtin_words()
    });
    let scores = JsonScoreFile::new(&store_config.scores_path);

    let mut term = Screen::new();
    term.enter()?;

    let result = run(&mut term, config, dictionary, scores);

    // Always try to restore terminal state.
    let _ = term.leave();
    result
}

fn run(
    term: &mut Screen,
    config: EngineConfig,
    dictionary: std::collections::HashSet<String>,
    scores: JsonScoreFile,
) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let (tx, rx) = mpsc::unbounded_channel();
    thread::spawn(move || read_keys(tx));

    info!(
        "starting {}x{} grid, tick {:?}, seed {}",
        config.grid.columns, config.grid.rows, config.tick, config.seed
    );
    let mut session = Session::new(&config, dictionary, TermDisplay::new(term), scores);
    runtime.block_on(engine::run(&mut session, rx, config.tick));
    Ok(())
}

/// Forward key presses until quit or the game loop goes away.
fn read_keys(tx: mpsc::UnboundedSender<Control>) {
    loop {
        let event = match event::read() {
            Ok(event) => event,
            Err(e) => {
                warn!("reading terminal events failed: {e}");
                let _ = tx.send(Control::Quit);
                return;
            }
        };
        let Event::Key(key) = event else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let control = if should_quit(key) {
            Control::Quit
        } else if let Some(k) = handle_key_event(key) {
            Control::Key(k)
        } else {
            continue;
        };
        if tx.send(control).is_err() || control == Control::Quit {
            return;
        }
    }
}

/// Draws snapshots to the real terminal.
struct TermDisplay<'a> {
    term: &'a mut Screen,
    view: GameView,
    fb: FrameBuffer,
}

impl<'a> TermDisplay<'a> {
    fn new(term: &'a mut Screen) -> Self {
        Self {
            term,
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
        }
    }
}

impl Display for TermDisplay<'_> {
    fn render(&mut self, snapshot: &GameSnapshot, high_scores: &[HighScoreEntry]) {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view
            .render_into_with_scores(snapshot, high_scores, Viewport::new(w, h), &mut self.fb);
        if let Err(e) = self.term.present(&mut self.fb) {
            warn!("draw failed: {e:#}");
        }
    }
}

fn init_logging() {
    let path = std::env::var("WORD_SNAKE_LOG")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_PATH.to_string());
    let level = std::env::var("WORD_SNAKE_LOG_LEVEL")
        .ok()
        .and_then(|s| s.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    // Logging is best effort; the game runs without it.
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(level, Config::default(), file);
    }
}
