//! Session lifecycle: one running game plus the collaborators around it.
//!
//! The session owns the simulation, the key handler and the injected
//! display and high-score store. It is the only place that talks to them:
//! the display sees a fresh snapshot after every step and every key, and the
//! store is asked to save exactly once per game, on the transition into game
//! over. Store failures are logged and swallowed so they can never stop the
//! tick loop.

use log::{info, warn};

use crate::config::EngineConfig;
use crate::core::{Dictionary, GameSnapshot, GameState, TickOutcome, WordValidator};
use crate::input::InputHandler;
use crate::types::{GameAction, HighScoreEntry, Key};

/// Receives a read-only view of the game whenever it changes.
pub trait Display {
    fn render(&mut self, snapshot: &GameSnapshot, high_scores: &[HighScoreEntry]);
}

/// Persistent top-score table.
pub trait HighScoreStore {
    /// Best scores first, at most ten. Unreadable storage reads as empty.
    fn load(&self) -> Vec<HighScoreEntry>;

    /// Record a finished game's score.
    fn save(&mut self, score: u32) -> anyhow::Result<()>;
}

pub struct Session<D, S, W> {
    state: GameState,
    validator: WordValidator<W>,
    input: InputHandler,
    display: D,
    store: S,
    snapshot: GameSnapshot,
    high_scores: Vec<HighScoreEntry>,
}

impl<D, S, W> Session<D, S, W>
where
    D: Display,
    S: HighScoreStore,
    W: Dictionary,
{
    /// Set up the first game and show it.
    pub fn new(config: &EngineConfig, dictionary: W, display: D, store: S) -> Self {
        let high_scores = store.load();
        let mut session = Self {
            state: GameState::new(config.grid, config.seed),
            validator: WordValidator::new(dictionary),
            input: InputHandler::with_double_backspace_ms(config.double_backspace_ms),
            display,
            store,
            snapshot: GameSnapshot::default(),
            high_scores,
        };
        session.sync_display();
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn high_scores(&self) -> &[HighScoreEntry] {
        &self.high_scores
    }

    pub fn game_over(&self) -> bool {
        self.state.game_over()
    }

    /// One simulation step, then persistence and display as needed.
    ///
    /// Once the game is over this is a no-op until a restart.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.state.tick();
        match outcome {
            TickOutcome::Idle => return outcome,
            TickOutcome::GameOver(_) => self.persist_score(),
            TickOutcome::Moved | TickOutcome::Grew(_) => {}
        }
        self.sync_display();
        outcome
    }

    /// Feed one key pressed at `now_ms` (any monotonic millisecond clock).
    ///
    /// Returns whether the game accepted the resulting action.
    pub fn handle_key(&mut self, key: Key, now_ms: u64) -> bool {
        let action = self.input.handle_key(key, now_ms);
        let accepted = self.state.apply_action(action, &self.validator);
        if action == GameAction::Restart {
            self.input.reset();
            info!("session restarted (episode {})", self.state.episode_id());
        }
        self.sync_display();
        accepted
    }

    /// Start over with a fresh board, whatever the current phase.
    pub fn restart(&mut self) {
        self.state.restart();
        self.input.reset();
        info!("session restarted (episode {})", self.state.episode_id());
        self.sync_display();
    }

    fn persist_score(&mut self) {
        let score = self.state.score();
        match self.store.save(score) {
            Ok(()) => self.high_scores = self.store.load(),
            Err(e) => warn!("could not save score {score}: {e:#}"),
        }
    }

    fn sync_display(&mut self) {
        self.state.snapshot_into(&mut self.snapshot);
        self.display.render(&self.snapshot, &self.high_scores);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, GridConfig};
    use std::collections::HashSet;

    #[derive(Default)]
    struct RecordingDisplay {
        frames: Vec<GameSnapshot>,
    }

    impl Display for RecordingDisplay {
        fn render(&mut self, snapshot: &GameSnapshot, _high_scores: &[HighScoreEntry]) {
            self.frames.push(snapshot.clone());
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        saved: Vec<u32>,
        fail: bool,
    }

    impl HighScoreStore for MemoryStore {
        fn load(&self) -> Vec<HighScoreEntry> {
            let mut scores: Vec<HighScoreEntry> = self
                .saved
                .iter()
                .map(|&score| HighScoreEntry {
                    score,
                    date: "today".into(),
                })
                .collect();
            scores.sort_by(|a, b| b.score.cmp(&a.score));
            scores
        }

        fn save(&mut self, score: u32) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("disk full");
            }
            self.saved.push(score);
            Ok(())
        }
    }

    fn session(store: MemoryStore) -> Session<RecordingDisplay, MemoryStore, HashSet<String>> {
        let config = EngineConfig {
            grid: GridConfig::default(),
            seed: 4242,
            ..EngineConfig::default()
        };
        Session::new(
            &config,
            HashSet::from(["cat".to_string()]),
            RecordingDisplay::default(),
            store,
        )
    }

    fn run_into_wall(s: &mut Session<RecordingDisplay, MemoryStore, HashSet<String>>) {
        s.handle_key(Key::Arrow(Direction::Up), 0);
        for _ in 0..40 {
            if s.game_over() {
                break;
            }
            s.tick();
        }
        assert!(s.game_over());
    }

    #[test]
    fn test_new_session_renders_first_frame() {
        let s = session(MemoryStore::default());
        assert_eq!(s.display().frames.len(), 1);
        assert!(!s.game_over());
    }

    #[test]
    fn test_every_key_and_tick_renders() {
        let mut s = session(MemoryStore::default());
        s.handle_key(Key::Letter('Z'), 0);
        s.tick();
        assert_eq!(s.display().frames.len(), 3);
    }

    #[test]
    fn test_game_over_saves_score_exactly_once() {
        let mut s = session(MemoryStore::default());
        run_into_wall(&mut s);
        for _ in 0..5 {
            assert_eq!(s.tick(), TickOutcome::Idle);
        }
        assert_eq!(s.store().saved, vec![0]);
        assert_eq!(s.high_scores().len(), 1);
    }

    #[test]
    fn test_store_failure_does_not_stop_session() {
        let mut s = session(MemoryStore {
            fail: true,
            ..MemoryStore::default()
        });
        run_into_wall(&mut s);
        assert!(s.store().saved.is_empty());

        assert!(s.handle_key(Key::Restart, 10));
        assert!(!s.game_over());
        assert_ne!(s.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_keys_ignored_while_game_over_except_restart() {
        let mut s = session(MemoryStore::default());
        run_into_wall(&mut s);
        assert!(!s.handle_key(Key::Arrow(Direction::Left), 0));
        assert!(s.handle_key(Key::Restart, 0));
        assert_eq!(s.state().episode_id(), 1);
        assert!(s.state().snake_letters().is_empty());
    }

    #[test]
    fn test_restart_then_second_game_over_saves_again() {
        let mut s = session(MemoryStore::default());
        run_into_wall(&mut s);
        s.restart();
        run_into_wall(&mut s);
        assert_eq!(s.store().saved.len(), 2);
    }

    #[test]
    fn test_double_backspace_uses_injected_clock() {
        let mut s = session(MemoryStore::default());
        // Backspace on an empty word is rejected but still starts the window.
        assert!(!s.handle_key(Key::Backspace, 1_000));
        assert!(!s.handle_key(Key::Backspace, 1_300));
    }
}
