//! Cooperative tick loop.
//!
//! Ticks and key presses are serialized on one task: a key is applied in
//! full before the next tick runs and vice versa. The next deadline is
//! scheduled from the moment a tick finishes, so a slow step pushes the
//! following one back instead of bunching ticks up. The loop keeps ticking
//! through game over (each tick is then a no-op) until the control channel
//! says quit or closes.

use std::time::Duration;

use log::{debug, info};
use tokio::sync::mpsc;
use tokio::time::{self, Instant};

use crate::core::Dictionary;
use crate::session::{Display, HighScoreStore, Session};
use crate::types::Key;

/// Message from the input source to the tick loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Key(Key),
    Quit,
}

/// Drive `session` until a [`Control::Quit`] arrives or every sender is gone.
pub async fn run<D, S, W>(
    session: &mut Session<D, S, W>,
    mut controls: mpsc::UnboundedReceiver<Control>,
    tick: Duration,
) where
    D: Display,
    S: HighScoreStore,
    W: Dictionary,
{
    let started = Instant::now();
    let mut deadline = started + tick;

    loop {
        tokio::select! {
            _ = time::sleep_until(deadline) => {
                let outcome = session.tick();
                debug!("tick: {outcome:?}");
                deadline = Instant::now() + tick;
            }
            control = controls.recv() => match control {
                Some(Control::Key(key)) => {
                    let now_ms = started.elapsed().as_millis() as u64;
                    session.handle_key(key, now_ms);
                }
                Some(Control::Quit) | None => break,
            },
        }
    }

    info!(
        "tick loop stopped (episode {}, score {})",
        session.state().episode_id(),
        session.state().score()
    );
}
