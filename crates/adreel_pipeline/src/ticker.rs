//! Cosmetic progress ticker for in-flight renders.

use crate::SessionStore;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time;

/// Seconds between cosmetic progress ticks.
pub const TICK_INTERVAL_SECS: u64 = 2;

/// Background task advancing render progress on a fixed cadence.
///
/// Dropping the ticker aborts the task, so callers hold it for exactly the
/// lifetime of the synthesis call. Ticks against a session with no render
/// in flight are no-ops.
#[derive(Debug)]
pub struct ProgressTicker {
    handle: JoinHandle<()>,
}

impl ProgressTicker {
    /// Spawn a ticker on the default cadence.
    pub fn spawn(store: SessionStore) -> Self {
        Self::with_interval(store, Duration::from_secs(TICK_INTERVAL_SECS))
    }

    /// Spawn a ticker on a custom cadence.
    pub fn with_interval(store: SessionStore, interval: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = time::interval(interval);
            // The first tick fires immediately; consume it so progress
            // moves only after a full period.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                store.tick_progress();
            }
        });
        Self { handle }
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
