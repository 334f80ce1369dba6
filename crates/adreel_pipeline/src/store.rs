//! Observable session store.
//!
//! The store complements the pipeline:
//! - the pipeline decides what happens next,
//! - the store publishes every state change to live subscribers.

use adreel_core::{Analysis, BrandKit, MediaRef, Session, Stage, Storyboard};
use adreel_error::StateError;
use tokio::sync::watch;

/// Shared handle to the session state of one generation run.
///
/// Internally a [`watch`] channel: every mutation replaces the published
/// [`Session`] snapshot and wakes subscribers, so a UI can re-render from
/// whole snapshots instead of tracking deltas. Clones share the same
/// underlying session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    tx: watch::Sender<Session>,
}

impl SessionStore {
    /// Create a store holding a fresh session for the given brand.
    pub fn new(brand: BrandKit) -> Self {
        let (tx, _) = watch::channel(Session::new(brand));
        Self { tx }
    }

    /// Clone of the current session snapshot.
    pub fn snapshot(&self) -> Session {
        self.tx.borrow().clone()
    }

    /// Subscribe to session changes.
    ///
    /// The receiver observes every mutation made through this store; read
    /// the full snapshot after each wake-up.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }

    /// Replace the session with a fresh one for a new run.
    pub fn reset(&self, brand: BrandKit) {
        self.tx.send_replace(Session::new(brand));
    }

    /// Move the session to a new stage.
    pub fn set_stage(&self, stage: Stage) {
        self.tx.send_modify(|session| session.set_stage(stage));
    }

    /// Record the entity analysis.
    pub fn set_analysis(&self, analysis: Analysis) {
        self.tx.send_modify(|session| session.set_analysis(analysis));
    }

    /// Record the expanded storyboard.
    pub fn set_storyboard(&self, storyboard: Storyboard) {
        self.tx
            .send_modify(|session| session.set_storyboard(storyboard));
    }

    /// Attach a preview still to a scene.
    ///
    /// A rejected write leaves the session untouched and subscribers
    /// unwoken.
    pub fn set_scene_preview(&self, id: u8, media: MediaRef) -> Result<(), StateError> {
        let mut outcome = Ok(());
        self.tx.send_if_modified(|session| {
            outcome = session.set_scene_preview(id, media);
            outcome.is_ok()
        });
        outcome
    }

    /// Begin a render if none is in flight.
    ///
    /// Returns `true` when this caller won the slot. Losing callers leave
    /// the session untouched and subscribers unwoken.
    pub fn begin_render(&self) -> bool {
        self.tx.send_if_modified(|session| session.begin_render())
    }

    /// Advance cosmetic render progress by one tick.
    pub fn tick_progress(&self) {
        self.tx.send_modify(|session| session.tick_progress());
    }

    /// Finish the render with the provider outcome.
    pub fn finish_render(&self, outcome: Result<MediaRef, String>) {
        self.tx.send_modify(|session| session.finish_render(outcome));
    }

    /// Mark the whole run failed.
    pub fn fail_run(&self, message: impl Into<String>) {
        let message = message.into();
        self.tx.send_modify(|session| session.fail_run(message));
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(BrandKit::default())
    }
}
