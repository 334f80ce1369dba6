//! Session state for a single generation run.

use crate::{Analysis, BrandKit, MediaRef, Storyboard};
use adreel_error::{StateError, StateErrorKind};
use serde::{Deserialize, Serialize};

/// Progress percentage a render starts at.
pub const RENDER_START_PROGRESS: u8 = 10;

/// Increment applied by each cosmetic progress tick.
pub const RENDER_TICK_STEP: u8 = 5;

/// Ceiling for cosmetic progress while the job is still running.
pub const RENDER_TICK_CAP: u8 = 90;

/// Pipeline stage a session is in.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Stage {
    /// Waiting for marketing copy
    #[default]
    Input,
    /// Entity analysis in flight
    Analyzing,
    /// Storyboard expansion in flight
    Storyboarding,
    /// Storyboard ready; previews and the render happen here
    Dashboard,
    /// The run failed; [`Session::error`] holds the message
    Failed,
}

/// Video synthesis progress for the current run.
///
/// `generating` and `video` are mutually exclusive: a finished asset always
/// arrives together with `generating` going false.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoState {
    /// A render is in flight
    pub generating: bool,
    /// Cosmetic progress percentage, 0 through 100
    pub progress: u8,
    /// Finished video asset
    pub video: Option<MediaRef>,
    /// Most recent render failure
    pub error: Option<String>,
}

/// Complete state of one generation run.
///
/// Sessions are in-memory only; a new run replaces the whole session. All
/// mutation goes through the methods here so the structural invariants
/// (single analysis, single preview per scene, render exclusivity) hold at
/// every step.
///
/// # Examples
///
/// ```
/// use adreel_core::{BrandKit, Session, Stage};
///
/// let mut session = Session::new(BrandKit::default());
/// assert_eq!(session.stage, Stage::Input);
///
/// session.set_stage(Stage::Analyzing);
/// assert_eq!(session.stage, Stage::Analyzing);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Brand identity for the run
    pub brand: BrandKit,
    /// Entity analysis, set once per run
    pub analysis: Option<Analysis>,
    /// Expanded storyboard, set once per run
    pub storyboard: Option<Storyboard>,
    /// Video synthesis state
    pub video: VideoState,
    /// Current pipeline stage
    pub stage: Stage,
    /// Run-level failure message
    pub error: Option<String>,
}

impl Session {
    /// Fresh session for a new run.
    pub fn new(brand: BrandKit) -> Self {
        Self {
            brand,
            analysis: None,
            storyboard: None,
            video: VideoState::default(),
            stage: Stage::Input,
            error: None,
        }
    }

    /// Move the session to a new stage.
    pub fn set_stage(&mut self, stage: Stage) {
        self.stage = stage;
    }

    /// Record the entity analysis.
    pub fn set_analysis(&mut self, analysis: Analysis) {
        self.analysis = Some(analysis);
    }

    /// Record the expanded storyboard.
    pub fn set_storyboard(&mut self, storyboard: Storyboard) {
        self.storyboard = Some(storyboard);
    }

    /// Attach a preview still to a scene.
    ///
    /// Each scene accepts exactly one preview per run. An absent preview
    /// means pending, never failed.
    pub fn set_scene_preview(&mut self, id: u8, media: MediaRef) -> Result<(), StateError> {
        let Some(storyboard) = self.storyboard.as_mut() else {
            return Err(StateError::new(StateErrorKind::NoStoryboard));
        };
        let Some(scene) = storyboard.scene_mut(id) else {
            return Err(StateError::new(StateErrorKind::SceneOutOfRange(id)));
        };
        if scene.preview.is_some() {
            return Err(StateError::new(StateErrorKind::PreviewAlreadySet(id)));
        }
        scene.preview = Some(media);
        Ok(())
    }

    /// Begin a render if none is in flight.
    ///
    /// Returns `false` without touching the session when a render is
    /// already running, so concurrent triggers collapse into one job. A
    /// fresh render clears any previous asset and error.
    pub fn begin_render(&mut self) -> bool {
        if self.video.generating {
            return false;
        }
        self.video = VideoState {
            generating: true,
            progress: RENDER_START_PROGRESS,
            video: None,
            error: None,
        };
        true
    }

    /// Advance cosmetic render progress by one tick.
    ///
    /// No-op unless a render is in flight; progress holds at
    /// [`RENDER_TICK_CAP`] until the job finishes.
    pub fn tick_progress(&mut self) {
        if self.video.generating && self.video.progress < RENDER_TICK_CAP {
            self.video.progress = (self.video.progress + RENDER_TICK_STEP).min(RENDER_TICK_CAP);
        }
    }

    /// Finish the render with the provider outcome.
    ///
    /// Success lands at progress 100 with the asset attached; failure
    /// resets progress to 0 and records the message. The analysis and
    /// storyboard are untouched either way, so a retry is just a new
    /// [`Session::begin_render`].
    pub fn finish_render(&mut self, outcome: Result<MediaRef, String>) {
        self.video = match outcome {
            Ok(media) => VideoState {
                generating: false,
                progress: 100,
                video: Some(media),
                error: None,
            },
            Err(message) => VideoState {
                generating: false,
                progress: 0,
                video: None,
                error: Some(message),
            },
        };
    }

    /// Mark the whole run failed.
    pub fn fail_run(&mut self, message: impl Into<String>) {
        self.stage = Stage::Failed;
        self.error = Some(message.into());
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(BrandKit::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Scene, SceneKind};

    fn storyboard() -> Storyboard {
        let scenes = vec![
            scene(1, SceneKind::Hook),
            scene(2, SceneKind::Solution),
            scene(3, SceneKind::Benefit),
            scene(4, SceneKind::Cta),
        ];
        Storyboard::new(scenes).unwrap()
    }

    fn scene(id: u8, kind: SceneKind) -> Scene {
        Scene {
            id,
            kind,
            duration_secs: 5.0,
            narrative: String::new(),
            visual_prompt: String::new(),
            camera_angle: String::new(),
            preview: None,
        }
    }

    #[test]
    fn preview_requires_storyboard() {
        let mut session = Session::default();
        let err = session
            .set_scene_preview(1, MediaRef::Url("x".to_string()))
            .unwrap_err();
        assert_eq!(err.kind, StateErrorKind::NoStoryboard);
    }

    #[test]
    fn preview_rejects_unknown_scene() {
        let mut session = Session::default();
        session.set_storyboard(storyboard());
        let err = session
            .set_scene_preview(5, MediaRef::Url("x".to_string()))
            .unwrap_err();
        assert_eq!(err.kind, StateErrorKind::SceneOutOfRange(5));
    }

    #[test]
    fn preview_set_at_most_once() {
        let mut session = Session::default();
        session.set_storyboard(storyboard());
        session
            .set_scene_preview(2, MediaRef::Url("first".to_string()))
            .unwrap();
        let err = session
            .set_scene_preview(2, MediaRef::Url("second".to_string()))
            .unwrap_err();
        assert_eq!(err.kind, StateErrorKind::PreviewAlreadySet(2));

        let storyboard = session.storyboard.as_ref().unwrap();
        assert_eq!(
            storyboard.scene(2).unwrap().preview,
            Some(MediaRef::Url("first".to_string()))
        );
    }

    #[test]
    fn begin_render_is_exclusive() {
        let mut session = Session::default();
        assert!(session.begin_render());
        assert!(!session.begin_render());
        assert_eq!(session.video.progress, RENDER_START_PROGRESS);
        assert!(session.video.generating);
    }

    #[test]
    fn tick_caps_below_completion() {
        let mut session = Session::default();
        session.begin_render();
        for _ in 0..40 {
            session.tick_progress();
        }
        assert_eq!(session.video.progress, RENDER_TICK_CAP);
    }

    #[test]
    fn tick_is_noop_without_render() {
        let mut session = Session::default();
        session.tick_progress();
        assert_eq!(session.video.progress, 0);
    }

    #[test]
    fn finish_render_success() {
        let mut session = Session::default();
        session.begin_render();
        session.finish_render(Ok(MediaRef::Url("video".to_string())));
        assert!(!session.video.generating);
        assert_eq!(session.video.progress, 100);
        assert!(session.video.video.is_some());
        assert!(session.video.error.is_none());
    }

    #[test]
    fn finish_render_failure_resets_progress() {
        let mut session = Session::default();
        session.begin_render();
        session.tick_progress();
        session.finish_render(Err("job failed".to_string()));
        assert!(!session.video.generating);
        assert_eq!(session.video.progress, 0);
        assert!(session.video.video.is_none());
        assert_eq!(session.video.error.as_deref(), Some("job failed"));
    }

    #[test]
    fn render_retry_clears_previous_failure() {
        let mut session = Session::default();
        session.begin_render();
        session.finish_render(Err("job failed".to_string()));
        assert!(session.begin_render());
        assert!(session.video.error.is_none());
        assert_eq!(session.video.progress, RENDER_START_PROGRESS);
    }

    #[test]
    fn fail_run_sets_stage_and_message() {
        let mut session = Session::default();
        session.set_stage(Stage::Analyzing);
        session.fail_run("provider unreachable");
        assert_eq!(session.stage, Stage::Failed);
        assert_eq!(session.error.as_deref(), Some("provider unreachable"));
    }
}
