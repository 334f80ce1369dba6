//! Pipeline driving a generation client through a full promo run.

use crate::{ProgressTicker, SessionStore};
use adreel_client::{GenerationClient, prompt};
use adreel_core::{BrandKit, Stage};
use adreel_error::{AdreelResult, StateError, StateErrorKind, ValidationError, ValidationErrorKind};
use tracing::{info, instrument, warn};

/// Orchestrates one generation run against a [`GenerationClient`].
///
/// The pipeline owns the client and a [`SessionStore`]; each phase writes
/// its result into the store before the next begins, so subscribers watch
/// the run unfold snapshot by snapshot. Methods take `&self` and the store
/// handle is cloneable, which keeps the pipeline shareable across tasks.
pub struct StoryboardPipeline<C: GenerationClient> {
    client: C,
    store: SessionStore,
}

impl<C: GenerationClient> StoryboardPipeline<C> {
    /// Build a pipeline over a client with a fresh session for the brand.
    pub fn new(client: C, brand: BrandKit) -> Self {
        Self {
            client,
            store: SessionStore::new(brand),
        }
    }

    /// Handle to the session store.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Run entity analysis and storyboard expansion over marketing copy.
    ///
    /// Blank input is rejected before the session is touched. A real run
    /// discards the previous session, then moves through
    /// [`Stage::Analyzing`] and [`Stage::Storyboarding`] to
    /// [`Stage::Dashboard`]. A provider failure in either phase parks the
    /// session at [`Stage::Failed`] with the message recorded, and the
    /// error is returned to the caller as well.
    #[instrument(skip(self, text, brand))]
    pub async fn start(&self, text: &str, brand: BrandKit) -> AdreelResult<()> {
        if text.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyInput).into());
        }

        self.store.reset(brand.clone());
        self.store.set_stage(Stage::Analyzing);
        let analysis = match self.client.analyze(text).await {
            Ok(analysis) => analysis,
            Err(err) => {
                self.store.fail_run(err.to_string());
                return Err(err);
            }
        };
        info!(
            product = %analysis.product_name,
            mood = %analysis.mood,
            "analysis complete"
        );
        self.store.set_analysis(analysis.clone());

        self.store.set_stage(Stage::Storyboarding);
        let storyboard = match self
            .client
            .expand_storyboard(&analysis, &brand.primary_color)
            .await
        {
            Ok(storyboard) => storyboard,
            Err(err) => {
                self.store.fail_run(err.to_string());
                return Err(err);
            }
        };
        info!(
            scenes = storyboard.scenes().len(),
            total_secs = storyboard.total_duration_secs(),
            "storyboard ready"
        );
        self.store.set_storyboard(storyboard);
        self.store.set_stage(Stage::Dashboard);
        Ok(())
    }

    /// Synthesize preview stills for scenes that still lack one.
    ///
    /// Scenes are processed in ascending id order, one at a time, and each
    /// preview is written to the store as it lands. Scenes that already
    /// have a preview are skipped, so the method can resume a partial
    /// pass. Preview synthesis never fails the run; the client substitutes
    /// a placeholder for any scene it cannot render.
    #[instrument(skip(self))]
    pub async fn fill_previews(&self) -> AdreelResult<()> {
        let snapshot = self.store.snapshot();
        let (Some(storyboard), Some(analysis)) = (snapshot.storyboard, snapshot.analysis) else {
            return Err(StateError::new(StateErrorKind::NoStoryboard).into());
        };

        for scene in storyboard.scenes() {
            if scene.preview.is_some() {
                continue;
            }
            let composite = prompt::preview_prompt(&scene.visual_prompt, &analysis.mood);
            let media = self.client.synthesize_preview(&composite).await;
            self.store.set_scene_preview(scene.id, media)?;
            info!(scene = scene.id, "preview ready");
        }
        Ok(())
    }

    /// Kick off video synthesis and wait for the asset.
    ///
    /// Only one render runs at a time: a call that arrives while another
    /// is in flight returns `Ok(())` without submitting a second job. The
    /// winning call holds a [`ProgressTicker`] for the duration of the
    /// synthesis, then records the outcome. Failure leaves the storyboard
    /// intact so the caller can render again.
    #[instrument(skip(self))]
    pub async fn render_video(&self) -> AdreelResult<()> {
        let snapshot = self.store.snapshot();
        let (Some(storyboard), Some(analysis)) = (snapshot.storyboard, snapshot.analysis) else {
            return Err(StateError::new(StateErrorKind::NoStoryboard).into());
        };
        if !self.store.begin_render() {
            info!("render already in flight");
            return Ok(());
        }

        let composite =
            prompt::video_prompt(&storyboard, &analysis.mood, &snapshot.brand.primary_color);
        let _ticker = ProgressTicker::spawn(self.store.clone());
        match self.client.synthesize_video(&composite).await {
            Ok(media) => {
                info!("video ready");
                self.store.finish_render(Ok(media));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "video synthesis failed");
                self.store.finish_render(Err(err.to_string()));
                Err(err)
            }
        }
    }
}
