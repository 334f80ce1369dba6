//! Trait definition for generation backends.

use adreel_core::{Analysis, MediaRef, Storyboard};
use adreel_error::AdreelResult;
use async_trait::async_trait;

/// Core trait that generation backends implement.
///
/// One implementor drives a whole run: entity analysis, storyboard
/// expansion, per-scene preview stills, and the long-running video job.
///
/// `synthesize_preview` never fails. Implementations absorb provider
/// failures into a placeholder reference, so a bad still cannot abort the
/// preview pass. Every other operation propagates its stage-specific error.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Extract structured entities from free-form marketing copy.
    ///
    /// Empty or whitespace-only input is rejected before any provider
    /// call is made.
    async fn analyze(&self, text: &str) -> AdreelResult<Analysis>;

    /// Expand an analysis into the fixed four-scene storyboard.
    ///
    /// The brand color is woven into every scene's visual prompt.
    async fn expand_storyboard(
        &self,
        analysis: &Analysis,
        brand_color: &str,
    ) -> AdreelResult<Storyboard>;

    /// Produce a preview still for one composite scene prompt.
    async fn synthesize_preview(&self, visual_prompt: &str) -> MediaRef;

    /// Run the asynchronous video job for the composite prompt and fetch
    /// the finished asset.
    async fn synthesize_video(&self, prompt: &str) -> AdreelResult<MediaRef>;

    /// Provider name, for logs.
    fn provider_name(&self) -> &'static str;
}
