//! End-to-end wizard flow over a stubbed generation client.

use adreel::{
    AdreelErrorKind, AdreelResult, Analysis, BrandKit, GenerationClient, MediaRef, Mood, Scene,
    SceneKind, Stage, Storyboard, StoryboardPipeline, TARGET_DURATIONS_SECS, TARGET_TOTAL_SECS,
};
use async_trait::async_trait;

/// Stub client scripted for the Indonesian coffee launch scenario.
struct CoffeeLaunchStub;

#[async_trait]
impl GenerationClient for CoffeeLaunchStub {
    async fn analyze(&self, _text: &str) -> AdreelResult<Analysis> {
        Ok(Analysis {
            product_name: "kopi robusta".to_string(),
            features: vec!["rasa coklat".to_string()],
            target_audience: "sarapan cepat pekerja kantoran".to_string(),
            call_to_action: "beli sekarang diskon 20%".to_string(),
            mood: Mood::from("Urgent"),
            audio_mix: "TTS: 100%, Music: 30%, SFX: 10%".to_string(),
        })
    }

    async fn expand_storyboard(
        &self,
        _analysis: &Analysis,
        brand_color: &str,
    ) -> AdreelResult<Storyboard> {
        let kinds = [
            SceneKind::Hook,
            SceneKind::Solution,
            SceneKind::Benefit,
            SceneKind::Cta,
        ];
        let scenes = kinds
            .into_iter()
            .enumerate()
            .map(|(i, kind)| Scene {
                id: i as u8 + 1,
                kind,
                duration_secs: TARGET_DURATIONS_SECS[i],
                narrative: format!("act {}", i + 1),
                visual_prompt: format!(
                    "fast cuts, bright saturation, {brand_color} props, act {}",
                    i + 1
                ),
                camera_angle: "close-up".to_string(),
                preview: None,
            })
            .collect();
        Ok(Storyboard::new(scenes)?)
    }

    async fn synthesize_preview(&self, visual_prompt: &str) -> MediaRef {
        assert!(visual_prompt.contains("style: Urgent"));
        MediaRef::inline("image/png", vec![0x89, 0x50, 0x4e, 0x47])
    }

    async fn synthesize_video(&self, prompt: &str) -> AdreelResult<MediaRef> {
        assert!(prompt.contains("cinematic Urgent commercial"));
        assert!(prompt.contains("#8b5cf6"));
        Ok(MediaRef::inline("video/mp4", vec![0x00, 0x00, 0x00, 0x18]))
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }
}

/// Full wizard flow for an Indonesian coffee promo with the default brand.
#[tokio::test]
async fn test_coffee_promo_end_to_end() {
    let brand = BrandKit::default();
    assert_eq!(brand.primary_color, "#8b5cf6");

    let pipeline = StoryboardPipeline::new(CoffeeLaunchStub, brand.clone());
    pipeline
        .start(
            "Jual kopi robusta dengan rasa coklat, cocok untuk sarapan cepat. \
             Beli sekarang diskon 20%!",
            brand,
        )
        .await
        .unwrap();
    pipeline.fill_previews().await.unwrap();
    pipeline.render_video().await.unwrap();

    let session = pipeline.store().snapshot();
    assert_eq!(session.stage, Stage::Dashboard);

    let analysis = session.analysis.expect("analysis recorded");
    assert_eq!(analysis.product_name, "kopi robusta");
    assert!(analysis.mood.is_urgent());

    let storyboard = session.storyboard.expect("storyboard recorded");
    assert_eq!(storyboard.scenes().len(), 4);
    for scene in storyboard.scenes() {
        assert!(scene.visual_prompt.contains("#8b5cf6"));
        assert!(scene.preview.is_some());
    }
    assert_eq!(storyboard.total_duration_secs(), TARGET_TOTAL_SECS);

    assert_eq!(session.video.progress, 100);
    assert!(matches!(
        &session.video.video,
        Some(MediaRef::Inline { mime, .. }) if mime == "video/mp4"
    ));
}

/// Blank copy is rejected before any provider call.
#[tokio::test]
async fn test_blank_copy_is_rejected() {
    let pipeline = StoryboardPipeline::new(CoffeeLaunchStub, BrandKit::default());
    let err = pipeline
        .start("   ", BrandKit::default())
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), AdreelErrorKind::Validation(_)));
    assert_eq!(pipeline.store().snapshot().stage, Stage::Input);
}
