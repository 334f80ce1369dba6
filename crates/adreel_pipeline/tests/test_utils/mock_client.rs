//! Mock generation client for testing.

use adreel_client::GenerationClient;
use adreel_core::{Analysis, MediaRef, Mood, Scene, SceneKind, Storyboard, TARGET_DURATIONS_SECS};
use adreel_error::{
    AdreelResult, AnalysisError, AnalysisErrorKind, StoryboardError, StoryboardErrorKind,
    VideoError, VideoErrorKind,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Placeholder URL the mock substitutes for failed previews.
pub const PLACEHOLDER_URL: &str = "https://picsum.photos/800/450?grayscale";

/// Behavior configuration for mock preview synthesis.
#[derive(Debug, Clone, Copy)]
pub enum PreviewBehavior {
    /// Every preview succeeds with an inline still
    Inline,
    /// Every preview falls back to the placeholder URL
    Placeholder,
    /// Odd calls return inline stills, even calls the placeholder
    Alternate,
}

/// Mock generation client for testing.
///
/// Each operation is scripted independently, with call counters and
/// captured prompts, so tests can control responses and verify behavior
/// without making actual API calls. Clones share counters, so tests keep
/// a clone as a probe after moving the client into a pipeline.
#[derive(Clone)]
pub struct MockGenerationClient {
    analysis: Result<Analysis, AnalysisErrorKind>,
    analysis_recovers: bool,
    storyboard: Result<(), StoryboardErrorKind>,
    preview: PreviewBehavior,
    video: Result<(), VideoErrorKind>,
    video_delay: Duration,
    analyze_calls: Arc<Mutex<usize>>,
    storyboard_calls: Arc<Mutex<usize>>,
    preview_calls: Arc<Mutex<usize>>,
    video_calls: Arc<Mutex<usize>>,
    storyboard_colors: Arc<Mutex<Vec<String>>>,
    preview_prompts: Arc<Mutex<Vec<String>>>,
    video_prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGenerationClient {
    fn base() -> Self {
        Self {
            analysis: Ok(Self::canned_analysis()),
            analysis_recovers: false,
            storyboard: Ok(()),
            preview: PreviewBehavior::Inline,
            video: Ok(()),
            video_delay: Duration::from_millis(1),
            analyze_calls: Arc::new(Mutex::new(0)),
            storyboard_calls: Arc::new(Mutex::new(0)),
            preview_calls: Arc::new(Mutex::new(0)),
            video_calls: Arc::new(Mutex::new(0)),
            storyboard_colors: Arc::new(Mutex::new(Vec::new())),
            preview_prompts: Arc::new(Mutex::new(Vec::new())),
            video_prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock client where every operation succeeds.
    pub fn new_success() -> Self {
        Self::base()
    }

    /// Create a mock client whose analysis fails with the given error.
    pub fn new_analysis_error(kind: AnalysisErrorKind) -> Self {
        Self {
            analysis: Err(kind),
            ..Self::base()
        }
    }

    /// Create a mock client whose first analysis fails, then succeeds.
    ///
    /// Useful for testing that a new run recovers from a failed one.
    pub fn new_analysis_fail_then_succeed(kind: AnalysisErrorKind) -> Self {
        Self {
            analysis: Err(kind),
            analysis_recovers: true,
            ..Self::base()
        }
    }

    /// Create a mock client whose storyboard expansion fails with the given error.
    pub fn new_storyboard_error(kind: StoryboardErrorKind) -> Self {
        Self {
            storyboard: Err(kind),
            ..Self::base()
        }
    }

    /// Create a mock client whose video synthesis fails with the given error.
    pub fn new_video_error(kind: VideoErrorKind) -> Self {
        Self {
            video: Err(kind),
            ..Self::base()
        }
    }

    /// Override the preview behavior.
    pub fn with_preview_behavior(mut self, preview: PreviewBehavior) -> Self {
        self.preview = preview;
        self
    }

    /// Override how long video synthesis takes to resolve.
    ///
    /// Useful with a paused clock for observing in-flight render state.
    pub fn with_video_delay(mut self, delay: Duration) -> Self {
        self.video_delay = delay;
        self
    }

    /// Number of times analyze() was called.
    pub fn analyze_calls(&self) -> usize {
        *self.analyze_calls.lock().unwrap()
    }

    /// Number of times expand_storyboard() was called.
    pub fn storyboard_calls(&self) -> usize {
        *self.storyboard_calls.lock().unwrap()
    }

    /// Number of times synthesize_preview() was called.
    pub fn preview_calls(&self) -> usize {
        *self.preview_calls.lock().unwrap()
    }

    /// Number of times synthesize_video() was called.
    pub fn video_calls(&self) -> usize {
        *self.video_calls.lock().unwrap()
    }

    /// Brand colors passed to expand_storyboard(), in call order.
    pub fn storyboard_colors(&self) -> Vec<String> {
        self.storyboard_colors.lock().unwrap().clone()
    }

    /// Prompts passed to synthesize_preview(), in call order.
    pub fn preview_prompts(&self) -> Vec<String> {
        self.preview_prompts.lock().unwrap().clone()
    }

    /// Prompts passed to synthesize_video(), in call order.
    pub fn video_prompts(&self) -> Vec<String> {
        self.video_prompts.lock().unwrap().clone()
    }

    fn canned_analysis() -> Analysis {
        Analysis {
            product_name: "kopi robusta".to_string(),
            features: vec!["rasa coklat".to_string(), "single origin".to_string()],
            target_audience: "pekerja kantoran".to_string(),
            call_to_action: "beli sekarang diskon 20%".to_string(),
            mood: Mood::from("Urgent"),
            audio_mix: "TTS: 100%, Music: 30%, SFX: 10%".to_string(),
        }
    }

    fn canned_storyboard(brand_color: &str) -> Storyboard {
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
                narrative: format!("beat {}", i + 1),
                visual_prompt: format!("shot {} with {brand_color} accents", i + 1),
                camera_angle: "wide".to_string(),
                preview: None,
            })
            .collect();
        Storyboard::new(scenes).expect("mock storyboard is valid")
    }
}

#[async_trait]
impl GenerationClient for MockGenerationClient {
    async fn analyze(&self, _text: &str) -> AdreelResult<Analysis> {
        // Small delay to simulate network latency (but keep it minimal for fast tests)
        tokio::time::sleep(Duration::from_millis(1)).await;
        let call = {
            let mut count = self.analyze_calls.lock().unwrap();
            *count += 1;
            *count
        };
        match &self.analysis {
            Ok(analysis) => Ok(analysis.clone()),
            Err(_) if self.analysis_recovers && call > 1 => Ok(Self::canned_analysis()),
            Err(kind) => Err(AnalysisError::new(kind.clone()).into()),
        }
    }

    async fn expand_storyboard(
        &self,
        _analysis: &Analysis,
        brand_color: &str,
    ) -> AdreelResult<Storyboard> {
        tokio::time::sleep(Duration::from_millis(1)).await;
        *self.storyboard_calls.lock().unwrap() += 1;
        self.storyboard_colors
            .lock()
            .unwrap()
            .push(brand_color.to_string());
        match &self.storyboard {
            Ok(()) => Ok(Self::canned_storyboard(brand_color)),
            Err(kind) => Err(StoryboardError::new(kind.clone()).into()),
        }
    }

    async fn synthesize_preview(&self, visual_prompt: &str) -> MediaRef {
        tokio::time::sleep(Duration::from_millis(1)).await;
        let call = {
            let mut count = self.preview_calls.lock().unwrap();
            *count += 1;
            *count
        };
        self.preview_prompts
            .lock()
            .unwrap()
            .push(visual_prompt.to_string());
        match self.preview {
            PreviewBehavior::Inline => MediaRef::inline("image/png", vec![call as u8]),
            PreviewBehavior::Placeholder => MediaRef::Url(PLACEHOLDER_URL.to_string()),
            PreviewBehavior::Alternate if call % 2 == 1 => {
                MediaRef::inline("image/png", vec![call as u8])
            }
            PreviewBehavior::Alternate => MediaRef::Url(PLACEHOLDER_URL.to_string()),
        }
    }

    async fn synthesize_video(&self, prompt: &str) -> AdreelResult<MediaRef> {
        *self.video_calls.lock().unwrap() += 1;
        self.video_prompts.lock().unwrap().push(prompt.to_string());
        tokio::time::sleep(self.video_delay).await;
        match &self.video {
            Ok(()) => Ok(MediaRef::inline("video/mp4", vec![0x00, 0x00, 0x00, 0x18])),
            Err(kind) => Err(VideoError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
