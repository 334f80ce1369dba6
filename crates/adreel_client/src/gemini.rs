//! Gemini REST driver for the generation client.

use crate::config::{AdreelConfig, GeneratorConfig};
use crate::{GenerationClient, dto, extraction, prompt};
use adreel_core::{Analysis, MediaRef, Scene, Storyboard};
use adreel_error::{
    AdreelResult, AnalysisError, AnalysisErrorKind, ConfigError, ConfigErrorKind, StoryboardError,
    StoryboardErrorKind, ValidationError, ValidationErrorKind, VideoError, VideoErrorKind,
};
use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Header the Generative Language API reads the credential from.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini-backed generation driver.
///
/// Talks to the Generative Language REST API directly: structured
/// `generateContent` for analysis and storyboard, image-modality
/// `generateContent` for preview stills, and `predictLongRunning` plus
/// operation polling for video.
#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    client: Client,
    api_key: String,
    config: GeneratorConfig,
}

impl GeminiGenerator {
    /// Create a generator from the environment.
    ///
    /// Loads `.env` if present, reads `GEMINI_API_KEY`, and applies the
    /// layered TOML configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the API key is absent or the
    /// configuration cannot be loaded. The key is checked here so a
    /// missing credential surfaces at construction, not mid-run.
    #[instrument(skip_all)]
    pub fn new() -> AdreelResult<Self> {
        let _ = dotenvy::dotenv();
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| {
            ConfigError::new(ConfigErrorKind::MissingApiKey(API_KEY_VAR.to_string()))
        })?;
        let config = AdreelConfig::load()?.into_generator();
        Ok(Self::with_config(api_key, config))
    }

    /// Create a generator with an explicit credential and settings.
    pub fn with_config(api_key: String, config: GeneratorConfig) -> Self {
        Self {
            client: Client::new(),
            api_key,
            config,
        }
    }

    /// Generator settings in effect.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn content_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url(),
            model
        )
    }

    /// Preview synthesis with ordinary error propagation; the trait method
    /// wraps this and substitutes the placeholder.
    async fn preview_inline(&self, visual_prompt: &str) -> Result<MediaRef, String> {
        let request = dto::GenerateContentRequest::image(visual_prompt, "16:9");
        let url = self.content_url(self.config.image_model());
        debug!(url = %url, "Sending preview request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("request failed: {e}"))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(format!("HTTP {status}: {message}"));
        }

        let body: dto::GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| format!("response parse failed: {e}"))?;

        let inline = body
            .first_inline_data()
            .ok_or_else(|| "no inline image in response".to_string())?;
        let data = STANDARD
            .decode(inline.data())
            .map_err(|e| format!("base64 decode failed: {e}"))?;

        Ok(MediaRef::inline(inline.mime_type().clone(), data))
    }

    async fn poll_operation(&self, name: &str) -> AdreelResult<dto::Operation> {
        let url = format!("{}/{}", self.config.base_url(), name);
        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| VideoError::new(VideoErrorKind::Poll(format!("Request failed: {e}"))))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(VideoError::new(VideoErrorKind::Http { status, message }).into());
        }

        response.json().await.map_err(|e| {
            VideoError::new(VideoErrorKind::MalformedPayload(format!(
                "Failed to parse operation: {e}"
            )))
            .into()
        })
    }

    async fn fetch_video(&self, uri: &str) -> AdreelResult<MediaRef> {
        // The asset URI is pre-signed except for the credential, which the
        // API expects as a query parameter.
        let url = format!("{uri}&key={}", self.api_key);
        debug!("Fetching finished video asset");

        let response = self.client.get(&url).send().await.map_err(|e| {
            VideoError::new(VideoErrorKind::Download(format!("Request failed: {e}")))
        })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(VideoError::new(VideoErrorKind::Http { status, message }).into());
        }

        let bytes = response.bytes().await.map_err(|e| {
            VideoError::new(VideoErrorKind::Download(format!("Body read failed: {e}")))
        })?;

        Ok(MediaRef::inline("video/mp4", bytes.to_vec()))
    }
}

#[async_trait]
impl GenerationClient for GeminiGenerator {
    #[instrument(skip(self, text))]
    async fn analyze(&self, text: &str) -> AdreelResult<Analysis> {
        if text.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyInput).into());
        }

        let request = dto::GenerateContentRequest::structured(
            prompt::analysis_prompt(text),
            dto::analysis_schema(),
        );
        let url = self.content_url(self.config.text_model());
        debug!(url = %url, "Sending analysis request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                AnalysisError::new(AnalysisErrorKind::Request(format!("Request failed: {e}")))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(AnalysisError::new(AnalysisErrorKind::Http { status, message }).into());
        }

        let body: dto::GenerateContentResponse = response.json().await.map_err(|e| {
            AnalysisError::new(AnalysisErrorKind::MalformedPayload(format!(
                "Failed to parse response: {e}"
            )))
        })?;

        let text_payload = body
            .first_text()
            .ok_or_else(|| AnalysisError::new(AnalysisErrorKind::EmptyResponse))?;

        let json = extraction::extract_json(&text_payload).ok_or_else(|| {
            AnalysisError::new(AnalysisErrorKind::MalformedPayload(
                "No JSON found in response text".to_string(),
            ))
        })?;

        let dto: dto::AnalysisDto = extraction::parse_json(&json)
            .map_err(|e| AnalysisError::new(AnalysisErrorKind::MalformedPayload(e.to_string())))?;

        Ok(dto.into())
    }

    #[instrument(skip(self, analysis))]
    async fn expand_storyboard(
        &self,
        analysis: &Analysis,
        brand_color: &str,
    ) -> AdreelResult<Storyboard> {
        let request = dto::GenerateContentRequest::structured(
            prompt::storyboard_prompt(analysis, brand_color),
            dto::storyboard_schema(),
        );
        let url = self.content_url(self.config.text_model());
        debug!(url = %url, "Sending storyboard request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                StoryboardError::new(StoryboardErrorKind::Request(format!("Request failed: {e}")))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(StoryboardError::new(StoryboardErrorKind::Http { status, message }).into());
        }

        let body: dto::GenerateContentResponse = response.json().await.map_err(|e| {
            StoryboardError::new(StoryboardErrorKind::MalformedPayload(format!(
                "Failed to parse response: {e}"
            )))
        })?;

        let text_payload = body
            .first_text()
            .ok_or_else(|| StoryboardError::new(StoryboardErrorKind::EmptyResponse))?;

        let json = extraction::extract_json(&text_payload).ok_or_else(|| {
            StoryboardError::new(StoryboardErrorKind::MalformedPayload(
                "No JSON found in response text".to_string(),
            ))
        })?;

        let scenes: Vec<dto::SceneDto> = extraction::parse_json(&json).map_err(|e| {
            StoryboardError::new(StoryboardErrorKind::MalformedPayload(e.to_string()))
        })?;
        let scenes: Vec<Scene> = scenes.into_iter().map(Scene::from).collect();

        Ok(Storyboard::new(scenes)?)
    }

    #[instrument(skip(self, visual_prompt))]
    async fn synthesize_preview(&self, visual_prompt: &str) -> MediaRef {
        match self.preview_inline(visual_prompt).await {
            Ok(media) => media,
            Err(reason) => {
                warn!(%reason, "Preview synthesis failed, substituting placeholder");
                MediaRef::Url(self.config.placeholder_url().clone())
            }
        }
    }

    #[instrument(skip(self, prompt))]
    async fn synthesize_video(&self, prompt: &str) -> AdreelResult<MediaRef> {
        let request = dto::PredictLongRunningRequest::single(prompt);
        let url = format!(
            "{}/models/{}:predictLongRunning",
            self.config.base_url(),
            self.config.video_model()
        );
        debug!(url = %url, "Submitting video job");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                VideoError::new(VideoErrorKind::Submit(format!("Request failed: {e}")))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(VideoError::new(VideoErrorKind::Http { status, message }).into());
        }

        let mut operation: dto::Operation = response.json().await.map_err(|e| {
            VideoError::new(VideoErrorKind::MalformedPayload(format!(
                "Failed to parse operation: {e}"
            )))
        })?;

        let name = operation.name().clone();
        let poll_interval = Duration::from_secs(*self.config.poll_interval_secs());

        // Fixed-interval polling; the job has no client-side deadline.
        while !operation.done() {
            tokio::time::sleep(poll_interval).await;
            debug!(operation = %name, "Polling video operation");
            operation = self.poll_operation(&name).await?;
        }

        if let Some(error) = operation.error() {
            return Err(
                VideoError::new(VideoErrorKind::JobFailed(error.message().clone())).into(),
            );
        }

        let uri = operation
            .video_uri()
            .ok_or_else(|| VideoError::new(VideoErrorKind::MissingAsset))?
            .to_string();

        self.fetch_video(&uri).await
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
