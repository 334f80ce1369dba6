//! Generative Language API data transfer objects.
//!
//! Wire types for the three REST surfaces the driver touches:
//! `generateContent` (structured text and image output), the
//! `predictLongRunning` video submission, and the operation envelope
//! returned while polling. Payload DTOs (`AnalysisDto`, `SceneDto`) mirror
//! the camelCase JSON the response schema makes the model emit, and convert
//! into the core domain types.

use adreel_core::{Analysis, Mood, Scene, SceneKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A single part of a content block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text payload
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    /// Inline binary payload
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    /// Text-only part.
    pub fn text_part(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }
}

/// Inline binary payload with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type, e.g. `image/png`
    mime_type: String,
    /// Base64-encoded bytes
    data: String,
}

/// Ordered parts forming one content block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct Content {
    /// Content parts
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    /// Content block holding a single text part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::text_part(text)],
        }
    }
}

/// Image generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    /// Output aspect ratio, e.g. `16:9`
    aspect_ratio: String,
}

/// Generation controls for a `generateContent` call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Response MIME type, `application/json` for structured output
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    /// JSON schema the response must satisfy
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
    /// Requested output modalities
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<String>>,
    /// Image output settings
    #[serde(skip_serializing_if = "Option::is_none")]
    image_config: Option<ImageConfig>,
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation contents
    contents: Vec<Content>,
    /// Generation controls
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Structured-output request: a single prompt constrained to a JSON
    /// schema.
    pub fn structured(prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            contents: vec![Content::from_text(prompt)],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema),
                response_modalities: None,
                image_config: None,
            }),
        }
    }

    /// Image-output request for one prompt at a fixed aspect ratio.
    pub fn image(prompt: impl Into<String>, aspect_ratio: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::from_text(prompt)],
            generation_config: Some(GenerationConfig {
                response_mime_type: None,
                response_schema: None,
                response_modalities: Some(vec!["TEXT".to_string(), "IMAGE".to_string()]),
                image_config: Some(ImageConfig {
                    aspect_ratio: aspect_ratio.into(),
                }),
            }),
        }
    }
}

/// One response candidate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct Candidate {
    /// Candidate content
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<Content>,
}

/// Response body for `generateContent`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct GenerateContentResponse {
    /// Ranked candidates, best first
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    pub fn first_text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }

    /// First inline payload of the first candidate.
    pub fn first_inline_data(&self) -> Option<&InlineData> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|part| part.inline_data.as_ref())
    }
}

/// One video prediction instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct VideoInstance {
    /// Video prompt
    prompt: String,
}

/// Video job parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct VideoParameters {
    /// Number of videos to generate
    sample_count: u32,
    /// Output resolution label
    resolution: String,
    /// Output aspect ratio
    aspect_ratio: String,
}

impl Default for VideoParameters {
    fn default() -> Self {
        Self {
            sample_count: 1,
            resolution: "720p".to_string(),
            aspect_ratio: "16:9".to_string(),
        }
    }
}

/// Request body for `models/{model}:predictLongRunning`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PredictLongRunningRequest {
    /// Prediction instances, one per requested generation
    instances: Vec<VideoInstance>,
    /// Job-level parameters
    parameters: VideoParameters,
}

impl PredictLongRunningRequest {
    /// Single-video job for one prompt at the standard settings.
    pub fn single(prompt: impl Into<String>) -> Self {
        Self {
            instances: vec![VideoInstance {
                prompt: prompt.into(),
            }],
            parameters: VideoParameters::default(),
        }
    }
}

/// Failure reported by a long-running operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct OperationError {
    /// Status code
    #[serde(default)]
    code: i32,
    /// Human-readable message
    #[serde(default)]
    message: String,
}

/// Video asset pointer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct VideoAsset {
    /// Download URI; the API key must be appended to fetch it
    #[serde(skip_serializing_if = "Option::is_none")]
    uri: Option<String>,
}

/// One generated video sample.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct GeneratedSample {
    /// The video asset
    #[serde(skip_serializing_if = "Option::is_none")]
    video: Option<VideoAsset>,
}

/// Video generation result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoResponse {
    /// Generated samples; newer API revisions emit `generatedVideos`
    #[serde(default, alias = "generatedVideos")]
    generated_samples: Vec<GeneratedSample>,
}

/// Operation result envelope.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct OperationResponse {
    /// Video generation result
    #[serde(skip_serializing_if = "Option::is_none")]
    generate_video_response: Option<GenerateVideoResponse>,
}

/// Long-running operation envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Operation {
    /// Operation resource name, used for polling
    name: String,
    /// Whether the job has finished
    #[serde(default)]
    done: bool,
    /// Job-level failure
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<OperationError>,
    /// Job result, present when done without error
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<OperationResponse>,
}

impl Operation {
    /// URI of the first generated video, when present.
    pub fn video_uri(&self) -> Option<&str> {
        self.response
            .as_ref()?
            .generate_video_response
            .as_ref()?
            .generated_samples
            .first()?
            .video
            .as_ref()?
            .uri
            .as_deref()
    }
}

/// Entity analysis payload emitted by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDto {
    /// Product or service name
    product_name: String,
    /// Key selling points
    #[serde(default)]
    features: Vec<String>,
    /// Audience the copy addresses
    target_audience: String,
    /// Call to action with any incentive
    cta: String,
    /// Marketing mood label
    marketing_mood: String,
    /// Audio channel mix
    suggested_audio_ratio: String,
}

impl From<AnalysisDto> for Analysis {
    fn from(dto: AnalysisDto) -> Self {
        Self {
            product_name: dto.product_name,
            features: dto.features,
            target_audience: dto.target_audience,
            call_to_action: dto.cta,
            mood: Mood::new(dto.marketing_mood),
            audio_mix: dto.suggested_audio_ratio,
        }
    }
}

/// Storyboard scene payload emitted by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDto {
    /// Scene ordinal
    id: u8,
    /// Scene role label
    #[serde(rename = "type")]
    kind: SceneKind,
    /// Planned duration in seconds
    duration: f32,
    /// Voice-over narrative
    narrative: String,
    /// Visual generation prompt
    visual_prompt: String,
    /// Camera direction
    camera_angle: String,
}

impl From<SceneDto> for Scene {
    fn from(dto: SceneDto) -> Self {
        Self {
            id: dto.id,
            kind: dto.kind,
            duration_secs: dto.duration,
            narrative: dto.narrative,
            visual_prompt: dto.visual_prompt,
            camera_angle: dto.camera_angle,
            preview: None,
        }
    }
}

/// Response schema for the entity analysis call.
pub fn analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "productName": { "type": "STRING" },
            "features": { "type": "ARRAY", "items": { "type": "STRING" } },
            "targetAudience": { "type": "STRING" },
            "cta": { "type": "STRING" },
            "marketingMood": { "type": "STRING" },
            "suggestedAudioRatio": { "type": "STRING" }
        }
    })
}

/// Response schema for the storyboard expansion call.
pub fn storyboard_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "INTEGER" },
                "type": { "type": "STRING", "enum": ["HOOK", "SOLUTION", "BENEFIT", "CTA"] },
                "duration": { "type": "NUMBER" },
                "narrative": { "type": "STRING" },
                "visualPrompt": { "type": "STRING" },
                "cameraAngle": { "type": "STRING" }
            }
        }
    })
}
