//! Entity analysis extracted from marketing copy.

use serde::{Deserialize, Serialize};

/// Marketing mood label produced by entity analysis.
///
/// The label itself is free-form provider text. Two moods steer the visual
/// style rules downstream and get dedicated predicates: urgent and calm.
/// Matching is case-insensitive substring, so "Urgent", "urgent and playful"
/// and "URGENT" all register as urgent.
///
/// # Examples
///
/// ```
/// use adreel_core::Mood;
///
/// let mood = Mood::from("Urgent");
/// assert!(mood.is_urgent());
/// assert!(!mood.is_calm());
/// assert_eq!(format!("{}", mood), "Urgent");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct Mood(String);

impl Mood {
    /// Wrap a mood label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The raw mood label.
    pub fn label(&self) -> &str {
        &self.0
    }

    /// True when the mood reads as urgent.
    pub fn is_urgent(&self) -> bool {
        self.0.to_lowercase().contains("urgent")
    }

    /// True when the mood reads as calm.
    pub fn is_calm(&self) -> bool {
        self.0.to_lowercase().contains("calm")
    }
}

impl From<&str> for Mood {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

/// Structured entities extracted from free-form marketing copy.
///
/// Produced exactly once per run and read-only afterward; every later stage
/// (storyboard expansion, preview and video prompts) derives from it.
///
/// # Examples
///
/// ```
/// use adreel_core::{Analysis, Mood};
///
/// let analysis = Analysis {
///     product_name: "kopi robusta".to_string(),
///     features: vec!["rasa coklat".to_string()],
///     target_audience: "coffee drinkers".to_string(),
///     call_to_action: "Beli sekarang".to_string(),
///     mood: Mood::from("Urgent"),
///     audio_mix: "TTS: 100%, Music: 30%, SFX: 10%".to_string(),
/// };
/// assert!(analysis.mood.is_urgent());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Analysis {
    /// Product or service being promoted
    pub product_name: String,
    /// Key selling points, most prominent first
    pub features: Vec<String>,
    /// Audience the copy addresses
    pub target_audience: String,
    /// Call to action closing the video
    pub call_to_action: String,
    /// Overall marketing mood
    pub mood: Mood,
    /// Suggested audio channel mix
    pub audio_mix: String,
}
