//! Invariant-checked storyboard container.

use crate::{Scene, SceneKind};
use adreel_error::{StoryboardError, StoryboardErrorKind};
use serde::{Deserialize, Serialize};

/// Number of scenes in every storyboard.
pub const SCENE_COUNT: usize = 4;

/// Target duration in seconds for each scene, in ordinal order.
pub const TARGET_DURATIONS_SECS: [f32; SCENE_COUNT] = [5.0, 7.0, 8.0, 5.0];

/// Target total runtime in seconds.
pub const TARGET_TOTAL_SECS: f32 = 25.0;

/// A validated four-scene storyboard.
///
/// Construction enforces the structural contract: exactly four scenes with
/// ids `1..=4`, stored in ascending order, and exactly one
/// [`SceneKind::Cta`] scene. Scene durations are targets, not hard
/// requirements.
///
/// # Examples
///
/// ```
/// use adreel_core::{Scene, SceneKind, Storyboard, TARGET_DURATIONS_SECS};
///
/// let scenes: Vec<Scene> = [
///     SceneKind::Hook,
///     SceneKind::Solution,
///     SceneKind::Benefit,
///     SceneKind::Cta,
/// ]
/// .into_iter()
/// .enumerate()
/// .map(|(i, kind)| Scene {
///     id: i as u8 + 1,
///     kind,
///     duration_secs: TARGET_DURATIONS_SECS[i],
///     narrative: format!("scene {}", i + 1),
///     visual_prompt: "product shot".to_string(),
///     camera_angle: "wide".to_string(),
///     preview: None,
/// })
/// .collect();
///
/// let storyboard = Storyboard::new(scenes).unwrap();
/// assert_eq!(storyboard.scenes().len(), 4);
/// assert_eq!(storyboard.total_duration_secs(), 25.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Storyboard(Vec<Scene>);

impl Storyboard {
    /// Validate and build a storyboard from raw scenes.
    ///
    /// Scenes are sorted by id. Fails on a wrong scene count, duplicate or
    /// missing ids, or a CTA count other than one.
    pub fn new(mut scenes: Vec<Scene>) -> Result<Self, StoryboardError> {
        if scenes.len() != SCENE_COUNT {
            return Err(StoryboardError::new(StoryboardErrorKind::SceneCount {
                expected: SCENE_COUNT,
                actual: scenes.len(),
            }));
        }
        scenes.sort_by_key(|scene| scene.id);
        for pair in scenes.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(StoryboardError::new(StoryboardErrorKind::DuplicateSceneId(
                    pair[0].id,
                )));
            }
        }
        for expected in 1..=SCENE_COUNT as u8 {
            if !scenes.iter().any(|scene| scene.id == expected) {
                return Err(StoryboardError::new(StoryboardErrorKind::MissingSceneId(
                    expected,
                )));
            }
        }
        let cta_count = scenes
            .iter()
            .filter(|scene| scene.kind == SceneKind::Cta)
            .count();
        if cta_count != 1 {
            return Err(StoryboardError::new(StoryboardErrorKind::CtaCount(
                cta_count,
            )));
        }
        Ok(Self(scenes))
    }

    /// Scenes in ascending id order.
    pub fn scenes(&self) -> &[Scene] {
        &self.0
    }

    /// Look up a scene by ordinal.
    pub fn scene(&self, id: u8) -> Option<&Scene> {
        self.0.iter().find(|scene| scene.id == id)
    }

    /// Mutable scene lookup, restricted to the crate so callers cannot
    /// rewrite ids out from under the validation.
    pub(crate) fn scene_mut(&mut self, id: u8) -> Option<&mut Scene> {
        self.0.iter_mut().find(|scene| scene.id == id)
    }

    /// Sum of planned scene durations.
    pub fn total_duration_secs(&self) -> f32 {
        self.0.iter().map(|scene| scene.duration_secs).sum()
    }

    /// Consume the storyboard, yielding its scenes in ascending id order.
    pub fn into_scenes(self) -> Vec<Scene> {
        self.0
    }
}

impl<'de> Deserialize<'de> for Storyboard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let scenes = Vec::<Scene>::deserialize(deserializer)?;
        Storyboard::new(scenes).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(id: u8, kind: SceneKind) -> Scene {
        Scene {
            id,
            kind,
            duration_secs: 5.0,
            narrative: format!("narrative {id}"),
            visual_prompt: format!("visual {id}"),
            camera_angle: "wide".to_string(),
            preview: None,
        }
    }

    fn valid_scenes() -> Vec<Scene> {
        vec![
            scene(1, SceneKind::Hook),
            scene(2, SceneKind::Solution),
            scene(3, SceneKind::Benefit),
            scene(4, SceneKind::Cta),
        ]
    }

    #[test]
    fn accepts_four_scenes_with_one_cta() {
        let storyboard = Storyboard::new(valid_scenes()).unwrap();
        let ids: Vec<u8> = storyboard.scenes().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn sorts_scenes_by_id() {
        let mut scenes = valid_scenes();
        scenes.reverse();
        let storyboard = Storyboard::new(scenes).unwrap();
        let ids: Vec<u8> = storyboard.scenes().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn rejects_wrong_scene_count() {
        let mut scenes = valid_scenes();
        scenes.pop();
        let err = Storyboard::new(scenes).unwrap_err();
        assert_eq!(
            err.kind,
            StoryboardErrorKind::SceneCount {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut scenes = valid_scenes();
        scenes[2].id = 2;
        let err = Storyboard::new(scenes).unwrap_err();
        assert_eq!(err.kind, StoryboardErrorKind::DuplicateSceneId(2));
    }

    #[test]
    fn rejects_out_of_range_ids() {
        let mut scenes = valid_scenes();
        scenes[3].id = 9;
        let err = Storyboard::new(scenes).unwrap_err();
        assert_eq!(err.kind, StoryboardErrorKind::MissingSceneId(4));
    }

    #[test]
    fn rejects_multiple_cta_scenes() {
        let mut scenes = valid_scenes();
        scenes[0].kind = SceneKind::Cta;
        let err = Storyboard::new(scenes).unwrap_err();
        assert_eq!(err.kind, StoryboardErrorKind::CtaCount(2));
    }

    #[test]
    fn rejects_missing_cta_scene() {
        let mut scenes = valid_scenes();
        scenes[3].kind = SceneKind::Benefit;
        let err = Storyboard::new(scenes).unwrap_err();
        assert_eq!(err.kind, StoryboardErrorKind::CtaCount(0));
    }

    #[test]
    fn deserialization_revalidates() {
        let json = serde_json::to_string(&Storyboard::new(valid_scenes()).unwrap()).unwrap();
        let back: Storyboard = serde_json::from_str(&json).unwrap();
        assert_eq!(back.scenes().len(), 4);

        let truncated = serde_json::to_string(&valid_scenes()[..2].to_vec()).unwrap();
        assert!(serde_json::from_str::<Storyboard>(&truncated).is_err());
    }
}
