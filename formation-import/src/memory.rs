//! In-memory host scene.
//!
//! Implements every host capability with plain collections. The command-line
//! tool imports into it, and tests use it to observe what an import did.

use crate::effect::LightEffectRequest;
use crate::host::{FormationTarget, HostError, LightEffects, Storyboard, StoryboardEntry};
use glam::DVec3;
use serde::Serialize;

/// A named group of point objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InMemoryFormation {
    pub name: String,
    pub points: Vec<DVec3>,
}

impl InMemoryFormation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }
}

impl FormationTarget for InMemoryFormation {
    fn name(&self) -> &str {
        &self.name
    }

    fn add_points(&mut self, positions: &[DVec3]) -> Result<(), HostError> {
        self.points.extend_from_slice(positions);
        Ok(())
    }
}

/// Storyboard entries keyed by formation name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InMemoryStoryboard {
    pub frame_start: i32,
    pub entries: Vec<(String, StoryboardEntry)>,
}

impl InMemoryStoryboard {
    pub fn new(frame_start: i32) -> Self {
        Self {
            frame_start,
            entries: Vec::new(),
        }
    }

    /// Put `formation` on the storyboard.
    pub fn add_entry(&mut self, formation: impl Into<String>, entry: StoryboardEntry) {
        self.entries.push((formation.into(), entry));
    }
}

impl Storyboard for InMemoryStoryboard {
    fn first_entry_for_formation(&self, formation: &str) -> Option<StoryboardEntry> {
        self.entries
            .iter()
            .find(|(name, _)| name == formation)
            .map(|(_, entry)| *entry)
    }

    fn scene_frame_start(&self) -> i32 {
        self.frame_start
    }
}

/// Light effects in creation order, with an optional active entry.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InMemoryLightEffects {
    pub entries: Vec<LightEffectRequest>,
    pub active_index: Option<usize>,
}

impl InMemoryLightEffects {
    pub fn active_entry(&self) -> Option<&LightEffectRequest> {
        self.active_index.and_then(|i| self.entries.get(i))
    }
}

impl LightEffects for InMemoryLightEffects {
    fn append_light_effect(&mut self, request: LightEffectRequest) -> Result<(), HostError> {
        if request.image.pixels.len() != request.image.height as usize * 3 {
            return Err(HostError::Rejected(format!(
                "image '{}' has {} channels for {} rows",
                request.image.name,
                request.image.pixels.len(),
                request.image.height
            )));
        }

        let select = request.select;
        self.entries.push(request);
        if select {
            self.active_index = Some(self.entries.len() - 1);
        }
        Ok(())
    }
}

/// A whole scene: formations, storyboard and light effects.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InMemoryScene {
    pub formations: Vec<InMemoryFormation>,
    pub storyboard: InMemoryStoryboard,
    pub light_effects: InMemoryLightEffects,
}

impl InMemoryScene {
    pub fn new(frame_start: i32) -> Self {
        Self {
            storyboard: InMemoryStoryboard::new(frame_start),
            ..Default::default()
        }
    }

    /// Add an empty formation and return a handle to it.
    pub fn add_formation(&mut self, name: impl Into<String>) -> &mut InMemoryFormation {
        self.formations.push(InMemoryFormation::new(name));
        let last = self.formations.len() - 1;
        &mut self.formations[last]
    }

    pub fn formation(&self, name: &str) -> Option<&InMemoryFormation> {
        self.formations.iter().find(|f| f.name == name)
    }

    pub fn formation_mut(&mut self, name: &str) -> Result<&mut InMemoryFormation, HostError> {
        self.formations
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| HostError::FormationNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storyboard_lookup() {
        let mut storyboard = InMemoryStoryboard::new(10);
        storyboard.add_entry("Grid", StoryboardEntry::new(100, 50));
        storyboard.add_entry("Grid", StoryboardEntry::new(300, 20));

        assert_eq!(
            storyboard.first_entry_for_formation("Grid"),
            Some(StoryboardEntry::new(100, 50))
        );
        assert_eq!(storyboard.first_entry_for_formation("Circle"), None);
        assert_eq!(storyboard.scene_frame_start(), 10);
    }

    #[test]
    fn test_formation_lookup() {
        let mut scene = InMemoryScene::new(0);
        scene.add_formation("Grid");

        assert!(scene.formation("Grid").is_some());
        assert!(matches!(
            scene.formation_mut("Circle"),
            Err(HostError::FormationNotFound(_))
        ));
    }
}
