//! Capability interfaces the importer uses to reach into the host scene

use crate::effect::LightEffectRequest;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A formation in the host scene that imported points are added to.
pub trait FormationTarget {
    /// Name of the formation, also used to name the derived light effect.
    fn name(&self) -> &str;

    /// Materialize one point object per position, in the given order.
    fn add_points(&mut self, positions: &[DVec3]) -> Result<(), HostError>;
}

/// Timeline lookup for formations.
pub trait Storyboard {
    /// First storyboard entry that shows the given formation, if any.
    fn first_entry_for_formation(&self, formation: &str) -> Option<StoryboardEntry>;

    /// Start frame of the scene, used when the formation is not on the storyboard.
    fn scene_frame_start(&self) -> i32;
}

/// Host collection of light effects.
pub trait LightEffects {
    /// Append a new light effect and make it the active one when requested.
    fn append_light_effect(&mut self, request: LightEffectRequest) -> Result<(), HostError>;
}

/// Timing of a formation on the storyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryboardEntry {
    pub frame_start: i32,
    pub duration: u32,
}

impl StoryboardEntry {
    pub fn new(frame_start: i32, duration: u32) -> Self {
        Self {
            frame_start,
            duration,
        }
    }
}

/// Errors reported by host capabilities.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Formation not found: {0}")]
    FormationNotFound(String),
    #[error("Host rejected operation: {0}")]
    Rejected(String),
}
