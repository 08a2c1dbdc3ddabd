//! Formation Import Crate
//!
//! Turns a parsed static snapshot into host scene changes: point objects for a
//! formation and, optionally, a light effect colored from the snapshot.
//!
//! ## Modules
//!
//! - [`host`]: capability traits the host scene implements
//! - [`importer`]: the import operation and its configuration
//! - [`effect`]: light effect requests and their color images
//! - [`memory`]: an in-memory host scene

pub mod effect;
pub mod host;
pub mod importer;
pub mod memory;

pub use effect::{ColorImage, EffectOutput, LightEffectRequest};
pub use host::{FormationTarget, HostError, LightEffects, Storyboard, StoryboardEntry};
pub use importer::{
    ImportConfig, ImportError, ImportReport, apply_snapshot, ensure_extension, import_snapshot,
};
pub use memory::{InMemoryFormation, InMemoryLightEffects, InMemoryScene, InMemoryStoryboard};
