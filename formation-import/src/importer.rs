//! Static snapshot import into a host formation.
//!
//! The snapshot file is parsed completely before the host is touched, so a
//! rejected file leaves the scene exactly as it was.

use crate::effect::{ColorImage, EffectOutput, LightEffectRequest};
use crate::host::{FormationTarget, HostError, LightEffects, Storyboard, StoryboardEntry};
use formation_data::{Snapshot, SnapshotError, parse_snapshot};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Options for [`import_snapshot`].
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Create a light effect from the imported colors when the host supports it.
    pub create_light_effect: bool,
    /// Duration used when the formation is not on the storyboard.
    pub default_duration: u32,
    /// Extension appended to input paths that lack it.
    pub extension: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            create_light_effect: true,
            default_duration: 1,
            extension: ".csv".to_string(),
        }
    }
}

/// Errors that abort an import.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("Formation would be empty, nothing was created ({path:?})")]
    EmptyFormation { path: PathBuf },

    #[error("Host error: {0}")]
    Host(#[from] HostError),
}

/// Summary of a completed import.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportReport {
    pub formation: String,
    pub source: PathBuf,
    pub point_count: usize,
    pub frame_start: i32,
    pub duration: u32,
    /// Name of the light effect that was created, if any.
    pub light_effect: Option<String>,
}

/// Append `extension` to `path` unless it already ends with it (ignoring case).
pub fn ensure_extension(path: &Path, extension: &str) -> PathBuf {
    let already = path
        .to_str()
        .is_some_and(|s| s.to_lowercase().ends_with(&extension.to_lowercase()));
    if already || extension.is_empty() {
        return path.to_path_buf();
    }

    let mut with_ext = path.as_os_str().to_owned();
    with_ext.push(extension);
    PathBuf::from(with_ext)
}

/// Import the static snapshot at `path` into `formation`.
///
/// Points are added in file order. When `light_effects` is given and enabled
/// in `config`, a light effect named after the formation is created whose
/// image has one pixel per point in the same order.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn import_snapshot(
    path: impl AsRef<Path>,
    formation: &mut dyn FormationTarget,
    storyboard: &dyn Storyboard,
    light_effects: Option<&mut dyn LightEffects>,
    config: &ImportConfig,
) -> Result<ImportReport, ImportError> {
    let path = ensure_extension(path.as_ref(), &config.extension);
    let snapshot = parse_snapshot(&path)?;
    apply_snapshot(&snapshot, path, formation, storyboard, light_effects, config)
}

/// Apply an already parsed snapshot to the host.
///
/// `source` is only recorded in the report and in errors.
pub fn apply_snapshot(
    snapshot: &Snapshot,
    source: PathBuf,
    formation: &mut dyn FormationTarget,
    storyboard: &dyn Storyboard,
    light_effects: Option<&mut dyn LightEffects>,
    config: &ImportConfig,
) -> Result<ImportReport, ImportError> {
    if snapshot.is_empty() {
        warn!("Snapshot {} has no entries, nothing to import", source.display());
        return Err(ImportError::EmptyFormation { path: source });
    }

    let formation_name = formation.name().to_string();
    let timing = storyboard
        .first_entry_for_formation(&formation_name)
        .unwrap_or_else(|| {
            debug!("Formation not on storyboard, using scene start frame");
            StoryboardEntry::new(storyboard.scene_frame_start(), config.default_duration)
        });

    formation.add_points(&snapshot.positions())?;
    debug!("Added {} points to formation", snapshot.len());

    let light_effect = match light_effects {
        Some(effects) if config.create_light_effect => {
            let request = LightEffectRequest {
                name: formation_name.clone(),
                frame_start: timing.frame_start,
                duration: timing.duration,
                select: true,
                output: EffectOutput::IndexedByFormation,
                image: ColorImage::from_snapshot(&formation_name, snapshot),
            };
            effects.append_light_effect(request)?;
            debug!("Created light effect '{}'", formation_name);
            Some(formation_name.clone())
        }
        _ => None,
    };

    info!(
        "Imported {} points into formation '{}' (frames {}+{})",
        snapshot.len(),
        formation_name,
        timing.frame_start,
        timing.duration
    );

    Ok(ImportReport {
        formation: formation_name,
        source,
        point_count: snapshot.len(),
        frame_start: timing.frame_start,
        duration: timing.duration,
        light_effect,
    })
}
