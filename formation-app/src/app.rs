//! Import run configuration and execution with builder pattern.

use formation_data::{Snapshot, parse_snapshot};
use formation_import::{
    ImportConfig, ImportReport, InMemoryScene, LightEffects, StoryboardEntry, apply_snapshot,
    ensure_extension,
};
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;
use tracing::info;

/// Logging configuration.
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// What gets printed after a successful import.
#[derive(Debug, Serialize)]
pub struct ImportOutput {
    pub report: ImportReport,
    pub entries: Snapshot,
}

/// Builder for configuring and running an import.
pub struct ImportApp {
    source: PathBuf,
    formation: String,
    scene_frame_start: i32,
    storyboard_entry: Option<StoryboardEntry>,
    import_config: ImportConfig,
    logging: LoggingConfig,
    export_image: Option<PathBuf>,
}

impl ImportApp {
    /// Create an import of `source` into a formation called `formation`.
    pub fn new(source: impl Into<PathBuf>, formation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            formation: formation.into(),
            scene_frame_start: 1,
            storyboard_entry: None,
            import_config: ImportConfig::default(),
            logging: LoggingConfig::default(),
            export_image: None,
        }
    }

    /// Set the scene start frame used when the formation has no storyboard entry.
    pub fn with_scene_frame_start(mut self, frame: i32) -> Self {
        self.scene_frame_start = frame;
        self
    }

    /// Place the formation on the storyboard.
    pub fn with_storyboard_entry(mut self, entry: StoryboardEntry) -> Self {
        self.storyboard_entry = Some(entry);
        self
    }

    pub fn with_import_config(mut self, config: ImportConfig) -> Self {
        self.import_config = config;
        self
    }

    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// Write the light effect image as a PNG after importing.
    pub fn with_export_image(mut self, path: PathBuf) -> Self {
        self.export_image = Some(path);
        self
    }

    /// Run the import against a fresh in-memory scene.
    pub fn run(self) -> Result<ImportOutput, Box<dyn Error>> {
        self.init_logging();

        // Parse the whole file before the scene exists at all.
        let source = ensure_extension(&self.source, &self.import_config.extension);
        let entries = parse_snapshot(&source)?;

        let mut scene = InMemoryScene::new(self.scene_frame_start);
        scene.add_formation(self.formation.as_str());
        if let Some(entry) = self.storyboard_entry {
            scene.storyboard.add_entry(self.formation.as_str(), entry);
        }

        let report = {
            let InMemoryScene {
                formations,
                storyboard,
                light_effects,
            } = &mut scene;
            let formation = formations
                .iter_mut()
                .find(|f| f.name == self.formation)
                .ok_or("formation missing from scene")?;
            apply_snapshot(
                &entries,
                source,
                formation,
                &*storyboard,
                Some(light_effects as &mut dyn LightEffects),
                &self.import_config,
            )?
        };

        if let Some(path) = &self.export_image {
            match scene.light_effects.active_entry() {
                Some(effect) => {
                    effect.image.to_rgb_image().save(path)?;
                    info!("Wrote light effect image to {}", path.display());
                }
                None => return Err("no light effect was created, nothing to export".into()),
            }
        }

        Ok(ImportOutput { report, entries })
    }

    fn init_logging(&self) {
        // A subscriber may already be installed when running more than once per process.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&self.logging.level)),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
