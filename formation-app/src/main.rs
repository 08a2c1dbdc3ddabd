//! Formation Import Tool
//!
//! Imports a static formation snapshot (a `name,x,y,z[,r,g,b]` CSV file) into a
//! formation and prints what was created as JSON.

mod app;

use app::{ImportApp, LoggingConfig};
use clap::Parser;
use formation_import::{ImportConfig, StoryboardEntry};
use std::path::PathBuf;

/// Import a static CSV snapshot into a formation
#[derive(Parser, Debug)]
#[command(name = "formation")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the static CSV file (".csv" is appended when missing)
    file: PathBuf,

    /// Name of the formation to import into
    #[arg(short, long, default_value = "Formation")]
    formation: String,

    /// Storyboard start frame of the formation
    #[arg(long)]
    frame_start: Option<i32>,

    /// Storyboard duration of the formation, in frames
    #[arg(long)]
    duration: Option<u32>,

    /// Scene start frame, used when the formation is not on the storyboard
    #[arg(long, default_value_t = 1)]
    scene_frame_start: i32,

    /// Do not create a light effect from the imported colors
    #[arg(long)]
    no_light_effect: bool,

    /// Write the light effect color image to this PNG file
    #[arg(long)]
    export_image: Option<PathBuf>,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let config = ImportConfig {
        create_light_effect: !args.no_light_effect,
        ..Default::default()
    };

    let mut app = ImportApp::new(args.file, args.formation)
        .with_scene_frame_start(args.scene_frame_start)
        .with_import_config(config)
        .with_logging(LoggingConfig {
            level: args.log_level,
        });

    if args.frame_start.is_some() || args.duration.is_some() {
        app = app.with_storyboard_entry(StoryboardEntry::new(
            args.frame_start.unwrap_or(args.scene_frame_start),
            args.duration.unwrap_or(1),
        ));
    }
    if let Some(path) = args.export_image {
        app = app.with_export_image(path);
    }

    let output = app.run().and_then(|output| Ok(serde_json::to_string_pretty(&output)?));
    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
