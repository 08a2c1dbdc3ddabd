//! Formation Data Crate
//!
//! Data model and parsing for static formation snapshots: named 3D points with
//! optional RGB colors, read from a comma-delimited text file.
//! This crate knows nothing about the host scene that consumes the result.

pub mod snapshot;
pub mod types;

pub use snapshot::{Snapshot, SnapshotError, parse_snapshot, parse_snapshot_str};
pub use types::{Color, Entry, Position};
