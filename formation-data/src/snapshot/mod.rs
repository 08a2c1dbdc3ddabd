//! Static snapshot loading and parsing

mod error;
mod map;
mod parser;

pub use error::SnapshotError;
pub use map::Snapshot;
pub use parser::{parse_snapshot, parse_snapshot_str};
