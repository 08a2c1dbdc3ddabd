//! Static snapshot CSV parsing
//!
//! Rows have the shape `name,x,y,z[,r,g,b]`. The first non-blank row is
//! treated as a header when its first field starts with `name`
//! (case-insensitive).

use crate::snapshot::{Snapshot, SnapshotError};
use crate::types::{Color, Entry, Position};
use std::path::Path;
use tracing::{debug, info, warn};

const DELIMITER: char = ',';
const HEADER_PREFIX: &str = "name";

/// Parse a static snapshot file into an ordered name → entry mapping.
///
/// The whole file is read before any row is looked at. Any malformed row or
/// repeated name fails the entire parse.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn parse_snapshot(path: impl AsRef<Path>) -> Result<Snapshot, SnapshotError> {
    let path = path.as_ref();
    debug!("Loading static snapshot from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_snapshot_str(path, &content)
}

/// Parse snapshot rows from text that has already been loaded.
///
/// `source` only appears in error messages.
pub fn parse_snapshot_str(
    source: impl AsRef<Path>,
    content: &str,
) -> Result<Snapshot, SnapshotError> {
    let source = source.as_ref();
    let mut snapshot = Snapshot::new();
    let mut header_checked = false;

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let row: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();

        if !header_checked {
            header_checked = true;
            if is_header(&row) {
                debug!("Skipping header row at line {}", line_number);
                continue;
            }
        }

        let Some((name, entry)) = parse_row(&row) else {
            warn!("Rejecting malformed row at line {}: {:?}", line_number, row);
            return Err(SnapshotError::InvalidRow {
                path: source.to_path_buf(),
                line: line_number,
                row: row.iter().map(|field| field.to_string()).collect(),
            });
        };

        if let Err((name, _)) = snapshot.insert(name.to_string(), entry) {
            warn!("Duplicate object name {:?} at line {}", name, line_number);
            return Err(SnapshotError::DuplicateName {
                path: source.to_path_buf(),
                line: line_number,
                name,
            });
        }
    }

    info!("Static snapshot parsed: {} entries", snapshot.len());
    Ok(snapshot)
}

fn is_header(row: &[&str]) -> bool {
    row.first()
        .is_some_and(|field| field.to_lowercase().starts_with(HEADER_PREFIX))
}

fn parse_row<'a>(row: &[&'a str]) -> Option<(&'a str, Entry)> {
    let name = *row.first()?;
    if name.is_empty() {
        return None;
    }

    let [x, y, z] = parse_fields::<f64>(row.get(1..4)?)?;
    if ![x, y, z].iter().all(|c| c.is_finite()) {
        return None;
    }

    let color = if row.len() > 4 {
        let [r, g, b] = parse_fields::<i32>(row.get(4..7)?)?;
        Color::new(r, g, b)
    } else {
        Color::WHITE
    };

    Some((name, Entry::new(Position::new(x, y, z), color)))
}

fn parse_fields<T: std::str::FromStr>(fields: &[&str]) -> Option<[T; 3]> {
    match fields {
        [a, b, c] => Some([a.parse().ok()?, b.parse().ok()?, c.parse().ok()?]),
        _ => None,
    }
}
