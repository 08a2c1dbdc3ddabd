//! Ordered, uniquely keyed collection of parsed entries.

use crate::types::{Color, Entry, Position};
use indexmap::IndexMap;
use indexmap::map::Entry as MapEntry;
use serde::Serialize;

/// Result of parsing a static snapshot: object names mapped to their entries,
/// in the order the rows appeared in the file.
///
/// The order is observable: the light effect image built from a snapshot
/// assigns one pixel per entry in this order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    entries: IndexMap<String, Entry>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry under `name`.
    ///
    /// Returns the entry back if the name is already taken; the existing
    /// entry is left untouched.
    pub fn insert(&mut self, name: String, entry: Entry) -> Result<(), (String, Entry)> {
        match self.entries.entry(name) {
            MapEntry::Occupied(slot) => Err((slot.key().clone(), entry)),
            MapEntry::Vacant(slot) => {
                slot.insert(entry);
                Ok(())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate over `(name, entry)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn positions(&self) -> Vec<Position> {
        self.entries.values().map(|e| e.position).collect()
    }

    pub fn colors(&self) -> Vec<Color> {
        self.entries.values().map(|e| e.color).collect()
    }

    /// Color channels flattened to `r, g, b, r, g, b, ...` in entry order.
    pub fn color_channels(&self) -> Vec<i32> {
        self.entries
            .values()
            .flat_map(|e| e.color.channels())
            .collect()
    }

    pub fn into_entries(self) -> Vec<(String, Entry)> {
        self.entries.into_iter().collect()
    }
}

// IndexMap equality ignores order; snapshots compare in file order.
impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = (&'a String, &'a Entry);
    type IntoIter = indexmap::map::Iter<'a, String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn entry(x: f64) -> Entry {
        Entry::new(DVec3::new(x, 0.0, 0.0), Color::new(1, 2, 3))
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut snapshot = Snapshot::new();
        snapshot.insert("b".into(), entry(1.0)).unwrap();
        snapshot.insert("a".into(), entry(2.0)).unwrap();
        snapshot.insert("c".into(), entry(3.0)).unwrap();

        let names: Vec<_> = snapshot.names().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
        assert_eq!(
            snapshot.positions(),
            vec![
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(2.0, 0.0, 0.0),
                DVec3::new(3.0, 0.0, 0.0)
            ]
        );
    }

    #[test]
    fn test_insert_rejects_duplicate() {
        let mut snapshot = Snapshot::new();
        snapshot.insert("a".into(), entry(1.0)).unwrap();

        let (name, rejected) = snapshot.insert("a".into(), entry(9.0)).unwrap_err();
        assert_eq!(name, "a");
        assert_eq!(rejected.position.x, 9.0);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.get("a").unwrap().position.x, 1.0);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let mut first = Snapshot::new();
        first.insert("a".into(), entry(1.0)).unwrap();
        first.insert("b".into(), entry(2.0)).unwrap();

        let mut second = Snapshot::new();
        second.insert("b".into(), entry(2.0)).unwrap();
        second.insert("a".into(), entry(1.0)).unwrap();

        assert_ne!(first, second);
        assert_eq!(first, first.clone());
    }

    #[test]
    fn test_color_channels_flattened() {
        let mut snapshot = Snapshot::new();
        snapshot
            .insert("a".into(), Entry::new(DVec3::ZERO, Color::new(10, 20, 30)))
            .unwrap();
        snapshot.insert("b".into(), Entry::white(DVec3::ONE)).unwrap();

        assert_eq!(snapshot.color_channels(), vec![10, 20, 30, 255, 255, 255]);
    }
}
