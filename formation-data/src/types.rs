//! Core data types for imported formation points.
//!
//! Positions are kept in double precision so that coordinates read from text
//! survive unchanged; colors keep the integer channels exactly as written.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Position of a formation point in world space.
pub type Position = DVec3;

/// An integer RGB color.
///
/// Channels are conventionally in `0..=255` but are not range-checked here;
/// consumers clamp when they need to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Color {
    /// Color used for points that carry no color columns.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new color from its channels.
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Channels as an `[r, g, b]` array.
    pub fn channels(&self) -> [i32; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels scaled to the `0-1` range used by image buffers (unclamped).
    pub fn normalized(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// A single imported point: where it goes and what color it shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Position in world space.
    pub position: Position,
    /// RGB color.
    pub color: Color,
}

impl Entry {
    /// Create a new entry with position and color.
    pub fn new(position: Position, color: Color) -> Self {
        Self { position, color }
    }

    /// Create a white entry at the given position.
    pub fn white(position: Position) -> Self {
        Self {
            position,
            color: Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let e = Entry::new(DVec3::new(1.0, 2.0, 3.0), Color::new(255, 0, 0));
        assert_eq!(e.position, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(e.color, Color::new(255, 0, 0));
    }

    #[test]
    fn test_white_entry() {
        let e = Entry::white(DVec3::ZERO);
        assert_eq!(e.color, Color::WHITE);
        assert_eq!(Color::default(), Color::WHITE);
    }

    #[test]
    fn test_color_normalized() {
        let c = Color::new(255, 0, 51);
        assert_eq!(c.normalized(), [1.0, 0.0, 0.2]);
        assert_eq!(c.channels(), [255, 0, 51]);
    }

    #[test]
    fn test_color_normalized_is_unclamped() {
        let c = Color::new(510, -255, 0);
        assert_eq!(c.normalized(), [2.0, -1.0, 0.0]);
    }
}
