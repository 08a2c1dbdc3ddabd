//! Light effect built from imported point colors.

use formation_data::Snapshot;
use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

/// How a light effect maps its image onto points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectOutput {
    /// Image row `i` colors the `i`-th point of the formation.
    IndexedByFormation,
}

/// A `width x height` image of RGB channels in the `0-1` range.
///
/// Imported snapshots produce a single column with one row per point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorImage {
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Flat `r, g, b` triples, one per pixel, row-major.
    pub pixels: Vec<f32>,
}

impl ColorImage {
    /// Build the one-column color image for a formation's light effect.
    pub fn from_snapshot(formation: &str, snapshot: &Snapshot) -> Self {
        let pixels: Vec<f32> = snapshot
            .iter()
            .flat_map(|(_, entry)| entry.color.normalized())
            .collect();

        Self {
            name: format!("Image for light effect '{}'", formation),
            width: 1,
            height: snapshot.len() as u32,
            pixels,
        }
    }

    /// Color of the pixel in row `index`, if present.
    pub fn pixel(&self, index: usize) -> Option<[f32; 3]> {
        let start = index.checked_mul(3)?;
        match self.pixels.get(start..start + 3)? {
            [r, g, b] => Some([*r, *g, *b]),
            _ => None,
        }
    }

    /// Convert to an 8-bit RGB image, clamping channels to `0..=255`.
    pub fn to_rgb_image(&self) -> RgbImage {
        let width = self.width.max(1);
        RgbImage::from_fn(width, self.height, |x, y| {
            let index = (y * width + x) as usize;
            let [r, g, b] = self.pixel(index).unwrap_or([0.0; 3]);
            Rgb([to_u8(r), to_u8(g), to_u8(b)])
        })
    }
}

fn to_u8(channel: f32) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Everything the host needs to create a light effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightEffectRequest {
    pub name: String,
    pub frame_start: i32,
    pub duration: u32,
    pub select: bool,
    pub output: EffectOutput,
    pub image: ColorImage,
}
