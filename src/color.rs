//! Colors and the painting palette

use serde::{Deserialize, Serialize};

/// An opaque RGBA color. Writing a color replaces the destination pixel outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build from unit-range channels, as paint programs usually specify them
    pub fn from_unit(r: f32, g: f32, b: f32) -> Self {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgb(channel(r), channel(g), channel(b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

// ============================================================================
// Palette
// ============================================================================

pub const HUE_COUNT: usize = 7;
pub const VALUE_COUNT: usize = 3;

/// Hue rows, each holding a dark / mid / light swatch.
/// Green, blue and purple still carry the grayscale placeholder swatches.
const SWATCHES: [[(f32, f32, f32); VALUE_COUNT]; HUE_COUNT] = [
    [(0.15, 0.15, 0.15), (0.5, 0.5, 0.5), (1.0, 1.0, 1.0)],
    [(0.5, 0.1, 0.1), (1.0, 0.1, 0.1), (1.0, 0.65, 0.65)],
    [(0.5, 0.28, 0.1), (1.0, 0.5, 0.1), (1.0, 0.8, 0.5)],
    [(1.0, 0.5, 0.1), (1.0, 0.9, 0.1), (1.0, 0.95, 0.5)],
    [(0.1, 0.1, 0.1), (0.5, 0.5, 0.5), (1.0, 1.0, 1.0)],
    [(0.1, 0.1, 0.1), (0.5, 0.5, 0.5), (1.0, 1.0, 1.0)],
    [(0.1, 0.1, 0.1), (0.5, 0.5, 0.5), (1.0, 1.0, 1.0)],
];

/// Look up a swatch. Out-of-range indices are clamped to the grid.
pub fn swatch(hue: usize, value: usize) -> Color {
    let (r, g, b) = SWATCHES[hue.min(HUE_COUNT - 1)][value.min(VALUE_COUNT - 1)];
    Color::from_unit(r, g, b)
}

/// Position in the palette grid.
/// Hue steps wrap around the ends; value steps stop at the ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteCursor {
    pub hue: usize,
    pub value: usize,
}

impl PaletteCursor {
    pub fn new() -> Self {
        Self { hue: 0, value: 1 }
    }

    pub fn shift(&mut self, hue_delta: i32, value_delta: i32) {
        let hue = self.hue as i32 + hue_delta;
        self.hue = if hue < 0 {
            HUE_COUNT - 1
        } else if hue >= HUE_COUNT as i32 {
            0
        } else {
            hue as usize
        };

        let value = self.value as i32 + value_delta;
        self.value = value.clamp(0, VALUE_COUNT as i32 - 1) as usize;
    }

    pub fn color(&self) -> Color {
        swatch(self.hue, self.value)
    }
}

impl Default for PaletteCursor {
    fn default() -> Self {
        Self::new()
    }
}
