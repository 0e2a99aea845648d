use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Linear RGB triple with components in `[0, 1]`, uploaded as a `vec3`.
pub type Rgb = [f32; 3];

/// Number of gradient stops the shaders blend between.
pub const PALETTE_SLOTS: usize = 4;

/// A named, fixed set of four gradient stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPreset {
    pub name: &'static str,
    pub colors: [Rgb; PALETTE_SLOTS],
}

static PRESETS: [ColorPreset; 6] = [
    ColorPreset {
        name: "Classic",
        colors: [
            [0.0, 0.03, 0.39],
            [0.13, 0.42, 0.8],
            [0.93, 1.0, 1.0],
            [1.0, 0.67, 0.0],
        ],
    },
    ColorPreset {
        name: "Fire",
        colors: [
            [0.05, 0.0, 0.0],
            [0.6, 0.05, 0.0],
            [1.0, 0.45, 0.0],
            [1.0, 0.95, 0.6],
        ],
    },
    ColorPreset {
        name: "Ocean",
        colors: [
            [0.0, 0.05, 0.1],
            [0.0, 0.3, 0.45],
            [0.2, 0.75, 0.8],
            [0.85, 1.0, 0.95],
        ],
    },
    ColorPreset {
        name: "Forest",
        colors: [
            [0.02, 0.06, 0.02],
            [0.1, 0.35, 0.1],
            [0.55, 0.7, 0.25],
            [0.95, 0.9, 0.6],
        ],
    },
    ColorPreset {
        name: "Neon",
        colors: [
            [0.1, 0.0, 0.2],
            [0.9, 0.0, 0.6],
            [0.0, 0.9, 1.0],
            [1.0, 1.0, 0.3],
        ],
    },
    ColorPreset {
        name: "Grayscale",
        colors: [
            [0.0, 0.0, 0.0],
            [0.33, 0.33, 0.33],
            [0.66, 0.66, 0.66],
            [1.0, 1.0, 1.0],
        ],
    },
];

/// The built-in preset table, in menu order.
pub fn color_presets() -> &'static [ColorPreset] {
    &PRESETS
}

/// Look up a preset by case-insensitive name.
pub fn find_preset(name: &str) -> crate::Result<(usize, &'static ColorPreset)> {
    PRESETS
        .iter()
        .enumerate()
        .find(|(_, p)| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| CoreError::UnknownPreset(name.to_string()))
}

/// The four gradient stops currently fed to the shader.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Palette {
    colors: [Rgb; PALETTE_SLOTS],
}

/// Loaded colors go through the same clamping as edits.
impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            colors: [Rgb; PALETTE_SLOTS],
        }
        let raw = Raw::deserialize(deserializer)?;
        Ok(Self::new(raw.colors))
    }
}

impl Palette {
    pub fn new(colors: [Rgb; PALETTE_SLOTS]) -> Self {
        Self {
            colors: colors.map(clamp_rgb),
        }
    }

    pub fn colors(&self) -> &[Rgb; PALETTE_SLOTS] {
        &self.colors
    }

    /// Color at `slot`; panics if `slot >= PALETTE_SLOTS`.
    pub fn get(&self, slot: usize) -> Rgb {
        self.colors[slot]
    }

    /// Overwrite one stop, clamping each component to `[0, 1]`.
    pub fn set(&mut self, slot: usize, rgb: Rgb) {
        self.colors[slot] = clamp_rgb(rgb);
    }

    /// Overwrite all four stops at once.
    pub fn apply_preset(&mut self, preset: &ColorPreset) {
        self.colors = preset.colors;
    }
}

fn clamp_rgb(rgb: Rgb) -> Rgb {
    rgb.map(|c| if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) })
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: PRESETS[0].colors,
        }
    }
}
