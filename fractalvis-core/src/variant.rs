use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The fractal families the application can draw. Each one is backed by its
/// own shader program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractalVariant {
    #[default]
    Mandelbrot,
    BurningShip,
    Tricorn,
    Mandelbulb,
}

impl FractalVariant {
    pub const ALL: [FractalVariant; 4] = [
        Self::Mandelbrot,
        Self::BurningShip,
        Self::Tricorn,
        Self::Mandelbulb,
    ];

    /// Human-readable name for menus.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::BurningShip => "Burning Ship",
            Self::Tricorn => "Tricorn",
            Self::Mandelbulb => "Mandelbulb",
        }
    }

    /// Lower-case identifier used for shader asset and screenshot file names.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::BurningShip => "burningship",
            Self::Tricorn => "tricorn",
            Self::Mandelbulb => "mandelbulb",
        }
    }
}

impl fmt::Display for FractalVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FractalVariant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.slug().eq_ignore_ascii_case(s) || v.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownVariant(s.to_string()))
    }
}
