use serde::{Deserialize, Serialize};

use crate::complex::Complex;
use crate::error::CoreError;

/// Upper bound of the iteration slider.
pub const MAX_ITERATIONS: u32 = 10_000;

/// Fraction of the zoom applied to the center per frame of a held arrow key.
pub const PAN_STEP: f64 = 0.01;
/// Fractional zoom change per frame of a held `+`/`-` key.
pub const ZOOM_STEP: f64 = 0.01;
/// Fractional zoom change per scroll-wheel line.
pub const SCROLL_ZOOM_STEP: f64 = 0.1;

/// Direction of a held pan key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Navigation state: where the camera sits and how far it is zoomed out.
///
/// `zoom` is the height of the visible plane region, so smaller values are
/// deeper zooms. It is always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewState {
    center: Complex,
    zoom: f64,
    iterations: u32,
}

/// Validates on load so a hand-edited snapshot cannot smuggle in a bad zoom.
impl<'de> Deserialize<'de> for ViewState {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            center: Complex,
            zoom: f64,
            iterations: u32,
        }
        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.center, raw.zoom, raw.iterations).map_err(serde::de::Error::custom)
    }
}

impl ViewState {
    pub const DEFAULT_ZOOM: f64 = 2.0;
    pub const DEFAULT_ITERATIONS: u32 = 200;

    pub fn new(center: Complex, zoom: f64, iterations: u32) -> crate::Result<Self> {
        if zoom <= 0.0 || !zoom.is_finite() {
            return Err(CoreError::InvalidZoom(zoom));
        }
        if iterations > MAX_ITERATIONS {
            return Err(CoreError::InvalidIterations(iterations));
        }
        Ok(Self {
            center,
            zoom,
            iterations,
        })
    }

    #[inline]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[inline]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn set_iterations(&mut self, iterations: u32) -> crate::Result<()> {
        if iterations > MAX_ITERATIONS {
            return Err(CoreError::InvalidIterations(iterations));
        }
        self.iterations = iterations;
        Ok(())
    }

    /// One frame of a held arrow key.
    pub fn pan(&mut self, direction: PanDirection) {
        let step = PAN_STEP * self.zoom;
        match direction {
            PanDirection::Left => self.center.re -= step,
            PanDirection::Right => self.center.re += step,
            PanDirection::Up => self.center.im += step,
            PanDirection::Down => self.center.im -= step,
        }
    }

    /// One frame of a held `+` key.
    pub fn zoom_in(&mut self) {
        self.zoom -= self.zoom * ZOOM_STEP;
    }

    /// One frame of a held `-` key.
    pub fn zoom_out(&mut self) {
        self.zoom += self.zoom * ZOOM_STEP;
    }

    /// Apply a scroll-wheel event of `lines` notches (positive zooms in).
    ///
    /// Returns `false` and leaves the zoom untouched when the step would make
    /// it non-positive, which happens for bursts of ten or more lines.
    pub fn scroll(&mut self, lines: f64) -> bool {
        let next = self.zoom - self.zoom * SCROLL_ZOOM_STEP * lines;
        if next > 0.0 && next.is_finite() {
            self.zoom = next;
            true
        } else {
            false
        }
    }

    /// Back to the origin at the default zoom. Iterations are kept.
    pub fn reset(&mut self) {
        self.center = Complex::ZERO;
        self.zoom = Self::DEFAULT_ZOOM;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            center: Complex::ZERO,
            zoom: Self::DEFAULT_ZOOM,
            iterations: Self::DEFAULT_ITERATIONS,
        }
    }
}
