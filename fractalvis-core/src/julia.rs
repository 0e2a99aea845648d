use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::complex::Complex;

/// Optional animation that circles the Julia seed around its base point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JuliaOrbit {
    pub enabled: bool,
    radius: f64,
    speed: f64,
}

impl JuliaOrbit {
    pub const RADIUS_RANGE: RangeInclusive<f64> = 0.01..=5.0;
    pub const SPEED_RANGE: RangeInclusive<f64> = 0.1..=10.0;
    pub const DEFAULT_RADIUS: f64 = 0.1;
    pub const DEFAULT_SPEED: f64 = 1.0;

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Set the orbit radius, clamped to [`Self::RADIUS_RANGE`].
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius.clamp(*Self::RADIUS_RANGE.start(), *Self::RADIUS_RANGE.end());
    }

    /// Set the angular speed in radians per second, clamped to [`Self::SPEED_RANGE`].
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.clamp(*Self::SPEED_RANGE.start(), *Self::SPEED_RANGE.end());
    }

    /// Offset from the base seed at wall-clock time `time` (seconds).
    #[inline]
    pub fn offset(&self, time: f64) -> Complex {
        let angle = self.speed * time;
        Complex::new(angle.sin() * self.radius, angle.cos() * self.radius)
    }
}

impl Default for JuliaOrbit {
    fn default() -> Self {
        Self {
            enabled: false,
            radius: Self::DEFAULT_RADIUS,
            speed: Self::DEFAULT_SPEED,
        }
    }
}

/// Julia mode flags plus the last seed sampled from the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JuliaState {
    pub enabled: bool,
    pub paused: bool,
    pub orbit: JuliaOrbit,
    /// Seed sampled from the cursor on the last unpaused frame.
    pub base_seed: Complex,
}

impl JuliaState {
    /// Compute this frame's seed, or `None` when the shader should keep the
    /// one it already has.
    ///
    /// `cursor` is the cursor position already mapped onto the plane. While
    /// unpaused it replaces the base seed; while paused the base is frozen,
    /// but an enabled orbit keeps circling it.
    pub fn frame_seed(&mut self, cursor: Option<Complex>, time: f64) -> Option<Complex> {
        if !self.enabled {
            return None;
        }
        if !self.paused {
            if let Some(c) = cursor {
                self.base_seed = c;
            }
        } else if !self.orbit.enabled {
            return None;
        }
        if self.orbit.enabled {
            Some(self.base_seed + self.orbit.offset(time))
        } else {
            Some(self.base_seed)
        }
    }
}
