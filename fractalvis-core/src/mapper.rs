use crate::complex::Complex;
use crate::error::CoreError;
use crate::view::ViewState;

/// Linearly interpolate a pixel coordinate into a plane coordinate.
///
/// `pixel = 0` maps to `min` and `pixel = length` maps to `max`. There is no
/// rounding or clamping: coordinates outside `[0, length)` extrapolate along
/// the same line.
#[inline]
pub fn map_axis(pixel: f64, length: f64, min: f64, max: f64) -> f64 {
    pixel * ((max - min) / length) + min
}

/// The visible region of the plane, derived from a [`ViewState`] and the
/// viewport size each frame.
///
/// The real axis spans `zoom * width / height` units, the imaginary axis
/// spans `zoom` units. The imaginary bounds are mirrored around
/// `-center.im`; shaders and the Julia seed picker both rely on this
/// orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneWindow {
    pub min_re: f64,
    pub max_re: f64,
    pub min_im: f64,
    pub max_im: f64,
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
}

impl PlaneWindow {
    /// Compute the window for `view` on a `width`×`height` pixel viewport.
    pub fn new(view: &ViewState, width: u32, height: u32) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidViewport {
                reason: format!("dimensions must be > 0, got {width}×{height}"),
            });
        }
        let aspect = width as f64 / height as f64;
        let zoom = view.zoom();
        let center = view.center();
        Ok(Self {
            min_re: -0.5 * aspect * zoom + center.re,
            max_re: 0.5 * aspect * zoom + center.re,
            min_im: -0.5 * zoom - center.im,
            max_im: 0.5 * zoom - center.im,
            width,
            height,
        })
    }

    /// Map a pixel position (origin top-left) to a plane point.
    #[inline]
    pub fn pixel_to_plane(&self, px: f64, py: f64) -> Complex {
        Complex::new(
            map_axis(px, self.width as f64, self.min_re, self.max_re),
            map_axis(py, self.height as f64, self.min_im, self.max_im),
        )
    }
}
