pub mod complex;
pub mod controller;
pub mod error;
pub mod julia;
pub mod mapper;
pub mod palette;
pub mod uniforms;
pub mod variant;
pub mod view;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use controller::ViewportController;
pub use error::CoreError;
pub use julia::{JuliaOrbit, JuliaState};
pub use mapper::{map_axis, PlaneWindow};
pub use palette::{color_presets, find_preset, ColorPreset, Palette, Rgb, PALETTE_SLOTS};
pub use uniforms::{Uniform, UniformSink, UniformUpdate, UniformValue};
pub use variant::FractalVariant;
pub use view::{PanDirection, ViewState, MAX_ITERATIONS};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
