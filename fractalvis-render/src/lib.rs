pub mod capture;
pub mod error;
pub mod export;
pub mod program;
pub mod renderer;
pub mod shader_source;

pub use capture::CapturedFrame;
pub use error::RenderError;
pub use export::{export_png, screenshot_file_name, ExportMetadata};
pub use program::{BoundProgram, FractalProgram};
pub use renderer::{FractalRenderer, PixelRect};
pub use shader_source::{load_source, ShaderSources};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
