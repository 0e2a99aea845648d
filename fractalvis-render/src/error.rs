use thiserror::Error;

/// Errors originating from shader setup, drawing, or screenshot export.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("shader asset {name} has no `#shader {stage}` section")]
    MissingStage { name: String, stage: &'static str },

    #[error("failed to read shader asset {path}: {source}")]
    ShaderAsset {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create GL {what}: {message}")]
    GlCreate { what: &'static str, message: String },

    #[error("{stage} shader for {name} failed to compile:\n{log}")]
    Compile {
        name: String,
        stage: &'static str,
        log: String,
    },

    #[error("shader program for {name} failed to link:\n{log}")]
    Link { name: String, log: String },

    #[error("invalid image dimensions: {width}×{height} ({len} bytes)")]
    InvalidDimensions { width: u32, height: u32, len: usize },

    #[error("screenshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),

    #[error(transparent)]
    Core(#[from] fractalvis_core::CoreError),
}
