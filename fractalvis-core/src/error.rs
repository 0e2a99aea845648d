use thiserror::Error;

/// Errors originating from the view and uniform model.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid zoom: {0} (must be positive and finite)")]
    InvalidZoom(f64),

    #[error("invalid iteration count: {0} (must be <= {max})", max = crate::view::MAX_ITERATIONS)]
    InvalidIterations(u32),

    #[error("invalid viewport: {reason}")]
    InvalidViewport { reason: String },

    #[error("unknown color preset: {0}")]
    UnknownPreset(String),

    #[error("unknown fractal variant: {0}")]
    UnknownVariant(String),
}
