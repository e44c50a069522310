//! Error types for gf-czml.

use thiserror::Error;

/// Errors that can occur while assembling or persisting a CZML document.
#[derive(Debug, Error)]
pub enum CzmlError {
    #[error("time series is {series_w}x{series_h} but mesh is {mesh_w}x{mesh_h}")]
    ShapeMismatch {
        series_w: u32,
        series_h: u32,
        mesh_w:   u32,
        mesh_h:   u32,
    },

    #[error("polygon side must be positive and finite, got {0} m")]
    InvalidSide(f64),

    #[error("core error: {0}")]
    Core(#[from] gf_core::FlowError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for `Result<T, CzmlError>`.
pub type CzmlResult<T> = Result<T, CzmlError>;
