//! Color-subsystem error type.

use thiserror::Error;

/// Errors produced by `gf-color`.
#[derive(Debug, Error)]
pub enum ColorError {
    #[error("color bounds must be finite with min < max, got [{min}, {max}]")]
    InvalidBounds { min: f64, max: f64 },
}

pub type ColorResult<T> = Result<T, ColorError>;
