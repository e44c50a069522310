//! Mesh-subsystem error type.

use thiserror::Error;

/// Errors produced by `gf-mesh`.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("mesh dimensions must be positive, got {width}x{height}")]
    EmptyMesh { width: u32, height: u32 },

    #[error("cell size must be positive and finite, got {x_m} m x {y_m} m")]
    InvalidCellSize { x_m: f64, y_m: f64 },
}

pub type MeshResult<T> = Result<T, MeshError>;
