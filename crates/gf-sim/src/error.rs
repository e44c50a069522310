//! Simulation-subsystem error type.

use gf_core::Cell;
use thiserror::Error;

/// Errors produced by `gf-sim`.
///
/// An unreachable destination is NOT an error — it yields an empty
/// [`Path`][crate::Path] for the affected agent.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("destination {destination} is outside the {width}x{height} grid")]
    DestinationOutOfBounds {
        destination: Cell,
        width:       u32,
        height:      u32,
    },
}

pub type SimResult<T> = Result<T, SimError>;
