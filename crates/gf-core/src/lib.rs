//! `gf-core` — foundational types for the gridflow pipeline.
//!
//! This crate is a dependency of every other `gf-*` crate.  It intentionally
//! has no `gf-*` dependencies and minimal external ones (only `rand`,
//! `chrono`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`ids`]   | `AgentId`                                         |
//! | [`grid`]  | `Cell`, `Grid`, `Frame`                           |
//! | [`geo`]   | `GeoPoint`, haversine distance                    |
//! | [`time`]  | `FrameClock` (frame index ↔ UTC wall time)        |
//! | [`rng`]   | `AgentRng` (per-agent), `SimRng` (global)         |
//! | [`error`] | `FlowError`, `FlowResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod geo;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FlowError, FlowResult};
pub use geo::GeoPoint;
pub use grid::{Cell, Frame, Grid};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use time::FrameClock;
