//! `gf-sim` — randomized movement simulation and temporal aggregation.
//!
//! # Pipeline position
//!
//! ```text
//! Grid + destination ──▶ MovementSimulator ──▶ Vec<Path>
//!                                                  │ (hard barrier: all
//!                                                  ▼  paths collected)
//!                                          build_time_series ──▶ TimeSeries
//! ```
//!
//! One randomized frontier search runs per population unit.  Searches read
//! only the immutable [`Grid`][gf_core::Grid] and destination, so they are
//! embarrassingly parallel; the `parallel` Cargo feature runs them on Rayon's
//! thread pool with no change in output.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                            |
//! |------------|---------------------------------------------------|
//! | `parallel` | Runs one search task per agent on Rayon's pool.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gf_core::{Cell, Grid};
//! use gf_sim::MovementSimulator;
//!
//! let grid = Grid::from_rows(&rows)?;
//! let sim = MovementSimulator::new(grid, Cell::new(10, 10), 42)?;
//! let series = sim.run_series();
//! ```

pub mod aggregate;
pub mod error;
pub mod search;
pub mod simulator;

#[cfg(test)]
mod tests;

pub use aggregate::{TimeSeries, build_time_series};
pub use error::{SimError, SimResult};
pub use search::{DIRECTIONS, DirectionSampler, FAN_OUT, Path, UniformDirections, search_path};
pub use simulator::MovementSimulator;
