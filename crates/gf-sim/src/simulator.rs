//! The `MovementSimulator`: one search per population unit, optionally on
//! Rayon's thread pool.

use gf_core::{AgentId, AgentRng, Cell, Grid};

use crate::aggregate::{TimeSeries, build_time_series};
use crate::search::{DirectionSampler, Path, UniformDirections, search_path};
use crate::{SimError, SimResult};

/// Runs one randomized search per population unit from its origin cell
/// toward the shared destination.
///
/// The grid and destination are read-only across all searches; each search
/// owns its frontier, visited set, and [`AgentRng`], so no synchronisation
/// is needed beyond the final collect.  Paths come back indexed by
/// [`AgentId`], which makes the collection order-independent: the same seed
/// produces the same `Vec<Path>` on any thread count.
pub struct MovementSimulator<S: DirectionSampler = UniformDirections> {
    grid:        Grid,
    destination: Cell,
    sampler:     S,
    seed:        u64,
}

impl MovementSimulator<UniformDirections> {
    /// Create a simulator with the production direction sampler.
    ///
    /// Fails with [`SimError::DestinationOutOfBounds`] before any search
    /// runs if `destination` is not a grid cell.
    pub fn new(grid: Grid, destination: Cell, seed: u64) -> SimResult<Self> {
        Self::with_sampler(grid, destination, UniformDirections, seed)
    }
}

impl<S: DirectionSampler> MovementSimulator<S> {
    /// Create a simulator with a custom [`DirectionSampler`] (deterministic
    /// samplers for tests, biased samplers for experiments).
    pub fn with_sampler(grid: Grid, destination: Cell, sampler: S, seed: u64) -> SimResult<Self> {
        if !grid.contains(destination) {
            return Err(SimError::DestinationOutOfBounds {
                destination,
                width:  grid.width(),
                height: grid.height(),
            });
        }
        Ok(Self { grid, destination, sampler, seed })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn destination(&self) -> Cell {
        self.destination
    }

    /// Total number of population units — one path per unit comes back from
    /// [`run`][Self::run].
    pub fn agent_count(&self) -> u64 {
        self.grid.total_population()
    }

    /// Run every unit's search and collect the paths, indexed by `AgentId`.
    pub fn run(&self) -> Vec<Path> {
        let origins = self.origins();
        let paths = self.search_all(&origins);

        let arrived = paths.iter().filter(|p| !p.is_empty()).count();
        log::debug!(
            "simulated {} paths toward {} ({arrived} reached the destination)",
            paths.len(),
            self.destination,
        );
        paths
    }

    /// Run all searches and aggregate straight into a [`TimeSeries`].
    pub fn run_series(&self) -> TimeSeries {
        let paths = self.run();
        build_time_series(&paths, self.grid.width(), self.grid.height())
    }

    /// One origin cell per population unit, row-major with per-cell ordinals
    /// adjacent.  Index = `AgentId`.
    fn origins(&self) -> Vec<Cell> {
        self.grid
            .populated()
            .flat_map(|(cell, count)| std::iter::repeat(cell).take(count as usize))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn search_all(&self, origins: &[Cell]) -> Vec<Path> {
        origins
            .iter()
            .enumerate()
            .map(|(i, &origin)| {
                let mut rng = AgentRng::new(self.seed, AgentId(i as u32));
                search_path(&self.grid, self.destination, origin, &self.sampler, &mut rng)
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn search_all(&self, origins: &[Cell]) -> Vec<Path> {
        use rayon::prelude::*;

        origins
            .par_iter()
            .enumerate()
            .map(|(i, &origin)| {
                let mut rng = AgentRng::new(self.seed, AgentId(i as u32));
                search_path(&self.grid, self.destination, origin, &self.sampler, &mut rng)
            })
            .collect()
    }
}
