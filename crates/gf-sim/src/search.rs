//! Randomized frontier search for a single population unit.
//!
//! # Why randomized
//!
//! A deterministic shortest-path search would make every unit from the same
//! origin follow an identical route, producing visually uniform motion.
//! Sampling a random subset of directions at every expansion yields varied,
//! organic-looking aggregate flow while the visited set still bounds the
//! search to the finite cell count, so termination is guaranteed.
//!
//! # Pluggability
//!
//! Direction selection goes through the [`DirectionSampler`] trait so tests
//! can supply a deterministic sampler and assert exact paths.  Samplers are
//! stateless and `Send + Sync`; all randomness flows through the per-agent
//! [`AgentRng`] passed in at each call.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use gf_core::{AgentRng, Cell, Grid};

/// The 9 candidate offsets: 8 compass neighbors plus the zero offset "stay".
pub const DIRECTIONS: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// How many of the 9 candidate offsets are expanded per popped cell.
pub const FAN_OUT: usize = 4;

// ── Path ──────────────────────────────────────────────────────────────────────

/// The route one population unit takes, origin first.
///
/// If the destination was reached, the last cell is the destination.  A unit
/// whose search exhausted the frontier without reaching the destination gets
/// an **empty** path — a valid result, not an error — and contributes nothing
/// to any frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    pub cells: Vec<Cell>,
}

impl Path {
    /// A path for a unit that never arrives.
    pub fn empty() -> Self {
        Self { cells: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell occupied at timestep `t`, or `None` once the path is spent.
    #[inline]
    pub fn at(&self, t: usize) -> Option<Cell> {
        self.cells.get(t).copied()
    }

    #[inline]
    pub fn origin(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    #[inline]
    pub fn terminus(&self) -> Option<Cell> {
        self.cells.last().copied()
    }
}

// ── DirectionSampler ──────────────────────────────────────────────────────────

/// Chooses which directions to expand from a popped frontier cell.
///
/// Implementations must be `Send + Sync` so one sampler instance can be
/// shared across Rayon workers; per-agent randomness comes from the `rng`
/// argument, never from sampler state.
pub trait DirectionSampler: Send + Sync {
    /// Fill `out` with [`FAN_OUT`] offsets drawn from [`DIRECTIONS`].
    ///
    /// The production sampler draws without replacement; deterministic test
    /// samplers may return any fixed selection.
    fn draw(&self, rng: &mut AgentRng, out: &mut [(i32, i32); FAN_OUT]);
}

/// Uniform sample of [`FAN_OUT`] of the 9 offsets, without replacement.
pub struct UniformDirections;

impl DirectionSampler for UniformDirections {
    fn draw(&self, rng: &mut AgentRng, out: &mut [(i32, i32); FAN_OUT]) {
        let mut dirs = DIRECTIONS;
        rng.shuffle(&mut dirs);
        out.copy_from_slice(&dirs[..FAN_OUT]);
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

/// Run one unit's randomized frontier search from `origin` toward
/// `destination`.
///
/// Each cell is enqueued at most once (the visited set is checked on
/// insertion), so parent pointers reconstruct exactly the path the cell was
/// first reached by, in O(cells) memory.  Returns [`Path::empty`] if the
/// frontier empties before the destination is popped.
pub fn search_path<S: DirectionSampler>(
    grid:        &Grid,
    destination: Cell,
    origin:      Cell,
    sampler:     &S,
    rng:         &mut AgentRng,
) -> Path {
    let mut frontier = VecDeque::new();
    let mut visited = FxHashSet::default();
    let mut parents: FxHashMap<Cell, Cell> = FxHashMap::default();

    frontier.push_back(origin);
    visited.insert(origin);

    let mut dirs = [(0i32, 0i32); FAN_OUT];
    while let Some(cell) = frontier.pop_front() {
        if cell == destination {
            return reconstruct(origin, destination, &parents);
        }

        sampler.draw(rng, &mut dirs);
        for &(d_row, d_col) in &dirs {
            let Some(next) = grid.neighbor(cell, d_row, d_col) else {
                continue;
            };
            if visited.insert(next) {
                parents.insert(next, cell);
                frontier.push_back(next);
            }
        }
    }

    Path::empty()
}

/// Walk parent pointers from `destination` back to `origin`.
fn reconstruct(origin: Cell, destination: Cell, parents: &FxHashMap<Cell, Cell>) -> Path {
    let mut cells = vec![destination];
    let mut cursor = destination;
    while cursor != origin {
        // Every enqueued non-origin cell has a parent, and the chain ends at
        // the origin because parents mirror first-reach order.
        cursor = parents[&cursor];
        cells.push(cursor);
    }
    cells.reverse();
    Path { cells }
}
