//! Fixed-dimension occupancy containers: `Cell`, `Grid`, and `Frame`.
//!
//! Dimensions are validated once at construction and never change.  `Grid`
//! holds the immutable input population; `Frame` holds the per-timestep
//! occupancy counts produced by aggregation.  Both are row-major `Vec<u32>`
//! indexed as `row * width + col`.

use crate::{FlowError, FlowResult};

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A grid coordinate: `(row, col)` with row 0 at the mesh origin.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    #[inline]
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// The immutable input population grid.
///
/// Each cell value is the number of population units originating there.
/// Shared read-only across all concurrent searches; nothing mutates it after
/// construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width:  u32,
    height: u32,
    cells:  Vec<u32>,
}

impl Grid {
    /// Build a grid from row-major cell counts.
    ///
    /// Fails with [`FlowError::Config`] if either dimension is zero or the
    /// buffer length disagrees with `width * height`.
    pub fn new(width: u32, height: u32, cells: Vec<u32>) -> FlowResult<Self> {
        if width == 0 || height == 0 {
            return Err(FlowError::Config(format!(
                "grid dimensions must be positive, got {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(FlowError::Config(format!(
                "grid buffer has {} cells, expected {expected}",
                cells.len()
            )));
        }
        Ok(Self { width, height, cells })
    }

    /// Build a grid from nested rows (outer = rows, inner = columns).
    ///
    /// All rows must have the same length.
    pub fn from_rows(rows: &[Vec<u32>]) -> FlowResult<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        for (i, row) in rows.iter().enumerate() {
            if row.len() as u32 != width {
                return Err(FlowError::Config(format!(
                    "row {i} has {} columns, expected {width}",
                    row.len()
                )));
            }
        }
        Self::new(width, height, rows.concat())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `true` if `cell` lies within the grid bounds.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Population count at `cell`.
    ///
    /// # Panics
    /// Panics if `cell` is out of bounds.
    #[inline]
    pub fn count(&self, cell: Cell) -> u32 {
        self.cells[self.idx(cell)]
    }

    /// Sum of all cell counts — the total number of population units.
    pub fn total_population(&self) -> u64 {
        self.cells.iter().map(|&c| u64::from(c)).sum()
    }

    /// The in-bounds cell at `(row + d_row, col + d_col)`, or `None` if the
    /// offset leaves the grid.
    #[inline]
    pub fn neighbor(&self, cell: Cell, d_row: i32, d_col: i32) -> Option<Cell> {
        let row = cell.row as i64 + i64::from(d_row);
        let col = cell.col as i64 + i64::from(d_col);
        if row < 0 || col < 0 || row >= i64::from(self.height) || col >= i64::from(self.width) {
            return None;
        }
        Some(Cell::new(row as u32, col as u32))
    }

    /// Iterate over `(cell, count)` for every cell with a non-zero count,
    /// row-major.
    pub fn populated(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, &count)| {
            (count > 0).then(|| {
                let row = i as u32 / self.width;
                let col = i as u32 % self.width;
                (Cell::new(row, col), count)
            })
        })
    }

    #[inline]
    fn idx(&self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell), "cell {cell} out of bounds");
        cell.row as usize * self.width as usize + cell.col as usize
    }
}

// ── Frame ─────────────────────────────────────────────────────────────────────

/// Occupancy counts for one timestep, with the source grid's dimensions.
///
/// Built by the temporal aggregator; read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    width:  u32,
    height: u32,
    counts: Vec<u32>,
}

impl Frame {
    /// An all-zero frame of the given dimensions.
    pub fn zeroed(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            counts: vec![0; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Occupancy count at `cell`.
    ///
    /// # Panics
    /// Panics if `cell` is out of bounds.
    #[inline]
    pub fn count(&self, cell: Cell) -> u32 {
        self.counts[self.idx(cell)]
    }

    /// Add one occupant at `cell`.
    #[inline]
    pub fn increment(&mut self, cell: Cell) {
        let i = self.idx(cell);
        self.counts[i] += 1;
    }

    /// Sum of all cell counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    #[inline]
    fn idx(&self, cell: Cell) -> usize {
        debug_assert!(
            cell.row < self.height && cell.col < self.width,
            "cell {cell} out of bounds"
        );
        cell.row as usize * self.width as usize + cell.col as usize
    }
}
