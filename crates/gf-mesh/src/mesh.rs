//! The precomputed lattice of real-world coordinates, one per grid cell.

use gf_core::{Cell, GeoPoint};

use crate::offset::{BEARING_EAST, BEARING_NORTH, GeodesicOffset};
use crate::{MeshError, MeshResult};

/// Geometry of a mesh: anchor coordinate, per-cell size, and dimensions.
#[derive(Copy, Clone, Debug)]
pub struct MeshSpec {
    /// Coordinate of cell (0, 0) — the north-west anchor of the mesh.
    pub origin: GeoPoint,
    /// Cell size along the east axis, metres.
    pub cell_x_m: f64,
    /// Cell size along the north axis, metres.
    pub cell_y_m: f64,
    /// Columns.
    pub width: u32,
    /// Rows.
    pub height: u32,
}

/// A cached `width × height` lattice of coordinates, row-major.
///
/// Computed once at construction; immutable afterwards.  `point(0, 0)` is
/// exactly the spec's origin (both offsets are 0 m), and points are
/// monotonic in each geographic direction as indices increase.
pub struct GeodesicMesh {
    width:  u32,
    height: u32,
    points: Vec<GeoPoint>,
}

impl GeodesicMesh {
    /// Precompute the lattice for `spec` using `offset`.
    ///
    /// Cell `(h, w)` is the origin moved `h × cell_y_m` metres along the
    /// north bearing, then `w × cell_x_m` metres east from that intermediate
    /// point — a perpendicular composition, not a straight-line diagonal.
    pub fn build<O: GeodesicOffset>(spec: &MeshSpec, offset: &O) -> MeshResult<Self> {
        if spec.width == 0 || spec.height == 0 {
            return Err(MeshError::EmptyMesh {
                width:  spec.width,
                height: spec.height,
            });
        }
        if !(spec.cell_x_m > 0.0 && spec.cell_x_m.is_finite())
            || !(spec.cell_y_m > 0.0 && spec.cell_y_m.is_finite())
        {
            return Err(MeshError::InvalidCellSize {
                x_m: spec.cell_x_m,
                y_m: spec.cell_y_m,
            });
        }

        let mut points = Vec::with_capacity(spec.width as usize * spec.height as usize);
        for h in 0..spec.height {
            let row_anchor = offset.destination(
                spec.origin,
                BEARING_NORTH,
                spec.cell_y_m * f64::from(h),
            );
            for w in 0..spec.width {
                points.push(offset.destination(
                    row_anchor,
                    BEARING_EAST,
                    spec.cell_x_m * f64::from(w),
                ));
            }
        }

        Ok(Self {
            width: spec.width,
            height: spec.height,
            points,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Coordinate of the mesh cell at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the indices are out of bounds.
    #[inline]
    pub fn point(&self, row: u32, col: u32) -> GeoPoint {
        debug_assert!(row < self.height && col < self.width);
        self.points[row as usize * self.width as usize + col as usize]
    }

    /// Coordinate associated with a grid cell.
    #[inline]
    pub fn point_at(&self, cell: Cell) -> GeoPoint {
        self.point(cell.row, cell.col)
    }
}
