//! `PolygonTimelineBuilder`: frames + mesh + colors → CZML document.

use chrono::{DateTime, Utc};

use gf_color::{ColorMapper, Colormap};
use gf_core::{Cell, FrameClock, GeoPoint};
use gf_mesh::offset::{BEARING_EAST, BEARING_NORTH};
use gf_mesh::{GeodesicMesh, GeodesicOffset};
use gf_sim::TimeSeries;

use crate::packet::{Clock, ColorRgba, Document, Material, Packet, Polygon, PositionList, SolidColor};
use crate::{CzmlError, CzmlResult};

/// The CZML clock's step mode: advance with the system clock, scaled by the
/// clock multiplier.
const CLOCK_STEP: &str = "SYSTEM_CLOCK_MULTIPLIER";

// ── TimelineConfig ────────────────────────────────────────────────────────────

/// Animation and geometry parameters for one document.
#[derive(Clone, Debug)]
pub struct TimelineConfig {
    /// Human-readable document name.
    pub name: String,
    /// Wall-clock time of the first frame's leading edge.
    pub start: DateTime<Utc>,
    /// Seconds each frame stays visible.
    pub frame_secs: i64,
    /// Side length of each cell's square footprint, metres.
    pub side_m: f64,
    /// Fill alpha applied to every feature, 0–255.
    pub alpha: u8,
}

// ── PolygonTimelineBuilder ────────────────────────────────────────────────────

/// Builds one time-bounded square feature per (frame, cell) pair and
/// assembles the final document with its global clock.
///
/// Corners are computed independently per cell from its mesh point — not
/// derived from neighboring mesh points — so cells keep a uniform footprint
/// regardless of mesh curvature.
pub struct PolygonTimelineBuilder<'a, C: Colormap, O: GeodesicOffset> {
    mesh:   &'a GeodesicMesh,
    mapper: &'a ColorMapper<C>,
    offset: &'a O,
    clock:  FrameClock,
    config: TimelineConfig,
}

impl<'a, C: Colormap, O: GeodesicOffset> PolygonTimelineBuilder<'a, C, O> {
    /// Create a builder; validates the footprint side and frame interval
    /// before any assembly work.
    pub fn new(
        mesh:   &'a GeodesicMesh,
        mapper: &'a ColorMapper<C>,
        offset: &'a O,
        config: TimelineConfig,
    ) -> CzmlResult<Self> {
        if !(config.side_m > 0.0 && config.side_m.is_finite()) {
            return Err(CzmlError::InvalidSide(config.side_m));
        }
        let clock = FrameClock::new(config.start, config.frame_secs)?;
        Ok(Self { mesh, mapper, offset, clock, config })
    }

    /// Assemble the document for `series`.
    ///
    /// Packet order is frame-major, then row, then column — stable and
    /// reproducible, though not semantically significant to the viewer.
    pub fn build(&self, series: &TimeSeries) -> CzmlResult<Document> {
        if series.width() != self.mesh.width() || series.height() != self.mesh.height() {
            return Err(CzmlError::ShapeMismatch {
                series_w: series.width(),
                series_h: series.height(),
                mesh_w:   self.mesh.width(),
                mesh_h:   self.mesh.height(),
            });
        }

        let frames = series.len() as u64;
        let mut packets = Vec::with_capacity(
            1 + series.len() * self.mesh.width() as usize * self.mesh.height() as usize,
        );

        packets.push(Packet {
            id:           "document".to_owned(),
            name:         self.config.name.clone(),
            version:      Some("1.0".to_owned()),
            clock:        Some(Clock {
                interval:     self.clock.span_interval(frames),
                current_time: FrameClock::iso(self.clock.start()),
                step:         CLOCK_STEP.to_owned(),
            }),
            availability: None,
            polygon:      None,
        });

        for (t, frame) in series.frames().iter().enumerate() {
            let availability = self.clock.frame_interval(t as u64);
            for row in 0..self.mesh.height() {
                for col in 0..self.mesh.width() {
                    let cell = Cell::new(row, col);
                    packets.push(self.feature(
                        t,
                        cell,
                        frame.count(cell),
                        availability.clone(),
                    ));
                }
            }
        }

        log::debug!(
            "assembled {} packets ({} frames over a {}x{} mesh)",
            packets.len(),
            frames,
            self.mesh.width(),
            self.mesh.height(),
        );
        Ok(Document { packets })
    }

    /// One square feature for `(frame t, cell)` with the given occupancy.
    fn feature(&self, t: usize, cell: Cell, occupancy: u32, availability: String) -> Packet {
        let center = self.mesh.point_at(cell);
        let half = self.config.side_m / 2.0;

        // NW, NE, SE, SW winding.
        let corners = [
            self.corner(center, -half, half),
            self.corner(center, half, half),
            self.corner(center, half, -half),
            self.corner(center, -half, -half),
        ];
        let mut cartographic_degrees = Vec::with_capacity(12);
        for c in corners {
            cartographic_degrees.extend([c.lon, c.lat, 0.0]);
        }

        let [r, g, b] = self.mapper.rgb(f64::from(occupancy));

        Packet {
            id:           format!("mesh{t}-{}-{}", cell.row, cell.col),
            name:         format!("{t}-{}-{}", cell.row, cell.col),
            version:      None,
            clock:        None,
            availability: Some(availability),
            polygon:      Some(Polygon {
                positions: PositionList { cartographic_degrees },
                material:  Material {
                    solid_color: SolidColor {
                        color: ColorRgba {
                            rgba: [r, g, b, self.config.alpha],
                        },
                    },
                },
                // Flat ground footprint, not extruded.
                close_top:    true,
                close_bottom: true,
            }),
        }
    }

    /// Offset `center` by signed metres east then north, perpendicular
    /// composition like the mesh itself.
    fn corner(&self, center: GeoPoint, east_m: f64, north_m: f64) -> GeoPoint {
        let east = self.offset.destination(center, BEARING_EAST, east_m);
        self.offset.destination(east, BEARING_NORTH, north_m)
    }
}
