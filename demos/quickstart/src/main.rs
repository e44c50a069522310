//! quickstart — smallest end-to-end gridflow run.
//!
//! Simulates up to ~800 population units on a 20×20 grid converging on a
//! central destination, then writes the animated occupancy timeline to
//! `result.czml` for a Cesium viewer.  Swap the constants for real census
//! data and a real anchor coordinate to run at city scale.

use std::time::Instant;

use anyhow::Result;
use chrono::{TimeZone, Utc};

use gf_color::{ColorMapper, Jet};
use gf_core::{Cell, GeoPoint, Grid, SimRng};
use gf_czml::{DocumentSink, JsonFileSink, PolygonTimelineBuilder, TimelineConfig};
use gf_mesh::{GeodesicMesh, GreatCircleOffset, MeshSpec};
use gf_sim::{MovementSimulator, build_time_series};

// ── Constants ─────────────────────────────────────────────────────────────────

const GRID_WIDTH:  u32 = 20;
const GRID_HEIGHT: u32 = 20;
const DESTINATION: (u32, u32) = (10, 10);
const SEED:        u64 = 42;

const ORIGIN_LAT: f64 = 35.088699; // north-west anchor of the mesh
const ORIGIN_LON: f64 = 139.067851;
const CELL_M:     f64 = 20.0; // per-cell size, both axes

const FRAME_SECS:  i64 = 1;
const COLOR_MIN:   f64 = 0.0;
const COLOR_MAX:   f64 = 20.0;
const FILL_ALPHA:  u8  = 100;
const OUTPUT_FILE: &str = "result.czml";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== quickstart — gridflow ===");
    println!("Grid: {GRID_WIDTH}x{GRID_HEIGHT}  |  Destination: {DESTINATION:?}  |  Seed: {SEED}");
    println!();

    // 1. Synthesize a population grid: 0–2 units per cell.
    let mut rng = SimRng::new(SEED);
    let cells: Vec<u32> = (0..GRID_WIDTH * GRID_HEIGHT)
        .map(|_| rng.gen_range(0..=2u32))
        .collect();
    let grid = Grid::new(GRID_WIDTH, GRID_HEIGHT, cells)?;
    println!("Population: {} units", grid.total_population());

    // 2. Simulate one randomized search per unit (parallel).
    let destination = Cell::new(DESTINATION.0, DESTINATION.1);
    let sim = MovementSimulator::new(grid.clone(), destination, SEED)?;

    let t0 = Instant::now();
    let paths = sim.run();
    let arrived = paths.iter().filter(|p| !p.is_empty()).count();
    println!(
        "Simulated {} paths in {:.3} s ({arrived} arrived)",
        paths.len(),
        t0.elapsed().as_secs_f64()
    );

    // 3. Aggregate into occupancy frames.
    let series = build_time_series(&paths, grid.width(), grid.height());
    println!("Time series: {} frames", series.len());

    // 4. Anchor the grid on the globe.
    let mesh = GeodesicMesh::build(
        &MeshSpec {
            origin: GeoPoint::new(ORIGIN_LAT, ORIGIN_LON),
            cell_x_m: CELL_M,
            cell_y_m: CELL_M,
            width:  grid.width(),
            height: grid.height(),
        },
        &GreatCircleOffset,
    )?;

    // 5. Assemble and write the CZML timeline.
    let mapper = ColorMapper::new(Jet, COLOR_MIN, COLOR_MAX)?;
    let config = TimelineConfig {
        name: "gridflow occupancy".to_owned(),
        start: Utc.with_ymd_and_hms(2020, 7, 21, 0, 0, 30).unwrap(),
        frame_secs: FRAME_SECS,
        side_m: CELL_M,
        alpha: FILL_ALPHA,
    };
    let builder = PolygonTimelineBuilder::new(&mesh, &mapper, &GreatCircleOffset, config)?;
    let document = builder.build(&series)?;

    JsonFileSink::new(OUTPUT_FILE).write(&document)?;
    println!();
    println!("{OUTPUT_FILE}: {} packets", document.len());

    Ok(())
}
