//! Temporal aggregation: merge independent paths into occupancy frames.

use gf_core::Frame;

use crate::search::Path;

/// The ordered sequence of occupancy frames for one run.
///
/// Frame count equals the longest path length; dimensions match the source
/// grid for every frame.  Agents whose path is shorter than `t` (already
/// arrived, or never started) contribute nothing to frame `t` — arrivals
/// vanish rather than accumulating at the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSeries {
    width:  u32,
    height: u32,
    frames: Vec<Frame>,
}

impl TimeSeries {
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of frames (the animation horizon).
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    pub fn frame(&self, t: usize) -> Option<&Frame> {
        self.frames.get(t)
    }
}

/// Build the [`TimeSeries`] for a collection of paths over a
/// `width × height` grid.
///
/// The horizon is the maximum path length (0 when there are no paths or all
/// paths are empty, yielding an empty series).  For each timestep `t`, every
/// path longer than `t` adds one occupant at its `t`-th cell.
pub fn build_time_series(paths: &[Path], width: u32, height: u32) -> TimeSeries {
    let horizon = paths.iter().map(Path::len).max().unwrap_or(0);

    let mut frames = Vec::with_capacity(horizon);
    for t in 0..horizon {
        let mut frame = Frame::zeroed(width, height);
        for path in paths {
            if let Some(cell) = path.at(t) {
                frame.increment(cell);
            }
        }
        frames.push(frame);
    }

    TimeSeries { width, height, frames }
}
