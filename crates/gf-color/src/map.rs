//! Named perceptual colormaps over the unit interval.
//!
//! A colormap takes a normalized value in [0, 1] and returns unit-range RGB.
//! The trait exists so the pipeline can be tested with trivial maps and so
//! applications can plug in their own palettes without touching the mapper.

/// A colormap over the unit interval, unit-range RGB out.
///
/// Implementations may assume `t` is already clamped to [0, 1] — the
/// [`ColorMapper`][crate::ColorMapper] guarantees it.
pub trait Colormap: Send + Sync {
    fn sample(&self, t: f64) -> [f64; 3];
}

// ── Jet ───────────────────────────────────────────────────────────────────────

// Channel control points of matplotlib's "jet": (position, value) pairs,
// linearly interpolated.
const JET_RED: &[(f64, f64)] = &[
    (0.0, 0.0),
    (0.35, 0.0),
    (0.66, 1.0),
    (0.89, 1.0),
    (1.0, 0.5),
];
const JET_GREEN: &[(f64, f64)] = &[
    (0.0, 0.0),
    (0.125, 0.0),
    (0.375, 1.0),
    (0.64, 1.0),
    (0.91, 0.0),
    (1.0, 0.0),
];
const JET_BLUE: &[(f64, f64)] = &[
    (0.0, 0.5),
    (0.11, 1.0),
    (0.34, 1.0),
    (0.65, 0.0),
    (1.0, 0.0),
];

/// The classic "jet" rainbow colormap (dark blue → cyan → yellow → dark red).
pub struct Jet;

impl Colormap for Jet {
    fn sample(&self, t: f64) -> [f64; 3] {
        [
            interpolate(JET_RED, t),
            interpolate(JET_GREEN, t),
            interpolate(JET_BLUE, t),
        ]
    }
}

/// Piecewise-linear interpolation over ascending `(position, value)` stops.
fn interpolate(stops: &[(f64, f64)], t: f64) -> f64 {
    let (first, last) = (stops[0], stops[stops.len() - 1]);
    if t <= first.0 {
        return first.1;
    }
    if t >= last.0 {
        return last.1;
    }
    for pair in stops.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if t <= x1 {
            return y0 + (y1 - y0) * (t - x0) / (x1 - x0);
        }
    }
    last.1
}

// ── Grayscale ─────────────────────────────────────────────────────────────────

/// Identity ramp: equal R, G, and B.  Handy as a deterministic stand-in.
pub struct Grayscale;

impl Colormap for Grayscale {
    fn sample(&self, t: f64) -> [f64; 3] {
        [t, t, t]
    }
}
