//! Animation time model.
//!
//! # Design
//!
//! Time is represented as a frame index; the mapping to wall-clock time is
//! held in `FrameClock`:
//!
//!   frame_start(t) = start + t * frame_secs
//!
//! Using the integer frame index as the canonical unit keeps interval
//! arithmetic exact; conversion to ISO-8601 happens only at the output
//! boundary, where CZML wants RFC 3339 strings with an explicit offset
//! (e.g. `2020-01-01T00:00:00+00:00`).

use chrono::{DateTime, Duration, SecondsFormat, Utc};

use crate::{FlowError, FlowResult};

/// Converts between frame indices and UTC wall-clock time.
///
/// `FrameClock` is cheap to copy and intentionally holds no heap data.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameClock {
    /// Wall-clock time of frame 0's leading edge.
    start: DateTime<Utc>,
    /// How many real seconds one frame spans.
    frame_secs: i64,
}

impl FrameClock {
    /// Create a clock starting at `start` with `frame_secs` per frame.
    ///
    /// Fails with [`FlowError::Config`] if `frame_secs` is not positive.
    pub fn new(start: DateTime<Utc>, frame_secs: i64) -> FlowResult<Self> {
        if frame_secs <= 0 {
            return Err(FlowError::Config(format!(
                "frame interval must be positive, got {frame_secs} s"
            )));
        }
        Ok(Self { start, frame_secs })
    }

    #[inline]
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    #[inline]
    pub fn frame_secs(&self) -> i64 {
        self.frame_secs
    }

    /// Wall-clock time at which frame `t` becomes visible.
    #[inline]
    pub fn frame_start(&self, t: u64) -> DateTime<Utc> {
        self.start + Duration::seconds(self.frame_secs * t as i64)
    }

    /// Wall-clock time at which frame `t` stops being visible (exclusive).
    #[inline]
    pub fn frame_end(&self, t: u64) -> DateTime<Utc> {
        self.frame_start(t + 1)
    }

    /// Format a timestamp as RFC 3339 with a `+00:00` offset, whole seconds.
    pub fn iso(ts: DateTime<Utc>) -> String {
        ts.to_rfc3339_opts(SecondsFormat::Secs, false)
    }

    /// The CZML availability string for frame `t`: `"<start>/<end>"`.
    pub fn frame_interval(&self, t: u64) -> String {
        format!(
            "{}/{}",
            Self::iso(self.frame_start(t)),
            Self::iso(self.frame_end(t))
        )
    }

    /// The interval string covering `frames` consecutive frames from frame 0.
    pub fn span_interval(&self, frames: u64) -> String {
        format!(
            "{}/{}",
            Self::iso(self.start),
            Self::iso(self.frame_start(frames))
        )
    }
}
