//! `ColorMapper`: scalar in a fixed [min, max] range → 0–255 RGB.

use crate::map::Colormap;
use crate::{ColorError, ColorResult};

/// Maps scalar occupancy values onto a [`Colormap`] with fixed bounds.
///
/// Out-of-range values are clamped to the bounds before the colormap lookup,
/// so inputs below `min` and above `max` produce the colormap's endpoint
/// colors rather than undefined output.
pub struct ColorMapper<C: Colormap> {
    map: C,
    min: f64,
    max: f64,
}

impl<C: Colormap> ColorMapper<C> {
    /// Create a mapper over `[min, max]`.
    ///
    /// Fails with [`ColorError::InvalidBounds`] unless both bounds are
    /// finite and `min < max`.
    pub fn new(map: C, min: f64, max: f64) -> ColorResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ColorError::InvalidBounds { min, max });
        }
        Ok(Self { map, min, max })
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// RGB triple for `value`, each channel in 0–255.
    ///
    /// Channels are truncated (not rounded) from the unit range, so a
    /// channel value of 0.5 maps to 127.
    pub fn rgb(&self, value: f64) -> [u8; 3] {
        let normalized = ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0);
        let [r, g, b] = self.map.sample(normalized);
        [to_byte(r), to_byte(g), to_byte(b)]
    }
}

#[inline]
fn to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0) as u8
}
