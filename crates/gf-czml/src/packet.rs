//! Plain data types mirroring the CZML packet structure.
//!
//! Field names serialize to the camelCase keys a CZML consumer expects
//! (`currentTime`, `cartographicDegrees`, `closeTop`, …).  Optional packet
//! members are skipped when absent so the header packet carries only
//! `version`/`clock` and feature packets only `availability`/`polygon`.

use serde::{Deserialize, Serialize};

/// The complete CZML document: one header packet followed by one packet per
/// (frame, cell) in frame-major, then row, then column order.
///
/// Serializes as the bare packet array CZML consumers expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub packets: Vec<Packet>,
}

impl Document {
    /// The document header packet, if present.
    pub fn header(&self) -> Option<&Packet> {
        self.packets.first()
    }

    /// All feature packets (everything after the header).
    pub fn features(&self) -> &[Packet] {
        self.packets.get(1..).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.packets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }
}

/// One CZML packet — either the document header or a polygon feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Packet {
    pub id:   String,
    pub name: String,

    /// CZML schema version — header packet only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Animation clock — header packet only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock: Option<Clock>,

    /// Half-open validity interval `"<start>/<end>"` — feature packets only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,

    /// Polygon payload — feature packets only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polygon: Option<Polygon>,
}

/// The header packet's animation clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clock {
    /// ISO-8601 interval `"<start>/<end>"` covering all frames.
    pub interval: String,
    /// ISO-8601 timestamp where playback starts.
    pub current_time: String,
    /// Clock step mode marker.
    pub step: String,
}

/// A flat ground-footprint polygon with a solid fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polygon {
    pub positions: PositionList,
    pub material:  Material,
    pub close_top: bool,
    pub close_bottom: bool,
}

/// Boundary vertices as a flat `[lon, lat, height]` triple list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionList {
    pub cartographic_degrees: Vec<f64>,
}

/// Polygon fill material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub solid_color: SolidColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidColor {
    pub color: ColorRgba,
}

/// RGBA fill color, 0–255 per channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRgba {
    pub rgba: [u8; 4],
}
