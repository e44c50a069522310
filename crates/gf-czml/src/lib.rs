//! `gf-czml` — assemble occupancy frames into a time-animated CZML document.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`packet`]  | CZML packet types (`Document`, `Packet`, `Polygon`, …)  |
//! | [`builder`] | `PolygonTimelineBuilder`, `TimelineConfig`              |
//! | [`sink`]    | `DocumentSink` trait, `JsonFileSink`                    |
//! | [`error`]   | `CzmlError`, `CzmlResult<T>`                            |
//!
//! # Usage
//!
//! ```rust,ignore
//! use gf_czml::{DocumentSink, JsonFileSink, PolygonTimelineBuilder, TimelineConfig};
//!
//! let builder = PolygonTimelineBuilder::new(&mesh, &mapper, &GreatCircleOffset, config)?;
//! let document = builder.build(&series)?;
//! JsonFileSink::new("result.czml").write(&document)?;
//! ```
//!
//! The document is fully materialized before any sink is touched, so a sink
//! failure never leaves partial output attributable to the builder.

pub mod builder;
pub mod error;
pub mod packet;
pub mod sink;


pub use builder::{PolygonTimelineBuilder, TimelineConfig};
pub use error::{CzmlError, CzmlResult};
pub use packet::{Clock, ColorRgba, Document, Material, Packet, Polygon, PositionList, SolidColor};
pub use sink::{DocumentSink, JsonFileSink};
