//! `gf-mesh` — geodesic offsets and the grid-to-coordinate mesh.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`offset`] | `GeodesicOffset` trait, `GreatCircleOffset`, `FlatOffset` |
//! | [`mesh`]   | `MeshSpec`, `GeodesicMesh`                                |
//! | [`error`]  | `MeshError`, `MeshResult<T>`                              |
//!
//! The destination-point primitive is a trait so the mesh (and downstream
//! polygon assembly) can be tested against a flat-plane stand-in and swapped
//! for an ellipsoidal implementation without touching either.

pub mod error;
pub mod mesh;
pub mod offset;


pub use error::{MeshError, MeshResult};
pub use mesh::{GeodesicMesh, MeshSpec};
pub use offset::{BEARING_EAST, BEARING_NORTH, FlatOffset, GeodesicOffset, GreatCircleOffset};
