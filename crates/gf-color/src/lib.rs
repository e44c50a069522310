//! `gf-color` — scalar-to-RGB mapping over a fixed value range.
//!
//! | Module     | Contents                                  |
//! |------------|-------------------------------------------|
//! | [`map`]    | `Colormap` trait, `Jet`, `Grayscale`      |
//! | [`mapper`] | `ColorMapper` (bounds + clamp + 0–255)    |
//! | [`error`]  | `ColorError`, `ColorResult<T>`            |

pub mod error;
pub mod map;
pub mod mapper;


pub use error::{ColorError, ColorResult};
pub use map::{Colormap, Grayscale, Jet};
pub use mapper::ColorMapper;
