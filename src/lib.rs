//! Grid model and text codec for small 2D tile maps
//!
//! A map is a rectangular grid of grass, wall and water tiles with a single
//! spawn point. The model enforces dimension and coordinate bounds, and the
//! codec converts it to and from a compact line-oriented text format.

#![forbid(unsafe_code)]

/// Encoding and decoding of the map text format
pub mod codec;
/// Editing session and command dispatch for front ends
pub mod editor;
/// Input/output operations and error handling
pub mod io;
/// Tile types and the grid model
pub mod map;

pub use codec::{decode, encode};
pub use io::error::{ErrorKind, MapError, Result};
pub use map::{GridModel, TileType};
