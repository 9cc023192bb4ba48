//! In-memory map model
//!
//! This module contains:
//! - The closed tile type set
//! - The grid model and its editing operations

/// Grid model with spawn point and editing operations
pub mod grid;
/// Tile type enumeration
pub mod tile;

pub use grid::GridModel;
pub use tile::TileType;
