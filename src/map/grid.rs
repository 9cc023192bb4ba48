//! Authoritative tile grid with spawn point and display name
//!
//! Tiles are stored row-major in an `Array2` indexed `[y, x]`. Every
//! operation keeps the grid rectangular, its dimensions within
//! `MIN_DIMENSION..=MAX_DIMENSION`, and the spawn point inside the grid.

use ndarray::{Array2, ArrayView1};

use crate::io::configuration::{DEFAULT_SPAWN, MAX_DIMENSION, MIN_DIMENSION, UNNAMED_MAP};
use crate::io::error::{MapError, Result};
use crate::map::tile::TileType;

/// Check that a width/height pair is within the supported range
///
/// # Errors
///
/// Returns `MapError::DimensionsOutOfRange` if either value lies outside
/// `MIN_DIMENSION..=MAX_DIMENSION`
pub fn validate_dimensions(width: i64, height: i64) -> Result<(usize, usize)> {
    let range = (MIN_DIMENSION as i64)..=(MAX_DIMENSION as i64);
    if range.contains(&width) && range.contains(&height) {
        Ok((width as usize, height as usize))
    } else {
        Err(MapError::DimensionsOutOfRange { width, height })
    }
}

/// Clamp a possibly negative or oversized coordinate into `0..len`
const fn clamp_coordinate(value: i64, len: usize) -> usize {
    let max = len as i64 - 1;
    if value < 0 {
        0
    } else if value > max {
        max as usize
    } else {
        value as usize
    }
}

/// Rectangular tile map owned by a single editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    tiles: Array2<TileType>,
    spawn_x: usize,
    spawn_y: usize,
    map_name: String,
}

impl GridModel {
    /// Create an all-grass grid with the spawn point at (1, 1)
    ///
    /// # Errors
    ///
    /// Returns `MapError::DimensionsOutOfRange` if either dimension is outside
    /// the supported range; nothing is allocated in that case
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let (width, height) = validate_dimensions(width as i64, height as i64)?;

        Ok(Self {
            tiles: Array2::from_elem((height, width), TileType::Grass),
            spawn_x: DEFAULT_SPAWN.min(width - 1),
            spawn_y: DEFAULT_SPAWN.min(height - 1),
            map_name: String::new(),
        })
    }

    /// Build a model from parsed rows, validating before anything is kept
    ///
    /// Rows whose length differs from `width` are ignored. Spawn coordinates
    /// are clamped into the grid rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns `MapError::DimensionsOutOfRange` for unsupported dimensions and
    /// `MapError::RowCountMismatch` when the number of full-width rows is not
    /// `height`
    pub fn from_rows(
        width: i64,
        height: i64,
        rows: Vec<Vec<TileType>>,
        spawn_x: i64,
        spawn_y: i64,
        map_name: impl Into<String>,
    ) -> Result<Self> {
        let (width, height) = validate_dimensions(width, height)?;

        let cells: Vec<TileType> = rows
            .into_iter()
            .filter(|row| row.len() == width)
            .flatten()
            .collect();

        let found = cells.len() / width;
        if found != height {
            return Err(MapError::RowCountMismatch {
                expected: height,
                found,
            });
        }

        let tiles = Array2::from_shape_vec((height, width), cells).map_err(|_shape_error| {
            MapError::RowCountMismatch {
                expected: height,
                found,
            }
        })?;

        Ok(Self {
            tiles,
            spawn_x: clamp_coordinate(spawn_x, width),
            spawn_y: clamp_coordinate(spawn_y, height),
            map_name: map_name.into(),
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.tiles.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.tiles.nrows()
    }

    /// Spawn column
    pub const fn spawn_x(&self) -> usize {
        self.spawn_x
    }

    /// Spawn row
    pub const fn spawn_y(&self) -> usize {
        self.spawn_y
    }

    /// Spawn point as `(x, y)`
    pub const fn spawn(&self) -> (usize, usize) {
        (self.spawn_x, self.spawn_y)
    }

    /// Display name, possibly empty
    pub fn map_name(&self) -> &str {
        &self.map_name
    }

    /// Replace the display name
    pub fn set_map_name(&mut self, name: impl Into<String>) {
        self.map_name = name.into();
    }

    /// Name used when exporting: the display name, or `unnamed_map` if empty
    pub fn export_name(&self) -> &str {
        if self.map_name.is_empty() {
            UNNAMED_MAP
        } else {
            &self.map_name
        }
    }

    /// Read-only view of the tiles, indexed `[y, x]`
    pub const fn tiles(&self) -> &Array2<TileType> {
        &self.tiles
    }

    /// Rows from top to bottom, each a view of `width` tiles
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, TileType>> {
        self.tiles.rows().into_iter()
    }

    /// Tile at `(x, y)`, or `None` outside the grid
    pub fn tile(&self, x: usize, y: usize) -> Option<TileType> {
        self.tiles.get([y, x]).copied()
    }

    /// Whether `(x, y)` lies inside the grid
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<()> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(MapError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    /// Set the tile at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `MapError::OutOfBounds` if `(x, y)` is outside the grid
    pub fn paint(&mut self, x: usize, y: usize, tile: TileType) -> Result<()> {
        self.check_bounds(x, y)?;
        if let Some(cell) = self.tiles.get_mut([y, x]) {
            *cell = tile;
        }
        Ok(())
    }

    /// Move the spawn point to `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `MapError::OutOfBounds` if `(x, y)` is outside the grid
    pub fn set_spawn(&mut self, x: usize, y: usize) -> Result<()> {
        self.check_bounds(x, y)?;
        self.spawn_x = x;
        self.spawn_y = y;
        Ok(())
    }

    /// Reset every tile to grass, leaving the spawn point where it is
    pub fn clear(&mut self) {
        self.tiles.fill(TileType::Grass);
    }

    /// Turn the outermost ring of cells into walls
    pub fn add_border(&mut self) {
        let last_row = self.height() - 1;
        let last_col = self.width() - 1;

        for ((y, x), cell) in self.tiles.indexed_iter_mut() {
            if y == 0 || y == last_row || x == 0 || x == last_col {
                *cell = TileType::Wall;
            }
        }
    }

    /// Rebuild the grid at a new size, discarding all painted tiles
    ///
    /// The map name is kept and the spawn point is clamped into the new
    /// bounds.
    ///
    /// # Errors
    ///
    /// Returns `MapError::DimensionsOutOfRange` if either dimension is outside
    /// the supported range; the model is left untouched in that case
    pub fn resize_discard(&mut self, width: usize, height: usize) -> Result<()> {
        let (width, height) = validate_dimensions(width as i64, height as i64)?;

        self.tiles = Array2::from_elem((height, width), TileType::Grass);
        self.spawn_x = self.spawn_x.min(width - 1);
        self.spawn_y = self.spawn_y.min(height - 1);
        Ok(())
    }
}
