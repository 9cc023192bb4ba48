//! Editing session that dispatches user actions to a grid model
//!
//! A session owns exactly one `GridModel` together with the tool state a
//! front end needs (selected tile, paint or spawn mode). Front ends translate
//! their input into `EditorCommand`s or `click` calls and re-read the model
//! afterwards to redraw; the session never calls back into them.

use crate::codec::{decode, encode};
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAP_EXTENSION};
use crate::io::error::Result;
use crate::map::grid::GridModel;
use crate::map::tile::TileType;

/// What a click on a cell does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Clicking paints the selected tile
    #[default]
    Paint,
    /// Clicking moves the spawn point
    Spawn,
}

/// Discrete editing action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    /// Set one cell
    Paint {
        /// Column
        x: usize,
        /// Row
        y: usize,
        /// Tile to place
        tile: TileType,
    },
    /// Move the spawn point
    SetSpawn {
        /// Column
        x: usize,
        /// Row
        y: usize,
    },
    /// Reset every cell to grass
    Clear,
    /// Wall off the outer ring
    AddBorder,
    /// Rebuild the grid at a new size, discarding paint
    Resize {
        /// New width
        width: usize,
        /// New height
        height: usize,
    },
    /// Change the display name
    Rename(String),
}

/// Single-owner editing state around one grid model
#[derive(Debug, Clone)]
pub struct EditorSession {
    model: GridModel,
    selected_tile: TileType,
    mode: EditMode,
}

impl EditorSession {
    /// Start a session on the default 16x9 grid
    ///
    /// # Errors
    ///
    /// Returns an error only if the default dimensions are out of range
    pub fn new() -> Result<Self> {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Start a session on a fresh grid of the given size
    ///
    /// # Errors
    ///
    /// Returns `MapError::DimensionsOutOfRange` for unsupported dimensions
    pub fn with_size(width: usize, height: usize) -> Result<Self> {
        Ok(Self::from_model(GridModel::new(width, height)?))
    }

    /// Start a session on an existing model
    pub fn from_model(model: GridModel) -> Self {
        Self {
            model,
            selected_tile: TileType::default(),
            mode: EditMode::default(),
        }
    }

    /// Current model
    pub const fn model(&self) -> &GridModel {
        &self.model
    }

    /// Consume the session, returning its model
    pub fn into_model(self) -> GridModel {
        self.model
    }

    /// Tile placed by `click` in paint mode
    pub const fn selected_tile(&self) -> TileType {
        self.selected_tile
    }

    /// Current click mode
    pub const fn mode(&self) -> EditMode {
        self.mode
    }

    /// Choose the tile to paint and switch to paint mode
    pub const fn select_tile(&mut self, tile: TileType) {
        self.selected_tile = tile;
        self.mode = EditMode::Paint;
    }

    /// Flip between paint and spawn mode, returning the new mode
    pub const fn toggle_spawn_mode(&mut self) -> EditMode {
        self.mode = match self.mode {
            EditMode::Paint => EditMode::Spawn,
            EditMode::Spawn => EditMode::Paint,
        };
        self.mode
    }

    /// Handle a click or drag over cell `(x, y)` according to the mode
    ///
    /// # Errors
    ///
    /// Returns `MapError::OutOfBounds` if `(x, y)` is outside the grid
    pub fn click(&mut self, x: usize, y: usize) -> Result<()> {
        match self.mode {
            EditMode::Paint => self.model.paint(x, y, self.selected_tile),
            EditMode::Spawn => self.model.set_spawn(x, y),
        }
    }

    /// Apply one command to the model
    ///
    /// # Errors
    ///
    /// Propagates `MapError::OutOfBounds` from paint and spawn commands and
    /// `MapError::DimensionsOutOfRange` from resize; the model is unchanged on
    /// error
    pub fn apply(&mut self, command: EditorCommand) -> Result<()> {
        match command {
            EditorCommand::Paint { x, y, tile } => self.model.paint(x, y, tile),
            EditorCommand::SetSpawn { x, y } => self.model.set_spawn(x, y),
            EditorCommand::Clear => {
                self.model.clear();
                Ok(())
            }
            EditorCommand::AddBorder => {
                self.model.add_border();
                Ok(())
            }
            EditorCommand::Resize { width, height } => self.model.resize_discard(width, height),
            EditorCommand::Rename(name) => {
                self.model.set_map_name(name);
                Ok(())
            }
        }
    }

    /// Apply commands in order, stopping at the first failure
    ///
    /// # Errors
    ///
    /// Returns the first command error; earlier commands stay applied
    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = EditorCommand>) -> Result<()> {
        for command in commands {
            self.apply(command)?;
        }
        Ok(())
    }

    /// Encoded text of the current model
    pub fn export_text(&self) -> String {
        encode(&self.model)
    }

    /// Suggested file name for saving the current model
    pub fn download_file_name(&self) -> String {
        format!("{}.{MAP_EXTENSION}", self.model.export_name())
    }

    /// Replace the model with decoded text
    ///
    /// Mode and selected tile are kept.
    ///
    /// # Errors
    ///
    /// Returns the decode error; the current model is untouched in that case
    pub fn load_text(&mut self, text: &str) -> Result<()> {
        self.model = decode(text)?;
        Ok(())
    }
}
