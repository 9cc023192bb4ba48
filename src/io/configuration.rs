//! Map format constants and editor defaults

// Grid bounds, inclusive on both ends
/// Smallest allowed width or height
pub const MIN_DIMENSION: usize = 5;
/// Largest allowed width or height
pub const MAX_DIMENSION: usize = 50;

/// Width of the grid a fresh editor session starts with
pub const DEFAULT_WIDTH: usize = 16;
/// Height of the grid a fresh editor session starts with
pub const DEFAULT_HEIGHT: usize = 9;

/// Spawn coordinate used on creation and when a file omits it
pub const DEFAULT_SPAWN: usize = 1;

// Map naming
/// Name written on export when the map has no name
pub const UNNAMED_MAP: &str = "unnamed_map";
/// Name given to decoded maps whose header carries no usable name
pub const UPLOADED_MAP: &str = "uploaded_map";

// Text format keys
/// Header key for the grid width
pub const WIDTH_KEY: &str = "WIDTH";
/// Header key for the grid height
pub const HEIGHT_KEY: &str = "HEIGHT";
/// Header key for the spawn column
pub const SPAWN_X_KEY: &str = "SPAWN_X";
/// Header key for the spawn row
pub const SPAWN_Y_KEY: &str = "SPAWN_Y";
/// Line that starts the tile rows
pub const DATA_MARKER: &str = "DATA=";
/// Prefix of comment lines
pub const COMMENT_PREFIX: char = '#';
/// Second header line describing the tile ids
pub const LEGEND_COMMENT: &str = "# 0 = grass, 1 = wall, 2 = water";

// File conventions
/// Extension used when saving maps
pub const MAP_EXTENSION: &str = "map";
/// Extensions accepted when loading maps
pub const IMPORT_EXTENSIONS: [&str; 2] = ["map", "txt"];
/// Suffix added to preview image filenames
pub const PREVIEW_SUFFIX: &str = "_preview";

// Preview rendering
/// Default edge length of one tile in preview pixels
pub const DEFAULT_TILE_SCALE: u32 = 16;
/// Largest accepted tile scale
pub const MAX_TILE_SCALE: u32 = 64;
/// RGBA color of grass tiles
pub const GRASS_COLOR: [u8; 4] = [76, 175, 80, 255];
/// RGBA color of wall tiles
pub const WALL_COLOR: [u8; 4] = [96, 96, 96, 255];
/// RGBA color of water tiles
pub const WATER_COLOR: [u8; 4] = [33, 150, 243, 255];
/// RGBA color of the spawn marker
pub const SPAWN_COLOR: [u8; 4] = [244, 67, 54, 255];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
