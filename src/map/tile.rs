//! Closed set of tile types a map cell can hold
//!
//! Each type has a single-digit id used by the text format and a color used
//! by previews.

use std::fmt;
use std::str::FromStr;

use crate::io::configuration::{GRASS_COLOR, WALL_COLOR, WATER_COLOR};

/// Terrain stored in one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum TileType {
    /// Walkable ground, the value of every fresh cell
    #[default]
    Grass = 0,
    /// Solid obstacle, used by border fill
    Wall = 1,
    /// Water
    Water = 2,
}

impl TileType {
    /// Every tile type in id order
    pub const ALL: [Self; 3] = [Self::Grass, Self::Wall, Self::Water];

    /// Numeric id written to map files
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Look up a tile type by numeric id
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Grass),
            1 => Some(Self::Wall),
            2 => Some(Self::Water),
            _ => None,
        }
    }

    /// Character used for this tile in data rows
    pub const fn as_char(self) -> char {
        match self {
            Self::Grass => '0',
            Self::Wall => '1',
            Self::Water => '2',
        }
    }

    /// Parse a data row character
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Self::Grass),
            '1' => Some(Self::Wall),
            '2' => Some(Self::Water),
            _ => None,
        }
    }

    /// Lowercase display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grass => "grass",
            Self::Wall => "wall",
            Self::Water => "water",
        }
    }

    /// Preview color as RGBA
    pub const fn color(self) -> [u8; 4] {
        match self {
            Self::Grass => GRASS_COLOR,
            Self::Wall => WALL_COLOR,
            Self::Water => WATER_COLOR,
        }
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TileType {
    type Err = String;

    /// Accepts either the display name (case-insensitive) or the numeric id
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if let Some(tile) = Self::ALL
            .into_iter()
            .find(|tile| tile.name().eq_ignore_ascii_case(value))
        {
            return Ok(tile);
        }

        value
            .parse::<u8>()
            .ok()
            .and_then(Self::from_id)
            .ok_or_else(|| format!("unknown tile '{value}' (expected grass, wall, water or 0-2)"))
    }
}
