//! Parsing and validation of map text
//!
//! Decoding is a single pass over trimmed lines followed by validation in
//! `GridModel::from_rows`. Nothing is returned until the whole text has been
//! accepted, so a failed decode never yields a partial model.

use std::num::IntErrorKind;

use crate::io::configuration::{
    COMMENT_PREFIX, DATA_MARKER, DEFAULT_SPAWN, HEIGHT_KEY, SPAWN_X_KEY, SPAWN_Y_KEY,
    UPLOADED_MAP, WIDTH_KEY,
};
use crate::io::error::{MapError, Result};
use crate::map::grid::GridModel;
use crate::map::tile::TileType;

/// Header values collected before validation
#[derive(Debug, Clone)]
struct Header {
    width: i64,
    height: i64,
    spawn_x: i64,
    spawn_y: i64,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            spawn_x: DEFAULT_SPAWN as i64,
            spawn_y: DEFAULT_SPAWN as i64,
        }
    }
}

impl Header {
    fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            WIDTH_KEY => self.width = parse_number(WIDTH_KEY, value)?,
            HEIGHT_KEY => self.height = parse_number(HEIGHT_KEY, value)?,
            SPAWN_X_KEY => self.spawn_x = parse_number(SPAWN_X_KEY, value)?,
            SPAWN_Y_KEY => self.spawn_y = parse_number(SPAWN_Y_KEY, value)?,
            // Unknown keys are tolerated
            _ => {}
        }
        Ok(())
    }

    fn accepts_row(&self, line: &str) -> bool {
        i64::try_from(line.chars().count()).is_ok_and(|len| len == self.width)
    }
}

/// Parse a header integer, saturating values too large for `i64`
///
/// Saturated values are still out of range, so oversized dimensions fail
/// validation and oversized spawn coordinates get clamped.
fn parse_number(key: &'static str, value: &str) -> Result<i64> {
    match value.trim().parse::<i64>() {
        Ok(number) => Ok(number),
        Err(error) => match error.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(MapError::InvalidNumber {
                key,
                value: value.to_string(),
            }),
        },
    }
}

fn parse_row(line: &str, row: usize) -> Result<Vec<TileType>> {
    line.chars()
        .enumerate()
        .map(|(column, character)| {
            TileType::from_char(character).ok_or(MapError::InvalidTileId {
                character,
                row,
                column,
            })
        })
        .collect()
}

/// Recover a display name from a comment body, unless it reads like `KEY=VALUE`
fn name_from_comment(comment: &str) -> Option<String> {
    let name = comment.trim();
    (!name.is_empty() && !name.contains('=')).then(|| name.to_string())
}

/// Decode map text into a new model
///
/// Blank lines and `#` comments are skipped; the first comment supplies the
/// map name when it does not look like a key/value pair. After `DATA=`, every
/// non-comment line is a row candidate, and only candidates exactly as long as
/// the declared width are kept. Spawn coordinates are clamped into the grid.
///
/// # Errors
///
/// Returns an error if:
/// - A header value is not an integer (`MapError::InvalidNumber`); values
///   beyond the `i64` range saturate instead
/// - A kept row contains a character other than `0`, `1` or `2`
///   (`MapError::InvalidTileId`)
/// - Width or height is outside the supported range
///   (`MapError::DimensionsOutOfRange`)
/// - The number of kept rows differs from the height
///   (`MapError::RowCountMismatch`)
pub fn decode(text: &str) -> Result<GridModel> {
    let mut header = Header::default();
    let mut name: Option<String> = None;
    let mut seen_comment = false;
    let mut in_data = false;
    let mut rows: Vec<Vec<TileType>> = Vec::new();

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(comment) = line.strip_prefix(COMMENT_PREFIX) {
            if !seen_comment {
                seen_comment = true;
                name = name_from_comment(comment);
            }
            continue;
        }

        if in_data {
            if header.accepts_row(line) {
                rows.push(parse_row(line, rows.len())?);
            }
            continue;
        }

        if line == DATA_MARKER {
            in_data = true;
        } else if let Some((key, value)) = line.split_once('=') {
            header.apply(key, value)?;
        }
    }

    GridModel::from_rows(
        header.width,
        header.height,
        rows,
        header.spawn_x,
        header.spawn_y,
        name.unwrap_or_else(|| UPLOADED_MAP.to_string()),
    )
}
