//! Error types and classification for map editing and parsing

use std::fmt;
use std::path::PathBuf;

use crate::io::configuration::{MAX_DIMENSION, MIN_DIMENSION};

/// Broad category of a failure, used by callers deciding how to surface it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input was well-formed but violates a map constraint
    Validation,
    /// Input text could not be parsed
    Format,
    /// Caller supplied coordinates outside the grid
    Range,
    /// File system, image export or command-line surface failure
    Io,
}

/// Main error type for all map operations
#[derive(Debug)]
pub enum MapError {
    /// Width or height outside the supported range
    DimensionsOutOfRange {
        /// Requested or parsed width
        width: i64,
        /// Requested or parsed height
        height: i64,
    },

    /// Number of accepted data rows differs from the declared height
    RowCountMismatch {
        /// Declared height
        expected: usize,
        /// Rows actually accepted
        found: usize,
    },

    /// Data row contains a character that is not a tile id
    InvalidTileId {
        /// The offending character
        character: char,
        /// Zero-based data row index
        row: usize,
        /// Zero-based column within the row
        column: usize,
    },

    /// Header value could not be parsed as an integer
    InvalidNumber {
        /// Header key, e.g. `WIDTH`
        key: &'static str,
        /// Raw value text
        value: String,
    },

    /// Coordinates outside the grid were passed to a mutation
    OutOfBounds {
        /// Column index supplied
        x: usize,
        /// Row index supplied
        y: usize,
        /// Grid width at the time of the call
        width: usize,
        /// Grid height at the time of the call
        height: usize,
    },

    /// File extension is not one of the accepted map extensions
    UnsupportedFile {
        /// Path of the rejected file
        path: PathBuf,
    },

    /// Command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered preview to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl MapError {
    /// Classify this error into one of the broad error kinds
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DimensionsOutOfRange { .. } | Self::RowCountMismatch { .. } => {
                ErrorKind::Validation
            }
            Self::InvalidTileId { .. } | Self::InvalidNumber { .. } => ErrorKind::Format,
            Self::OutOfBounds { .. } => ErrorKind::Range,
            Self::UnsupportedFile { .. }
            | Self::InvalidParameter { .. }
            | Self::ImageExport { .. }
            | Self::FileSystem { .. } => ErrorKind::Io,
        }
    }
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionsOutOfRange { width, height } => {
                write!(
                    f,
                    "dimensions out of range: {width}x{height} (must be between \
                     {MIN_DIMENSION}x{MIN_DIMENSION} and {MAX_DIMENSION}x{MAX_DIMENSION})"
                )
            }
            Self::RowCountMismatch { expected, found } => {
                write!(f, "row count mismatch: expected {expected} rows, got {found}")
            }
            Self::InvalidTileId {
                character,
                row,
                column,
            } => {
                write!(
                    f,
                    "invalid tile id '{character}' at data row {row}, column {column}"
                )
            }
            Self::InvalidNumber { key, value } => {
                write!(f, "invalid number for {key}: '{value}'")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "coordinates ({x}, {y}) are outside the {width}x{height} grid"
                )
            }
            Self::UnsupportedFile { path } => {
                write!(
                    f,
                    "unsupported map file '{}' (expected .map or .txt)",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "file system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for map results
pub type Result<T> = std::result::Result<T, MapError>;

impl From<std::io::Error> for MapError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MapError {
    MapError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Attach a path and operation to a raw I/O error
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> MapError {
    MapError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
