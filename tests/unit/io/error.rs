//! Tests for error classification, message formatting and source chaining

#[cfg(test)]
mod tests {
    use std::error::Error;
    use tilemap_editor::io::error::{file_system_error, invalid_parameter};
    use tilemap_editor::{ErrorKind, MapError};

    // Tests every variant maps to the expected kind
    // Verified by classifying row mismatches as format errors
    #[test]
    fn test_error_kinds() {
        let cases = [
            (
                MapError::DimensionsOutOfRange {
                    width: 4,
                    height: 5,
                },
                ErrorKind::Validation,
            ),
            (
                MapError::RowCountMismatch {
                    expected: 5,
                    found: 4,
                },
                ErrorKind::Validation,
            ),
            (
                MapError::InvalidTileId {
                    character: '9',
                    row: 0,
                    column: 0,
                },
                ErrorKind::Format,
            ),
            (
                MapError::InvalidNumber {
                    key: "WIDTH",
                    value: "x".to_string(),
                },
                ErrorKind::Format,
            ),
            (
                MapError::OutOfBounds {
                    x: 9,
                    y: 0,
                    width: 5,
                    height: 5,
                },
                ErrorKind::Range,
            ),
            (
                MapError::UnsupportedFile {
                    path: "a.png".into(),
                },
                ErrorKind::Io,
            ),
        ];

        for (error, kind) in cases {
            assert_eq!(error.kind(), kind, "{error}");
        }
    }

    // Tests validation messages name the cause
    // Verified by omitting the counts from the message
    #[test]
    fn test_validation_messages() {
        let dims = MapError::DimensionsOutOfRange {
            width: 51,
            height: 9,
        };
        assert!(dims.to_string().contains("dimensions out of range"));
        assert!(dims.to_string().contains("51x9"));

        let rows = MapError::RowCountMismatch {
            expected: 10,
            found: 9,
        };
        let message = rows.to_string();
        assert!(message.contains("row count mismatch"));
        assert!(message.contains("10"));
        assert!(message.contains('9'));
    }

    // Tests tile errors identify the character and position
    // Verified by omitting the column
    #[test]
    fn test_invalid_tile_message() {
        let error = MapError::InvalidTileId {
            character: 'q',
            row: 3,
            column: 7,
        };
        let message = error.to_string();

        assert!(message.contains("invalid tile id 'q'"));
        assert!(message.contains("row 3"));
        assert!(message.contains("column 7"));
    }

    // Tests file system errors chain their source
    // Verified by breaking source chain
    #[test]
    fn test_file_system_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = file_system_error("/tmp/level.map", "read", io_error);

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/level.map"));
        assert!(error.to_string().contains("read"));
    }

    // Tests model errors carry no source
    // Verified by returning self as source
    #[test]
    fn test_model_errors_have_no_source() {
        let error = MapError::RowCountMismatch {
            expected: 5,
            found: 0,
        };
        assert!(error.source().is_none());
    }

    // Tests invalid parameter helper keeps all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter() {
        let error = invalid_parameter("scale", &0, &"must be positive");
        let message = error.to_string();

        assert!(message.contains("scale"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be positive"));
        assert_eq!(error.kind(), ErrorKind::Io);
    }

    // Tests conversion from a bare I/O error
    // Verified by dropping the source in the conversion
    #[test]
    fn test_from_io_error() {
        let error: MapError = std::io::Error::other("disk gone").into();
        assert!(matches!(error, MapError::FileSystem { .. }));
        assert!(error.source().is_some());
    }

    // Tests every message starts with a lowercase letter
    // Verified by capitalizing the file system message
    #[test]
    fn test_messages_are_lowercase() {
        let errors = [
            MapError::DimensionsOutOfRange {
                width: 4,
                height: 9,
            },
            MapError::OutOfBounds {
                x: 9,
                y: 0,
                width: 5,
                height: 5,
            },
            MapError::UnsupportedFile {
                path: "level.png".into(),
            },
            invalid_parameter("scale", &0, &"must be positive"),
            MapError::ImageExport {
                path: "out.png".into(),
                source: image::ImageError::IoError(std::io::Error::other("disk full")),
            },
            file_system_error("level.map", "write", std::io::Error::other("denied")),
        ];

        for error in errors {
            let message = error.to_string();
            assert!(
                message.starts_with(|c: char| c.is_ascii_lowercase()),
                "{message}"
            );
        }
    }
}
