//! Errors at the persistence boundary.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to build a grid from its text form.
///
/// No partially built grid is ever handed back alongside one of these.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source could be opened but reading it failed (including
    /// invalid UTF-8).
    #[error("failed to read world data: {0}")]
    Read(#[from] io::Error),

    /// The source ended before both header integers were read.
    #[error("missing header: expected `<height> <width>`")]
    MissingHeader,

    /// A token that should be an integer is not one.
    #[error("token {index} ({token:?}) is not an integer")]
    NotAnInteger { index: usize, token: String },

    /// The header dimensions are non-positive or describe more cells than
    /// can be addressed.
    #[error("invalid dimensions {height}x{width}")]
    InvalidDimensions { height: i64, width: i64 },

    /// Fewer cell values than `height * width`.
    #[error("expected {expected} cell values, found {found}")]
    Truncated { expected: usize, found: usize },
}

/// Failure to persist a grid.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The destination could not be created or opened for writing.
    #[error("cannot create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to an open destination failed.
    #[error("failed to write world data: {0}")]
    Write(#[from] io::Error),
}

/// Failure to encode or decode a binary snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),

    /// The snapshot decoded but its matrices break the grid invariants.
    #[error("snapshot matrices are inconsistent")]
    Inconsistent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_messages() {
        let err = LoadError::Truncated { expected: 9, found: 4 };
        assert_eq!(err.to_string(), "expected 9 cell values, found 4");

        let err = LoadError::InvalidDimensions { height: 0, width: 3 };
        assert_eq!(err.to_string(), "invalid dimensions 0x3");

        let err = LoadError::NotAnInteger { index: 2, token: "x".into() };
        assert_eq!(err.to_string(), "token 2 (\"x\") is not an integer");
    }

    #[test]
    fn test_open_error_keeps_source() {
        use std::error::Error as _;

        let err = LoadError::Open {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().starts_with("cannot open missing.txt"));
        assert!(err.source().is_some());
    }
}
